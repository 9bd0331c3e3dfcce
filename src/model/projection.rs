//! Cumulative ten-year series used by the dashboards.

use serde::{Deserialize, Serialize};

use super::tariff::PROJECTION_YEARS;

/// One value per projected year, year 1 first.
pub type TenYearSeries = [f64; PROJECTION_YEARS];

/// Cumulative emission series for both scenarios and their difference.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonImpactTenYears {
    #[cfg_attr(feature = "swagger", schema(value_type = Vec<u32>))]
    pub years: [u32; PROJECTION_YEARS],
    #[cfg_attr(feature = "swagger", schema(value_type = Vec<f64>))]
    pub carbon_without_panels: TenYearSeries,
    #[cfg_attr(feature = "swagger", schema(value_type = Vec<f64>))]
    pub carbon_with_panels: TenYearSeries,
    #[cfg_attr(feature = "swagger", schema(value_type = Vec<f64>))]
    pub carbon_savings: TenYearSeries,
    /// `carbon_savings` negated, for charts that plot reductions below zero.
    #[cfg_attr(feature = "swagger", schema(value_type = Vec<f64>))]
    pub carbon_savings_negative: TenYearSeries,
}

/// Money saved by the end of each year. No discounting and no inflation.
pub fn project_savings(yearly_financial_economy: f64) -> TenYearSeries {
    let mut savings = [0.0; PROJECTION_YEARS];
    let mut accumulated = 0.0;

    for slot in savings.iter_mut() {
        accumulated += yearly_financial_economy;
        *slot = accumulated;
    }

    savings
}

pub fn project_carbon(without_panels: f64, with_panels: f64) -> CarbonImpactTenYears {
    let mut impact = CarbonImpactTenYears {
        years: [0; PROJECTION_YEARS],
        carbon_without_panels: [0.0; PROJECTION_YEARS],
        carbon_with_panels: [0.0; PROJECTION_YEARS],
        carbon_savings: [0.0; PROJECTION_YEARS],
        carbon_savings_negative: [0.0; PROJECTION_YEARS],
    };

    let yearly_savings = without_panels - with_panels;
    let (mut acc_without, mut acc_with, mut acc_savings) = (0.0, 0.0, 0.0);

    for i in 0..PROJECTION_YEARS {
        acc_without += without_panels;
        acc_with += with_panels;
        acc_savings += yearly_savings;

        impact.years[i] = i as u32 + 1;
        impact.carbon_without_panels[i] = acc_without;
        impact.carbon_with_panels[i] = acc_with;
        impact.carbon_savings[i] = acc_savings;
        impact.carbon_savings_negative[i] = -acc_savings;
    }

    impact
}
