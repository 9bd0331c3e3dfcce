use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::SolarPotential;

use super::{
    carbon,
    consumption::{annualize, MonthlySamples},
    financial,
    production::yearly_generated_energy,
    projection::{project_carbon, project_savings, CarbonImpactTenYears, TenYearSeries},
    tariff::SolarTariff,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// The solar-potential payload was not available for this address.
    #[error("solar potential data is not available, cannot compute solar metrics")]
    MissingSolarData,
}

/// Financial and environmental projection for one address and panel count.
///
/// Field names are serialized in camelCase; dashboards and the PDF export
/// read them verbatim.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarMetricsReport {
    pub estimated_investment: f64,
    pub yearly_generated_energy: f64,
    pub yearly_financial_economy: f64,
    pub yearly_spent_with_panels: f64,
    pub yearly_carbon_emission_without_panels: f64,
    pub yearly_carbon_emission_with_panels: f64,
    pub yearly_carbon_economy: f64,
    /// Years; `+inf` or `NaN` when there is no economy (serialized as `null`).
    pub time_for_investment_recovery: f64,
    #[cfg_attr(feature = "swagger", schema(value_type = Vec<f64>))]
    pub saved_money_ten_years: TenYearSeries,
    pub carbon_impact_ten_years: CarbonImpactTenYears,
}

/// Builds the full report in one pass.
///
/// A missing `solar_potential` fails before any arithmetic is done.
pub fn compute_report(
    solar_potential: Option<&SolarPotential>,
    panels: u32,
    energy_consumption_kwh: &MonthlySamples,
    spent_money: &MonthlySamples,
    tariff: &SolarTariff,
) -> Result<SolarMetricsReport, MetricsError> {
    let solar_potential = solar_potential.ok_or(MetricsError::MissingSolarData)?;

    let yearly_energy_consumption = annualize(energy_consumption_kwh);
    let yearly_spent_money = annualize(spent_money);

    let estimated_investment = financial::estimate_investment(panels, tariff);
    let yearly_generated_energy =
        yearly_generated_energy(&solar_potential.solar_panels, panels, tariff);

    let yearly_financial_economy = financial::yearly_financial_economy(
        yearly_generated_energy,
        yearly_energy_consumption,
        yearly_spent_money,
        tariff,
    );
    let yearly_spent_with_panels = financial::yearly_spent_with_panels(
        yearly_generated_energy,
        yearly_energy_consumption,
        tariff,
    );

    let without_panels = carbon::yearly_emission_without_panels(yearly_energy_consumption, tariff);
    let with_panels =
        carbon::yearly_emission_with_panels(yearly_generated_energy, yearly_energy_consumption, tariff);
    let yearly_carbon_economy = carbon::yearly_carbon_economy(without_panels, with_panels);

    let time_for_investment_recovery =
        financial::time_for_investment_recovery(estimated_investment, yearly_financial_economy);

    debug!(
        panels,
        yearly_energy_consumption,
        yearly_spent_money,
        yearly_generated_energy,
        yearly_financial_economy,
        "solar metrics computed"
    );

    Ok(SolarMetricsReport {
        estimated_investment,
        yearly_generated_energy,
        yearly_financial_economy,
        yearly_spent_with_panels,
        yearly_carbon_emission_without_panels: without_panels,
        yearly_carbon_emission_with_panels: with_panels,
        yearly_carbon_economy,
        time_for_investment_recovery,
        saved_money_ten_years: project_savings(yearly_financial_economy),
        carbon_impact_ten_years: project_carbon(without_panels, with_panels),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PanelConfig;

    fn potential(yields: &[f64]) -> SolarPotential {
        SolarPotential {
            solar_panels: yields
                .iter()
                .map(|&y| PanelConfig { yearly_energy_dc_kwh: y })
                .collect(),
            ..SolarPotential::default()
        }
    }

    #[test]
    fn test_missing_solar_data() {
        let err = compute_report(
            None,
            1,
            &[100.0, 120.0, 110.0],
            &[200.0, 240.0, 220.0],
            &SolarTariff::default(),
        )
        .unwrap_err();
        assert_eq!(err, MetricsError::MissingSolarData);
    }

    #[test]
    fn test_fully_covered_report() {
        let report = compute_report(
            Some(&potential(&[10_000.0])),
            1,
            &[100.0, 120.0, 110.0],
            &[200.0, 240.0, 220.0],
            &SolarTariff::default(),
        )
        .unwrap();

        assert_eq!(report.estimated_investment, 700.0);
        assert!((report.yearly_generated_energy - 9600.0).abs() < 1e-9);
        assert!((report.yearly_financial_economy - 2640.0).abs() < 1e-9);
        assert_eq!(report.yearly_spent_with_panels, 0.0);
        assert!((report.yearly_carbon_emission_without_panels - 50.82).abs() < 1e-9);
        assert_eq!(report.yearly_carbon_emission_with_panels, 0.0);
        assert!((report.yearly_carbon_economy - 50.82).abs() < 1e-9);
        assert!((report.time_for_investment_recovery - 700.0 / 2640.0).abs() < 1e-12);
    }

    #[test]
    fn test_shortfall_report() {
        // 3000 kWh/yr consumed, 1000 kWh/yr generated after derating
        let report = compute_report(
            Some(&potential(&[1000.0 / 0.96])),
            1,
            &[250.0, 250.0, 250.0],
            &[175.0, 175.0, 175.0],
            &SolarTariff::default(),
        )
        .unwrap();

        assert!((report.yearly_financial_economy - 700.0).abs() < 1e-6);
        assert!((report.yearly_spent_with_panels - 1400.0).abs() < 1e-6);
        assert!((report.yearly_carbon_emission_with_panels - 77.0).abs() < 1e-6);
        assert!((report.time_for_investment_recovery - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_panels_available_has_no_payback() {
        let report = compute_report(
            Some(&potential(&[])),
            1,
            &[100.0, 100.0, 100.0],
            &[70.0, 70.0, 70.0],
            &SolarTariff::default(),
        )
        .unwrap();

        assert_eq!(report.yearly_generated_energy, 0.0);
        assert_eq!(report.yearly_financial_economy, 0.0);
        assert!(report.time_for_investment_recovery.is_infinite());
        assert_eq!(report.saved_money_ten_years, [0.0; 10]);
    }
}
