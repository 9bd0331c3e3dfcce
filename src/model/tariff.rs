//! Tariff and emission parameters threaded into every model function.

use serde::{Deserialize, Serialize};

/// Months in a year, used to annualize the monthly consumption samples.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Number of billed months the consumption samples cover.
pub const SAMPLE_MONTHS: usize = 3;

/// Length of the cumulative savings and emission series.
pub const PROJECTION_YEARS: usize = 10;

/// Region/tariff parameters for the solar return model.
///
/// The values are process-wide configuration, never mutated after startup.
/// Alternate tariffs (another utility, another grid mix) are modelled by
/// constructing a different value instead of touching globals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarTariff {
    /// Installed cost of one panel, in currency units.
    pub panel_price: f64,
    /// Grid emission intensity, kg CO2 per kWh consumed.
    pub carbon_emissions_factor: f64,
    /// Grid energy price, currency units per kWh.
    pub energy_cost: f64,
    /// Multiplier applied to the nominal DC yield to approximate system losses.
    pub derating_factor: f64,
}

impl Default for SolarTariff {
    fn default() -> Self {
        Self {
            panel_price: 700.0,
            carbon_emissions_factor: 0.0385,
            energy_cost: 0.70,
            derating_factor: 0.96,
        }
    }
}
