//! Investment, savings and payback.

use super::tariff::SolarTariff;

/// Up-front cost of installing `panels` panels.
pub fn estimate_investment(panels: u32, tariff: &SolarTariff) -> f64 {
    tariff.panel_price * f64::from(panels)
}

/// Money saved per year once the panels are installed.
///
/// When generation covers consumption the whole annual bill is saved.
/// Otherwise only the generated energy is valued at the grid price; the
/// result is not capped at `yearly_spent_money`.
pub fn yearly_financial_economy(
    yearly_generated_energy: f64,
    yearly_energy_consumption: f64,
    yearly_spent_money: f64,
    tariff: &SolarTariff,
) -> f64 {
    if yearly_generated_energy >= yearly_energy_consumption {
        return yearly_spent_money;
    }

    yearly_generated_energy * tariff.energy_cost
}

/// Money still paid to the grid each year with panels installed.
pub fn yearly_spent_with_panels(
    yearly_generated_energy: f64,
    yearly_energy_consumption: f64,
    tariff: &SolarTariff,
) -> f64 {
    if yearly_generated_energy >= yearly_energy_consumption {
        return 0.0;
    }

    (yearly_energy_consumption - yearly_generated_energy) * tariff.energy_cost
}

/// Payback period in years.
///
/// Plain float division: a zero economy yields `+inf` (or `NaN` when the
/// investment is zero too). Callers render those as "no payback".
pub fn time_for_investment_recovery(estimated_investment: f64, yearly_financial_economy: f64) -> f64 {
    estimated_investment / yearly_financial_economy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_investment() {
        let tariff = SolarTariff::default();
        assert_eq!(estimate_investment(1, &tariff), 700.0);
        assert_eq!(estimate_investment(12, &tariff), 8400.0);
        assert_eq!(estimate_investment(0, &tariff), 0.0);
    }

    #[test]
    fn test_economy_when_fully_covered() {
        let tariff = SolarTariff::default();
        assert_eq!(yearly_financial_economy(9600.0, 1320.0, 2640.0, &tariff), 2640.0);
        // equality counts as fully covered
        assert_eq!(yearly_financial_economy(1320.0, 1320.0, 2640.0, &tariff), 2640.0);
    }

    #[test]
    fn test_economy_in_shortfall_is_not_capped() {
        let tariff = SolarTariff::default();
        let economy = yearly_financial_economy(1000.0, 5000.0, 100.0, &tariff);
        assert!((economy - 700.0).abs() < 1e-9);
        assert!(economy > 100.0);
    }

    #[test]
    fn test_spent_with_panels() {
        let tariff = SolarTariff::default();
        assert_eq!(yearly_spent_with_panels(9600.0, 1320.0, &tariff), 0.0);
        let spent = yearly_spent_with_panels(1000.0, 3000.0, &tariff);
        assert!((spent - 1400.0).abs() < 1e-9);
    }

    #[test]
    fn test_time_for_investment_recovery() {
        let years = time_for_investment_recovery(700.0, 6720.0);
        assert!((years - 0.1042).abs() < 1e-4);
    }

    #[test]
    fn test_recovery_without_economy_is_not_finite() {
        assert_eq!(time_for_investment_recovery(700.0, 0.0), f64::INFINITY);
        assert!(time_for_investment_recovery(0.0, 0.0).is_nan());
    }
}
