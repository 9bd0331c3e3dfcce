//! Grid emissions with and without panels, in kg CO2 per year.

use super::tariff::SolarTariff;

pub fn yearly_emission_without_panels(yearly_energy_consumption: f64, tariff: &SolarTariff) -> f64 {
    yearly_energy_consumption * tariff.carbon_emissions_factor
}

/// Emissions from the energy still drawn from the grid.
pub fn yearly_emission_with_panels(
    yearly_generated_energy: f64,
    yearly_energy_consumption: f64,
    tariff: &SolarTariff,
) -> f64 {
    if yearly_generated_energy >= yearly_energy_consumption {
        return 0.0;
    }

    (yearly_energy_consumption - yearly_generated_energy) * tariff.carbon_emissions_factor
}

pub fn yearly_carbon_economy(without_panels: f64, with_panels: f64) -> f64 {
    without_panels - with_panels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_without_panels() {
        let tariff = SolarTariff::default();
        assert!((yearly_emission_without_panels(1320.0, &tariff) - 50.82).abs() < 1e-9);
    }

    #[test]
    fn test_emission_with_panels_fully_covered() {
        let tariff = SolarTariff::default();
        assert_eq!(yearly_emission_with_panels(9600.0, 1320.0, &tariff), 0.0);
        assert_eq!(yearly_emission_with_panels(1e9, 1e8, &tariff), 0.0);
    }

    #[test]
    fn test_emission_with_panels_shortfall() {
        let tariff = SolarTariff::default();
        let with_panels = yearly_emission_with_panels(1000.0, 3000.0, &tariff);
        assert!((with_panels - 77.0).abs() < 1e-9);
    }

    #[test]
    fn test_carbon_economy() {
        assert!((yearly_carbon_economy(115.5, 77.0) - 38.5).abs() < 1e-9);
        assert_eq!(yearly_carbon_economy(50.82, 0.0), 50.82);
    }
}
