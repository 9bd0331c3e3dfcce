use crate::domain::PanelConfig;

use super::tariff::SolarTariff;

/// Derated annual energy (kWh) produced by the first `panels` configurations.
///
/// Configurations are taken from the front of the provider list in the order
/// received. There is no re-sorting by yield; callers that want the best
/// placements first must order the list themselves.
pub fn yearly_generated_energy(
    panel_configs: &[PanelConfig],
    panels: u32,
    tariff: &SolarTariff,
) -> f64 {
    let nominal: f64 = panel_configs
        .iter()
        .take(panels as usize)
        .map(|p| p.yearly_energy_dc_kwh)
        .sum();

    tariff.derating_factor * nominal
}
