#![allow(dead_code)]
use async_trait::async_trait;
use mockall::mock;

use solcial::domain::{Coordinates, GeocodedAddress, PanelConfig, RequiredQuality, SolarPotential};
use solcial::providers::{Geocoder, ProviderError, SolarPotentialProvider};

mock! {
    pub Geo {}

    #[async_trait]
    impl Geocoder for Geo {
        async fn geocode(&self, address: &str) -> Result<GeocodedAddress, ProviderError>;
    }
}

mock! {
    pub Solar {}

    #[async_trait]
    impl SolarPotentialProvider for Solar {
        async fn solar_potential(
            &self,
            location: Coordinates,
            quality: RequiredQuality,
        ) -> Result<SolarPotential, ProviderError>;
    }
}

pub const ADDRESS: &str = "Rua Exemplo, 123";
pub const FORMATTED: &str = "Rua Exemplo, 123 - São Paulo, SP, Brasil";

pub fn sao_paulo() -> Coordinates {
    Coordinates::new(-23.5, -46.6)
}

pub fn geocoded() -> GeocodedAddress {
    GeocodedAddress {
        formatted_address: FORMATTED.to_string(),
        location: sao_paulo(),
    }
}

pub fn potential(yields: &[f64], max_panels: u32) -> SolarPotential {
    SolarPotential {
        location: sao_paulo(),
        max_array_panels_count: max_panels,
        solar_panels: yields
            .iter()
            .map(|&y| PanelConfig { yearly_energy_dc_kwh: y })
            .collect(),
        ..SolarPotential::default()
    }
}
