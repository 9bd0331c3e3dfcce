use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::domain::RequiredQuality;
use crate::model::SolarTariff;
use crate::telemetry::TelemetryConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub tariff: SolarTariff,
    pub geocoding: GeocodingConfig,
    pub solar: SolarApiConfig,
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    pub allowed_origins: Vec<String>,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            enable_cors: true,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            request_timeout_secs: 45,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    pub base_url: String,
    pub api_key: String,
    pub http_timeout_seconds: u64,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.googleapis.com".to_string(),
            api_key: String::new(),
            http_timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolarApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub required_quality: RequiredQuality,
    pub http_timeout_seconds: u64,
}

impl Default for SolarApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://solar.googleapis.com/v1".to_string(),
            api_key: String::new(),
            required_quality: RequiredQuality::High,
            http_timeout_seconds: 30,
        }
    }
}

impl Config {
    /// Built-in defaults, then `config/default.toml`, then `SOLCIAL__*` env vars.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("SOLCIAL__").split("__"))
    }

    pub fn load() -> Result<Self> {
        Ok(Self::figment().extract()?)
    }
}
