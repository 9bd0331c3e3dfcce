//! SOLCial: estimates the financial payback and carbon impact of rooftop
//! solar for an address.
//!
//! [`model`] holds the pure return model; [`providers`] wraps the geocoding
//! and solar-potential APIs; [`api`] exposes both over HTTP.

pub mod api;
pub mod config;
pub mod domain;
pub mod model;
pub mod providers;
pub mod service;
pub mod telemetry;
