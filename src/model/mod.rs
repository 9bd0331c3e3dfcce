//! Solar return model: turns panel yields and three months of bills into
//! investment, payback and carbon projections.
//!
//! Everything here is a pure function of its inputs and the injected
//! [`SolarTariff`].

pub mod carbon;
pub mod consumption;
pub mod financial;
pub mod production;
pub mod projection;
pub mod report;
pub mod tariff;

pub use consumption::{annualize, MonthlySamples};
pub use production::yearly_generated_energy;
pub use projection::{project_carbon, project_savings, CarbonImpactTenYears, TenYearSeries};
pub use report::{compute_report, MetricsError, SolarMetricsReport};
pub use tariff::{SolarTariff, MONTHS_PER_YEAR, PROJECTION_YEARS, SAMPLE_MONTHS};
