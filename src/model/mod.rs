//! SPAMS surface displacement model.
//!
//! Reference: Conroy et al. 2023. SPAMS: A new empirical model for soft soil
//! surface displacement based on meteorological input data
//! (<https://doi.org/10.1016/j.geoderma.2023.116699>).
//!
//! The modeled relative surface height is the sum of two components:
//! - a reversible (elastic) response: a trailing `tau`-day balance of scaled
//!   precipitation against scaled evapotranspiration
//! - an irreversible (plastic) response: permanent consolidation that accrues
//!   at a constant daily rate whenever the reversible balance is negative

pub mod constants;
pub mod outputs;
pub mod params;
pub mod processes;
pub mod run;

pub use outputs::ModelOutput;
pub use params::Parameters;
pub use run::evaluate;
