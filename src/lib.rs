//! spams — SPAMS soil surface displacement model in Rust.
//!
//! Reconstructs a daily relative-surface-height series for a soft-soil
//! parcel from calibrated model parameters and KNMI daily meteorological
//! forcing, decomposed into a reversible (elastic, moisture-driven) and an
//! irreversible (plastic, drought-driven) component, with annualized-rate
//! uncertainty and goodness-of-fit diagnostics.

pub mod error;
pub mod forcing;
pub mod io;
pub mod metrics;
pub mod model;
pub mod uncertainty;

pub use error::{Result, SpamsError};
