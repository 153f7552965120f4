//! SPAMS calibrated parameters.

use crate::error::{Result, SpamsError};

/// Four parameters that define model behavior, calibrated upstream and
/// consumed here as already-fitted inputs.
///
/// - `x_p`: Scaling factor for precipitation [mm/mm]
/// - `x_e`: Scaling factor for evapotranspiration [mm/mm]
/// - `x_i`: Irreversible constant, active during dry periods [mm/day]
/// - `tau`: Memory window length [days]
#[derive(Debug, Clone, Copy)]
pub struct Parameters {
    pub x_p: f64,
    pub x_e: f64,
    pub x_i: f64,
    pub tau: usize,
}

impl Parameters {
    /// Create new Parameters, rejecting a zero-length memory window.
    ///
    /// `x_i` should be non-negative for physical validity but is not
    /// enforced, matching the calibration outputs this crate consumes.
    pub fn new(x_p: f64, x_e: f64, x_i: f64, tau: usize) -> Result<Self> {
        if tau == 0 {
            return Err(SpamsError::InvalidWindow { tau });
        }
        Ok(Self { x_p, x_e, x_i, tau })
    }
}
