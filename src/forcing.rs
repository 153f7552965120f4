//! Daily meteorological forcing for the SPAMS model.
//!
//! A [`MeteoSeries`] is a date-sorted daily record of precipitation and
//! evapotranspiration, both in mm. NaN values are allowed — a missing value
//! propagates as NaN through every model window that touches it, which is
//! accepted behavior (gap-filling is out of scope).

use chrono::NaiveDate;

use crate::error::{Result, SpamsError};

/// Validated daily forcing series.
///
/// Invariants enforced at construction:
/// - all three arrays have the same, non-zero length
/// - dates are strictly increasing (unique, sorted)
#[derive(Debug, Clone)]
pub struct MeteoSeries {
    dates: Vec<NaiveDate>,
    precip: Vec<f64>,
    evapo: Vec<f64>,
}

impl MeteoSeries {
    /// Create a new series with validation.
    pub fn new(dates: Vec<NaiveDate>, precip: Vec<f64>, evapo: Vec<f64>) -> Result<Self> {
        if precip.len() != evapo.len() {
            return Err(SpamsError::LengthMismatch {
                precip: precip.len(),
                evapo: evapo.len(),
            });
        }
        if dates.len() != precip.len() {
            return Err(SpamsError::LengthMismatch {
                precip: dates.len(),
                evapo: precip.len(),
            });
        }
        if dates.is_empty() {
            return Err(SpamsError::InsufficientHistory {
                required: 1,
                available: 0,
            });
        }
        if dates.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SpamsError::UnsortedDates);
        }
        Ok(Self {
            dates,
            precip,
            evapo,
        })
    }

    /// Number of days in the record.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if there are no days.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Calendar days, one per record.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Daily precipitation [mm].
    pub fn precip(&self) -> &[f64] {
        &self.precip
    }

    /// Daily evapotranspiration [mm].
    pub fn evapo(&self) -> &[f64] {
        &self.evapo
    }

    /// Select the days in `[from, to]` (inclusive on both ends).
    ///
    /// To simulate `[start, end]` with a `tau`-day window, subset from
    /// `start - (tau - 1)` days so the first simulated day has a full
    /// trailing window.
    pub fn subset(&self, from: NaiveDate, to: NaiveDate) -> Result<Self> {
        let keep: Vec<usize> = (0..self.len())
            .filter(|&i| self.dates[i] >= from && self.dates[i] <= to)
            .collect();
        if keep.is_empty() {
            return Err(SpamsError::InsufficientHistory {
                required: 1,
                available: 0,
            });
        }
        Self::new(
            keep.iter().map(|&i| self.dates[i]).collect(),
            keep.iter().map(|&i| self.precip[i]).collect(),
            keep.iter().map(|&i| self.evapo[i]).collect(),
        )
    }

    /// Date axis aligned with the model output for a `tau`-day window.
    ///
    /// Output index 0 corresponds to the tau-th day of the input series,
    /// the first day with a full trailing window.
    pub fn simulation_dates(&self, tau: usize) -> &[NaiveDate] {
        if tau == 0 || tau > self.len() {
            return &[];
        }
        &self.dates[tau - 1..]
    }
}
