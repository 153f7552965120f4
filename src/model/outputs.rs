//! SPAMS model outputs.
//!
//! Three aligned daily series of equal length N = (meteo days) - tau + 1.
//! Index 0 corresponds to the tau-th day of the input series, the first day
//! with a full trailing window.

/// Full simulation output, returned by [`crate::model::run::evaluate`].
///
/// `height[i] = reversible[i] + irreversible[i]` for every day, and the
/// irreversible series is non-decreasing (a cumulative sum of non-negative
/// increments when `x_i >= 0`).
#[derive(Debug, Clone)]
pub struct ModelOutput {
    /// Elastic, moisture-driven displacement [mm].
    pub reversible: Vec<f64>,
    /// Permanent, drought-driven consolidation [mm].
    pub irreversible: Vec<f64>,
    /// Relative surface height [mm].
    pub height: Vec<f64>,
}

impl ModelOutput {
    /// Pre-allocate all series for `n` simulation days.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            reversible: Vec::with_capacity(n),
            irreversible: Vec::with_capacity(n),
            height: Vec::with_capacity(n),
        }
    }

    /// Append one simulation day.
    pub fn push_day(&mut self, reversible: f64, irreversible: f64) {
        self.reversible.push(reversible);
        self.irreversible.push(irreversible);
        self.height.push(reversible + irreversible);
    }

    /// Number of simulation days.
    pub fn len(&self) -> usize {
        self.height.len()
    }

    /// Returns `true` if there are no simulation days.
    pub fn is_empty(&self) -> bool {
        self.height.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_day_keeps_series_aligned() {
        let mut out = ModelOutput::with_capacity(2);
        out.push_day(0.5, 0.0);
        out.push_day(-0.2, 1.0);

        assert_eq!(out.len(), 2);
        assert_eq!(out.reversible.len(), out.irreversible.len());
        assert_eq!(out.reversible.len(), out.height.len());
    }

    #[test]
    fn height_is_sum_of_components() {
        let mut out = ModelOutput::with_capacity(1);
        out.push_day(-0.2, 1.0);
        assert_eq!(out.height[0], 0.8);
    }

    #[test]
    fn empty_output() {
        let out = ModelOutput::with_capacity(0);
        assert!(out.is_empty());
        assert_eq!(out.len(), 0);
    }
}
