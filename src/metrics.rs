//! Derived statistics for a SPAMS evaluation.
//!
//! Both functions are pure consumers of already-computed series and scalars;
//! neither feeds back into the model.

use crate::error::{Result, SpamsError};
use crate::model::constants::DAYS_PER_YEAR;

/// A value paired with its propagated standard deviation.
#[derive(Debug, Clone, Copy)]
pub struct UncertaintyEstimate {
    pub value: f64,
    pub std_dev: f64,
}

/// Annualized irreversible rate [mm/year] with propagated uncertainty.
///
/// The rate is the total accumulated irreversible displacement scaled to a
/// 365.25-day year. The dry-day count is recovered from the accumulated
/// series itself: first differences of `irreversible / x_i` with a leading
/// zero (day 0 has no prior day to difference against, so its dryness is not
/// recovered). Accumulation is linear in `x_i`, so the standard deviation of
/// the rate is `sqrt(var_x_i)` scaled by the same normalized dry-day count.
pub fn irreversible_rate(
    irreversible: &[f64],
    x_i: f64,
    var_x_i: f64,
) -> Result<UncertaintyEstimate> {
    let Some(&total) = irreversible.last() else {
        return Err(SpamsError::InsufficientHistory {
            required: 1,
            available: 0,
        });
    };
    if x_i == 0.0 {
        return Err(SpamsError::DegenerateParameter(
            "irreversible rate requires x_i != 0".to_string(),
        ));
    }

    let years = irreversible.len() as f64 / DAYS_PER_YEAR;

    // Dry flag: 1 on recovered dry days, 0 elsewhere.
    let scaled: Vec<f64> = irreversible.iter().map(|v| v / x_i).collect();
    let mut dry_days = 0.0;
    for w in scaled.windows(2) {
        dry_days += w[1] - w[0];
    }

    Ok(UncertaintyEstimate {
        value: total / years,
        std_dev: var_x_i.sqrt() * (dry_days / years),
    })
}

/// F-value statistic: residual sum of squares normalized by the degrees of
/// freedom.
///
/// Values close to one suggest model adequacy; values much larger than one
/// indicate model imperfections or an overly optimistic stochastic model,
/// values much smaller than one an overly pessimistic stochastic model or an
/// over-parameterized functional model.
pub fn f_value(rss: f64, dof: u32) -> Result<f64> {
    if dof == 0 {
        return Err(SpamsError::DegenerateParameter(
            "f-value requires a non-zero degree of freedom".to_string(),
        ));
    }
    Ok(rss / f64::from(dof))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{evaluate, Parameters};
    use approx::assert_relative_eq;

    // -- Irreversible rate --

    #[test]
    fn rate_annualizes_total_accumulation() {
        // 3 dry days out of 10, x_i = 0.5 -> total 1.5 mm over 10/365.25 yr
        let irr = [0.0, 0.5, 0.5, 1.0, 1.0, 1.0, 1.5, 1.5, 1.5, 1.5];
        let est = irreversible_rate(&irr, 0.5, 0.0).unwrap();
        assert_relative_eq!(est.value, 1.5 / (10.0 / 365.25));
        assert_relative_eq!(est.std_dev, 0.0);
    }

    #[test]
    fn std_scales_with_parameter_deviation() {
        let irr = [0.0, 0.5, 0.5, 1.0, 1.0, 1.0, 1.5, 1.5, 1.5, 1.5];
        let var_x_i = 0.04;
        let est = irreversible_rate(&irr, 0.5, var_x_i).unwrap();
        // 3 recovered dry days, normalized by the simulated span in years
        assert_relative_eq!(est.std_dev, 0.2 * (3.0 / (10.0 / 365.25)));
    }

    #[test]
    fn dry_day_zero_is_not_recovered() {
        // The leading zero in the reconstruction drops day 0's dryness.
        let irr = [0.5, 1.0, 1.0];
        let est = irreversible_rate(&irr, 0.5, 1.0).unwrap();
        assert_relative_eq!(est.std_dev, 1.0 * (1.0 / (3.0 / 365.25)));
    }

    #[test]
    fn no_dry_days_gives_zero_rate() {
        let irr = [0.0; 20];
        let est = irreversible_rate(&irr, 0.5, 0.04).unwrap();
        assert_relative_eq!(est.value, 0.0);
        assert_relative_eq!(est.std_dev, 0.0);
    }

    #[test]
    fn zero_x_i_is_degenerate() {
        let r = irreversible_rate(&[0.0, 0.0], 0.0, 0.01);
        assert!(matches!(r, Err(SpamsError::DegenerateParameter(_))));
    }

    #[test]
    fn empty_series_is_rejected() {
        let r = irreversible_rate(&[], 0.5, 0.01);
        assert!(matches!(r, Err(SpamsError::InsufficientHistory { .. })));
    }

    #[test]
    fn rate_consistent_with_evaluation() {
        // Permanently drying forcing: every simulated day is dry, so the
        // rate is x_i * N / (N / 365.25) = x_i * 365.25.
        let p = Parameters::new(0.1, 1.0, 0.25, 5).unwrap();
        let out = evaluate(&p, &[0.0; 40], &[1.0; 40]).unwrap();
        let est = irreversible_rate(&out.irreversible, p.x_i, 0.0).unwrap();
        assert_relative_eq!(est.value, 0.25 * 365.25, epsilon = 1e-9);
    }

    // -- F-value --

    #[test]
    fn f_value_normalizes_by_dof() {
        assert_relative_eq!(f_value(12.0, 4).unwrap(), 3.0);
    }

    #[test]
    fn f_value_near_one_for_adequate_model() {
        assert_relative_eq!(f_value(98.0, 100).unwrap(), 0.98);
    }

    #[test]
    fn zero_dof_is_degenerate() {
        assert!(matches!(
            f_value(12.0, 0),
            Err(SpamsError::DegenerateParameter(_))
        ));
    }
}
