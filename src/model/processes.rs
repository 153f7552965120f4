//! SPAMS core process functions.
//!
//! Pure functions over f64 slices and scalars; the orchestration in
//! [`crate::model::run`] slides these over the forcing record.

/// Reversible response of one trailing window.
///
/// The windowed balance of scaled water input against scaled water loss:
/// `sum(x_p * precip[d] - x_e * evapo[d])` over the window. All days are
/// weighted equally; the window is a fixed memory length, not a decay.
/// A NaN anywhere in the window makes the response NaN.
pub fn window_response(precip: &[f64], evapo: &[f64], x_p: f64, x_e: f64) -> f64 {
    precip
        .iter()
        .zip(evapo)
        .map(|(p, e)| x_p * p - x_e * e)
        .sum()
}

/// Drought classification for one simulation day.
///
/// Strictly negative only: a reversible response of exactly zero is not dry,
/// and NaN is not dry.
pub fn is_dry(reversible: f64) -> bool {
    reversible < 0.0
}
