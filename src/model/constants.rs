//! SPAMS model constants.

/// Average Gregorian year length [days], used for annualization.
pub const DAYS_PER_YEAR: f64 = 365.25;
