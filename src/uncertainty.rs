//! Significant-figure-matched formatting of a value with its uncertainty.

/// Format a value with its uncertainty as `"value ± std_dev"`.
///
/// The uncertainty is rounded to one significant figure and the value to the
/// same decimal place, then both are rendered fixed-point with exactly that
/// many decimals. Uncertainties of 10 or more round to the left of the
/// decimal point and render with no decimals. A zero uncertainty returns the
/// bare value with no rounding applied.
pub fn format_with_uncertainty(value: f64, std_dev: f64) -> String {
    if std_dev == 0.0 {
        return format!("{value}");
    }

    // Decimal places needed to express the uncertainty to 1 significant
    // figure; zero or negative when the uncertainty is 1 or more.
    let order = -(std_dev.abs().log10().floor()) as i32;

    if order > 0 {
        // Fixed-point rendering already rounds to the requested precision.
        let decimals = order as usize;
        format!("{value:.decimals$} \u{b1} {std_dev:.decimals$}")
    } else {
        // Round to the left of the decimal point, render with no decimals.
        let factor = 10f64.powi(-order);
        let rounded_value = (value / factor).round() * factor;
        let rounded_std = (std_dev / factor).round() * factor;
        format!("{rounded_value:.0} \u{b1} {rounded_std:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Pass-through --

    #[test]
    fn zero_uncertainty_passes_value_through() {
        assert_eq!(format_with_uncertainty(5.0, 0.0), "5");
        assert_eq!(format_with_uncertainty(1.23456, 0.0), "1.23456");
    }

    // -- One significant figure --

    #[test]
    fn fractional_uncertainty() {
        assert_eq!(format_with_uncertainty(1.23456, 0.01), "1.23 ± 0.01");
    }

    #[test]
    fn unit_order_uncertainty_has_no_decimals() {
        assert_eq!(format_with_uncertainty(123.4, 5.0), "123 ± 5");
    }

    #[test]
    fn large_uncertainty_rounds_left_of_decimal_point() {
        assert_eq!(format_with_uncertainty(12345.6, 230.0), "12300 ± 200");
    }

    #[test]
    fn tiny_uncertainty_keeps_many_decimals() {
        assert_eq!(format_with_uncertainty(1.0, 1e-6), "1.000000 ± 0.000001");
    }

    #[test]
    fn negative_value() {
        assert_eq!(format_with_uncertainty(-2.347, 0.1), "-2.3 ± 0.1");
    }

    #[test]
    fn uncertainty_rounds_up_to_one_figure() {
        // 0.096 rounds to 0.10 at two decimal places
        assert_eq!(format_with_uncertainty(1.234, 0.096), "1.23 ± 0.10");
    }

    #[test]
    fn uncertainty_just_below_one() {
        assert_eq!(format_with_uncertainty(42.0, 0.9), "42.0 ± 0.9");
    }
}
