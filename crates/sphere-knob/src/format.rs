//! Readout formatting.

/// Format a knob value for display.
///
/// Rules, first match wins:
///
/// 1. `step < 1` → one decimal place, halves rounded away from zero.
/// 2. `|value| < 10` and `step` has a fractional part → as rule 1.
/// 3. Otherwise the nearest integer, with halves rounded toward +∞.
///
/// Only the text is affected; the stored value keeps full precision.
pub fn format_value(value: f32, step: f32) -> String {
    if step < 1.0 || (value.abs() < 10.0 && step.fract() != 0.0) {
        one_decimal(value)
    } else {
        let rounded = (value + 0.5).floor();
        // Avoid printing "-0" for small negatives.
        if rounded == 0.0 {
            "0".to_string()
        } else {
            format!("{rounded:.0}")
        }
    }
}

/// One decimal place, ties away from zero.
///
/// `std` formatting rounds exact ties to even (`3.25` → `"3.2"`), so the
/// digits are produced from the rounded tenths instead. `f32 * 10` is exact
/// in `f64`, which keeps tie detection exact. Negative values keep their
/// sign even when they round to zero.
fn one_decimal(value: f32) -> String {
    let tenths = (f64::from(value).abs() * 10.0).round() as u64;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}.{}", tenths / 10, tenths % 10)
}

/// Format a value with its unit suffix, e.g. `"-20.0 dB"`.
///
/// An empty suffix produces the bare number.
pub fn format_readout(value: f32, step: f32, units: &str) -> String {
    let number = format_value(value, step);
    if units.is_empty() {
        number
    } else {
        format!("{number} {units}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::approx_constant)]
    fn fractional_step_uses_one_decimal() {
        assert_eq!(format_value(3.14, 0.1), "3.1");
        assert_eq!(format_value(-42.27, 0.1), "-42.3");
    }

    #[test]
    fn decimal_ties_round_away_from_zero() {
        assert_eq!(format_value(3.25, 0.1), "3.3");
        assert_eq!(format_value(1.25, 0.1), "1.3");
        assert_eq!(format_value(0.25, 0.1), "0.3");
        assert_eq!(format_value(-0.25, 0.1), "-0.3");
        assert_eq!(format_value(-20.25, 0.1), "-20.3");
        assert_eq!(format_value(6.25, 1.5), "6.3");
    }

    #[test]
    fn decimal_sign_survives_rounding_to_zero() {
        assert_eq!(format_value(-0.04, 0.1), "-0.0");
        assert_eq!(format_value(0.0, 0.1), "0.0");
        assert_eq!(format_value(-0.0, 0.1), "0.0");
    }

    #[test]
    fn integer_step_rounds() {
        assert_eq!(format_value(42.0, 1.0), "42");
        assert_eq!(format_value(2999.6, 1.0), "3000");
    }

    #[test]
    fn non_integer_step_above_one_near_zero_keeps_decimal() {
        assert_eq!(format_value(3.27, 1.5), "3.3");
        assert_eq!(format_value(-9.95, 2.5), "-9.9");
    }

    #[test]
    fn threshold_of_ten_is_strict() {
        assert_eq!(format_value(12.3, 1.5), "12");
        assert_eq!(format_value(10.0, 1.5), "10");
        assert_eq!(format_value(-10.0, 1.5), "-10");
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(format_value(2.5, 1.0), "3");
        assert_eq!(format_value(-2.5, 1.0), "-2");
        assert_eq!(format_value(-0.4, 1.0), "0");
    }

    #[test]
    fn readout_appends_units() {
        assert_eq!(format_readout(-20.0, 0.1, "dB"), "-20.0 dB");
        assert_eq!(format_readout(4.0, 0.1, ":1"), "4.0 :1");
        assert_eq!(format_readout(42.0, 1.0, ""), "42");
    }
}
