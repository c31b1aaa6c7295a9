//! Example scalar export shipped alongside the fills.

/// Multiplier applied before division.
pub const SCALE_NUMERATOR: f64 = 1337.0;

/// Divisor applied after multiplication.
pub const SCALE_DENOMINATOR: f64 = 666.0;

/// `x * 1337 / 666` in f64, multiply first.
///
/// Total: NaN and infinities propagate per IEEE-754.
#[inline]
pub fn custom_scale(x: f64) -> f64 {
    x * SCALE_NUMERATOR / SCALE_DENOMINATOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fixed_points() {
        assert_eq!(custom_scale(666.0), 1337.0);
        assert_eq!(custom_scale(0.0), 0.0);
        assert_eq!(custom_scale(100.0), 200.75075075075074);
    }

    #[test]
    fn non_finite_inputs_propagate() {
        assert!(custom_scale(f64::NAN).is_nan());
        assert_eq!(custom_scale(f64::INFINITY), f64::INFINITY);
        assert_eq!(custom_scale(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    proptest! {
        #[test]
        fn doubling_input_doubles_output(x in -1.0e12f64..1.0e12) {
            prop_assert_eq!(custom_scale(2.0 * x), 2.0 * custom_scale(x));
        }
    }
}
