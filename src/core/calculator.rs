use crate::utils::error::{CalcError, Result};

/// Stateless integer arithmetic. Every method is a pure function of its
/// arguments; instances carry no state and are free to share across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: i64, b: i64) -> i64 {
        a + b
    }

    /// Floating-point division. The zero divisor is the one contract
    /// violation in this crate and is reported with the numerator attached.
    pub fn divide(&self, a: i64, b: i64) -> Result<f64> {
        if b == 0 {
            return Err(CalcError::DivisionByZero { numerator: a });
        }
        Ok(a as f64 / b as f64)
    }

    pub fn square(&self, a: i64) -> i64 {
        a * a
    }

    /// NaN for negative input; IEEE semantics are passed through unchanged.
    pub fn square_root(&self, a: i64) -> f64 {
        (a as f64).sqrt()
    }

    /// Logarithm of `value` in `base`, computed as ln(value) / ln(base).
    /// Non-positive operands yield NaN and base 1 yields a non-finite
    /// result; no validation is layered on top of the float semantics.
    pub fn log(&self, base: i64, value: i64) -> f64 {
        (value as f64).ln() / (base as f64).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn adding_1_and_3_gives_4() {
        let calc = Calculator::new();
        assert_eq!(calc.add(1, 3), 4);
    }

    #[test]
    fn square_of_a_number_equals_the_number_multiplied_by_itself() {
        let calc = Calculator::new();
        assert_eq!(calc.square(1), 1);
        assert_eq!(calc.square(2), 4);
        assert_eq!(calc.square(3), 9);
    }

    #[test]
    fn squares_table() {
        let calc = Calculator::new();
        for (input, expected) in [(1, 1), (2, 4), (3, 9), (4, 16), (5, 25)] {
            assert_eq!(calc.square(input), expected, "{}^2 should be {}", input, expected);
        }
    }

    #[test]
    fn dividing_by_zero_reports_the_numerator() {
        let calc = Calculator::new();
        let err = calc.divide(5, 0).unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero { numerator: 5 });
    }

    #[test]
    fn divide_returns_float_quotient() {
        let calc = Calculator::new();
        assert_eq!(calc.divide(5, 2).unwrap(), 2.5);
        assert_eq!(calc.divide(-6, 3).unwrap(), -2.0);
        assert_eq!(calc.divide(0, 7).unwrap(), 0.0);
    }

    #[test]
    fn square_root_of_nine_is_three() {
        let calc = Calculator::new();
        assert_eq!(calc.square_root(9), 3.0);
    }

    #[test]
    fn square_root_of_negative_input_is_nan() {
        let calc = Calculator::new();
        assert!(calc.square_root(-1).is_nan());
    }

    #[test]
    fn log_to_base_2_of_8_is_3() {
        let calc = Calculator::new();
        assert!((calc.log(2, 8) - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn log_of_non_positive_value_is_not_a_normal_number() {
        let calc = Calculator::new();
        assert!(calc.log(2, -8).is_nan());
        assert!(!calc.log(2, 0).is_finite());
    }

    #[test]
    fn log_in_base_1_is_not_finite() {
        // ln(1) == 0, so the underlying division blows up instead of failing.
        assert!(!Calculator::new().log(1, 8).is_finite());
    }
}
