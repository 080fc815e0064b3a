use crate::utils::error::{Result, RuleError};

/// Integer arithmetic helpers. Overflow is reported instead of wrapping.
pub struct Calculator;

impl Calculator {
    pub fn add(a: i64, b: i64) -> Result<i64> {
        a.checked_add(b)
            .ok_or(RuleError::Overflow { operation: "add" })
    }

    pub fn subtract(a: i64, b: i64) -> Result<i64> {
        a.checked_sub(b)
            .ok_or(RuleError::Overflow { operation: "subtract" })
    }

    pub fn multiply(a: i64, b: i64) -> Result<i64> {
        a.checked_mul(b)
            .ok_or(RuleError::Overflow { operation: "multiply" })
    }

    pub fn divide(a: i64, b: i64) -> Result<f64> {
        if b == 0 {
            return Err(RuleError::DivisionByZero);
        }
        Ok(a as f64 / b as f64)
    }

    pub fn is_even(n: i64) -> bool {
        n % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(Calculator::add(2, 3).unwrap(), 5);
        assert_eq!(Calculator::subtract(3, 2).unwrap(), 1);
        assert_eq!(Calculator::multiply(2, 3).unwrap(), 6);
        assert!((Calculator::divide(4, 2).unwrap() - 2.0).abs() < 0.0001);
        assert!((Calculator::divide(1, 4).unwrap() - 0.25).abs() < 0.0001);
    }

    #[test]
    fn test_divide_by_zero() {
        assert!(matches!(
            Calculator::divide(10, 0),
            Err(RuleError::DivisionByZero)
        ));
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            Calculator::add(i64::MAX, 1),
            Err(RuleError::Overflow { operation: "add" })
        ));
        assert!(Calculator::subtract(i64::MIN, 1).is_err());
        assert!(Calculator::multiply(i64::MAX, 2).is_err());
    }

    #[test]
    fn test_is_even() {
        assert!(Calculator::is_even(4));
        assert!(!Calculator::is_even(3));
        assert!(Calculator::is_even(0));
        assert!(!Calculator::is_even(-3));
    }
}
