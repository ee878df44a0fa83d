//! Checked scalar integer arithmetic.
//!
//! All operations are generic over the primitive integer types and report
//! overflow and division by zero as errors instead of sentinel values. The C
//! ABI flavour of these functions, which keeps the sentinels, lives in
//! [`crate::abi`].

use ::num::{CheckedAdd, CheckedMul, CheckedSub, PrimInt, ToPrimitive, Zero};
use thiserror::Error;

/// Errors produced by the checked arithmetic operations.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum ArithmeticError {
    #[error("integer overflow")]
    Overflow,
    #[error("division by zero")]
    DivisionByZero,
    #[error("factorial of a negative number")]
    NegativeFactorial,
}

/// Adds two integers.
///
/// # Examples
///
/// ```
/// assert_eq!(cutils::add(2, 3), Ok(5));
/// assert_eq!(cutils::add(i32::MAX, 1), Err(cutils::ArithmeticError::Overflow));
/// ```
pub fn add<T: CheckedAdd>(a: T, b: T) -> Result<T, ArithmeticError> {
    a.checked_add(&b).ok_or(ArithmeticError::Overflow)
}

/// Subtracts `b` from `a`.
pub fn subtract<T: CheckedSub>(a: T, b: T) -> Result<T, ArithmeticError> {
    a.checked_sub(&b).ok_or(ArithmeticError::Overflow)
}

/// Multiplies two integers.
pub fn multiply<T: CheckedMul>(a: T, b: T) -> Result<T, ArithmeticError> {
    a.checked_mul(&b).ok_or(ArithmeticError::Overflow)
}

/// Divides `a` by `b`, returning the floating point quotient.
///
/// # Examples
///
/// ```
/// assert_eq!(cutils::divide(10, 4), Ok(2.5));
/// assert_eq!(cutils::divide(5, 0), Err(cutils::ArithmeticError::DivisionByZero));
/// ```
pub fn divide<T: ToPrimitive + Zero>(a: T, b: T) -> Result<f64, ArithmeticError> {
    if b.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }

    // NOTE: Every primitive integer converts to `f64`, possibly losing
    // precision for magnitudes above 2^53.
    let a = a.to_f64().ok_or(ArithmeticError::Overflow)?;
    let b = b.to_f64().ok_or(ArithmeticError::Overflow)?;
    Ok(a / b)
}

/// Computes `n!`.
///
/// `0!` and `1!` are both `1`. Negative input is rejected rather than being
/// folded into the `n <= 1` case.
pub fn factorial<T: PrimInt>(n: T) -> Result<T, ArithmeticError> {
    if n < T::zero() {
        return Err(ArithmeticError::NegativeFactorial);
    }

    let mut product = T::one();
    let mut i = T::one();
    while i < n {
        i = i + T::one();
        product = product.checked_mul(&i).ok_or(ArithmeticError::Overflow)?;
    }

    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_operators() {
        assert_eq!(add(2, 3), Ok(5));
        assert_eq!(add(-7, 7), Ok(0));
        assert_eq!(subtract(2, 3), Ok(-1));
        assert_eq!(multiply(-4, 6), Ok(-24));
        assert_eq!(multiply(0u8, 255), Ok(0));
    }

    #[test]
    fn binary_operators_report_overflow() {
        assert_eq!(add(i32::MAX, 1), Err(ArithmeticError::Overflow));
        assert_eq!(subtract(i32::MIN, 1), Err(ArithmeticError::Overflow));
        assert_eq!(subtract(0u32, 1), Err(ArithmeticError::Overflow));
        assert_eq!(multiply(i64::MAX, 2), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn division() {
        assert_eq!(divide(10, 2), Ok(5.0));
        assert_eq!(divide(1, 4), Ok(0.25));
        assert_eq!(divide(-9, 2), Ok(-4.5));
        assert_eq!(divide(5, 0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(divide(0u64, 0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn factorials() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(1), Ok(1));
        assert_eq!(factorial(5), Ok(120));
        assert_eq!(factorial(12i32), Ok(479_001_600));
        assert_eq!(factorial(20u64), Ok(2_432_902_008_176_640_000));
    }

    #[test]
    fn factorial_rejects_negative_input() {
        assert_eq!(factorial(-1), Err(ArithmeticError::NegativeFactorial));
        assert_eq!(factorial(i8::MIN), Err(ArithmeticError::NegativeFactorial));
    }

    #[test]
    fn factorial_reports_overflow() {
        assert_eq!(factorial(13i32), Err(ArithmeticError::Overflow));
        assert_eq!(factorial(6u8), Err(ArithmeticError::Overflow));
        assert_eq!(factorial(5u8), Ok(120));
    }
}
