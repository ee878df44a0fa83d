//! C ABI flavoured arithmetic and string functions.
//!
//! These implement the contract of the `libmath_utils` and `libstring_utils`
//! shared libraries: errors are reported through sentinel return values and
//! null strings are tolerated. Every substituted sentinel is logged. The
//! `samples` crates export them under unmangled names.

use crate::{
    ffi::string::{borrow_c_str, CStrMut},
    math, text,
};
use std::{
    convert::TryFrom,
    os::raw::{c_char, c_double, c_int},
};

/// Returns `a + b`, wrapping on overflow.
pub fn add(a: c_int, b: c_int) -> c_int {
    math::add(a, b).unwrap_or_else(|err| {
        log::warn!("add({}, {}): {}; wrapping", a, b, err);
        a.wrapping_add(b)
    })
}

/// Returns `a - b`, wrapping on overflow.
pub fn subtract(a: c_int, b: c_int) -> c_int {
    math::subtract(a, b).unwrap_or_else(|err| {
        log::warn!("subtract({}, {}): {}; wrapping", a, b, err);
        a.wrapping_sub(b)
    })
}

/// Returns `a * b`, wrapping on overflow.
pub fn multiply(a: c_int, b: c_int) -> c_int {
    math::multiply(a, b).unwrap_or_else(|err| {
        log::warn!("multiply({}, {}): {}; wrapping", a, b, err);
        a.wrapping_mul(b)
    })
}

/// Returns `a / b`, or `0.0` when `b` is zero.
pub fn divide(a: c_int, b: c_int) -> c_double {
    math::divide(a, b).unwrap_or_else(|err| {
        log::warn!("divide({}, {}): {}; returning 0.0", a, b, err);
        0.0
    })
}

/// Returns `n!`, or `1` for any `n <= 1` including negative numbers. Wraps on
/// overflow.
pub fn factorial(n: c_int) -> c_int {
    math::factorial(n).unwrap_or_else(|err| {
        log::warn!("factorial({}): {}", n, err);
        // NOTE: Once the wrapped product has as many factors of two as
        // `c_int` has bits it is zero, and stays zero.
        (2..=n)
            .try_fold(1, |product: c_int, i| match product.wrapping_mul(i) {
                0 => None,
                product => Some(product),
            })
            .unwrap_or(0)
    })
}

/// Reverses the C string `s` in place. Does nothing for a null pointer.
///
/// # Safety
///
/// `s` must be null or point to a writable, NUL-terminated buffer.
pub unsafe fn reverse_string(s: *mut c_char) {
    match CStrMut::from_ptr(s) {
        Some(mut s) => text::reverse_string(&mut *s),
        None => log::debug!("reverse_string: null string"),
    }
}

/// Converts the ASCII lowercase letters of the C string `s` to uppercase in
/// place. Does nothing for a null pointer.
///
/// # Safety
///
/// `s` must be null or point to a writable, NUL-terminated buffer.
pub unsafe fn to_uppercase(s: *mut c_char) {
    match CStrMut::from_ptr(s) {
        Some(mut s) => text::to_uppercase(&mut *s),
        None => log::debug!("to_uppercase: null string"),
    }
}

/// Returns the length in bytes of the C string `s`, or `0` for a null
/// pointer. Saturates at `c_int::MAX`.
///
/// # Safety
///
/// `s` must be null or point to a NUL-terminated buffer.
pub unsafe fn string_length(s: *const c_char) -> c_int {
    match borrow_c_str(s) {
        Some(s) => c_int::try_from(text::string_length(s.to_bytes())).unwrap_or(c_int::MAX),
        None => {
            log::debug!("string_length: null string");
            0
        }
    }
}

/// Returns `1` if the C string `s` is a palindrome and `0` otherwise. A null
/// pointer is not a palindrome.
///
/// # Safety
///
/// `s` must be null or point to a NUL-terminated buffer.
pub unsafe fn is_palindrome(s: *const c_char) -> c_int {
    match borrow_c_str(s) {
        Some(s) => text::is_palindrome(s.to_bytes()) as c_int,
        None => {
            log::warn!("is_palindrome: null string is not a palindrome");
            0
        }
    }
}
