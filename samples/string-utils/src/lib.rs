use cutils::abi;
use std::os::raw::{c_char, c_int};

/// # Safety
///
/// `s` must be null or point to a writable, NUL-terminated buffer.
#[no_mangle]
pub unsafe extern "C" fn reverse_string(s: *mut c_char) {
    abi::reverse_string(s)
}

/// # Safety
///
/// `s` must be null or point to a writable, NUL-terminated buffer.
#[no_mangle]
pub unsafe extern "C" fn to_uppercase(s: *mut c_char) {
    abi::to_uppercase(s)
}

/// # Safety
///
/// `s` must be null or point to a NUL-terminated buffer.
#[no_mangle]
pub unsafe extern "C" fn string_length(s: *const c_char) -> c_int {
    abi::string_length(s)
}

/// # Safety
///
/// `s` must be null or point to a NUL-terminated buffer.
#[no_mangle]
pub unsafe extern "C" fn is_palindrome(s: *const c_char) -> c_int {
    abi::is_palindrome(s)
}
