use cutils::abi;
use std::os::raw::{c_double, c_int};

#[no_mangle]
pub extern "C" fn add(a: c_int, b: c_int) -> c_int {
    abi::add(a, b)
}

#[no_mangle]
pub extern "C" fn subtract(a: c_int, b: c_int) -> c_int {
    abi::subtract(a, b)
}

#[no_mangle]
pub extern "C" fn multiply(a: c_int, b: c_int) -> c_int {
    abi::multiply(a, b)
}

#[no_mangle]
pub extern "C" fn divide(a: c_int, b: c_int) -> c_double {
    abi::divide(a, b)
}

#[no_mangle]
pub extern "C" fn factorial(n: c_int) -> c_int {
    abi::factorial(n)
}
