//! Integer arithmetic and in-place string utilities for Rust and C 🦀
//!
//! The crate root exposes the Rust API, which signals errors explicitly. The
//! [`abi`] module provides the same operations with C types and sentinel
//! return values, for building shared libraries.

pub mod abi;
mod abort;
mod ffi;
mod logger;
mod math;
mod sys;
mod text;

pub use self::{
    math::{add, divide, factorial, multiply, subtract, ArithmeticError},
    sys::LogSink,
    text::{is_palindrome, reverse_string, string_length, to_uppercase, Text},
};
pub use log;

/// Module containing the C ABI exports shared by every library built on this
/// crate.
#[doc(hidden)]
pub mod exports {
    use crate::{abort, logger, sys};

    /// Installs the panic hook and the logger, enabling log records up to
    /// `max_level` (`0` off, `1` error, `2` warning, `3` info, `4` debug).
    /// Records are dropped until a log sink is registered.
    #[no_mangle]
    pub extern "C" fn cutils_init(max_level: u32) {
        abort::set_panic_hook();
        logger::init(max_level);
    }

    /// Registers the host log callback. Passing null unregisters it.
    #[no_mangle]
    pub extern "C" fn cutils_set_log_sink(sink: Option<sys::LogSink>) {
        sys::set_log_sink(sink);
    }
}
