//! Module containing FFI utilities for borrowing C strings passed across the
//! C ABI.
//!
//! # Safety
//!
//! Borrows created from raw pointers carry a caller-chosen lifetime. They must
//! not outlive the call that received the pointer, since the buffer is owned
//! by the C caller.

pub mod string;
