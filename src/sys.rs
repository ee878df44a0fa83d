//! Host callback registration.
//!
//! A C host may hand the library a function pointer to receive log records.
//! This is the only global state in the crate.

use std::{
    ffi::CStr,
    os::raw::c_char,
    sync::{PoisonError, RwLock},
};

/// A host provided log callback. `message` is a NUL-terminated UTF-8 string
/// that is only valid for the duration of the call.
pub type LogSink = unsafe extern "C" fn(level: u32, message: *const c_char);

static LOG_SINK: RwLock<Option<LogSink>> = RwLock::new(None);

/// Registers the host log callback, replacing any previous one. `None`
/// unregisters it.
pub fn set_log_sink(sink: Option<LogSink>) {
    *LOG_SINK.write().unwrap_or_else(PoisonError::into_inner) = sink;
}

/// Returns `true` if a host log callback is registered.
pub fn has_log_sink() -> bool {
    LOG_SINK
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Forwards a message to the host log callback, if any.
pub fn log(level: u32, message: &CStr) {
    let sink = *LOG_SINK.read().unwrap_or_else(PoisonError::into_inner);
    if let Some(sink) = sink {
        // SAFETY: The registering host guarantees that the callback is safe to
        // call with a valid C string.
        unsafe { sink(level, message.as_ptr()) }
    }
}
