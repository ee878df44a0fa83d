//! Module containing logger implementation.

use crate::sys;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::ffi::CString;

/// The main logger implementation for the `log` facade crate. Records are
/// forwarded to the host log callback.
pub struct Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && sys::has_log_sink()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = match record.level() {
            Level::Error => ERROR,
            Level::Warn => WARNING,
            Level::Info => INFO,
            Level::Debug | Level::Trace => DEBUG,
        };
        let message = c_message(record.args().to_string());

        sys::log(level, &message);
    }

    fn flush(&self) {}
}

/// Initialize logging, enabling records up to the specified host level.
///
/// Calling this more than once only updates the maximum level.
pub fn init(max_level: u32) {
    static LOGGER: Logger = Logger;
    // NOTE: Fails if a logger is already installed, either by a previous call
    // or by a Rust host linking this crate, which is fine either way.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level_filter(max_level));
}

/// Converts a host log level into a `log` level filter.
pub fn level_filter(level: u32) -> LevelFilter {
    match level {
        0 => LevelFilter::Off,
        ERROR => LevelFilter::Error,
        WARNING => LevelFilter::Warn,
        INFO => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Converts a log message into a C string, replacing interior NUL bytes.
fn c_message(message: String) -> CString {
    CString::new(message).unwrap_or_else(|err| {
        let bytes = err
            .into_vec()
            .into_iter()
            .map(|b| if b == 0 { b' ' } else { b })
            .collect::<Vec<_>>();
        // SAFETY: All NUL bytes were just replaced.
        unsafe { CString::from_vec_unchecked(bytes) }
    })
}

pub const ERROR: u32 = 1;
pub const WARNING: u32 = 2;
pub const INFO: u32 = 3;
pub const DEBUG: u32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_levels_map_to_filters() {
        assert_eq!(level_filter(0), LevelFilter::Off);
        assert_eq!(level_filter(ERROR), LevelFilter::Error);
        assert_eq!(level_filter(WARNING), LevelFilter::Warn);
        assert_eq!(level_filter(INFO), LevelFilter::Info);
        assert_eq!(level_filter(DEBUG), LevelFilter::Debug);
        assert_eq!(level_filter(42), LevelFilter::Debug);
    }

    #[test]
    fn messages_with_nul_bytes() {
        assert_eq!(c_message("plain".to_owned()).as_bytes(), b"plain");
        assert_eq!(c_message("a\0b\0".to_owned()).as_bytes(), b"a b ");
    }
}
