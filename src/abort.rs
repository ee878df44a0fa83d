//! Module implementing a panic hook that reports panics to the host.
//!
//! Panics cannot unwind across the C ABI and abort the process instead, so
//! the hook is the only chance for the host to learn why.

use std::{any::Any, panic};

/// Sets the panic hook to report panics through the logger.
pub fn set_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let message = panic_message(info.payload());
        match info.location() {
            Some(location) => log::error!(
                "panicked at {}:{}:{}: {}",
                location.file(),
                location.line(),
                location.column(),
                message,
            ),
            None => log::error!("panicked: {}", message),
        }
    }));
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_panic_payload_messages() {
        assert_eq!(panic_message(&"static message"), "static message");
        assert_eq!(panic_message(&String::from("formatted 42")), "formatted 42");
        assert_eq!(panic_message(&42u32), "Box<dyn Any>");
    }
}
