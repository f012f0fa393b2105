// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! The open/close cycle itself.

use log::{debug, info};
use thiserror::Error;

use crate::settings::Settings;

/// Printed on stdout for every failed toggle, whatever the cause.
pub const FAILURE_MESSAGE: &str = "exception caught while opening serial port";

/// A failed open/close cycle.
#[derive(Debug, Error)]
pub enum ToggleError {
    /// The requested rate does not fit the serial driver's `u32`.
    #[error("baud rate {0} is out of range")]
    BaudRate(i64),

    /// The port could not be opened: missing device, permissions, busy,
    /// or a baud rate the driver refuses.
    #[error("failed to open serial port {port} at {baud_rate} baud")]
    Open {
        port: String,
        baud_rate: u32,
        #[source]
        source: serialport::Error,
    },
}

/// Open the port described by `settings` and close it again straight away.
///
/// Data bits, parity, stop bits and flow control are left at the serial
/// library defaults. Nothing is read or written. The handle is released by
/// `Drop` as soon as the open succeeds.
pub fn toggle(settings: &Settings) -> Result<(), ToggleError> {
    debug!("Opening {}", settings);

    let port = serialport::new(&settings.port_name, settings.baud_rate)
        .open()
        .map_err(|source| ToggleError::Open {
            port: settings.port_name.clone(),
            baud_rate: settings.baud_rate,
            source,
        })?;
    drop(port);

    info!("Toggled {}", settings);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_port_is_open_error() {
        let settings = Settings::new("/nonexistent/serial-switcher/ttyNONE");
        let err = toggle(&settings).unwrap_err();

        match &err {
            ToggleError::Open {
                port, baud_rate, ..
            } => {
                assert_eq!(port, "/nonexistent/serial-switcher/ttyNONE");
                assert_eq!(*baud_rate, 14400);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "failed to open serial port /nonexistent/serial-switcher/ttyNONE at 14400 baud"
        );
    }

    #[test]
    fn test_failure_message_text() {
        assert_eq!(FAILURE_MESSAGE, "exception caught while opening serial port");
    }

    #[test]
    fn test_baud_rate_error_display() {
        assert_eq!(
            ToggleError::BaudRate(-1).to_string(),
            "baud rate -1 is out of range"
        );
    }

    #[test]
    fn test_open_error_keeps_source() {
        use std::error::Error as _;

        let err = toggle(&Settings::new("/nonexistent/ttyNONE")).unwrap_err();
        assert!(err.source().is_some());
    }
}
