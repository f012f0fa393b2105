// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Target port settings.

use std::fmt;

/// Baud rate used when none is given on the command line.
pub const DEFAULT_BAUD_RATE: u32 = 14400;

/// Port opened when none is given on the command line.
pub const DEFAULT_PORT_NAME: &str = "/dev/ttyACM0";

/// Which port to toggle and at what speed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Serial port path (e.g., /dev/ttyACM0), passed through verbatim
    pub port_name: String,
    pub baud_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port_name: DEFAULT_PORT_NAME.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }
}

impl Settings {
    /// Target `port_name` at the default baud rate.
    pub fn new(port_name: &str) -> Self {
        Self {
            port_name: port_name.to_string(),
            ..Default::default()
        }
    }

    /// Set the baud rate
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} baud", self.port_name, self.baud_rate)
    }
}
