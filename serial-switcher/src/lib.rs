// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Serial port switcher.
//!
//! Opening a serial port asserts DTR/RTS and closing it releases them. Boards
//! with auto-reset circuitry (Arduino and friends) reset on that edge, which
//! is the only effect this crate exists to produce. No bytes are exchanged.

pub mod cli;
pub mod settings;
pub mod toggle;

pub use cli::{Cli, Outcome};
pub use settings::{Settings, DEFAULT_BAUD_RATE, DEFAULT_PORT_NAME};
pub use toggle::{toggle, ToggleError, FAILURE_MESSAGE};
