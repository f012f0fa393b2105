// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use crate::settings::{Settings, DEFAULT_BAUD_RATE, DEFAULT_PORT_NAME};
use crate::toggle::{toggle, ToggleError, FAILURE_MESSAGE};

/// Command-line arguments.
///
/// Only positionals are recognised; there is no help or version flag.
#[derive(Parser, Debug)]
#[command(name = "serial-switcher")]
#[command(about = "Open and close a serial port to reset or re-clock the attached device")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Baud rate to open the port at
    ///
    /// Any integer is accepted here; rates the port cannot take are reported
    /// like any other toggle failure.
    #[arg(
        value_name = "BAUD_RATE",
        default_value_t = i64::from(DEFAULT_BAUD_RATE),
        allow_negative_numbers = true
    )]
    pub baud_rate: i64,

    /// Serial port (e.g., /dev/ttyACM0)
    #[arg(value_name = "PORT", default_value = DEFAULT_PORT_NAME)]
    pub port: String,

    /// Anything after the port is ignored
    #[arg(
        value_name = "IGNORED",
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub rest: Vec<String>,
}

impl Cli {
    /// Settings for the port this invocation targets.
    ///
    /// Fails when the baud rate does not fit a `u32`.
    pub fn settings(&self) -> Result<Settings, ToggleError> {
        let baud_rate = u32::try_from(self.baud_rate)
            .map_err(|_| ToggleError::BaudRate(self.baud_rate))?;
        Ok(Settings::new(&self.port).with_baud_rate(baud_rate))
    }
}

/// Result of one invocation, as seen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Port opened and closed; nothing was printed.
    Toggled,
    /// Toggle failed; [`FAILURE_MESSAGE`] was printed.
    Failed,
}

/// Execute the parsed CLI command.
///
/// Toggle failures are reported on `out` and never returned as errors, so
/// the process exits 0 either way. Only a failure to write to `out` is
/// propagated.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<Outcome> {
    match cli.settings().and_then(|settings| toggle(&settings)) {
        Ok(()) => Ok(Outcome::Toggled),
        Err(e) => {
            debug!("{:#}", anyhow::Error::new(e));
            writeln!(out, "{}", FAILURE_MESSAGE).context("Failed to write to stdout")?;
            Ok(Outcome::Failed)
        }
    }
}
