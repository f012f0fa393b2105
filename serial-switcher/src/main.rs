// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Open and immediately close a serial port to pulse its DTR/RTS lines.
//!
//! Usage:
//!   serial-switcher                      # /dev/ttyACM0 at 14400 baud
//!   serial-switcher 9600                 # /dev/ttyACM0 at 9600 baud
//!   serial-switcher 19200 /dev/ttyUSB0

use std::io;

use anyhow::Result;
use clap::Parser;

use serial_switcher::cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::Cli::parse();
    let _outcome = cli::run(&args, &mut io::stdout().lock())?;
    Ok(())
}
