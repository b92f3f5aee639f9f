// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod dispatch;
mod session;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;
use vms::{Clock, FixedClock, SystemClock};
use vms_domain::Date;

/// Vehicle Management System - fleet, bookings and trips from a command console
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Read commands from this file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Use this date (m/d/yyyy) as today instead of the system date
    #[arg(long)]
    today: Option<String>,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn clock(&self) -> Result<Box<dyn Clock>> {
        let Some(text) = &self.today else {
            return Ok(Box::new(SystemClock));
        };

        let today: Date = Date::parse_valid(text)
            .map_err(|e| eyre!("--today {text} is not a valid calendar date: {e}"))?;
        info!(%today, "Using fixed date as today");
        Ok(Box::new(FixedClock::new(today)))
    }

    fn reader(&self) -> Result<Box<dyn BufRead>> {
        match &self.input {
            Some(path) => {
                info!(path = %path.display(), "Reading commands from file");
                let file: File = File::open(path)
                    .wrap_err_with(|| format!("Failed to open {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            None => Ok(Box::new(io::stdin().lock())),
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // stdout carries the console output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();

    let clock: Box<dyn Clock> = args.clock()?;
    let reader: Box<dyn BufRead> = args.reader()?;

    session::run(reader, io::stdout().lock(), clock.as_ref())
        .wrap_err("Console I/O failed")?;
    Ok(())
}
