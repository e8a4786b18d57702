// ABOUTME: IronPath CLI - run strength analytics over a JSON set log
// ABOUTME: Forecasts, plateau checks, and periodized weight prescriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Trend and 30/60/90-day projections, with days to reach 180 kg
//! ironpath-cli forecast --log sets.json --exercise back_squat --target 180
//!
//! # Plateau verdicts for every exercise in the log
//! ironpath-cli plateaus --log sets.json --window 5
//!
//! # Week 6 working weights for a session
//! ironpath-cli prescribe --log sets.json --exercises back_squat,bench_press --week 6
//! ```

mod commands;

use clap::{Parser, Subcommand};
use ironpath::config::environment::EngineConfig;
use ironpath::errors::{AppError, AppResult};
use ironpath::logging::LoggingConfig;
use std::path::PathBuf;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "ironpath-cli",
    about = "IronPath strength analytics CLI",
    long_about = "Estimate, forecast, and program strength training from a JSON log of sets."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON set log: an array of sets, or an object with a "sets" array
    #[arg(long, global = true, default_value = "sets.json")]
    log: PathBuf,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Fit a trend and project future strength for one exercise
    Forecast {
        /// Exercise name as it appears in the log
        #[arg(long)]
        exercise: String,

        /// Goal 1RM in kilograms
        #[arg(long)]
        target: Option<f64>,
    },

    /// Flag exercises whose recent sessions show no meaningful gain
    Plateaus {
        /// Number of most recent sessions examined per exercise
        #[arg(long)]
        window: Option<usize>,
    },

    /// Prescribe phase-adjusted working weights from a fresh default program
    Prescribe {
        /// Comma-separated exercise names
        #[arg(long, value_delimiter = ',', required = true)]
        exercises: Vec<String>,

        /// Program week to prescribe for
        #[arg(long, default_value = "1")]
        week: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let mut config = EngineConfig::from_env()?;

    match cli.command {
        Command::Forecast { exercise, target } => {
            commands::forecast(&config.intelligence, &cli.log, &exercise, target).await?;
        }
        Command::Plateaus { window } => {
            if let Some(window) = window {
                config.intelligence.plateau.window_size = window;
                config.intelligence.validate()?;
            }
            commands::plateaus(&config.intelligence, &cli.log).await?;
        }
        Command::Prescribe { exercises, week } => {
            commands::prescribe(&config.intelligence, &cli.log, exercises, week).await?;
        }
    }

    Ok(())
}
