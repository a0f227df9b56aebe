// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use crate::config::{load_config, CliOverrides, OutputFormat, Strategy};
use crate::helpers::telemetry::setup_simple_tracing;
use crate::{decode, recover};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "secret-finder")]
#[command(about = "Recover the secret constant term of a polynomial from k encoded shares", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `secret-finder -vvv` will
    /// give you trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        setup_simple_tracing(self.log_level());

        match self.command {
            Commands::Recover {
                file,
                strategy,
                format,
                print_polynomial,
            } => {
                let overrides = CliOverrides {
                    strategy,
                    format,
                    // Only an explicit flag overrides the config file
                    print_polynomial: print_polynomial.then_some(true),
                };
                let config = load_config(self.config, &overrides)?;
                info!("Config loaded from: {:?}", config.config_file());
                recover::execute(&file, &config)?
            }
            Commands::Decode { value, base } => decode::execute(&value, base)?,
        }

        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recover the secret from a share document
    Recover {
        /// Path to the JSON share document
        file: PathBuf,

        /// Which k shares of the document to use
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,

        /// How to print the result
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Also print every coefficient of the recovered polynomial
        #[arg(long = "print-polynomial", short = 'p')]
        print_polynomial: bool,
    },

    /// Decode a single value written in the given base
    Decode {
        /// The digits to decode
        value: String,

        /// The base the digits are written in (2-36)
        #[arg(long, short)]
        base: u32,
    },
}
