//! Configuration and CLI argument handling

use chrono::{DateTime, Local, NaiveTime};
use clap::Parser;

use crate::{schedule, view::{parse_clock_time, Output}};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pontual")]
#[command(about = "Punch clock that counts down to the end of a 9h15m shift")]
#[command(version)]
pub struct Config {
    /// Arrival time as HH:MM (defaults to now)
    #[arg(short, long, value_parser = parse_clock_time)]
    pub arrival: Option<NaiveTime>,

    /// Press Start as soon as the form opens
    #[arg(short, long)]
    pub start: bool,

    /// Print every countdown snapshot as a JSON line instead of the form
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Initial arrival: the one given on the command line, on today's date, or `now`
    pub fn initial_arrival(&self, now: DateTime<Local>) -> DateTime<Local> {
        match self.arrival {
            Some(time) => schedule::on_same_day(&now, time),
            None => now,
        }
    }

    /// Output mode selected by `--json`
    pub fn output(&self) -> Output {
        if self.json { Output::Json } else { Output::Form }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
