//! User input parsing
//!
//! Each line typed on stdin is one command.

use std::str::FromStr;
use anyhow::{bail, Context};
use chrono::NaiveTime;

/// A single user action on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Edit the arrival time picker
    Arrival(NaiveTime),
    /// Press the Start/Stop button whatever it shows
    Toggle,
    /// Press the button only if it shows "Start"
    Start,
    /// Press the button only if it shows "Stop"
    Stop,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  arrival HH:MM   set the arrival time (alias: a)
  toggle          press the Start/Stop button (alias: t, or an empty line)
  start | stop    press the button if it shows that label
  show            draw the form again (alias: s)
  help            show this help (alias: ?)
  quit            leave (alias: q)";

/// Parse a 24-hour `HH:MM` time as produced by the arrival picker
pub fn parse_clock_time(input: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .with_context(|| format!("invalid time '{}', expected HH:MM", input.trim()))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = match words.next().map(str::to_lowercase).as_deref() {
            None | Some("t") | Some("toggle") => Command::Toggle,
            Some("a") | Some("arrival") => {
                let Some(time) = words.next() else {
                    bail!("missing time, usage: arrival HH:MM");
                };
                Command::Arrival(parse_clock_time(time)?)
            }
            Some("start") => Command::Start,
            Some("stop") => Command::Stop,
            Some("s") | Some("show") => Command::Show,
            Some("?") | Some("help") => Command::Help,
            Some("q") | Some("quit") | Some("exit") => Command::Quit,
            Some(other) => bail!("unknown command '{}', type 'help' for a list", other),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected argument '{}'", extra);
        }
        Ok(command)
    }
}
