//! Interactive session loop
//!
//! Reads commands line by line, applies them to the form, and redraws
//! whenever the controller publishes a new state.

use std::{future::Future, io::Write};
use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use crate::state::Phase;
use super::{
    commands::{Command, HELP},
    form::Form,
    terminal::{render_countdown, render_form, render_json},
};

/// How the form is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Colored form for a human at a terminal
    Form,
    /// One JSON snapshot per line
    Json,
}

/// A form bound to an output and driven by line commands
pub struct Session<W> {
    form: Form,
    out: W,
    output: Output,
}

impl<W: Write> Session<W> {
    /// Create a session drawing `form` to `out`
    pub fn new(form: Form, out: W, output: Output) -> Self {
        Self { form, out, output }
    }

    /// The form being shown
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Where the form is drawn
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Draw the whole form
    pub fn redraw(&mut self) -> anyhow::Result<()> {
        let screen = self.form.screen();
        match self.output {
            Output::Form => render_form(&mut self.out, &screen),
            Output::Json => render_json(&mut self.out, &screen),
        }
        .context("failed to write form")
    }

    fn redraw_countdown(&mut self) -> anyhow::Result<()> {
        let screen = self.form.screen();
        match self.output {
            Output::Form if screen.state.is_running => render_countdown(&mut self.out, &screen),
            Output::Form => render_form(&mut self.out, &screen),
            Output::Json => render_json(&mut self.out, &screen),
        }
        .context("failed to write countdown")
    }

    fn message(&mut self, text: &str) -> anyhow::Result<()> {
        if self.output == Output::Form {
            writeln!(self.out, "{}", text).context("failed to write message")?;
        }
        Ok(())
    }

    /// Apply one command. Returns false when the session should end.
    pub fn apply(&mut self, command: Command) -> anyhow::Result<bool> {
        debug!("Applying command {:?}", command);
        let running = self.form.controller().is_running();

        match command {
            Command::Arrival(time) => self.form.set_arrival(time),
            Command::Toggle => {
                self.form.press_button();
            }
            Command::Start if !running => {
                self.form.press_button();
            }
            Command::Stop if running => {
                self.form.press_button();
            }
            Command::Start | Command::Stop => {
                let label = self.form.button().label;
                self.message(&format!("The button shows \"{}\"", label))?;
                return Ok(true);
            }
            Command::Show => {}
            Command::Help => {
                self.message(HELP)?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
        }

        self.redraw()?;
        Ok(true)
    }

    /// Run until the user quits or `shutdown` resolves.
    ///
    /// Once the input is closed the session keeps drawing updates and ends
    /// when the countdown is idle.
    pub async fn run<R, S>(&mut self, input: R, shutdown: S) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        S: Future<Output = anyhow::Result<()>>,
    {
        let mut lines = input.lines();
        let mut input_open = true;
        let mut updates = self.form.subscribe();
        tokio::pin!(shutdown);

        self.redraw()?;

        loop {
            tokio::select! {
                line = lines.next_line(), if input_open => {
                    let Some(line) = line.context("failed to read input")? else {
                        debug!("Input closed");
                        input_open = false;
                        if !self.form.controller().is_running() {
                            break;
                        }
                        continue;
                    };
                    match line.parse::<Command>() {
                        Ok(command) => {
                            if !self.apply(command)? {
                                break;
                            }
                        }
                        Err(e) => {
                            warn!("Rejected input {:?}: {}", line, e);
                            self.message(&format!("{:#}", e))?;
                        }
                    }
                    // The form was just drawn with the latest state
                    updates.borrow_and_update();
                }
                changed = updates.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let state = *updates.borrow_and_update();
                    self.redraw_countdown()?;
                    if state.phase() == Phase::Idle && state.remaining_seconds == 0 {
                        info!("Departure time reached");
                    }
                    if !input_open && !state.is_running {
                        break;
                    }
                }
                result = &mut shutdown => {
                    result?;
                    info!("Shutdown requested");
                    break;
                }
            }
        }

        self.form.controller().stop();
        info!("Session ended");
        Ok(())
    }
}
