//! The punch clock form
//!
//! Owns the arrival time and the controller. Departure and countdown text are
//! derived on every read.

use chrono::{DateTime, Local, NaiveTime};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::{
    schedule::{self, departure_time, format_clock, format_remaining},
    state::{CountdownController, CountdownState, Phase},
};

pub const TITLE: &str = "Marcação de Ponto";
pub const ARRIVAL_HEADER: &str = "Horário de Chegada";
pub const DEPARTURE_HEADER: &str = "Horário de Saída";
pub const COUNTDOWN_HEADER: &str = "Contagem Regressiva";

/// Background color of the Start/Stop button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonColor {
    Blue,
    Red,
}

/// The Start/Stop button as it should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Button {
    pub label: &'static str,
    pub color: ButtonColor,
}

impl Button {
    /// "Start" in blue when idle, "Stop" in red when running
    pub fn for_state(state: &CountdownState) -> Self {
        match state.phase() {
            Phase::Idle => Self { label: "Start", color: ButtonColor::Blue },
            Phase::Running => Self { label: "Stop", color: ButtonColor::Red },
        }
    }
}

/// Everything needed to draw the form once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub arrival: String,
    pub departure: String,
    pub countdown: String,
    pub button: Button,
    pub state: CountdownState,
}

/// The arrival/departure form and the countdown it drives
pub struct Form {
    arrival: DateTime<Local>,
    controller: CountdownController,
}

impl Form {
    /// Create a form with an initial arrival time
    pub fn new(controller: CountdownController, arrival: DateTime<Local>) -> Self {
        Self { arrival, controller }
    }

    /// Arrival time as currently picked
    pub fn arrival(&self) -> DateTime<Local> {
        self.arrival
    }

    /// Edit the arrival time, keeping the arrival's date
    pub fn set_arrival(&mut self, time: NaiveTime) {
        self.arrival = schedule::on_same_day(&self.arrival, time);
        debug!("Arrival set to {}", self.arrival.format("%H:%M"));
    }

    /// Arrival plus the shift length
    pub fn departure(&self) -> DateTime<Local> {
        departure_time(&self.arrival)
    }

    /// Departure time as `HH:mm`
    pub fn departure_text(&self) -> String {
        format_clock(&self.departure())
    }

    /// Remaining time as `H:MM:SS`
    pub fn countdown_text(&self) -> String {
        format_remaining(self.controller.remaining_seconds())
    }

    /// The button as it should currently be drawn
    pub fn button(&self) -> Button {
        Button::for_state(&self.controller.snapshot())
    }

    /// Press the Start/Stop button, returning the resulting phase
    pub fn press_button(&self) -> Phase {
        if self.controller.is_running() {
            self.controller.stop();
        } else {
            info!("Start pressed, departure at {}", self.departure_text());
            self.controller.start(self.arrival);
        }
        self.controller.snapshot().phase()
    }

    /// The countdown controller owned by this form
    pub fn controller(&self) -> &CountdownController {
        &self.controller
    }

    /// Subscribe to countdown state changes
    pub fn subscribe(&self) -> watch::Receiver<CountdownState> {
        self.controller.subscribe()
    }

    /// Snapshot of everything shown on the form
    pub fn screen(&self) -> Screen {
        let state = self.controller.snapshot();
        Screen {
            arrival: format_clock(&self.arrival),
            departure: self.departure_text(),
            countdown: format_remaining(state.remaining_seconds),
            button: Button::for_state(&state),
            state,
        }
    }
}
