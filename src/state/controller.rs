//! Countdown controller
//!
//! Owns the countdown state and the one-second ticker. The state is only
//! ever mutated here, and every mutation is published on a watch channel
//! so the view can re-render without polling.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use chrono::{DateTime, Local};
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info};

use crate::{
    clock::{Clock, SystemClock},
    schedule::remaining_seconds,
    tasks::countdown_ticker,
};
use super::CountdownState;

/// What the ticker should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tick {
    Continue,
    Finished,
}

#[derive(Debug, Default)]
struct Schedule {
    state: CountdownState,
    /// Bumped on every start and stop; a ticker only acts on its own generation
    generation: u64,
    ticker: Option<JoinHandle<()>>,
}

/// State shared between the controller and its ticker
pub(crate) struct Shared {
    schedule: Mutex<Schedule>,
    updates: watch::Sender<CountdownState>,
    clock: Arc<dyn Clock>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Schedule> {
        self.schedule.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Advance the countdown by one second.
    ///
    /// Ticks from a cancelled generation are ignored, so nothing changes
    /// once `stop` has returned.
    pub(crate) fn tick(&self, generation: u64) -> Tick {
        let mut schedule = self.lock();
        if schedule.generation != generation || !schedule.state.is_running {
            debug!(generation, "Ignoring tick from a cancelled countdown");
            return Tick::Finished;
        }

        let outcome = if schedule.state.remaining_seconds > 0 {
            schedule.state.remaining_seconds -= 1;
            Tick::Continue
        } else {
            info!("Countdown reached zero, stopping");
            schedule.state.is_running = false;
            schedule.ticker = None;
            Tick::Finished
        };

        self.updates.send_replace(schedule.state);
        outcome
    }
}

/// Controller for the departure countdown
pub struct CountdownController {
    shared: Arc<Shared>,
}

impl CountdownController {
    /// Create an idle controller reading the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an idle controller reading the given clock
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let (updates, _) = watch::channel(CountdownState::new());

        Self {
            shared: Arc::new(Shared {
                schedule: Mutex::new(Schedule::default()),
                updates,
                clock,
            }),
        }
    }

    /// Start counting down to the departure time of `arrival`.
    ///
    /// Calling this while running restarts the countdown from the new
    /// arrival. Must be called from within a tokio runtime.
    pub fn start(&self, arrival: DateTime<Local>) {
        let now = self.shared.clock.now();
        let remaining = remaining_seconds(&arrival, &now);

        let mut schedule = self.shared.lock();
        if let Some(ticker) = schedule.ticker.take() {
            debug!("Countdown already running, restarting");
            ticker.abort();
        }

        schedule.generation += 1;
        schedule.state = CountdownState::running(remaining);
        schedule.ticker = Some(tokio::spawn(countdown_ticker(
            Arc::downgrade(&self.shared),
            schedule.generation,
        )));

        info!(
            "Countdown started: arrival={}, remaining={}s",
            arrival.format("%H:%M:%S"),
            remaining
        );
        self.shared.updates.send_replace(schedule.state);
    }

    /// Stop the countdown, freezing the remaining time
    pub fn stop(&self) {
        let mut schedule = self.shared.lock();
        if let Some(ticker) = schedule.ticker.take() {
            ticker.abort();
        }

        schedule.generation += 1;
        if !schedule.state.is_running {
            return;
        }

        info!("Countdown stopped with {}s remaining", schedule.state.remaining_seconds);
        schedule.state.is_running = false;
        self.shared.updates.send_replace(schedule.state);
    }

    /// Current countdown state
    pub fn snapshot(&self) -> CountdownState {
        self.shared.lock().state
    }

    /// Whether a countdown is ticking
    pub fn is_running(&self) -> bool {
        self.snapshot().is_running
    }

    /// Seconds left in the shift as of the last tick
    pub fn remaining_seconds(&self) -> u64 {
        self.snapshot().remaining_seconds
    }

    /// Subscribe to state changes; the receiver starts with the current state marked as seen
    pub fn subscribe(&self) -> watch::Receiver<CountdownState> {
        self.shared.updates.subscribe()
    }
}

impl Default for CountdownController {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CountdownController {
    fn drop(&mut self) {
        let mut schedule = self.shared.lock();
        if let Some(ticker) = schedule.ticker.take() {
            debug!("Controller dropped, cancelling ticker");
            ticker.abort();
        }
        schedule.generation += 1;
    }
}
