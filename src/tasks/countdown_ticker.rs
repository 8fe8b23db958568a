//! One-second countdown ticker task

use std::{sync::Weak, time::Duration};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use crate::state::controller::{Shared, Tick};

/// Interval between countdown ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task that ticks the countdown once per second.
///
/// Holds only a weak reference so a dropped controller ends the task at the
/// next tick. Ticks missed while the process was suspended are delayed, not
/// replayed.
pub(crate) async fn countdown_ticker(shared: Weak<Shared>, generation: u64) {
    debug!(generation, "Starting countdown ticker");

    let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let Some(shared) = shared.upgrade() else {
            debug!(generation, "Controller gone, ticker exiting");
            break;
        };

        if shared.tick(generation) == Tick::Finished {
            debug!(generation, "Countdown ticker finished");
            break;
        }
    }
}
