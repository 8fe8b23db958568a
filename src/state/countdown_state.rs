//! Countdown state snapshot

use serde::{Deserialize, Serialize};

/// The two states of the countdown state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Running,
}

/// Snapshot of the countdown published on every change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownState {
    pub is_running: bool,
    pub remaining_seconds: u64,
}

impl CountdownState {
    /// Create an idle state with nothing left on the clock
    pub fn new() -> Self {
        Self {
            is_running: false,
            remaining_seconds: 0,
        }
    }

    /// Create a running state with remaining seconds
    pub fn running(remaining_seconds: u64) -> Self {
        Self {
            is_running: true,
            remaining_seconds,
        }
    }

    /// Current phase of the state machine
    pub fn phase(&self) -> Phase {
        if self.is_running {
            Phase::Running
        } else {
            Phase::Idle
        }
    }
}

impl Default for CountdownState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_empty() {
        let state = CountdownState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.remaining_seconds, 0);
    }

    #[test]
    fn serializes_as_snapshot() {
        let json = serde_json::to_value(CountdownState::running(42)).unwrap();
        assert_eq!(json, serde_json::json!({ "is_running": true, "remaining_seconds": 42 }));
        assert_eq!(serde_json::to_value(Phase::Running).unwrap(), "running");
    }
}
