//! Background tasks module
//!
//! This module contains the periodic task that drives the countdown.

pub mod countdown_ticker;

pub(crate) use countdown_ticker::countdown_ticker;
pub use countdown_ticker::TICK_PERIOD;
