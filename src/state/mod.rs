//! State management module
//!
//! This module contains the countdown state and the controller that owns it.

pub mod countdown_state;
pub mod controller;

// Re-export main types
pub use countdown_state::{CountdownState, Phase};
pub use controller::CountdownController;
