//! Presentation layer
//!
//! The punch clock form, how user input maps onto it, and how it is drawn
//! in a terminal.

pub mod commands;
pub mod form;
pub mod session;
pub mod terminal;

// Re-export main types
pub use commands::{parse_clock_time, Command};
pub use form::{Button, ButtonColor, Form, Screen};
pub use session::{Output, Session};
