//! Pontual - a terminal punch clock
//!
//! Records an arrival time, shows the departure time nine hours and fifteen
//! minutes later, and counts down to it once started.

pub mod clock;
pub mod config;
pub mod schedule;
pub mod state;
pub mod tasks;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use state::{CountdownController, CountdownState, Phase};
pub use view::{Form, Session};
pub use utils::signals::shutdown_signal;
