// Library surface: the toolkit-free sessions plus the terminal shell pieces
// the binary wires together. Headless tests drive everything through here.
pub mod app;
pub mod app_dirs;
pub mod clock;
pub mod config;
pub mod countdown;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod runtime;
pub mod stopwatch;
pub mod ui;

pub use error::{ClockError, Result};
