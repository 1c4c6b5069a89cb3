//! Interactive TUI mode
//!
//! Full-screen ratatui front end over the same game session as the console mode.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Screen, Statistics, run_tui};
