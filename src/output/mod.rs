//! Terminal output formatting
//!
//! Display utilities for the console game.

pub mod display;
pub mod formatters;

pub use display::{
    clear_screen, print_banner, print_frame, print_guess_report, print_loss, print_opening,
    print_win,
};
