//! Command implementations

pub mod console;

pub use console::{
    EXIT_SENTINEL, MenuChoice, RoundResult, play_round, play_session, read_letter, run_console,
};
