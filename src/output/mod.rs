//! Terminal output formatting
//!
//! Display utilities for the line-oriented commands.

pub mod display;
pub mod formatters;

pub use display::{print_replay_result, print_word_list, write_round, write_statistics};
