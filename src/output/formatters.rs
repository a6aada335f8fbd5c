//! Formatting utilities for terminal output

use crate::core::{GameState, Heart, hearts};

/// Row of heart symbols, full hearts first
#[must_use]
pub fn hearts_row(remaining_attempts: u8, max_attempts: u8) -> String {
    hearts(remaining_attempts, max_attempts)
        .into_iter()
        .map(Heart::symbol)
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The masked word as shown to the player (upper case, cells spaced)
#[must_use]
pub fn display_mask(state: &GameState) -> String {
    state.render_mask().to_uppercase()
}

/// Word spaced out the same way as the mask, for the end-of-round reveal
#[must_use]
pub fn spaced_word(word: &str) -> String {
    word.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
