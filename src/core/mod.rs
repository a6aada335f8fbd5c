//! Core domain types for the guessing game
//!
//! This module contains the round state machine and the helpers it needs.
//! Everything here is pure: no I/O, no randomness, no logging.

mod feedback;
mod normalize;
mod state;
mod word;

pub use feedback::{Heart, Mascot, hearts};
pub use normalize::{fold, strip_char, strip_diacritics};
pub use state::{DEFAULT_MAX_ATTEMPTS, GameState, GuessOutcome, HIDDEN, Phase};
pub use word::{WordEntry, WordError};
