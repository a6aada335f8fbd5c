//! Forca
//!
//! A Portuguese hangman game: guess the hidden word letter by letter, with a
//! tip, before the hearts run out. Accents are ignored when matching, so
//! guessing "e" also uncovers "ê".
//!
//! # Quick Start
//!
//! ```rust
//! use forca::core::{GameState, Phase, WordEntry};
//!
//! let word = WordEntry::new("gênero", "Diversidade de expressões").unwrap();
//! let mut state = GameState::new(word, 6);
//!
//! state.submit_guess("e");
//! assert_eq!(state.render_mask(), "_ ê _ e _ _");
//! assert_eq!(state.phase(), Phase::Playing);
//! ```

// Core domain types
pub mod core;

// Session configuration
pub mod config;

// Round lifecycle and word selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
