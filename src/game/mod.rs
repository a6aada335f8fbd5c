//! Game session management
//!
//! Round lifecycle and word selection on top of the core state machine.

mod engine;
pub mod selection;

pub use engine::{Game, GameError, Statistics};
pub use selection::{RandomSelector, SelectorType, SequentialSelector, WordSelector};
