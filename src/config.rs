//! Game configuration
//!
//! The attempt budget and the word selection policy are fixed for a whole
//! session and passed into [`crate::game::Game::new`].

use crate::core::DEFAULT_MAX_ATTEMPTS;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest attempt budget accepted
pub const MAX_ATTEMPTS_LIMIT: u8 = 26;

/// How the next word is picked when a round starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Walk the list in order, wrapping around at the end
    #[default]
    Sequential,
    /// Pick uniformly at random every round (repeats allowed)
    Random,
}

impl SelectionPolicy {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SelectionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" | "seq" | "cycle" => Ok(Self::Sequential),
            "random" | "rand" => Ok(Self::Random),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Max attempts must be between 1 and {max}, got {0}", max = MAX_ATTEMPTS_LIMIT)]
    AttemptsOutOfRange(u8),
    #[error("Unknown selection policy '{0}' (expected 'sequential' or 'random')")]
    UnknownPolicy(String),
}

/// Immutable per-session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_attempts: u8,
    policy: SelectionPolicy,
}

impl GameConfig {
    /// Build a configuration
    ///
    /// # Errors
    /// Returns `ConfigError::AttemptsOutOfRange` unless `1 <= max_attempts <= 26`.
    pub const fn new(max_attempts: u8, policy: SelectionPolicy) -> Result<Self, ConfigError> {
        if max_attempts == 0 || max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(ConfigError::AttemptsOutOfRange(max_attempts));
        }
        Ok(Self {
            max_attempts,
            policy,
        })
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn policy(&self) -> SelectionPolicy {
        self.policy
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            policy: SelectionPolicy::default(),
        }
    }
}
