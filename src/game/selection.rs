//! Word selection policies
//!
//! Defines the `WordSelector` trait and its concrete implementations.

use crate::config::SelectionPolicy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks the word for the next round
pub trait WordSelector {
    /// Index of the next word in a list of `len` entries
    ///
    /// `current` is `None` before the first round. `len` is never zero.
    fn next_index(&mut self, current: Option<usize>, len: usize) -> usize;
}

/// Enum wrapper for the selection policies
///
/// Allows runtime selection of the policy while keeping static dispatch.
pub enum SelectorType {
    Sequential(SequentialSelector),
    Random(RandomSelector),
}

impl SelectorType {
    /// Build the selector for a configured policy
    #[must_use]
    pub fn from_policy(policy: SelectionPolicy) -> Self {
        match policy {
            SelectionPolicy::Sequential => Self::Sequential(SequentialSelector),
            SelectionPolicy::Random => Self::Random(RandomSelector::new()),
        }
    }
}

impl WordSelector for SelectorType {
    fn next_index(&mut self, current: Option<usize>, len: usize) -> usize {
        match self {
            Self::Sequential(s) => s.next_index(current, len),
            Self::Random(s) => s.next_index(current, len),
        }
    }
}

/// Cycles through the list in order, starting at the first entry
pub struct SequentialSelector;

impl WordSelector for SequentialSelector {
    fn next_index(&mut self, current: Option<usize>, len: usize) -> usize {
        debug_assert!(len > 0, "cannot select from an empty word list");
        current.map_or(0, |index| (index + 1) % len)
    }
}

/// Uniformly random choice every round
///
/// The same word may come up twice in a row.
pub struct RandomSelector<R: Rng = StdRng> {
    rng: R,
}

impl RandomSelector {
    /// Random selector seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic selector, for tests and reproducible sessions
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomSelector<R> {
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> WordSelector for RandomSelector<R> {
    fn next_index(&mut self, _current: Option<usize>, len: usize) -> usize {
        debug_assert!(len > 0, "cannot select from an empty word list");
        self.rng.random_range(0..len)
    }
}
