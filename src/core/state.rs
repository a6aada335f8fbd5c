//! Round state and guess evaluation
//!
//! `GameState` holds everything about one round: the hidden word, the attempts
//! left, the letters found so far and whether the round has ended. It only
//! changes through [`GameState::submit_guess`] (and the pending-guess editing
//! helpers that feed it).

use super::WordEntry;
use super::normalize::{fold, strip_char, strip_diacritics};

/// Wrong guesses allowed per round unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: u8 = 6;

/// Placeholder shown for a letter that has not been found yet
pub const HIDDEN: char = '_';

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

/// What a single submission did to the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess is in the word. `revealed` lists every entry newly added to
    /// the correct guesses, accented variants included.
    Correct { revealed: Vec<String> },
    /// The guess is in the word but had already been found
    Repeated,
    /// The guess is not in the word and cost one attempt
    Wrong,
    /// The round was already over; nothing changed
    Ignored,
}

impl GuessOutcome {
    /// Whether the submission counted as a hit
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Correct { .. } | Self::Repeated)
    }
}

/// State of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    current_word: WordEntry,
    max_attempts: u8,
    remaining_attempts: u8,
    correct_guesses: Vec<String>,
    pending_guess: String,
    game_over: bool,
}

impl GameState {
    /// Start a fresh round on `current_word`
    ///
    /// # Examples
    /// ```
    /// use forca::core::{GameState, Phase, WordEntry};
    ///
    /// let word = WordEntry::new("papez", "").unwrap();
    /// let mut state = GameState::new(word, 6);
    ///
    /// state.submit_guess("p");
    /// assert_eq!(state.render_mask(), "p _ p _ _");
    /// assert_eq!(state.remaining_attempts(), 6);
    /// assert_eq!(state.phase(), Phase::Playing);
    /// ```
    #[must_use]
    pub const fn new(current_word: WordEntry, max_attempts: u8) -> Self {
        Self {
            current_word,
            max_attempts,
            remaining_attempts: max_attempts,
            correct_guesses: Vec::new(),
            pending_guess: String::new(),
            game_over: max_attempts == 0,
        }
    }

    /// Submit a guess and advance the round
    ///
    /// The guess is expected to be a single lower-case letter, but any string
    /// is accepted: it is a hit when the accent-free word contains it. A hit
    /// also records every accented letter of the word that folds to the guess,
    /// so guessing "e" in "gênero" reveals the "ê" as well. Anything else,
    /// including the empty string, costs one attempt.
    ///
    /// Once the round is over further guesses are ignored.
    pub fn submit_guess(&mut self, raw_guess: &str) -> GuessOutcome {
        self.pending_guess.clear();

        if self.game_over {
            return GuessOutcome::Ignored;
        }

        let normalized_word = strip_diacritics(self.current_word.word());

        let outcome = if !raw_guess.is_empty() && normalized_word.contains(raw_guess) {
            let variants: Vec<String> = self
                .current_word
                .word()
                .chars()
                .filter(|&letter| strip_char(letter) == raw_guess)
                .map(String::from)
                .collect();

            let mut revealed = Vec::new();
            for guess in std::iter::once(raw_guess.to_string()).chain(variants) {
                if self.record(&guess) {
                    revealed.push(guess);
                }
            }

            if revealed.is_empty() {
                GuessOutcome::Repeated
            } else {
                GuessOutcome::Correct { revealed }
            }
        } else {
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
            GuessOutcome::Wrong
        };

        self.game_over = self.remaining_attempts == 0 || self.all_letters_found();

        outcome
    }

    /// Submit whatever is currently typed
    pub fn submit_pending(&mut self) -> GuessOutcome {
        let guess = std::mem::take(&mut self.pending_guess);
        self.submit_guess(&guess)
    }

    /// Replace the typed text (stored lower-cased)
    ///
    /// Input is refused once the round is over.
    pub fn set_pending(&mut self, text: &str) {
        if !self.game_over {
            self.pending_guess = text.to_lowercase();
        }
    }

    /// Append a typed character (stored lower-cased)
    pub fn push_pending(&mut self, c: char) {
        if !self.game_over {
            self.pending_guess.extend(c.to_lowercase());
        }
    }

    /// Remove the last typed character
    pub fn pop_pending(&mut self) -> Option<char> {
        self.pending_guess.pop()
    }

    /// The word with unfound letters replaced by `_`
    ///
    /// Spaces are always shown. A letter is shown when it, or its accent-free
    /// form, has been guessed (case-insensitively).
    #[must_use]
    pub fn mask(&self) -> Vec<char> {
        self.current_word
            .word()
            .chars()
            .map(|letter| {
                if letter == ' ' {
                    ' '
                } else if self.is_guessed(&letter.to_string()) || self.is_guessed(&strip_char(letter))
                {
                    letter
                } else {
                    HIDDEN
                }
            })
            .collect()
    }

    /// Display form of the mask: every cell separated by a space
    #[must_use]
    pub fn render_mask(&self) -> String {
        let mut rendered = String::new();
        for (i, cell) in self.mask().into_iter().enumerate() {
            if i > 0 {
                rendered.push(' ');
            }
            rendered.push(cell);
        }
        rendered
    }

    /// Current phase, derived from the game-over flag and attempts left
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match (self.game_over, self.remaining_attempts) {
            (false, _) => Phase::Playing,
            (true, 0) => Phase::Lost,
            (true, _) => Phase::Won,
        }
    }

    #[inline]
    #[must_use]
    pub const fn current_word(&self) -> &WordEntry {
        &self.current_word
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        self.current_word.word()
    }

    #[inline]
    #[must_use]
    pub fn tip(&self) -> &str {
        self.current_word.tip()
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u8 {
        self.remaining_attempts
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    /// Attempts spent on wrong guesses so far
    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> u8 {
        self.max_attempts - self.remaining_attempts
    }

    /// Accepted guesses in the order they were recorded
    #[inline]
    #[must_use]
    pub fn correct_guesses(&self) -> &[String] {
        &self.correct_guesses
    }

    #[inline]
    #[must_use]
    pub fn pending_guess(&self) -> &str {
        &self.pending_guess
    }

    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Record a correct guess; false when it was already there
    fn record(&mut self, guess: &str) -> bool {
        if self.correct_guesses.iter().any(|g| g == guess) {
            return false;
        }
        self.correct_guesses.push(guess.to_string());
        true
    }

    fn is_guessed(&self, letter: &str) -> bool {
        let letter = letter.to_lowercase();
        self.correct_guesses
            .iter()
            .any(|g| g.to_lowercase() == letter)
    }

    fn all_letters_found(&self) -> bool {
        let found: Vec<String> = self.correct_guesses.iter().map(|g| fold(g)).collect();

        self.current_word
            .word()
            .chars()
            .filter(|&letter| letter != ' ')
            .all(|letter| found.contains(&fold(&letter.to_string())))
    }
}
