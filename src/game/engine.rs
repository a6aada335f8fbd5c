//! Round lifecycle
//!
//! `Game` owns the session: configuration, word list, selection policy, the
//! current round and the running statistics. Rounds move from `Playing` to
//! `Won` or `Lost` through guesses and only leave those states via
//! [`Game::restart`].

use super::selection::{SelectorType, WordSelector};
use crate::config::GameConfig;
use crate::core::{GameState, GuessOutcome, Phase, WordEntry};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised when setting up a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Cannot start a game with an empty word list")]
    EmptyWordList,
}

/// Session statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
}

impl Statistics {
    fn record(&mut self, won: bool) {
        self.rounds_played += 1;
        if won {
            self.rounds_won += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}

/// A playing session
pub struct Game<'a, S: WordSelector = SelectorType> {
    config: GameConfig,
    words: &'a [WordEntry],
    selector: S,
    index: usize,
    state: GameState,
    stats: Statistics,
    round_recorded: bool,
}

impl<'a> Game<'a, SelectorType> {
    /// Start a session using the selection policy from `config`
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use forca::config::GameConfig;
    /// use forca::game::Game;
    /// use forca::wordlists::{loader::entries_from_slice, WORDS};
    ///
    /// let words = entries_from_slice(WORDS);
    /// let mut game = Game::new(GameConfig::default(), &words).unwrap();
    ///
    /// assert_eq!(game.state().word(), "diversidade");
    /// game.submit_guess("d");
    /// assert_eq!(game.state().render_mask(), "d _ _ _ _ _ _ d _ d _");
    /// ```
    pub fn new(config: GameConfig, words: &'a [WordEntry]) -> Result<Self, GameError> {
        Self::with_selector(config, words, SelectorType::from_policy(config.policy()))
    }
}

impl<'a, S: WordSelector> Game<'a, S> {
    /// Start a session with an explicit selector
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    pub fn with_selector(
        config: GameConfig,
        words: &'a [WordEntry],
        mut selector: S,
    ) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }

        let index = selector.next_index(None, words.len());
        let state = GameState::new(words[index].clone(), config.max_attempts());
        debug!(
            word_index = index,
            words = words.len(),
            max_attempts = config.max_attempts(),
            policy = %config.policy(),
            "starting first round"
        );

        Ok(Self {
            config,
            words,
            selector,
            index,
            state,
            stats: Statistics::default(),
            round_recorded: false,
        })
    }

    /// Submit a guess to the current round
    pub fn submit_guess(&mut self, raw_guess: &str) -> GuessOutcome {
        let outcome = self.state.submit_guess(raw_guess);
        debug!(
            guess = raw_guess,
            ?outcome,
            remaining = self.state.remaining_attempts(),
            "guess submitted"
        );
        self.record_finished_round();
        outcome
    }

    /// Submit whatever has been typed into the current round
    pub fn submit_pending(&mut self) -> GuessOutcome {
        let guess = self.state.pending_guess().to_string();
        self.submit_guess(&guess)
    }

    /// Type a character into the pending guess
    pub fn push_pending(&mut self, c: char) {
        self.state.push_pending(c);
    }

    /// Replace the pending guess
    pub fn set_pending(&mut self, text: &str) {
        self.state.set_pending(text);
    }

    /// Delete the last character of the pending guess
    pub fn pop_pending(&mut self) -> Option<char> {
        self.state.pop_pending()
    }

    /// Start a new round on the next word
    ///
    /// Counters and guesses are reset. Restarting a round that is still being
    /// played, with at least one guess made, counts it as lost.
    pub fn restart(&mut self) {
        let touched = !self.state.correct_guesses().is_empty() || self.state.wrong_guesses() > 0;
        if !self.round_recorded && touched {
            self.stats.record(false);
        }

        self.index = self.selector.next_index(Some(self.index), self.words.len());
        self.state = GameState::new(self.words[self.index].clone(), self.config.max_attempts());
        self.round_recorded = false;

        debug!(word_index = self.index, "starting new round");
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &'a [WordEntry] {
        self.words
    }

    /// Position of the current word in the list
    #[inline]
    #[must_use]
    pub const fn word_index(&self) -> usize {
        self.index
    }

    fn record_finished_round(&mut self) {
        if self.round_recorded {
            return;
        }

        let won = match self.state.phase() {
            Phase::Playing => return,
            Phase::Won => true,
            Phase::Lost => false,
        };

        self.stats.record(won);
        self.round_recorded = true;
        info!(
            won,
            attempts_left = self.state.remaining_attempts(),
            "round finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectionPolicy;
    use crate::game::selection::{RandomSelector, SequentialSelector};

    fn setup_words() -> Vec<WordEntry> {
        vec![
            WordEntry::new("racial", "Diversidade de diferentes origens.").unwrap(),
            WordEntry::new("papez", "").unwrap(),
            WordEntry::new("gênero", "expressões").unwrap(),
        ]
    }

    fn lose(game: &mut Game<'_, impl WordSelector>) {
        for guess in ["x", "w", "k", "q", "j", "v", "y", "f", "b", "h"] {
            if game.state().is_game_over() {
                break;
            }
            game.submit_guess(guess);
        }
    }

    #[test]
    fn empty_word_list_rejected() {
        let result = Game::new(GameConfig::default(), &[]);
        assert!(matches!(result, Err(GameError::EmptyWordList)));
    }

    #[test]
    fn first_round_uses_first_word() {
        let words = setup_words();
        let game = Game::new(GameConfig::default(), &words).unwrap();

        assert_eq!(game.word_index(), 0);
        assert_eq!(game.state().word(), "racial");
        assert_eq!(game.state().phase(), Phase::Playing);
        assert_eq!(game.state().remaining_attempts(), 6);
    }

    #[test]
    fn restart_after_loss_resets_round() {
        let words = setup_words();
        let mut game = Game::new(GameConfig::default(), &words).unwrap();

        lose(&mut game);
        assert_eq!(game.state().phase(), Phase::Lost);
        assert_eq!(game.state().remaining_attempts(), 0);

        game.restart();
        assert_eq!(game.state().remaining_attempts(), 6);
        assert!(game.state().correct_guesses().is_empty());
        assert!(!game.state().is_game_over());
        assert_eq!(game.state().phase(), Phase::Playing);
        assert_eq!(game.state().word(), "papez");
    }

    #[test]
    fn sequential_restart_cycles_list() {
        let words = setup_words();
        let mut game = Game::with_selector(GameConfig::default(), &words, SequentialSelector).unwrap();

        let mut seen = vec![game.state().word().to_string()];
        for _ in 0..3 {
            game.restart();
            seen.push(game.state().word().to_string());
        }
        assert_eq!(seen, ["racial", "papez", "gênero", "racial"]);
    }

    #[test]
    fn random_restart_picks_from_list() {
        let words = setup_words();
        let mut game =
            Game::with_selector(GameConfig::default(), &words, RandomSelector::seeded(99)).unwrap();

        for _ in 0..20 {
            game.restart();
            assert!(game.word_index() < words.len());
            assert_eq!(game.state().word(), words[game.word_index()].word());
        }
    }

    #[test]
    fn config_attempts_used_for_every_round() {
        let words = setup_words();
        let config = GameConfig::new(3, SelectionPolicy::Sequential).unwrap();
        let mut game = Game::new(config, &words).unwrap();

        assert_eq!(game.state().remaining_attempts(), 3);
        lose(&mut game);
        assert_eq!(game.state().phase(), Phase::Lost);
        game.restart();
        assert_eq!(game.state().max_attempts(), 3);
        assert_eq!(game.state().remaining_attempts(), 3);
    }

    #[test]
    fn statistics_track_wins_and_losses() {
        let words = setup_words();
        let mut game = Game::new(GameConfig::default(), &words).unwrap();

        lose(&mut game);
        game.restart();
        for guess in ["p", "a", "e", "z"] {
            game.submit_guess(guess);
        }
        assert_eq!(game.state().phase(), Phase::Won);
        // Ignored guesses after the end do not count the round twice
        game.submit_guess("q");

        let stats = game.stats();
        assert_eq!(stats.rounds_played, 2);
        assert_eq!(stats.rounds_won, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_streak, 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn abandoning_a_started_round_counts_as_loss() {
        let words = setup_words();
        let mut game = Game::new(GameConfig::default(), &words).unwrap();

        game.restart();
        assert_eq!(game.stats().rounds_played, 0);

        game.submit_guess("a");
        game.restart();
        assert_eq!(game.stats().rounds_played, 1);
        assert_eq!(game.stats().rounds_won, 0);
    }

    #[test]
    fn pending_guess_flows_through_game() {
        let words = setup_words();
        let mut game = Game::new(GameConfig::default(), &words).unwrap();

        game.push_pending('C');
        assert_eq!(game.state().pending_guess(), "c");
        assert!(game.submit_pending().is_hit());
        assert_eq!(game.state().pending_guess(), "");
        assert_eq!(game.state().render_mask(), "_ _ c _ _ _");

        game.set_pending("z");
        assert_eq!(game.pop_pending(), Some('z'));
        assert_eq!(game.submit_pending(), GuessOutcome::Wrong);
    }
}
