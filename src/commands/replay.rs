//! Replay command
//!
//! Plays a fixed sequence of guesses against a given word and records every
//! transition of the round.

use crate::config::GameConfig;
use crate::core::{GameState, GuessOutcome, Mascot, Phase, WordEntry, WordError};

/// Configuration for a replay
pub struct ReplayConfig {
    pub word: String,
    pub tip: String,
    pub guesses: Vec<String>,
    pub game: GameConfig,
}

impl ReplayConfig {
    #[must_use]
    pub fn new(word: String, guesses: Vec<String>) -> Self {
        Self {
            word,
            tip: String::new(),
            guesses,
            game: GameConfig::default(),
        }
    }
}

/// Result of replaying a word
pub struct ReplayResult {
    pub word: String,
    pub steps: Vec<ReplayStep>,
    pub phase: Phase,
    pub remaining_attempts: u8,
    pub max_attempts: u8,
}

/// One submitted guess and the round right after it
pub struct ReplayStep {
    pub guess: String,
    pub outcome: GuessOutcome,
    pub mask: String,
    pub remaining_attempts: u8,
    pub mascot: Mascot,
}

/// Replay the guesses in order, stopping as soon as the round ends
///
/// Guesses are lower-cased before submission, as a front-end would do.
///
/// # Errors
///
/// Returns an error if the word is not a valid entry.
pub fn replay_word(config: ReplayConfig) -> Result<ReplayResult, WordError> {
    let entry = WordEntry::new(config.word, config.tip)?;
    let mut state = GameState::new(entry, config.game.max_attempts());
    let mut steps = Vec::new();

    for guess in config.guesses {
        if state.is_game_over() {
            break;
        }

        let guess = guess.trim().to_lowercase();
        let outcome = state.submit_guess(&guess);

        steps.push(ReplayStep {
            guess,
            outcome,
            mask: state.render_mask(),
            remaining_attempts: state.remaining_attempts(),
            mascot: Mascot::for_round(&state),
        });
    }

    Ok(ReplayResult {
        word: state.word().to_string(),
        steps,
        phase: state.phase(),
        remaining_attempts: state.remaining_attempts(),
        max_attempts: state.max_attempts(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectionPolicy;

    fn guesses(letters: &[&str]) -> Vec<String> {
        letters.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn replay_papez_masks() {
        let config = ReplayConfig::new("papez".into(), guesses(&["p", "a", "e", "z"]));
        let result = replay_word(config).unwrap();

        let masks: Vec<&str> = result.steps.iter().map(|s| s.mask.as_str()).collect();
        assert_eq!(masks, ["p _ p _ _", "p a p _ _", "p a p e _", "p a p e z"]);
        assert_eq!(result.phase, Phase::Won);
        assert_eq!(result.remaining_attempts, 6);
        assert_eq!(result.steps[3].mascot, Mascot::Celebrating);
    }

    #[test]
    fn replay_stops_when_round_ends() {
        let config = ReplayConfig::new(
            "racial".into(),
            guesses(&["x", "w", "k", "q", "j", "v", "r", "a"]),
        );
        let result = replay_word(config).unwrap();

        assert_eq!(result.steps.len(), 6);
        assert_eq!(result.phase, Phase::Lost);
        assert_eq!(result.remaining_attempts, 0);
        assert_eq!(result.steps[5].mascot, Mascot::Defeated);
    }

    #[test]
    fn replay_lowercases_guesses() {
        let config = ReplayConfig::new("GÊNERO".into(), guesses(&["E"]));
        let result = replay_word(config).unwrap();

        assert_eq!(result.word, "gênero");
        assert_eq!(result.steps[0].guess, "e");
        assert_eq!(result.steps[0].mask, "_ ê _ e _ _");
    }

    #[test]
    fn replay_uses_configured_attempts() {
        let mut config = ReplayConfig::new("racial".into(), guesses(&["x", "w"]));
        config.game = GameConfig::new(2, SelectionPolicy::Sequential).unwrap();
        let result = replay_word(config).unwrap();

        assert_eq!(result.max_attempts, 2);
        assert_eq!(result.phase, Phase::Lost);
    }

    #[test]
    fn replay_open_round() {
        let config = ReplayConfig::new("racial".into(), guesses(&["r", "z"]));
        let result = replay_word(config).unwrap();

        assert_eq!(result.phase, Phase::Playing);
        assert_eq!(result.remaining_attempts, 5);
        assert_eq!(result.steps[1].mascot, Mascot::Calm);
    }

    #[test]
    fn replay_invalid_word() {
        let config = ReplayConfig::new("r2d2".into(), guesses(&["r"]));
        assert!(replay_word(config).is_err());
    }
}
