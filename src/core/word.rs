//! Word entry representation
//!
//! A `WordEntry` pairs the hidden word with the tip shown to the player.

use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// A hidden word and its tip
///
/// The word is stored trimmed, lower-cased and in composed (NFC) form. It may contain spaces
/// (multi-word answers), which are never hidden by the mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    tip: String,
}

/// Error type for invalid word entries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

impl WordEntry {
    /// Create a new entry from a word and its tip
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty after trimming
    /// - The word contains anything other than letters and spaces
    ///
    /// # Examples
    /// ```
    /// use forca::core::WordEntry;
    ///
    /// let entry = WordEntry::new("Gênero", "Diversidade de expressões").unwrap();
    /// assert_eq!(entry.word(), "gênero");
    ///
    /// assert!(WordEntry::new("", "tip").is_err());
    /// assert!(WordEntry::new("r2d2", "tip").is_err());
    /// ```
    pub fn new(word: impl Into<String>, tip: impl Into<String>) -> Result<Self, WordError> {
        let word = word.into().trim().nfc().collect::<String>().to_lowercase();

        if word.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = word.chars().find(|&c| !c.is_alphabetic() && c != ' ') {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self {
            word,
            tip: tip.into().trim().to_string(),
        })
    }

    /// The hidden word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The tip shown while the round is playing
    #[inline]
    #[must_use]
    pub fn tip(&self) -> &str {
        &self.tip
    }

    /// Number of letters the player has to find (spaces excluded)
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.word.chars().filter(|&c| c != ' ').count()
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_creation_valid() {
        let entry = WordEntry::new("racial", "Diversidade de diferentes origens.").unwrap();
        assert_eq!(entry.word(), "racial");
        assert_eq!(entry.tip(), "Diversidade de diferentes origens.");
    }

    #[test]
    fn entry_lowercased_and_trimmed() {
        let entry = WordEntry::new("  SocioEconômica ", "  dica ").unwrap();
        assert_eq!(entry.word(), "socioeconômica");
        assert_eq!(entry.tip(), "dica");
    }

    #[test]
    fn entry_allows_spaces() {
        let entry = WordEntry::new("bom dia", "").unwrap();
        assert_eq!(entry.word(), "bom dia");
        assert_eq!(entry.letter_count(), 6);
    }

    #[test]
    fn entry_rejects_empty() {
        assert_eq!(WordEntry::new("", "tip"), Err(WordError::Empty));
        assert_eq!(WordEntry::new("   ", "tip"), Err(WordError::Empty));
    }

    #[test]
    fn entry_rejects_invalid_characters() {
        assert_eq!(
            WordEntry::new("r2d2", "tip"),
            Err(WordError::InvalidCharacter('2'))
        );
        assert!(WordEntry::new("olá!", "tip").is_err());
        assert!(WordEntry::new("meio-dia", "tip").is_err());
    }

    #[test]
    fn entry_composes_decomposed_input() {
        let entry = WordEntry::new("ge\u{302}nero", "").unwrap();
        assert_eq!(entry.word(), "gênero");
        assert_eq!(entry.word().chars().count(), 6);
    }

    #[test]
    fn entry_display() {
        let entry = WordEntry::new("gênero", "tip").unwrap();
        assert_eq!(format!("{entry}"), "gênero");
    }
}
