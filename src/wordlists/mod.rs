//! Word lists for the guessing game
//!
//! Provides the embedded default list plus loading of custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::WordListError;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid_entries() {
        for &(word, tip) in WORDS {
            let entry = WordEntry::new(word, tip);
            assert!(entry.is_ok(), "Word '{word}' is not a valid entry");
            assert!(!tip.is_empty(), "Word '{word}' has no tip");
        }
    }

    #[test]
    fn embedded_list_order() {
        assert_eq!(WORDS_COUNT, 7, "Expected 7 embedded words");
        assert_eq!(WORDS[0].0, "diversidade");
        assert_eq!(WORDS[3].0, "gênero");
        assert_eq!(WORDS[6].0, "habilidades");
    }
}
