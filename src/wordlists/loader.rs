//! Word list loading utilities
//!
//! Custom lists are UTF-8 text with one `word<TAB>tip` entry per line. Blank
//! lines and lines starting with `#` are skipped, a line without a tab is a
//! word with no tip, and invalid words are skipped with a warning.

use crate::core::WordEntry;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while loading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Word list {} has no valid entries", .0.display())]
    Empty(PathBuf),
}

/// Load entries from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, or
/// `WordListError::Empty` if no line holds a valid entry.
///
/// # Examples
/// ```no_run
/// use forca::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/words.tsv").unwrap();
/// println!("Loaded {} words", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<WordEntry>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_word_list(&content);
    if entries.is_empty() {
        return Err(WordListError::Empty(path.to_path_buf()));
    }

    debug!(path = %path.display(), count = entries.len(), "loaded word list");
    Ok(entries)
}

/// Parse word list text into entries, skipping anything invalid
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<WordEntry> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.trim_end();
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                return None;
            }

            let (word, tip) = line.split_once('\t').unwrap_or((line, ""));
            match WordEntry::new(word, tip) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(line = index + 1, word, %err, "skipping invalid word list entry");
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded `(word, tip)` pairs to entries
///
/// # Examples
/// ```
/// use forca::wordlists::loader::entries_from_slice;
/// use forca::wordlists::WORDS;
///
/// let entries = entries_from_slice(WORDS);
/// assert_eq!(entries.len(), WORDS.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[(&str, &str)]) -> Vec<WordEntry> {
    slice
        .iter()
        .filter_map(|&(word, tip)| WordEntry::new(word, tip).ok())
        .collect()
}
