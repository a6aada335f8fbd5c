//! Diacritic folding
//!
//! Guesses are matched against words without regard to accents, so "a" matches
//! "á", "â", "ã" and "à". Folding is canonical decomposition (NFD) followed by
//! dropping every combining mark.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Strip diacritical marks from a string
///
/// Total over all Unicode input; characters without a decomposition pass
/// through unchanged.
///
/// # Examples
/// ```
/// use forca::core::strip_diacritics;
///
/// assert_eq!(strip_diacritics("socioeconômica"), "socioeconomica");
/// assert_eq!(strip_diacritics("ação"), "acao");
/// ```
#[must_use]
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|&c| !is_combining_mark(c)).collect()
}

/// Strip diacritics from a single character
///
/// Returns a string because a decomposed character is not guaranteed to fold
/// back into exactly one base character.
#[must_use]
pub fn strip_char(c: char) -> String {
    let mut buf = [0u8; 4];
    strip_diacritics(c.encode_utf8(&mut buf))
}

/// Accent- and case-insensitive form used for comparisons
#[must_use]
pub fn fold(text: &str) -> String {
    strip_diacritics(text).to_lowercase()
}
