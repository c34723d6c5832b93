//! Text cleaning and review-length features.
//!
//! Cleaning must reproduce the training-time preprocessing exactly: the
//! vectorizer's vocabulary was fitted on lower-cased, punctuation-stripped
//! text, so inference applies the same transform before lookup.
//!
//! Two review-length definitions exist in the wild and are **not**
//! interchangeable: whitespace-token count of the cleaned text
//! ([`word_count`]) versus character count of the original text
//! ([`char_length`]). Both are exposed as named functions; the feature
//! schema shipped with the trained artifacts decides which one a model uses
//! (see [`crate::assemble::NumericColumn`]).

mod vectorize;

pub use vectorize::TfidfVectorizer;

/// Lower-cases text and strips every character that is not a word character
/// or whitespace (the `[^\w\s]` class: letters, digits, underscore, and
/// whitespace survive).
///
/// Idempotent, and never produces a longer string. Empty input is valid
/// here; rejecting blank reviews is the caller's job, before assembly.
///
/// # Examples
///
/// ```
/// use sentir::text::clean_text;
///
/// assert_eq!(
///     clean_text("The dress fits perfectly and looks amazing!"),
///     "the dress fits perfectly and looks amazing"
/// );
/// assert_eq!(clean_text("5*, would buy again :-)"), "5 would buy again ");
/// ```
#[must_use]
pub fn clean_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|&c| c.is_alphanumeric() || c == '_' || c.is_whitespace())
        .collect()
}

/// Count of whitespace-delimited tokens in cleaned text.
///
/// # Examples
///
/// ```
/// use sentir::text::{clean_text, word_count};
///
/// let cleaned = clean_text("The dress fits perfectly and looks amazing!");
/// assert_eq!(word_count(&cleaned), 7);
/// ```
#[must_use]
pub fn word_count(cleaned: &str) -> usize {
    cleaned.split_whitespace().count()
}

/// Character count of the original, uncleaned review text.
///
/// # Examples
///
/// ```
/// use sentir::text::char_length;
///
/// assert_eq!(char_length("Nice!"), 5);
/// ```
#[must_use]
pub fn char_length(raw: &str) -> usize {
    raw.chars().count()
}
