//! Frozen TF-IDF vectorization for single review texts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentirError};
use crate::primitives::SparseVector;

/// A frozen TF-IDF vectorizer over a fixed fitted vocabulary.
///
/// The vocabulary and per-term inverse document frequencies were fixed at
/// training time and never change here. `transform_one` always produces a
/// vector exactly `vocabulary_size()` wide; terms outside the vocabulary
/// silently contribute nothing, they are never an error.
///
/// **Weighting:** `tfidf(t, d) = tf(t, d) × idf(t)`, with `tf` the raw term
/// count in the document, followed by l2 normalization of the row when
/// enabled (the default, matching the common training-side convention).
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use sentir::text::TfidfVectorizer;
///
/// let mut vocabulary = HashMap::new();
/// vocabulary.insert("great".to_string(), 0);
/// vocabulary.insert("terrible".to_string(), 1);
///
/// let vectorizer = TfidfVectorizer::from_params(vocabulary, vec![1.0, 1.0])
///     .expect("vocabulary matches idf width");
/// let v = vectorizer.transform_one("great great unseen");
/// assert_eq!(v.width(), 2);
/// assert!(v.get(0) > 0.0);
/// assert_eq!(v.get(1), 0.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term to column index, fitted at training time.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column.
    idf: Vec<f32>,
    /// l2-normalize each transformed row.
    l2_normalize: bool,
}

impl TfidfVectorizer {
    /// Creates a frozen vectorizer from fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the vocabulary size disagrees with the idf width,
    /// or if a vocabulary entry maps outside the idf vector (duplicate or
    /// out-of-range column).
    pub fn from_params(vocabulary: HashMap<String, usize>, idf: Vec<f32>) -> Result<Self> {
        let vectorizer = Self {
            vocabulary,
            idf,
            l2_normalize: true,
        };
        vectorizer.validate()?;
        Ok(vectorizer)
    }

    /// Re-checks the fitted-parameter invariants.
    ///
    /// `from_params` enforces these at construction, but deserialization
    /// bypasses the constructor; artifact loading calls this so a vocabulary
    /// that indexes outside the idf vector fails at load time, never
    /// mid-request.
    ///
    /// # Errors
    ///
    /// Returns an error if the vocabulary size disagrees with the idf width,
    /// or if a vocabulary entry maps outside the idf vector (duplicate or
    /// out-of-range column).
    pub fn validate(&self) -> Result<()> {
        if self.vocabulary.len() != self.idf.len() {
            return Err(SentirError::dimension_mismatch(
                "vocabulary terms",
                self.idf.len(),
                self.vocabulary.len(),
            ));
        }
        let mut seen = vec![false; self.idf.len()];
        for (term, &col) in &self.vocabulary {
            if col >= self.idf.len() {
                return Err(SentirError::Other(format!(
                    "vocabulary term {term:?} maps to column {col}, but idf width is {}",
                    self.idf.len()
                )));
            }
            if seen[col] {
                return Err(SentirError::Other(format!(
                    "vocabulary column {col} is assigned to more than one term"
                )));
            }
            seen[col] = true;
        }
        Ok(())
    }

    /// Sets whether transformed rows are l2-normalized.
    #[must_use]
    pub fn with_l2_normalize(mut self, l2_normalize: bool) -> Self {
        self.l2_normalize = l2_normalize;
        self
    }

    /// Returns the fitted vocabulary size.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Returns the fitted vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Transforms one cleaned document into its TF-IDF row.
    ///
    /// The output width is always the fitted vocabulary size, independent of
    /// the input; unknown words contribute zero. Expects text already passed
    /// through [`crate::text::clean_text`].
    #[must_use]
    pub fn transform_one(&self, cleaned_text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for token in cleaned_text.split_whitespace() {
            if let Some(&col) = self.vocabulary.get(token) {
                *counts.entry(col).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f32)> = counts
            .into_iter()
            .map(|(col, tf)| (col, tf * self.idf[col]))
            .collect();
        entries.sort_unstable_by_key(|&(col, _)| col);

        if self.l2_normalize {
            let norm = entries
                .iter()
                .map(|&(_, v)| v * v)
                .sum::<f32>()
                .sqrt();
            if norm > 0.0 {
                for entry in &mut entries {
                    entry.1 /= norm;
                }
            }
        }

        SparseVector::from_sorted(self.idf.len(), entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> TfidfVectorizer {
        let mut vocabulary = HashMap::new();
        vocabulary.insert("dress".to_string(), 0);
        vocabulary.insert("fits".to_string(), 1);
        vocabulary.insert("amazing".to_string(), 2);
        vocabulary.insert("terrible".to_string(), 3);
        TfidfVectorizer::from_params(vocabulary, vec![1.0, 2.0, 1.5, 3.0])
            .expect("fixture params are consistent")
    }

    #[test]
    fn test_output_width_equals_vocabulary_size() {
        let vectorizer = fixture();
        for text in ["", "dress", "unseen words only", "dress fits amazing terrible"] {
            assert_eq!(vectorizer.transform_one(text).width(), 4);
        }
    }

    #[test]
    fn test_unseen_words_are_silently_ignored() {
        let vectorizer = fixture();
        let v = vectorizer.transform_one("completely unknown vocabulary here");
        assert_eq!(v.width(), 4);
        assert_eq!(v.nnz(), 0);
    }

    #[test]
    fn test_term_counts_weighted_by_idf() {
        let vectorizer = fixture().with_l2_normalize(false);
        let v = vectorizer.transform_one("dress dress fits");
        assert!((v.get(0) - 2.0).abs() < 1e-6); // tf 2 × idf 1.0
        assert!((v.get(1) - 2.0).abs() < 1e-6); // tf 1 × idf 2.0
        assert_eq!(v.get(2), 0.0);
    }

    #[test]
    fn test_l2_normalized_row_has_unit_norm() {
        let vectorizer = fixture();
        let v = vectorizer.transform_one("dress fits amazing");
        let norm: f32 = v.iter().map(|(_, x)| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_document_is_all_zero_not_error() {
        let vectorizer = fixture();
        let v = vectorizer.transform_one("");
        assert_eq!(v.width(), 4);
        assert_eq!(v.nnz(), 0);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let vectorizer = fixture();
        let a = vectorizer.transform_one("amazing dress fits amazing");
        let b = vectorizer.transform_one("amazing dress fits amazing");
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_params_rejects_width_mismatch() {
        let mut vocabulary = HashMap::new();
        vocabulary.insert("a".to_string(), 0);
        let result = TfidfVectorizer::from_params(vocabulary, vec![1.0, 1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_params_rejects_out_of_range_column() {
        let mut vocabulary = HashMap::new();
        vocabulary.insert("a".to_string(), 0);
        vocabulary.insert("b".to_string(), 5);
        let result = TfidfVectorizer::from_params(vocabulary, vec![1.0, 1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_params_rejects_duplicate_column() {
        let mut vocabulary = HashMap::new();
        vocabulary.insert("a".to_string(), 0);
        vocabulary.insert("b".to_string(), 0);
        let result = TfidfVectorizer::from_params(vocabulary, vec![1.0, 1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_catches_deserialized_out_of_range_column() {
        // Deserialization bypasses from_params; validate must catch a
        // vocabulary that indexes outside the idf vector before transform
        // ever looks the column up.
        let vectorizer: TfidfVectorizer = serde_json::from_str(
            r#"{"vocabulary":{"good":0,"bad":5},"idf":[1.0,1.0],"l2_normalize":true}"#,
        )
        .expect("parses");
        let err = vectorizer.validate().expect_err("column 5 outside idf width 2");
        assert!(err.to_string().contains("column 5"));
    }

    #[test]
    fn test_validate_accepts_consistent_params() {
        assert!(fixture().validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let vectorizer = fixture();
        let json = serde_json::to_string(&vectorizer).expect("serialize");
        let back: TfidfVectorizer = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.vocabulary_size(), 4);
        assert_eq!(
            back.transform_one("dress fits"),
            vectorizer.transform_one("dress fits")
        );
    }
}
