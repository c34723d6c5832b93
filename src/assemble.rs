//! Feature assembly: from one raw review submission to the exact-width
//! vector the classifier expects.
//!
//! The numeric column order is a versioned contract pinned by the trained
//! artifacts' [`FeatureSchema`] — it is never guessed here. Training-time
//! demos of this pipeline have shipped at least three incompatible numeric
//! schemas (2 columns, 4 columns with word count, 4 columns with character
//! length); a wrong order produces a valid-looking but semantically wrong
//! vector, so the schema file is the single source of truth.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::artifacts::ModelContext;
use crate::classification::{Classifier, Prediction};
use crate::error::{Result, SentirError};
use crate::primitives::SparseVector;
use crate::text::{char_length, clean_text, word_count};

/// One validated review submission. Immutable for the life of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    /// Free-form review text.
    pub review_text: String,
    /// Customer age in years.
    pub age: u32,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Helpful-vote count, zero when not collected by the form.
    pub helpful_votes: u32,
}

impl RawInput {
    /// Convenience constructor.
    #[must_use]
    pub fn new(review_text: &str, age: u32, rating: u8, helpful_votes: u32) -> Self {
        Self {
            review_text: review_text.to_string(),
            age,
            rating,
            helpful_votes,
        }
    }

    /// Validates form-level constraints before any assembly happens.
    ///
    /// Blank review text must be rejected here, at the request boundary,
    /// rather than fed to the vectorizer as an all-zero document.
    ///
    /// # Errors
    ///
    /// [`SentirError::EmptyInput`] for empty or whitespace-only text,
    /// [`SentirError::InvalidField`] for out-of-range age or rating.
    pub fn validate(&self) -> Result<()> {
        if self.review_text.trim().is_empty() {
            return Err(SentirError::empty_input("review_text"));
        }
        if !(1..=5).contains(&self.rating) {
            return Err(SentirError::InvalidField {
                field: "rating".to_string(),
                value: self.rating.to_string(),
                constraint: "1..=5".to_string(),
            });
        }
        if !(18..=99).contains(&self.age) {
            return Err(SentirError::InvalidField {
                field: "age".to_string(),
                value: self.age.to_string(),
                constraint: "18..=99".to_string(),
            });
        }
        Ok(())
    }
}

/// One numeric feature column, as named by the training-side schema.
///
/// `word_count` and `char_length` are the two review-length definitions that
/// coexist across trained artifact generations; they are distinct columns,
/// never interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericColumn {
    /// Customer age in years.
    Age,
    /// Star rating, 1 to 5.
    Rating,
    /// Helpful-vote count.
    HelpfulVotes,
    /// Whitespace-token count of the cleaned review text.
    WordCount,
    /// Character count of the original, uncleaned review text.
    CharLength,
}

/// The feature layout a trained artifact set was fitted on.
///
/// `numeric_columns` gives the exact ordered numeric schema the scaler was
/// fitted with; `expected_width` is the classifier's declared input width.
/// Shipped alongside the model as `schema.json` and loaded, never assumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    /// Ordered numeric columns, matching the scaler's fit order.
    pub numeric_columns: Vec<NumericColumn>,
    /// Exact feature-vector width the classifier expects.
    pub expected_width: usize,
}

/// Builds the raw numeric row in the exact order the schema declares.
///
/// `cleaned` must be the output of [`clean_text`] on `input.review_text`;
/// the word-count column is derived from it, while the character-length
/// column deliberately measures the original text.
#[must_use]
pub fn build_numeric_row(
    input: &RawInput,
    cleaned: &str,
    columns: &[NumericColumn],
) -> Vec<f32> {
    columns
        .iter()
        .map(|column| match column {
            NumericColumn::Age => input.age as f32,
            NumericColumn::Rating => f32::from(input.rating),
            NumericColumn::HelpfulVotes => input.helpful_votes as f32,
            NumericColumn::WordCount => word_count(cleaned) as f32,
            NumericColumn::CharLength => char_length(&input.review_text) as f32,
        })
        .collect()
}

/// Concatenates the text vector with the scaled numeric vector and fits the
/// result to the classifier's expected width.
///
/// Under-width results are right-padded with zero columns and logged: the
/// padding exists to tolerate training-time one-hot columns the form no
/// longer collects, and it can just as easily mask a genuine schema
/// mismatch, so it is never silent. Over-width results are a configuration
/// error and fail; columns are never truncated.
///
/// # Errors
///
/// [`SentirError::DimensionMismatch`] when the concatenated width exceeds
/// `expected_width`.
pub fn assemble(
    text_vector: &SparseVector,
    numeric_vector: &[f32],
    expected_width: usize,
) -> Result<SparseVector> {
    let combined = text_vector.hstack_dense(numeric_vector);
    match combined.width().cmp(&expected_width) {
        Ordering::Equal => Ok(combined),
        Ordering::Less => {
            warn!(
                concatenated_width = combined.width(),
                expected_width,
                pad_columns = expected_width - combined.width(),
                "zero-padding feature vector to the classifier's expected width; \
                 verify the training-side schema if this is unexpected"
            );
            // pad_to cannot fail here (target > current width), but if it
            // ever did the error stays in the dimension taxonomy.
            combined.pad_to(expected_width).map_err(|_| {
                SentirError::dimension_mismatch(
                    "pad target width",
                    expected_width,
                    combined.width(),
                )
            })
        }
        Ordering::Greater => Err(SentirError::DimensionMismatch {
            expected: format!("at most {expected_width} feature columns"),
            actual: format!("{}", combined.width()),
        }),
    }
}

/// Stateless pipeline from one [`RawInput`] to one [`Prediction`], over a
/// read-only [`ModelContext`].
///
/// Every operation is a pure function of its arguments and the frozen
/// context, so concurrent requests sharing one context cannot interfere.
///
/// # Examples
///
/// ```
/// use sentir::prelude::*;
/// use std::collections::HashMap;
///
/// let mut vocabulary = HashMap::new();
/// vocabulary.insert("amazing".to_string(), 0);
/// vocabulary.insert("terrible".to_string(), 1);
/// let context = ModelContext {
///     vectorizer: TfidfVectorizer::from_params(vocabulary, vec![1.0, 1.0]).unwrap(),
///     scaler: StandardScaler::from_params(vec![30.0, 3.0], vec![10.0, 1.0]).unwrap(),
///     classifier: LogisticRegression::from_params(vec![2.0, -2.0, 0.0, 1.5], 0.0).unwrap(),
///     schema: FeatureSchema {
///         numeric_columns: vec![NumericColumn::Age, NumericColumn::Rating],
///         expected_width: 4,
///     },
/// };
///
/// let input = RawInput::new("Amazing dress!", 25, 5, 0);
/// input.validate().unwrap();
/// let prediction = FeatureAssembler::new(&context).predict(&input).unwrap();
/// assert_eq!(prediction.label, Sentiment::Positive);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FeatureAssembler<'a> {
    context: &'a ModelContext,
}

impl<'a> FeatureAssembler<'a> {
    /// Borrows a loaded, read-only model context.
    #[must_use]
    pub fn new(context: &'a ModelContext) -> Self {
        Self { context }
    }

    /// Assembles the exact-width feature vector for one submission:
    /// clean → vectorize → numeric row → scale → concatenate/pad.
    ///
    /// # Errors
    ///
    /// [`SentirError::EmptyInput`] for blank text (re-checked here so the
    /// assembler is safe even when the caller skipped validation), and any
    /// scaling or width error from the downstream steps.
    pub fn features(&self, input: &RawInput) -> Result<SparseVector> {
        if input.review_text.trim().is_empty() {
            return Err(SentirError::empty_input("review_text"));
        }

        let cleaned = clean_text(&input.review_text);
        let text_vector = self.context.vectorizer.transform_one(&cleaned);
        let numeric_row =
            build_numeric_row(input, &cleaned, &self.context.schema.numeric_columns);
        let scaled = self.context.scaler.transform_row(&numeric_row)?;
        assemble(&text_vector, &scaled, self.context.schema.expected_width)
    }

    /// Runs the full pipeline and classifies the assembled vector.
    ///
    /// # Errors
    ///
    /// Any error from [`FeatureAssembler::features`], plus
    /// [`SentirError::DimensionMismatch`] or
    /// [`SentirError::PredictionFailure`] from the classifier.
    pub fn predict(&self, input: &RawInput) -> Result<Prediction> {
        let features = self.features(input)?;
        self.context.classifier.predict_one(&features)
    }
}
