//! Binary sentiment classification over assembled feature vectors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentirError};
use crate::primitives::SparseVector;

/// Binary sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    /// Satisfied customer (training label 1).
    Positive,
    /// Disappointed customer (training label 0).
    Negative,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

/// Outcome of one classification call.
///
/// `confidence` is the maximum class probability when the classifier exposes
/// probability estimates, and `None` otherwise — never fabricated.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Predicted sentiment.
    pub label: Sentiment,
    /// Maximum class probability in `[0, 1]`, when available.
    pub confidence: Option<f32>,
}

/// A frozen binary decision function over a fixed-width feature vector.
///
/// The assembler only depends on this trait, so any frozen model with a
/// known input width can sit at the end of the pipeline.
pub trait Classifier {
    /// The exact feature-vector width this classifier was trained on.
    fn expected_width(&self) -> usize;

    /// Classifies one feature vector.
    ///
    /// # Errors
    ///
    /// Returns [`SentirError::DimensionMismatch`] if the vector width is not
    /// [`Classifier::expected_width`], or [`SentirError::PredictionFailure`]
    /// for any other failure of the decision call.
    fn predict_one(&self, features: &SparseVector) -> Result<Prediction>;
}

/// Frozen logistic-regression classifier.
///
/// Holds fitted coefficients and intercept; the decision value is
/// `σ(w · x + b)` with `σ` the sigmoid. Exposes class probabilities, so its
/// predictions always carry a confidence.
///
/// # Examples
///
/// ```
/// use sentir::classification::{Classifier, LogisticRegression, Sentiment};
/// use sentir::primitives::SparseVector;
///
/// let model = LogisticRegression::from_params(vec![2.0, -2.0], 0.0)
///     .expect("non-empty coefficients");
/// let x = SparseVector::from_dense(&[1.0, 0.0]);
/// let prediction = model.predict_one(&x).expect("width matches");
/// assert_eq!(prediction.label, Sentiment::Positive);
/// assert!(prediction.confidence.expect("logistic exposes probabilities") > 0.5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// Model coefficients (weights), one per feature column.
    coefficients: Vec<f32>,
    /// Intercept (bias) term.
    intercept: f32,
}

impl LogisticRegression {
    /// Creates a frozen model from fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficient vector is empty.
    pub fn from_params(coefficients: Vec<f32>, intercept: f32) -> Result<Self> {
        let model = Self {
            coefficients,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    /// Re-checks the fitted-parameter invariants.
    ///
    /// `from_params` enforces these at construction, but deserialization
    /// bypasses the constructor; artifact loading calls this afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficient vector is empty.
    pub fn validate(&self) -> Result<()> {
        if self.coefficients.is_empty() {
            return Err(SentirError::Other(
                "classifier must have at least one coefficient".to_string(),
            ));
        }
        Ok(())
    }

    /// Sigmoid activation: σ(z) = 1 / (1 + e^(-z))
    fn sigmoid(z: f32) -> f32 {
        1.0 / (1.0 + (-z).exp())
    }

    /// Raw decision value `w · x + b` for one feature vector.
    ///
    /// # Errors
    ///
    /// Returns [`SentirError::DimensionMismatch`] if the vector width does
    /// not match the coefficient count.
    pub fn decision_value(&self, features: &SparseVector) -> Result<f32> {
        if features.width() != self.coefficients.len() {
            return Err(SentirError::dimension_mismatch(
                "classifier feature columns",
                self.coefficients.len(),
                features.width(),
            ));
        }
        let dot = features
            .dot_dense(&self.coefficients)
            .map_err(|e| SentirError::PredictionFailure {
                message: e.to_string(),
            })?;
        Ok(dot + self.intercept)
    }

    /// Probability of the positive class for one feature vector.
    ///
    /// # Errors
    ///
    /// Same conditions as [`LogisticRegression::decision_value`].
    pub fn predict_proba_one(&self, features: &SparseVector) -> Result<f32> {
        Ok(Self::sigmoid(self.decision_value(features)?))
    }
}

impl Classifier for LogisticRegression {
    fn expected_width(&self) -> usize {
        self.coefficients.len()
    }

    fn predict_one(&self, features: &SparseVector) -> Result<Prediction> {
        let proba = self.predict_proba_one(features)?;
        if proba.is_nan() {
            return Err(SentirError::PredictionFailure {
                message: "decision function produced NaN probability".to_string(),
            });
        }
        let label = if proba >= 0.5 {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        };
        Ok(Prediction {
            label,
            confidence: Some(proba.max(1.0 - proba)),
        })
    }
}
