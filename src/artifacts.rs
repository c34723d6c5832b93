//! Loading and persistence of the frozen model artifacts.
//!
//! Four files travel together: the classifier, the text vectorizer, the
//! numeric scaler, and the feature schema that pins the numeric column
//! order. They are loaded once per process into a [`ModelContext`] and held
//! read-only for the process lifetime; every pipeline operation borrows the
//! context immutably, so concurrent requests can share it without locking.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use crate::assemble::FeatureSchema;
use crate::classification::{Classifier, LogisticRegression};
use crate::error::{Result, SentirError};
use crate::preprocessing::StandardScaler;
use crate::text::TfidfVectorizer;

/// File name of the serialized classifier.
pub const CLASSIFIER_FILE: &str = "classifier.json";
/// File name of the serialized TF-IDF vectorizer.
pub const VECTORIZER_FILE: &str = "tfidf.json";
/// File name of the serialized numeric scaler.
pub const SCALER_FILE: &str = "scaler.json";
/// File name of the feature schema metadata.
pub const SCHEMA_FILE: &str = "schema.json";

/// Default artifact directory: `artifacts/` next to the running executable.
///
/// Resolved relative to the executable's own location so the lookup stays
/// correct regardless of the process working directory.
///
/// # Errors
///
/// Returns an error if the executable path cannot be determined.
pub fn default_artifact_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe
        .parent()
        .ok_or_else(|| SentirError::from("executable path has no parent directory"))?;
    Ok(dir.join("artifacts"))
}

/// The complete frozen artifact set, loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct ModelContext {
    /// Frozen text vectorizer.
    pub vectorizer: TfidfVectorizer,
    /// Frozen numeric scaler.
    pub scaler: StandardScaler,
    /// Frozen binary classifier.
    pub classifier: LogisticRegression,
    /// Feature layout the artifacts were trained with.
    pub schema: FeatureSchema,
}

impl ModelContext {
    /// Loads all four artifact files from a directory.
    ///
    /// Deserialization bypasses the `from_params` constructors, so each
    /// loaded artifact is re-validated here: a file that parses but carries
    /// inconsistent fitted parameters (ragged scaler, out-of-range
    /// vocabulary column) is reported as corrupt at load time instead of
    /// failing mid-request.
    ///
    /// # Errors
    ///
    /// - [`SentirError::ArtifactMissing`] with the resolved absolute path if
    ///   any file is absent — fatal for the session.
    /// - [`SentirError::Io`] if a file exists but cannot be read.
    /// - [`SentirError::ArtifactCorrupt`] with the underlying message if a
    ///   file does not parse or violates its internal invariants.
    /// - [`SentirError::DimensionMismatch`] if the loaded artifacts disagree
    ///   about feature widths (see [`ModelContext::check_consistency`]).
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let vectorizer: TfidfVectorizer = load_artifact(dir, VECTORIZER_FILE)?;
        vectorizer
            .validate()
            .map_err(|e| corrupt_artifact(dir, VECTORIZER_FILE, &e))?;
        let scaler: StandardScaler = load_artifact(dir, SCALER_FILE)?;
        scaler
            .validate()
            .map_err(|e| corrupt_artifact(dir, SCALER_FILE, &e))?;
        let classifier: LogisticRegression = load_artifact(dir, CLASSIFIER_FILE)?;
        classifier
            .validate()
            .map_err(|e| corrupt_artifact(dir, CLASSIFIER_FILE, &e))?;

        let context = Self {
            vectorizer,
            scaler,
            classifier,
            schema: load_artifact(dir, SCHEMA_FILE)?,
        };
        context.check_consistency()?;
        info!(
            dir = %dir.display(),
            vocabulary_size = context.vectorizer.vocabulary_size(),
            numeric_columns = context.schema.numeric_columns.len(),
            expected_width = context.schema.expected_width,
            "loaded model artifacts"
        );
        Ok(context)
    }

    /// Loads from [`default_artifact_dir`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`ModelContext::load`].
    pub fn load_default() -> Result<Self> {
        Self::load(default_artifact_dir()?)
    }

    /// Writes all four artifact files into a directory, creating it if
    /// needed. Used by the training side and by test fixtures.
    ///
    /// # Errors
    ///
    /// Returns [`SentirError::Io`] or [`SentirError::Serialization`] on
    /// failure.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        save_artifact(dir, VECTORIZER_FILE, &self.vectorizer)?;
        save_artifact(dir, SCALER_FILE, &self.scaler)?;
        save_artifact(dir, CLASSIFIER_FILE, &self.classifier)?;
        save_artifact(dir, SCHEMA_FILE, &self.schema)?;
        Ok(())
    }

    /// Verifies that the four artifacts agree on feature widths.
    ///
    /// Catches schema drift at load time instead of per request: the scaler
    /// must have exactly one column per schema entry, the concatenated width
    /// must not exceed the declared expected width (under-width is allowed
    /// and zero-padded at assembly), and the classifier's coefficient count
    /// must equal the declared expected width.
    ///
    /// # Errors
    ///
    /// Returns [`SentirError::DimensionMismatch`] naming the disagreeing
    /// widths.
    pub fn check_consistency(&self) -> Result<()> {
        let numeric = self.schema.numeric_columns.len();
        if self.scaler.n_features() != numeric {
            return Err(SentirError::dimension_mismatch(
                "schema numeric columns",
                numeric,
                self.scaler.n_features(),
            ));
        }

        let concatenated = self.vectorizer.vocabulary_size() + numeric;
        if concatenated > self.schema.expected_width {
            return Err(SentirError::DimensionMismatch {
                expected: format!(
                    "at most expected_width={} concatenated columns",
                    self.schema.expected_width
                ),
                actual: format!("{concatenated}"),
            });
        }

        if self.classifier.expected_width() != self.schema.expected_width {
            return Err(SentirError::dimension_mismatch(
                "schema expected_width",
                self.schema.expected_width,
                self.classifier.expected_width(),
            ));
        }
        Ok(())
    }
}

fn artifact_path(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::path::absolute(&path).unwrap_or(path)
}

fn corrupt_artifact(dir: &Path, name: &str, err: &SentirError) -> SentirError {
    SentirError::ArtifactCorrupt {
        path: artifact_path(dir, name),
        message: err.to_string(),
    }
}

fn load_artifact<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T> {
    let path = artifact_path(dir, name);
    if !path.exists() {
        return Err(SentirError::ArtifactMissing { path });
    }
    let text = fs::read_to_string(&path)?;
    serde_json::from_str(&text).map_err(|e| SentirError::ArtifactCorrupt {
        path,
        message: e.to_string(),
    })
}

fn save_artifact<T: Serialize>(dir: &Path, name: &str, artifact: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(artifact)
        .map_err(|e| SentirError::Serialization(e.to_string()))?;
    fs::write(dir.join(name), json)?;
    Ok(())
}
