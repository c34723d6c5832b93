//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sentir::prelude::*;
//! ```

pub use crate::artifacts::{default_artifact_dir, ModelContext};
pub use crate::assemble::{
    assemble, build_numeric_row, FeatureAssembler, FeatureSchema, NumericColumn, RawInput,
};
pub use crate::classification::{Classifier, LogisticRegression, Prediction, Sentiment};
pub use crate::error::{Result, SentirError};
pub use crate::preprocessing::StandardScaler;
pub use crate::primitives::SparseVector;
pub use crate::text::{char_length, clean_text, word_count, TfidfVectorizer};
