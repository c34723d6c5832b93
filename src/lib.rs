//! Sentir: sentiment inference for product reviews over frozen artifacts.
//!
//! Sentir turns one review submission (free text plus customer age, star
//! rating, and an optional helpful-vote count) into the exact-width feature
//! vector a pre-trained binary classifier expects, and returns a
//! positive/negative prediction with an optional confidence. The vectorizer,
//! scaler, classifier, and feature schema are trained elsewhere, shipped as
//! artifact files, loaded once per process, and treated as read-only from
//! then on.
//!
//! # Quick Start
//!
//! ```
//! use sentir::prelude::*;
//! use std::collections::HashMap;
//!
//! // Frozen parameters normally come from ModelContext::load().
//! let mut vocabulary = HashMap::new();
//! vocabulary.insert("amazing".to_string(), 0);
//! vocabulary.insert("terrible".to_string(), 1);
//! let context = ModelContext {
//!     vectorizer: TfidfVectorizer::from_params(vocabulary, vec![1.0, 1.0]).unwrap(),
//!     scaler: StandardScaler::from_params(vec![30.0, 3.0], vec![10.0, 1.0]).unwrap(),
//!     classifier: LogisticRegression::from_params(vec![2.0, -2.0, 0.0, 1.5], 0.0).unwrap(),
//!     schema: FeatureSchema {
//!         numeric_columns: vec![NumericColumn::Age, NumericColumn::Rating],
//!         expected_width: 4,
//!     },
//! };
//!
//! let input = RawInput::new("Amazing dress, fits perfectly!", 25, 5, 0);
//! input.validate().unwrap();
//!
//! let prediction = FeatureAssembler::new(&context).predict(&input).unwrap();
//! assert_eq!(prediction.label, Sentiment::Positive);
//! assert!(prediction.confidence.unwrap() > 0.5);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Sparse feature-vector type
//! - [`text`]: Text cleaning, length features, and TF-IDF vectorization
//! - [`preprocessing`]: Frozen numeric standardization
//! - [`classification`]: Binary classifier trait and logistic regression
//! - [`assemble`]: Feature assembly pipeline (the core contract)
//! - [`artifacts`]: Artifact loading and the read-only model context
//! - [`error`]: Error taxonomy with fatal/recoverable split

pub mod artifacts;
pub mod assemble;
pub mod classification;
pub mod error;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod text;

pub use artifacts::ModelContext;
pub use assemble::{FeatureAssembler, FeatureSchema, NumericColumn, RawInput};
pub use classification::{Classifier, Prediction, Sentiment};
pub use error::{Result, SentirError};
pub use primitives::SparseVector;
