//! Property-based tests using proptest.
//!
//! These tests verify the invariants of text cleaning, vectorization, and
//! feature assembly across arbitrary inputs.

use std::collections::HashMap;

use proptest::prelude::*;
use sentir::prelude::*;

fn fixture_vectorizer() -> TfidfVectorizer {
    let mut vocabulary = HashMap::new();
    for (col, term) in ["love", "hate", "dress", "quality", "size"].iter().enumerate() {
        vocabulary.insert((*term).to_string(), col);
    }
    TfidfVectorizer::from_params(vocabulary, vec![1.0, 1.3, 0.7, 1.1, 0.9])
        .expect("fixture params are consistent")
}

// Strategy for sparse text vectors of a given width.
fn sparse_vector_strategy(width: usize) -> impl Strategy<Value = SparseVector> {
    proptest::collection::vec(-10.0f32..10.0, width)
        .prop_map(|dense| SparseVector::from_dense(&dense))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // clean_text properties

    #[test]
    fn clean_text_is_idempotent(text in ".*") {
        let once = clean_text(&text);
        prop_assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn clean_text_never_increases_length(text in ".*") {
        prop_assert!(clean_text(&text).chars().count() <= text.chars().count());
    }

    #[test]
    fn clean_text_output_alphabet_is_word_chars_and_whitespace(text in ".*") {
        for c in clean_text(&text).chars() {
            prop_assert!(c.is_alphanumeric() || c == '_' || c.is_whitespace());
        }
    }

    #[test]
    fn clean_text_lowercases_ascii(text in "[A-Za-z ]{0,40}") {
        prop_assert_eq!(clean_text(&text), text.to_lowercase());
    }

    // Vectorizer properties

    #[test]
    fn transform_width_is_vocabulary_size_for_any_text(text in ".*") {
        let vectorizer = fixture_vectorizer();
        let cleaned = clean_text(&text);
        let v = vectorizer.transform_one(&cleaned);
        prop_assert_eq!(v.width(), vectorizer.vocabulary_size());
    }

    #[test]
    fn transform_is_deterministic(text in ".*") {
        let vectorizer = fixture_vectorizer();
        let cleaned = clean_text(&text);
        prop_assert_eq!(
            vectorizer.transform_one(&cleaned),
            vectorizer.transform_one(&cleaned)
        );
    }

    // Scaler properties

    #[test]
    fn scaler_accepts_exactly_its_fitted_width(
        row in proptest::collection::vec(-1000.0f32..1000.0, 0..8)
    ) {
        let scaler = StandardScaler::from_params(
            vec![0.0, 10.0, -5.0, 2.5],
            vec![1.0, 2.0, 0.5, 4.0],
        ).expect("fixture scaler");

        let result = scaler.transform_row(&row);
        if row.len() == scaler.n_features() {
            prop_assert!(result.is_ok());
            prop_assert_eq!(result.expect("checked above").len(), 4);
        } else {
            let err = result.expect_err("width mismatch");
            prop_assert!(
                matches!(err, SentirError::DimensionMismatch { .. }),
                "expected DimensionMismatch, got {:?}", err
            );
        }
    }

    #[test]
    fn scaling_is_per_column_affine(
        value in -1000.0f32..1000.0,
        mean in -100.0f32..100.0,
        std in 0.1f32..50.0
    ) {
        let scaler = StandardScaler::from_params(vec![mean], vec![std])
            .expect("one-column scaler");
        let scaled = scaler.transform_row(&[value]).expect("width matches");
        prop_assert!((scaled[0] - (value - mean) / std).abs() < 1e-3);
    }

    // Assembly width algebra

    #[test]
    fn assemble_width_is_exact_or_fails(
        text_width in 1usize..64,
        numeric_width in 0usize..8,
        expected_width in 1usize..80
    ) {
        let text = SparseVector::zeros(text_width);
        let numeric = vec![1.0f32; numeric_width];
        let concatenated = text_width + numeric_width;

        match assemble(&text, &numeric, expected_width) {
            Ok(vector) => {
                prop_assert!(concatenated <= expected_width);
                prop_assert_eq!(vector.width(), expected_width);
            }
            Err(err) => {
                prop_assert!(concatenated > expected_width);
                prop_assert!(
                    matches!(err, SentirError::DimensionMismatch { .. }),
                    "expected DimensionMismatch, got {:?}", err
                );
            }
        }
    }

    #[test]
    fn assemble_preserves_all_input_columns(
        text in sparse_vector_strategy(16),
        numeric in proptest::collection::vec(-5.0f32..5.0, 4),
        pad in 0usize..12
    ) {
        let expected_width = 16 + 4 + pad;
        let assembled = assemble(&text, &numeric, expected_width)
            .expect("never over-width by construction");

        let dense = assembled.to_dense();
        prop_assert_eq!(&dense[..16], &text.to_dense()[..]);
        prop_assert_eq!(&dense[16..20], &numeric[..]);
        prop_assert!(dense[20..].iter().all(|&x| x == 0.0));
    }
}
