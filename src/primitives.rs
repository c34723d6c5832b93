//! Sparse feature-vector primitive.
//!
//! A single classification request produces one wide, mostly-zero row:
//! a few thousand TF-IDF columns with a handful of non-zeros, followed by a
//! short dense block of scaled numeric columns. [`SparseVector`] stores only
//! the non-zero entries while tracking the full logical width, so width
//! checks stay exact without materializing thousands of zeros.

use serde::{Deserialize, Serialize};

/// A fixed-width sparse row of f32 values.
///
/// Indices are strictly increasing and every index is below the logical
/// width. The width is part of the value: two vectors with identical
/// non-zeros but different widths are different vectors.
///
/// # Examples
///
/// ```
/// use sentir::primitives::SparseVector;
///
/// let v = SparseVector::from_pairs(5, vec![1, 3], vec![0.5, 2.0]).expect("valid indices");
/// assert_eq!(v.width(), 5);
/// assert_eq!(v.nnz(), 2);
/// assert_eq!(v.get(3), 2.0);
/// assert_eq!(v.get(0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    width: usize,
    indices: Vec<usize>,
    values: Vec<f32>,
}

impl SparseVector {
    /// Creates a sparse vector from parallel index/value lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the lists differ in length, an index is out of
    /// bounds, or indices are not strictly increasing.
    pub fn from_pairs(
        width: usize,
        indices: Vec<usize>,
        values: Vec<f32>,
    ) -> Result<Self, &'static str> {
        if indices.len() != values.len() {
            return Err("Index and value lists must have equal length");
        }
        if indices.last().is_some_and(|&last| last >= width) {
            return Err("Index out of bounds for declared width");
        }
        if indices.windows(2).any(|w| w[0] >= w[1]) {
            return Err("Indices must be strictly increasing");
        }
        Ok(Self {
            width,
            indices,
            values,
        })
    }

    /// Crate-internal constructor for entries already known to be sorted,
    /// unique, and in bounds.
    pub(crate) fn from_sorted(width: usize, entries: Vec<(usize, f32)>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
        debug_assert!(entries.last().map_or(true, |&(i, _)| i < width));
        let (indices, values) = entries.into_iter().unzip();
        Self {
            width,
            indices,
            values,
        }
    }

    /// Creates a sparse vector from a dense slice, keeping non-zero entries.
    #[must_use]
    pub fn from_dense(dense: &[f32]) -> Self {
        let (indices, values) = dense
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0.0)
            .map(|(i, &v)| (i, v))
            .unzip();
        Self {
            width: dense.len(),
            indices,
            values,
        }
    }

    /// Creates an all-zero vector of the given width.
    #[must_use]
    pub fn zeros(width: usize) -> Self {
        Self {
            width,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Returns the logical width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of stored (non-zero) entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Gets the value at a column.
    ///
    /// # Panics
    ///
    /// Panics if the column is out of bounds.
    #[must_use]
    pub fn get(&self, col: usize) -> f32 {
        assert!(col < self.width, "column {col} out of bounds for width {}", self.width);
        match self.indices.binary_search(&col) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    /// Iterates over the stored (column, value) entries in column order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Dot product against a dense weight slice of the same width.
    ///
    /// # Errors
    ///
    /// Returns an error if the widths differ.
    pub fn dot_dense(&self, weights: &[f32]) -> Result<f32, &'static str> {
        if weights.len() != self.width {
            return Err("Weight slice width must equal vector width");
        }
        Ok(self
            .iter()
            .map(|(col, value)| value * weights[col])
            .sum())
    }

    /// Horizontal concatenation with a dense block appended on the right.
    ///
    /// The result's width is `self.width() + dense.len()`; zero entries in
    /// the dense block are not stored.
    #[must_use]
    pub fn hstack_dense(&self, dense: &[f32]) -> Self {
        let mut indices = self.indices.clone();
        let mut values = self.values.clone();
        for (offset, &value) in dense.iter().enumerate() {
            if value != 0.0 {
                indices.push(self.width + offset);
                values.push(value);
            }
        }
        Self {
            width: self.width + dense.len(),
            indices,
            values,
        }
    }

    /// Right-pads with zero columns up to a target width.
    ///
    /// # Errors
    ///
    /// Returns an error if the target width is smaller than the current
    /// width; padding never drops columns.
    pub fn pad_to(&self, target_width: usize) -> Result<Self, &'static str> {
        if target_width < self.width {
            return Err("Target width must not be smaller than current width");
        }
        Ok(Self {
            width: target_width,
            indices: self.indices.clone(),
            values: self.values.clone(),
        })
    }

    /// Materializes the full dense row.
    #[must_use]
    pub fn to_dense(&self) -> Vec<f32> {
        let mut dense = vec![0.0; self.width];
        for (col, value) in self.iter() {
            dense[col] = value;
        }
        dense
    }
}
