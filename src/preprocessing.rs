//! Frozen standardization of the numeric feature row.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentirError};

/// A frozen per-column standardizer: `z = (x - mean) / std`.
///
/// The mean and standard deviation of each column were fixed when the scaler
/// was fitted during training; inference only applies them. The column order
/// of the incoming row must exactly match the order used at fit time — a row
/// of the wrong width is rejected with a dimension mismatch rather than
/// silently reshaped, because that mismatch is this pipeline's dominant
/// real-world failure mode.
///
/// # Examples
///
/// ```
/// use sentir::preprocessing::StandardScaler;
///
/// let scaler = StandardScaler::from_params(vec![30.0, 3.0], vec![10.0, 1.0])
///     .expect("equal-width params");
/// let scaled = scaler.transform_row(&[25.0, 5.0]).expect("width matches");
/// assert!((scaled[0] + 0.5).abs() < 1e-6);
/// assert!((scaled[1] - 2.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Mean of each feature, fixed at fit time.
    mean: Vec<f32>,
    /// Standard deviation of each feature, fixed at fit time.
    std: Vec<f32>,
}

impl StandardScaler {
    /// Creates a frozen scaler from fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the mean and std vectors differ in length or are
    /// empty.
    pub fn from_params(mean: Vec<f32>, std: Vec<f32>) -> Result<Self> {
        let scaler = Self { mean, std };
        scaler.validate()?;
        Ok(scaler)
    }

    /// Re-checks the fitted-parameter invariants.
    ///
    /// `from_params` enforces these at construction, but deserialization
    /// bypasses the constructor; artifact loading calls this so a ragged
    /// parameter set fails at load time, never mid-request.
    ///
    /// # Errors
    ///
    /// Returns an error if the mean and std vectors differ in length or are
    /// empty.
    pub fn validate(&self) -> Result<()> {
        if self.mean.len() != self.std.len() {
            return Err(SentirError::dimension_mismatch(
                "std columns",
                self.mean.len(),
                self.std.len(),
            ));
        }
        if self.mean.is_empty() {
            return Err(SentirError::Other(
                "scaler must have at least one column".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the fitted column count.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Returns the fitted means.
    #[must_use]
    pub fn mean(&self) -> &[f32] {
        &self.mean
    }

    /// Returns the fitted standard deviations.
    #[must_use]
    pub fn std(&self) -> &[f32] {
        &self.std
    }

    /// Standardizes one numeric row using the fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SentirError::DimensionMismatch`] carrying both widths when
    /// the row width differs from the fitted width.
    pub fn transform_row(&self, row: &[f32]) -> Result<Vec<f32>> {
        if row.len() != self.n_features() {
            return Err(SentirError::dimension_mismatch(
                "scaler columns",
                self.n_features(),
                row.len(),
            ));
        }

        Ok(row
            .iter()
            .enumerate()
            .map(|(j, &value)| {
                let centered = value - self.mean[j];
                // Constant columns keep their centered value.
                if self.std[j] > 1e-10 {
                    centered / self.std[j]
                } else {
                    centered
                }
            })
            .collect())
    }
}
