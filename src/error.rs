use ndarray_stats::errors::MinMaxError;
use thiserror::Error;

use crate::estimators::error::EstimatorError;

/// Simplified `Result` using [`VisualizerError`] as error type
pub type Result<T> = std::result::Result<T, VisualizerError>;

/// Error variants raised while splitting, drawing or rendering
#[derive(Debug, Clone, Error)]
pub enum VisualizerError {
    #[error("input sequence is empty")]
    EmptyInput,
    #[error("length mismatch: expected {expected} values, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("cannot compute extrema: {0}")]
    Extrema(#[from] MinMaxError),
    #[error(transparent)]
    Estimator(#[from] EstimatorError),
    #[error("invalid color {0:?}")]
    InvalidColor(String),
    #[error("invalid test size {0}, expected a value in (0, 1)")]
    InvalidTestSize(f64),
    #[error("split of {n_samples} samples leaves {n_train} training and {n_test} test samples")]
    EmptySplit {
        n_samples: usize,
        n_train: usize,
        n_test: usize,
    },
    #[error("invalid figure size {0}x{1}")]
    InvalidFigureSize(u32, u32),
    #[error("rendering failed: {0}")]
    Render(String),
}
