use thiserror::Error;

/// Simplified `Result` using [`EstimatorError`] as error type
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Error variants from hyperparameter construction or model estimation
#[derive(Debug, Clone, Error)]
pub enum EstimatorError {
    #[error("invalid alpha {0}")]
    InvalidRegularization(f32),
    #[error("estimator must be fitted before predicting")]
    NotFitted,
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("normal equations are singular")]
    SingularMatrix,
    #[error("dataset is empty")]
    EmptyDataset,
}
