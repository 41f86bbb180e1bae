use super::error::{EstimatorError, Result};
use crate::param_guard::ParamGuard;
use crate::Float;

/// A verified hyperparameter set ready for the fitting of a linear regression model
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionValidParams<F> {
    alpha: F,
    fit_intercept: bool,
}

impl<F: Float> LinearRegressionValidParams<F> {
    pub fn alpha(&self) -> F {
        self.alpha
    }

    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }
}

/// A hyper-parameter set during construction
///
/// Configures and minimizes the following objective function:
/// ```ignore
/// ||y - Xw - b||^2_2 + alpha * ||w||^2_2
/// ```
/// The intercept `b` is never penalized.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionParams<F>(LinearRegressionValidParams<F>);

impl<F: Float> Default for LinearRegressionParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a linear regression model
impl<F: Float> LinearRegressionParams<F> {
    /// Create default linear regression hyper parameters
    pub fn new() -> LinearRegressionParams<F> {
        Self(LinearRegressionValidParams {
            alpha: F::zero(),
            fit_intercept: true,
        })
    }

    /// Set the L2 regularization hyperparameter. A value of `0` yields
    /// ordinary least squares, a positive value yields ridge regression.
    /// Defaults to `0` if not set.
    pub fn alpha(mut self, alpha: F) -> Self {
        self.0.alpha = alpha;
        self
    }

    /// Whether to fit an unpenalized intercept.
    ///
    /// Defaults to `true` if not set.
    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.0.fit_intercept = fit_intercept;
        self
    }
}

impl<F: Float> ParamGuard for LinearRegressionParams<F> {
    type Checked = LinearRegressionValidParams<F>;
    type Error = EstimatorError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.alpha.is_negative() || !self.0.alpha.is_finite() {
            Err(EstimatorError::InvalidRegularization(
                self.0.alpha.to_f32().unwrap_or(f32::NAN),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
