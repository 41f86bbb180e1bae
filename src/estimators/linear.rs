use ndarray::{Array1, Array2, ArrayBase, ArrayView1, ArrayView2, Axis, Data, Ix1, Ix2, ViewRepr};

use super::error::{EstimatorError, Result};
use super::hyperparams::{LinearRegressionParams, LinearRegressionValidParams};
use super::traits::{Fit, Regressor};
use crate::datasets::DatasetBase;
use crate::helpers::helpers::solve_lin_sys;
use crate::param_guard::ParamGuard;
use crate::Float;

/// A fitted linear model `y = Xw + b`.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedLinearRegression<F> {
    coefficients: Array1<F>,
    intercept: F,
}

impl<F: Float> FittedLinearRegression<F> {
    /// This method is a getter for the coefficients vector.
    pub fn coefficients(&self) -> ArrayBase<ViewRepr<&F>, Ix1> {
        self.coefficients.view()
    }

    pub fn intercept(&self) -> F {
        self.intercept
    }

    pub fn predict(&self, X: ArrayView2<F>) -> Result<Array1<F>> {
        if X.ncols() != self.coefficients.len() {
            return Err(EstimatorError::DimensionMismatch {
                expected: self.coefficients.len(),
                found: X.ncols(),
            });
        }
        Ok(X.dot(&self.coefficients) + self.intercept)
    }
}

/// This implements the closed-form least-squares solution for dense design
/// matrices. The normal equations are solved on centered data when an
/// intercept is fitted, which leaves the intercept unpenalized.
impl<F: Float, S: Data<Elem = F>, T: Data<Elem = F>>
    Fit<ArrayBase<S, Ix2>, ArrayBase<T, Ix1>, EstimatorError> for LinearRegressionValidParams<F>
{
    type Object = FittedLinearRegression<F>;

    fn fit(&self, dataset: &DatasetBase<ArrayBase<S, Ix2>, ArrayBase<T, Ix1>>) -> Result<Self::Object> {
        let X = dataset.design_matrix().view();
        let y = dataset.targets().view();
        least_squares(X, y, self.alpha(), self.fit_intercept())
    }
}

fn least_squares<F: Float>(
    X: ArrayView2<F>,
    y: ArrayView1<F>,
    alpha: F,
    fit_intercept: bool,
) -> Result<FittedLinearRegression<F>> {
    let n_samples = X.nrows();
    let n_features = X.ncols();
    if y.len() != n_samples {
        return Err(EstimatorError::DimensionMismatch {
            expected: n_samples,
            found: y.len(),
        });
    }
    if n_samples == 0 {
        return Err(EstimatorError::EmptyDataset);
    }

    let (X_offset, y_offset) = if fit_intercept {
        (
            X.mean_axis(Axis(0)).ok_or(EstimatorError::EmptyDataset)?,
            y.mean().ok_or(EstimatorError::EmptyDataset)?,
        )
    } else {
        (Array1::zeros(n_features), F::zero())
    };

    let Xc = &X - &X_offset;
    let yc = &y - y_offset;

    let gram = Xc.t().dot(&Xc) + Array2::<F>::eye(n_features) * alpha;
    let Xty = Xc.t().dot(&yc);
    let coefficients = solve_lin_sys(gram.view(), Xty.view())?;
    let intercept = y_offset - X_offset.dot(&coefficients);

    log::debug!(
        "fitted linear model on {} samples and {} features (alpha = {})",
        n_samples,
        n_features,
        alpha
    );

    Ok(FittedLinearRegression {
        coefficients,
        intercept,
    })
}

/// Linear regression
///
/// Ordinary least squares, or ridge regression when `alpha > 0`, wrapped as a
/// [`Regressor`] that is fitted in place.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression<F> {
    params: LinearRegressionValidParams<F>,
    fitted: Option<FittedLinearRegression<F>>,
}

impl<F: Float> Default for LinearRegression<F> {
    fn default() -> Self {
        LinearRegression {
            params: LinearRegressionParams::new().check_unwrap(),
            fitted: None,
        }
    }
}

impl<F: Float> LinearRegression<F> {
    /// This method instantiates the hyperparameters of a linear regression
    /// with default values.
    pub fn params() -> LinearRegressionParams<F> {
        LinearRegressionParams::new()
    }

    /// Builds an unfitted model from checked hyperparameters.
    pub fn new(params: LinearRegressionParams<F>) -> Result<Self> {
        Ok(LinearRegression {
            params: params.check()?,
            fitted: None,
        })
    }

    /// The fitted model, if [`Regressor::fit`] has been called.
    pub fn fitted(&self) -> Option<&FittedLinearRegression<F>> {
        self.fitted.as_ref()
    }
}

impl<F: Float> Regressor<F> for LinearRegression<F> {
    fn fit(&mut self, X: ArrayView2<F>, y: ArrayView1<F>) -> Result<()> {
        let dataset = DatasetBase::from((X, y));
        self.fitted = Some(self.params.fit(&dataset)?);
        Ok(())
    }

    fn predict(&self, X: ArrayView2<F>) -> Result<Array1<F>> {
        self.fitted
            .as_ref()
            .ok_or(EstimatorError::NotFitted)?
            .predict(X)
    }

    fn name(&self) -> String {
        if self.params.alpha() > F::zero() {
            "Ridge".to_string()
        } else {
            "LinearRegression".to_string()
        }
    }
}
