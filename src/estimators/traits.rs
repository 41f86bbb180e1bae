use ndarray::{Array1, ArrayView1, ArrayView2};

use super::error::Result;
use crate::datasets::{DatasetBase, DesignMatrix, Targets};
use crate::helpers::helpers::r2_score;
use crate::Float;

/// Fit trait
///
/// The fittable trait allows a set of hyperparameters to be fitted to a dataset
/// (a combination of design matrix and targets), yielding a fitted model.
pub trait Fit<DM: DesignMatrix, T: Targets, E: std::error::Error> {
    type Object;

    fn fit(&self, dataset: &DatasetBase<DM, T>) -> std::result::Result<Self::Object, E>;
}

/// Regressor trait
///
/// The capability set a visualizer needs from a regression model: it can be
/// fitted in place, it predicts a continuous target and it reports a score.
/// Only types implementing this trait can be wrapped by a visualizer, which
/// rules out classifiers at compile time.
pub trait Regressor<F: Float> {
    /// Fits the model to `X` (n x m) and `y` (length n).
    fn fit(&mut self, X: ArrayView2<F>, y: ArrayView1<F>) -> Result<()>;

    /// Predicts one target per row of `X`.
    fn predict(&self, X: ArrayView2<F>) -> Result<Array1<F>>;

    /// Scores the predictions on `X` against `y`. Defaults to the coefficient
    /// of determination.
    fn score(&self, X: ArrayView2<F>, y: ArrayView1<F>) -> Result<F> {
        let y_pred = self.predict(X)?;
        r2_score(y, y_pred.view())
    }

    /// The display name used in plot titles.
    fn name(&self) -> String;
}
