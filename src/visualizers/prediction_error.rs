use ndarray::{Array1, ArrayView1, ArrayView2};
use ndarray_stats::QuantileExt;

use super::base::{Visualizer, VisualizerBase};
use super::hyperparams::PredictionErrorParams;
use super::{split_rng, TEST_SIZE};
use crate::bestfit::{draw_best_fit, FitMethod};
use crate::datasets::split::train_test_split;
use crate::draw::{Axes, Color, LineDash, LineStyle, ScatterStyle};
use crate::error::Result;
use crate::estimators::traits::Regressor;
use crate::Float;

/// Colors of a prediction error plot, resolved at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionErrorColors {
    pub point: Color,
    pub line: Color,
}

/// Prediction error plot
///
/// Plots the measured targets of a dataset against the values predicted by a
/// regressor, with a linear trend line through them. It is used to detect
/// noise or heteroscedasticity along the range of the target.
///
/// The primary entry point is [`score`](Self::score):
///
/// ```ignore
/// let mut visualizer = PredictionErrorVisualizer::new(&mut model, &mut canvas, params);
/// visualizer.fit(X_train.view(), y_train.view())?;
/// visualizer.score(X_test.view(), y_test.view())?;
/// visualizer.finalize();
/// ```
pub struct PredictionErrorVisualizer<'a, F, E: ?Sized, A: ?Sized> {
    base: VisualizerBase<'a, F, E, A>,
    colors: PredictionErrorColors,
}

impl<'a, F, E, A> PredictionErrorVisualizer<'a, F, E, A>
where
    F: Float,
    E: Regressor<F> + ?Sized,
    A: Axes<F> + ?Sized,
{
    pub fn new(estimator: &'a mut E, axes: &'a mut A, params: PredictionErrorParams) -> Self {
        let colors = PredictionErrorColors {
            point: params.get_point_color(),
            line: params.get_line_color(),
        };
        PredictionErrorVisualizer {
            base: VisualizerBase::new(estimator, axes, params.get_title().map(str::to_string)),
            colors,
        }
    }

    pub fn colors(&self) -> PredictionErrorColors {
        self.colors
    }

    /// Predicts `X`, draws the predictions against `y` and returns the
    /// estimator's own score on `(X, y)`, unmodified.
    pub fn score(&mut self, X: ArrayView2<F>, y: ArrayView1<F>) -> Result<F> {
        let y_pred = self.base.predict(X)?;
        self.draw(y, y_pred.view())?;
        Ok(self.base.estimator().score(X, y)?)
    }

    /// Scatters `(y[i], y_pred[i])`, overlays a linear best fit and sets the
    /// limits to one unit beyond the extrema of each axis.
    ///
    /// Every call draws a new trend line, so scoring inside a loop stacks
    /// one line per call.
    pub fn draw(&mut self, y: ArrayView1<F>, y_pred: ArrayView1<F>) -> Result<&mut A> {
        let colors = self.colors;
        let axes = self.base.axes_mut();

        axes.scatter(y, y_pred, ScatterStyle::new(colors.point))?;
        draw_best_fit(
            y,
            y_pred,
            &mut *axes,
            FitMethod::Linear,
            LineStyle::new(colors.line).width(2).dash(LineDash::Dashed),
        )?;

        axes.set_xlim(*y.min()? - F::one(), *y.max()? + F::one());
        axes.set_ylim(*y_pred.min()? - F::one(), *y_pred.max()? + F::one());

        log::debug!("drew {} prediction error points", y.len());
        Ok(axes)
    }
}

impl<'a, F, E, A> Visualizer<F> for PredictionErrorVisualizer<'a, F, E, A>
where
    F: Float,
    E: Regressor<F> + ?Sized,
    A: Axes<F> + ?Sized,
{
    type Surface = A;

    fn fit(&mut self, X: ArrayView2<F>, y: ArrayView1<F>) -> Result<()> {
        self.base.fit(X, y)
    }

    fn predict(&self, X: ArrayView2<F>) -> Result<Array1<F>> {
        self.base.predict(X)
    }

    fn finalize(&mut self) {
        let title = format!("Prediction Error for {}", self.base.name());
        self.base.set_title(&title);

        let axes = self.base.axes_mut();
        axes.set_ylabel("Predicted");
        axes.set_xlabel("Measured");
    }

    fn name(&self) -> String {
        self.base.name()
    }

    fn axes(&self) -> &A {
        self.base.axes()
    }
}

/// Quick method:
///
/// Splits `(X, y)` into 80% training and 20% test data, fits `estimator` on
/// the training part, plots the prediction error of the test part and
/// finalizes the plot. A fresh surface is used when `axes` is `None`. The
/// surface is returned.
pub fn prediction_error<F, E, A>(
    estimator: &mut E,
    X: ArrayView2<F>,
    y: ArrayView1<F>,
    axes: Option<A>,
    params: PredictionErrorParams,
) -> Result<A>
where
    F: Float,
    E: Regressor<F> + ?Sized,
    A: Axes<F> + Default,
{
    let mut axes = axes.unwrap_or_default();
    let mut rng = split_rng(params.get_random_state());
    let (X_train, X_test, y_train, y_test) = train_test_split(X, y, TEST_SIZE, &mut rng)?;

    let mut visualizer = PredictionErrorVisualizer::new(estimator, &mut axes, params);
    visualizer.fit(X_train.view(), y_train.view())?;
    visualizer.score(X_test.view(), y_test.view())?;
    visualizer.finalize();

    Ok(axes)
}
