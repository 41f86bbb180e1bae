use ndarray::{Array1, ArrayView1, ArrayView2};

use super::base::{Visualizer, VisualizerBase};
use super::hyperparams::ResidualsParams;
use super::{split_rng, TEST_SIZE};
use crate::datasets::split::train_test_split;
use crate::draw::{Axes, Color, LegendLocation, LineStyle, ScatterStyle};
use crate::error::{Result, VisualizerError};
use crate::estimators::traits::Regressor;
use crate::Float;

/// Marker area of residual points, in points squared.
pub const RESIDUAL_MARKER_SIZE: f64 = 40.;

/// Opacity of training residuals.
pub const TRAIN_ALPHA: f64 = 0.5;

/// Opacity of test residuals.
pub const TEST_ALPHA: f64 = 1.;

/// Legend written by [`ResidualsVisualizer::finalize`]. It labels the first
/// drawn series as training data and the second as test data.
pub const LEGEND_LABELS: [&str; 2] = ["Training Data", "Test Data"];

/// Which part of the data a residual series comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSubset {
    Train,
    Test,
}

/// Colors of a residuals plot, resolved at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidualsColors {
    pub train_point: Color,
    pub test_point: Color,
    pub line: Color,
}

/// Residuals plot
///
/// Shows predicted values on the horizontal axis and residuals on the
/// vertical axis. Points randomly dispersed around zero suggest a linear model
/// is appropriate; structure suggests a non-linear one.
///
/// Training residuals are drawn at half opacity so that the held-out
/// residuals, which measure generalization error, stand out.
pub struct ResidualsVisualizer<'a, F, E: ?Sized, A: ?Sized> {
    base: VisualizerBase<'a, F, E, A>,
    colors: ResidualsColors,
    drawn: Vec<DataSubset>,
}

impl<'a, F, E, A> ResidualsVisualizer<'a, F, E, A>
where
    F: Float,
    E: Regressor<F> + ?Sized,
    A: Axes<F> + ?Sized,
{
    pub fn new(estimator: &'a mut E, axes: &'a mut A, params: ResidualsParams) -> Self {
        let colors = ResidualsColors {
            train_point: params.get_train_color(),
            test_point: params.get_test_color(),
            line: params.get_line_color(),
        };
        ResidualsVisualizer {
            base: VisualizerBase::new(estimator, axes, params.get_title().map(str::to_string)),
            colors,
            drawn: Vec::new(),
        }
    }

    pub fn colors(&self) -> ResidualsColors {
        self.colors
    }

    /// The subsets drawn so far, in draw order.
    pub fn drawn_series(&self) -> &[DataSubset] {
        &self.drawn
    }

    /// Predicts `X` and draws the residuals `y_pred - y` against `y_pred`.
    pub fn score(&mut self, X: ArrayView2<F>, y: ArrayView1<F>, subset: DataSubset) -> Result<()> {
        let y_pred = self.base.predict(X)?;
        if y_pred.len() != y.len() {
            return Err(VisualizerError::LengthMismatch {
                expected: y_pred.len(),
                found: y.len(),
            });
        }
        let residuals = &y_pred - &y;
        self.draw(y_pred.view(), residuals.view(), subset)?;
        Ok(())
    }

    /// Scatters `(y_pred[i], residuals[i])` in the color and opacity of
    /// `subset`.
    pub fn draw(
        &mut self,
        y_pred: ArrayView1<F>,
        residuals: ArrayView1<F>,
        subset: DataSubset,
    ) -> Result<&mut A> {
        let (color, alpha) = match subset {
            DataSubset::Train => (self.colors.train_point, TRAIN_ALPHA),
            DataSubset::Test => (self.colors.test_point, TEST_ALPHA),
        };
        let style = ScatterStyle::new(color)
            .size(RESIDUAL_MARKER_SIZE)
            .alpha(alpha);

        self.base.axes_mut().scatter(y_pred, residuals, style)?;
        self.drawn.push(subset);

        log::debug!("drew {} {:?} residuals", y_pred.len(), subset);
        Ok(self.base.axes_mut())
    }
}

impl<'a, F, E, A> Visualizer<F> for ResidualsVisualizer<'a, F, E, A>
where
    F: Float,
    E: Regressor<F> + ?Sized,
    A: Axes<F> + ?Sized,
{
    type Surface = A;

    /// Fits the estimator, then draws the training residuals.
    fn fit(&mut self, X: ArrayView2<F>, y: ArrayView1<F>) -> Result<()> {
        self.base.fit(X, y)?;
        self.score(X, y, DataSubset::Train)
    }

    fn predict(&self, X: ArrayView2<F>) -> Result<Array1<F>> {
        self.base.predict(X)
    }

    fn finalize(&mut self) {
        let title = format!("Residuals for {} Model", self.base.name());
        self.base.set_title(&title);

        if self.drawn != [DataSubset::Train, DataSubset::Test] {
            log::warn!(
                "legend labels {:?} assume a training then a test series, but {:?} were drawn",
                LEGEND_LABELS,
                self.drawn
            );
        }

        let line = LineStyle::new(self.colors.line);
        let axes = self.base.axes_mut();
        axes.legend(&LEGEND_LABELS, LegendLocation::Best, true);
        axes.axhline(F::zero(), line);
        axes.set_ylabel("Residuals");
        axes.set_xlabel("Predicted Value");
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
/// the training part (drawing its residuals), draws the test residuals and
/// finalizes the plot. A fresh surface is used when `axes` is `None`. The
/// surface is returned.
pub fn residuals_plot<F, E, A>(
    estimator: &mut E,
    X: ArrayView2<F>,
    y: ArrayView1<F>,
    axes: Option<A>,
    params: ResidualsParams,
) -> Result<A>
where
    F: Float,
    E: Regressor<F> + ?Sized,
    A: Axes<F> + Default,
{
    let mut axes = axes.unwrap_or_default();
    let mut rng = split_rng(params.get_random_state());
    let (X_train, X_test, y_train, y_test) = train_test_split(X, y, TEST_SIZE, &mut rng)?;

    let mut visualizer = ResidualsVisualizer::new(estimator, &mut axes, params);
    visualizer.fit(X_train.view(), y_train.view())?;
    visualizer.score(X_test.view(), y_test.view(), DataSubset::Test)?;
    visualizer.finalize();

    Ok(axes)
}
