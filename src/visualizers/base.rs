use std::marker::PhantomData;

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::draw::Axes;
use crate::error::Result;
use crate::estimators::traits::Regressor;
use crate::Float;

/// The lifecycle shared by every regression visualizer.
///
/// A visualizer is fitted once, scored or drawn any number of times, then
/// finalized once to apply its titles, labels and legend.
pub trait Visualizer<F: Float> {
    type Surface: Axes<F> + ?Sized;

    /// Fits the wrapped estimator on training data.
    fn fit(&mut self, X: ArrayView2<F>, y: ArrayView1<F>) -> Result<()>;

    fn predict(&self, X: ArrayView2<F>) -> Result<Array1<F>>;

    /// Applies the static decorations. Text is overwritten, never appended.
    fn finalize(&mut self);

    /// Display name of the wrapped estimator.
    fn name(&self) -> String;

    fn axes(&self) -> &Self::Surface;
}

/// Borrowed estimator and surface, plus an optional title overriding the
/// visualizer's default one.
///
/// Neither the estimator nor the surface is owned: both stay with the caller,
/// who may share the surface between several visualizers.
pub struct VisualizerBase<'a, F, E: ?Sized, A: ?Sized> {
    estimator: &'a mut E,
    axes: &'a mut A,
    title: Option<String>,
    _float: PhantomData<F>,
}

impl<'a, F, E, A> VisualizerBase<'a, F, E, A>
where
    F: Float,
    E: Regressor<F> + ?Sized,
    A: Axes<F> + ?Sized,
{
    pub fn new(estimator: &'a mut E, axes: &'a mut A, title: Option<String>) -> Self {
        VisualizerBase {
            estimator,
            axes,
            title,
            _float: PhantomData,
        }
    }

    pub fn estimator(&self) -> &E {
        &*self.estimator
    }

    pub fn axes(&self) -> &A {
        &*self.axes
    }

    pub fn axes_mut(&mut self) -> &mut A {
        &mut *self.axes
    }

    pub fn fit(&mut self, X: ArrayView2<F>, y: ArrayView1<F>) -> Result<()> {
        self.estimator.fit(X, y)?;
        log::debug!(
            "fitted {} on {} samples",
            self.estimator.name(),
            X.nrows()
        );
        Ok(())
    }

    pub fn predict(&self, X: ArrayView2<F>) -> Result<Array1<F>> {
        Ok(self.estimator.predict(X)?)
    }

    pub fn name(&self) -> String {
        self.estimator.name()
    }

    /// Sets the user title when one was configured, `default` otherwise.
    pub fn set_title(&mut self, default: &str) {
        let title = self.title.as_deref().unwrap_or(default);
        self.axes.set_title(title);
    }
}
