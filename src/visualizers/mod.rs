//! Regression visualizers.
//!
//! Both visualizers wrap a [`Regressor`](crate::estimators::traits::Regressor)
//! and an [`Axes`](crate::draw::Axes) surface. They are driven through the
//! [`Visualizer`] lifecycle, or end to end through a quick method that splits
//! the data, fits, scores and finalizes in one call.


pub mod base;
pub mod hyperparams;
pub mod prediction_error;
pub mod residuals;

use rand::rngs::SmallRng;
use rand::SeedableRng;

pub use base::Visualizer;
pub use hyperparams::{PredictionErrorParams, ResidualsParams};
pub use prediction_error::{prediction_error, PredictionErrorVisualizer};
pub use residuals::{residuals_plot, DataSubset, ResidualsVisualizer};

/// Share of the samples held out for scoring by the quick methods.
pub const TEST_SIZE: f64 = 0.2;

pub(crate) fn split_rng(random_state: Option<u64>) -> SmallRng {
    match random_state {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}
