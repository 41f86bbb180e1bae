use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, VisualizerError};

/// The four parts returned by [`train_test_split`], in the order
/// `(x_train, x_test, y_train, y_test)`.
pub type Split<F> = (Array2<F>, Array2<F>, Array1<F>, Array1<F>);

/// This function randomly partitions the rows of a design matrix and its
/// targets into a training part and a held-out part.
///
/// The held-out part receives `ceil(test_size * n_samples)` rows. Both parts
/// must end up non-empty.
pub fn train_test_split<F: Clone, R: Rng + ?Sized>(
    X: ArrayView2<F>,
    y: ArrayView1<F>,
    test_size: f64,
    rng: &mut R,
) -> Result<Split<F>> {
    if !(test_size > 0. && test_size < 1.) {
        return Err(VisualizerError::InvalidTestSize(test_size));
    }

    let n_samples = X.len_of(Axis(0));
    if y.len() != n_samples {
        return Err(VisualizerError::LengthMismatch {
            expected: n_samples,
            found: y.len(),
        });
    }

    let n_test = (test_size * n_samples as f64).ceil() as usize;
    let n_train = n_samples.saturating_sub(n_test);
    if n_train == 0 || n_test == 0 {
        return Err(VisualizerError::EmptySplit {
            n_samples,
            n_train,
            n_test,
        });
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    indices.shuffle(rng);
    let (test_idx, train_idx) = indices.split_at(n_test);

    log::debug!(
        "split {} samples into {} training and {} test samples",
        n_samples,
        n_train,
        n_test
    );

    Ok((
        X.select(Axis(0), train_idx),
        X.select(Axis(0), test_idx),
        y.select(Axis(0), train_idx),
        y.select(Axis(0), test_idx),
    ))
}
