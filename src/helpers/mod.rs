#[cfg(test)]
mod tests;

/// This module contains the numerical helpers shared by the estimators and
/// the best-fit routine.
pub mod helpers {
    use crate::estimators::error::{EstimatorError, Result};
    use crate::Float;
    use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

    /// This function solves a linear system using Gaussian elimination with
    /// partial pivoting. It is called when solving the normal equations of
    /// least-squares problems, which are small (one row per coefficient).
    pub fn solve_lin_sys<F: 'static + Float>(A: ArrayView2<F>, b: ArrayView1<F>) -> Result<Array1<F>> {
        let size = b.len();
        if A.shape() != [size, size] {
            return Err(EstimatorError::DimensionMismatch {
                expected: size,
                found: A.shape()[0],
            });
        }

        // Concatenation
        let mut system = Array2::<F>::zeros((size, size + 1));
        for i in 0..size {
            for j in 0..(size + 1) {
                system[[i, j]] = if j == size { b[i] } else { A[[i, j]] };
            }
        }

        // Echelon form
        for i in 0..size {
            let pivot = (i..size)
                .max_by(|&p, &q| {
                    system[[p, i]]
                        .abs()
                        .partial_cmp(&system[[q, i]].abs())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .unwrap_or(i);
            if system[[pivot, i]].abs() <= F::epsilon() {
                return Err(EstimatorError::SingularMatrix);
            }
            if pivot != i {
                for k in 0..(size + 1) {
                    system.swap([i, k], [pivot, k]);
                }
            }
            for j in (i + 1)..size {
                let factor = system[[j, i]] / system[[i, i]];
                for k in i..(size + 1) {
                    system[[j, k]] = system[[j, k]] - factor * system[[i, k]];
                }
            }
        }

        // Back substitution
        let mut x = Array1::<F>::zeros(size);
        for i in (0..size).rev() {
            let mut acc = system[[i, size]];
            for j in (i + 1)..size {
                acc -= system[[i, j]] * x[j];
            }
            x[i] = acc / system[[i, i]];
        }

        Ok(x)
    }

    /// Coefficient of determination of `y_pred` with respect to `y_true`.
    ///
    /// A constant target yields `1` when predicted exactly and `0` otherwise.
    pub fn r2_score<F: Float>(y_true: ArrayView1<F>, y_pred: ArrayView1<F>) -> Result<F> {
        if y_true.len() != y_pred.len() {
            return Err(EstimatorError::DimensionMismatch {
                expected: y_true.len(),
                found: y_pred.len(),
            });
        }
        if y_true.is_empty() {
            return Err(EstimatorError::EmptyDataset);
        }

        let n_samples = F::cast(y_true.len());
        let mean = y_true.sum() / n_samples;
        let tss: F = y_true.iter().map(|&yi| (yi - mean).powi(2)).sum();
        let rss: F = y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(&yi, &pi)| (yi - pi).powi(2))
            .sum();

        if tss == F::zero() {
            if rss == F::zero() {
                Ok(F::one())
            } else {
                Ok(F::zero())
            }
        } else {
            Ok(F::one() - rss / tss)
        }
    }

    /// `n` evenly spaced values from `start` to `stop`, both included.
    pub fn linspace<F: Float>(start: F, stop: F, n: usize) -> Array1<F> {
        match n {
            0 => Array1::zeros(0),
            1 => Array1::from_elem(1, start),
            _ => {
                let step = (stop - start) / F::cast(n - 1);
                Array1::from_shape_fn(n, |i| {
                    if i == n - 1 {
                        stop
                    } else {
                        start + step * F::cast(i)
                    }
                })
            }
        }
    }
}

/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use crate::estimators::error::{EstimatorError, Result};
    use crate::estimators::traits::Regressor;
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::prelude::*;
    use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    pub fn assert_array_all_close<F>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    pub fn fill_random_vector(capacity: usize, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();

        let mut data_x: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..data_x.capacity() {
            data_x.push(normal.sample(&mut r));
        }
        data_x
    }

    /// Draws a linear regression problem `y = Xw + noise` with standard
    /// normal design, weights and noise.
    pub fn generate_random_data(n_samples: usize, n_features: usize) -> (Array2<f64>, Array1<f64>) {
        let data_x = fill_random_vector(n_samples * n_features, 42);
        let data_w = fill_random_vector(n_features, 43);
        let data_e = fill_random_vector(n_samples, 44);
        let X = Array2::from_shape_vec((n_samples, n_features).f(), data_x).unwrap();
        let true_w = Array1::from_shape_vec(n_features, data_w).unwrap();
        let noise = Array1::from_shape_vec(n_samples, data_e).unwrap();
        let y = X.dot(&true_w) + noise;

        (X, y)
    }

    /// A regressor that ignores its inputs: it predicts a fixed vector and
    /// reports a fixed score. It counts how many times it was fitted.
    #[derive(Debug, Clone)]
    pub struct FixedRegressor<F> {
        predictions: Array1<F>,
        score: F,
        n_fits: usize,
    }

    impl<F: Float> FixedRegressor<F> {
        pub fn new(predictions: Array1<F>, score: F) -> Self {
            FixedRegressor {
                predictions,
                score,
                n_fits: 0,
            }
        }

        pub fn n_fits(&self) -> usize {
            self.n_fits
        }
    }

    impl<F: Float> Regressor<F> for FixedRegressor<F> {
        fn fit(&mut self, _X: ArrayView2<F>, _y: ArrayView1<F>) -> Result<()> {
            self.n_fits += 1;
            Ok(())
        }

        fn predict(&self, X: ArrayView2<F>) -> Result<Array1<F>> {
            if X.nrows() != self.predictions.len() {
                return Err(EstimatorError::DimensionMismatch {
                    expected: self.predictions.len(),
                    found: X.nrows(),
                });
            }
            Ok(self.predictions.clone())
        }

        fn score(&self, _X: ArrayView2<F>, _y: ArrayView1<F>) -> Result<F> {
            Ok(self.score)
        }

        fn name(&self) -> String {
            "FixedRegressor".to_string()
        }
    }
}
