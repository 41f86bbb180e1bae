//! Fits a trend line through two sequences and draws it on a surface.

use ndarray::{Array1, Array2, ArrayView1};
use ndarray_stats::QuantileExt;

use crate::draw::{Axes, LineStyle};
use crate::error::{Result, VisualizerError};
use crate::helpers::helpers::{linspace, solve_lin_sys};
use crate::Float;


/// Number of points the fitted curve is evaluated at.
pub const N_CURVE_POINTS: usize = 200;

/// Model used for the trend line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMethod {
    Linear,
    Quadratic,
}

/// Polynomial coefficients in increasing degree: `c[0] + c[1] x + c[2] x^2`.
#[derive(Debug, Clone, PartialEq)]
pub struct BestFit<F> {
    coefficients: Array1<F>,
}

impl<F: Float> BestFit<F> {
    pub fn coefficients(&self) -> ArrayView1<F> {
        self.coefficients.view()
    }

    pub fn eval(&self, x: F) -> F {
        self.coefficients
            .iter()
            .rev()
            .fold(F::zero(), |acc, &c| acc * x + c)
    }
}

fn check_inputs<F>(x: &ArrayView1<F>, y: &ArrayView1<F>) -> Result<()> {
    if x.len() != y.len() {
        return Err(VisualizerError::LengthMismatch {
            expected: x.len(),
            found: y.len(),
        });
    }
    if x.is_empty() {
        return Err(VisualizerError::EmptyInput);
    }
    Ok(())
}

/// Ordinary least squares of `y` on a single feature `x`. A constant `x`
/// yields a flat line through the mean of `y`.
pub fn fit_linear<F: Float>(x: ArrayView1<F>, y: ArrayView1<F>) -> Result<BestFit<F>> {
    check_inputs(&x, &y)?;
    let n_samples = F::cast(x.len());
    let x_mean = x.sum() / n_samples;
    let y_mean = y.sum() / n_samples;

    let mut sxx = F::zero();
    let mut sxy = F::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        sxx += (xi - x_mean) * (xi - x_mean);
        sxy += (xi - x_mean) * (yi - y_mean);
    }

    let slope = if sxx == F::zero() {
        F::zero()
    } else {
        sxy / sxx
    };
    let intercept = y_mean - slope * x_mean;
    Ok(BestFit {
        coefficients: Array1::from(vec![intercept, slope]),
    })
}

/// Least-squares polynomial of degree two, solved through its normal
/// equations.
pub fn fit_quadratic<F: Float>(x: ArrayView1<F>, y: ArrayView1<F>) -> Result<BestFit<F>> {
    check_inputs(&x, &y)?;
    let vander = Array2::from_shape_fn((x.len(), 3), |(i, d)| x[i].powi(d as i32));
    let gram = vander.t().dot(&vander);
    let rhs = vander.t().dot(&y);
    let coefficients = solve_lin_sys(gram.view(), rhs.view())?;
    Ok(BestFit { coefficients })
}

/// Fits `y` against `x` with `method` and draws the resulting curve over
/// [`N_CURVE_POINTS`] evenly spaced points spanning `[min(x), max(x)]`.
pub fn draw_best_fit<F, A>(
    x: ArrayView1<F>,
    y: ArrayView1<F>,
    axes: &mut A,
    method: FitMethod,
    style: LineStyle,
) -> Result<BestFit<F>>
where
    F: Float,
    A: Axes<F> + ?Sized,
{
    let fit = match method {
        FitMethod::Linear => fit_linear(x, y)?,
        FitMethod::Quadratic => fit_quadratic(x, y)?,
    };

    let xr = linspace(*x.min()?, *x.max()?, N_CURVE_POINTS);
    let yr = xr.mapv(|xi| fit.eval(xi));
    axes.plot(xr.view(), yr.view(), style)?;

    log::debug!("drew {:?} best fit with coefficients {}", method, fit.coefficients);
    Ok(fit)
}
