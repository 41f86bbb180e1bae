#![allow(non_snake_case)]

//! Diagnostic plots for regression models.
//!
//! Two visualizers wrap a [`Regressor`](estimators::traits::Regressor) and a
//! drawing surface implementing [`Axes`](draw::Axes):
//!
//! - [`PredictionErrorVisualizer`](visualizers::PredictionErrorVisualizer)
//!   plots measured against predicted targets with a best-fit trend line.
//! - [`ResidualsVisualizer`](visualizers::ResidualsVisualizer) plots
//!   predicted values against residuals for training and held-out data.
//!
//! A [`Canvas`](draw::Canvas) records every mark so that it can be inspected
//! or rendered to SVG with [`render`].

use ndarray::ScalarOperand;

use num_traits::{AsPrimitive, FromPrimitive, NumAssignOps, NumCast, Signed};

use std::cmp::PartialOrd;
use std::fmt;
use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Float point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point
/// number and implement them for 32bit and 64bit float points.
/// Ref: https://github.com/rust-ml/linfa/blob/master/src/dataset/mod.rs#L36
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Signed
    + Sum
    + NumAssignOps
    + AsPrimitive<usize>
    + for<'a> AddAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> DivAssign<&'a Self>
    + ScalarOperand
    + approx::AbsDiffEq
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }

    /// Lossy conversion used when handing coordinates to the renderer.
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Float for f32 {}

impl Float for f64 {}

pub mod bestfit;
pub mod datasets;
pub mod draw;
pub mod error;
pub mod estimators;
pub mod helpers;
pub mod param_guard;
pub mod render;
pub mod visualizers;
