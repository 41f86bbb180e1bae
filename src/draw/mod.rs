//! The drawing surface consumed by the visualizers.
//!
//! [`Axes`] is the seam: anything that can record scatter plots, lines,
//! limits, text and a legend can be drawn on. [`Canvas`] is the in-memory
//! implementation shipped with the crate; it keeps every mark so that it can
//! be inspected or handed to [`crate::render`].

use ndarray::ArrayView1;

use crate::error::Result;
use crate::Float;

#[cfg(test)]
mod tests;

mod canvas;
mod color;

pub use canvas::{Canvas, HLineMark, LineMark, Mark, ScatterMark};
pub use color::{Color, DEFAULT_POINT_COLOR, LINE_COLOR};

/// Marker size used when a scatter style does not set one, in points squared.
pub const DEFAULT_MARKER_SIZE: f64 = 36.;

/// Style of a scatter series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterStyle {
    pub color: Color,
    /// Marker area in points squared.
    pub size: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl ScatterStyle {
    pub fn new(color: Color) -> Self {
        ScatterStyle {
            color,
            size: DEFAULT_MARKER_SIZE,
            alpha: 1.,
        }
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Dash pattern of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDash {
    Solid,
    Dashed,
}

/// Style of a line or reference line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: u32,
    pub dash: LineDash,
}

impl LineStyle {
    pub fn new(color: Color) -> Self {
        LineStyle {
            color,
            width: 1,
            dash: LineDash::Solid,
        }
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn dash(mut self, dash: LineDash) -> Self {
        self.dash = dash;
        self
    }
}

/// Where a legend is placed. `Best` lets the surface pick the least crowded
/// corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendLocation {
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

/// A legend request: explicit labels, a location and whether to draw a frame.
///
/// Labels only apply to the marks that existed when the legend was requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub labels: Vec<String>,
    pub location: LegendLocation,
    pub frameon: bool,
    /// Number of marks drawn before the request.
    pub n_marks: usize,
}

/// A two-dimensional drawing surface.
///
/// Marks accumulate across calls until the owner clears them. Text setters
/// replace any previous value.
pub trait Axes<F: Float> {
    /// Draws one marker per `(x[i], y[i])` pair.
    fn scatter(&mut self, x: ArrayView1<F>, y: ArrayView1<F>, style: ScatterStyle) -> Result<()>;

    /// Draws a polyline through `(x[i], y[i])` in order.
    fn plot(&mut self, x: ArrayView1<F>, y: ArrayView1<F>, style: LineStyle) -> Result<()>;

    /// Draws a horizontal line at `y` spanning the whole x-range.
    fn axhline(&mut self, y: F, style: LineStyle);

    fn set_xlim(&mut self, left: F, right: F);
    fn set_ylim(&mut self, bottom: F, top: F);

    fn set_title(&mut self, title: &str);
    fn set_xlabel(&mut self, label: &str);
    fn set_ylabel(&mut self, label: &str);

    /// Attaches `labels` to the drawn series in draw order.
    fn legend(&mut self, labels: &[&str], location: LegendLocation, frameon: bool);
}
