use ndarray::{Array1, ArrayView1};

use super::{Axes, LegendLocation, Legend, LineStyle, ScatterStyle};
use crate::error::{Result, VisualizerError};
use crate::Float;

/// A recorded scatter series.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterMark<F> {
    pub x: Array1<F>,
    pub y: Array1<F>,
    pub style: ScatterStyle,
}

impl<F: Float> ScatterMark<F> {
    pub fn points(&self) -> impl Iterator<Item = (F, F)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// A recorded polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMark<F> {
    pub x: Array1<F>,
    pub y: Array1<F>,
    pub style: LineStyle,
}

impl<F: Float> LineMark<F> {
    pub fn points(&self) -> impl Iterator<Item = (F, F)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// A recorded full-width horizontal line.
#[derive(Debug, Clone, PartialEq)]
pub struct HLineMark<F> {
    pub y: F,
    pub style: LineStyle,
}

/// Anything drawn on a [`Canvas`], in draw order.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark<F> {
    Scatter(ScatterMark<F>),
    Line(LineMark<F>),
    HLine(HLineMark<F>),
}

impl<F: Float> Mark<F> {
    /// The data points of a scatter or line mark. Horizontal lines have none.
    pub fn points(&self) -> Box<dyn Iterator<Item = (F, F)> + '_> {
        match self {
            Mark::Scatter(scatter) => Box::new(scatter.points()),
            Mark::Line(line) => Box::new(line.points()),
            Mark::HLine(_) => Box::new(std::iter::empty()),
        }
    }
}

/// An in-memory drawing surface.
///
/// Every call is recorded so that tests can inspect what was drawn and
/// [`crate::render`] can turn it into an image later.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas<F> {
    marks: Vec<Mark<F>>,
    xlim: Option<(F, F)>,
    ylim: Option<(F, F)>,
    title: Option<String>,
    xlabel: Option<String>,
    ylabel: Option<String>,
    legend: Option<Legend>,
}

impl<F: Float> Default for Canvas<F> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_lengths<F>(x: &ArrayView1<F>, y: &ArrayView1<F>) -> Result<()> {
    if x.len() != y.len() {
        return Err(VisualizerError::LengthMismatch {
            expected: x.len(),
            found: y.len(),
        });
    }
    Ok(())
}

/// Bounds of the finite values in `values`, if any.
fn finite_bounds<F: Float>(values: impl Iterator<Item = F>) -> Option<(F, F)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Pads data bounds by 5% of their span, or by one half when the span is null.
fn padded<F: Float>(bounds: Option<(F, F)>) -> (F, F) {
    match bounds {
        None => (F::zero(), F::one()),
        Some((lo, hi)) if lo == hi => {
            let half = F::cast(0.5);
            (lo - half, hi + half)
        }
        Some((lo, hi)) => {
            let margin = (hi - lo) * F::cast(0.05);
            (lo - margin, hi + margin)
        }
    }
}

impl<F: Float> Canvas<F> {
    pub fn new() -> Self {
        Canvas {
            marks: Vec::new(),
            xlim: None,
            ylim: None,
            title: None,
            xlabel: None,
            ylabel: None,
            legend: None,
        }
    }

    pub fn marks(&self) -> &[Mark<F>] {
        &self.marks
    }

    pub fn scatters(&self) -> impl Iterator<Item = &ScatterMark<F>> + '_ {
        self.marks.iter().filter_map(|mark| match mark {
            Mark::Scatter(scatter) => Some(scatter),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineMark<F>> + '_ {
        self.marks.iter().filter_map(|mark| match mark {
            Mark::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn hlines(&self) -> impl Iterator<Item = &HLineMark<F>> + '_ {
        self.marks.iter().filter_map(|mark| match mark {
            Mark::HLine(hline) => Some(hline),
            _ => None,
        })
    }

    pub fn xlim(&self) -> Option<(F, F)> {
        self.xlim
    }

    pub fn ylim(&self) -> Option<(F, F)> {
        self.ylim
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn xlabel(&self) -> Option<&str> {
        self.xlabel.as_deref()
    }

    pub fn ylabel(&self) -> Option<&str> {
        self.ylabel.as_deref()
    }

    /// The legend requested through [`Axes::legend`], if any.
    pub fn current_legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    /// Removes every mark, limit, text and legend.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn data_points(&self) -> impl Iterator<Item = (F, F)> + '_ {
        self.marks.iter().flat_map(Mark::points)
    }

    /// The visible x-range: the explicit limits when set, otherwise the data
    /// bounds with a 5% margin.
    pub fn x_range(&self) -> (F, F) {
        self.xlim
            .unwrap_or_else(|| padded(finite_bounds(self.data_points().map(|(x, _)| x))))
    }

    /// The visible y-range. Horizontal lines count as data.
    pub fn y_range(&self) -> (F, F) {
        self.ylim.unwrap_or_else(|| {
            let hlines = self.hlines().map(|hline| hline.y);
            padded(finite_bounds(self.data_points().map(|(_, y)| y).chain(hlines)))
        })
    }

    /// The corner of the visible area holding the fewest data points, checked
    /// in the order upper right, upper left, lower left, lower right.
    pub fn best_legend_corner(&self) -> LegendLocation {
        let (x0, x1) = self.x_range();
        let (y0, y1) = self.y_range();
        let third = F::cast(1. / 3.);
        let left = x0 + (x1 - x0) * third;
        let right = x1 - (x1 - x0) * third;
        let bottom = y0 + (y1 - y0) * third;
        let top = y1 - (y1 - y0) * third;

        let candidates = [
            LegendLocation::UpperRight,
            LegendLocation::UpperLeft,
            LegendLocation::LowerLeft,
            LegendLocation::LowerRight,
        ];
        let mut counts = [0usize; 4];
        for (x, y) in self.data_points() {
            let upper = y >= top;
            let lower = y <= bottom;
            if upper && x >= right {
                counts[0] += 1;
            }
            if upper && x <= left {
                counts[1] += 1;
            }
            if lower && x <= left {
                counts[2] += 1;
            }
            if lower && x >= right {
                counts[3] += 1;
            }
        }

        let mut best = 0;
        for idx in 1..candidates.len() {
            if counts[idx] < counts[best] {
                best = idx;
            }
        }
        candidates[best]
    }

    /// The legend location with `Best` resolved to a corner.
    pub fn resolved_legend_location(&self) -> Option<LegendLocation> {
        self.legend.as_ref().map(|legend| match legend.location {
            LegendLocation::Best => self.best_legend_corner(),
            other => other,
        })
    }
}

impl<F: Float> Axes<F> for Canvas<F> {
    fn scatter(&mut self, x: ArrayView1<F>, y: ArrayView1<F>, style: ScatterStyle) -> Result<()> {
        check_lengths(&x, &y)?;
        self.marks.push(Mark::Scatter(ScatterMark {
            x: x.to_owned(),
            y: y.to_owned(),
            style,
        }));
        Ok(())
    }

    fn plot(&mut self, x: ArrayView1<F>, y: ArrayView1<F>, style: LineStyle) -> Result<()> {
        check_lengths(&x, &y)?;
        self.marks.push(Mark::Line(LineMark {
            x: x.to_owned(),
            y: y.to_owned(),
            style,
        }));
        Ok(())
    }

    fn axhline(&mut self, y: F, style: LineStyle) {
        self.marks.push(Mark::HLine(HLineMark { y, style }));
    }

    fn set_xlim(&mut self, left: F, right: F) {
        self.xlim = Some((left, right));
    }

    fn set_ylim(&mut self, bottom: F, top: F) {
        self.ylim = Some((bottom, top));
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_xlabel(&mut self, label: &str) {
        self.xlabel = Some(label.to_string());
    }

    fn set_ylabel(&mut self, label: &str) {
        self.ylabel = Some(label.to_string());
    }

    fn legend(&mut self, labels: &[&str], location: LegendLocation, frameon: bool) {
        self.legend = Some(Legend {
            labels: labels.iter().map(|label| label.to_string()).collect(),
            location,
            frameon,
            n_marks: self.marks.len(),
        });
    }
}
