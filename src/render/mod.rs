//! SVG output for a recorded [`Canvas`], drawn with `plotters`.


pub mod hyperparams;

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

pub use hyperparams::{RenderParams, RenderValidParams};

use crate::draw::{Canvas, Color as MarkColor, LegendLocation, LineDash, LineStyle, Mark};
use crate::error::{Result, VisualizerError};
use crate::param_guard::ParamGuard;
use crate::Float;

/// Length of a dash, and of the gap after it, as a share of the plot diagonal.
const DASH_LENGTH: f64 = 1. / 60.;

/// Length in pixels of the line sample drawn next to a legend label.
const LEGEND_SAMPLE: i32 = 20;

fn render_error<E: std::fmt::Display>(err: E) -> VisualizerError {
    VisualizerError::Render(err.to_string())
}

fn rgb(color: MarkColor) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn line_shape(style: &LineStyle) -> ShapeStyle {
    rgb(style.color).stroke_width(style.width)
}

/// Marker radius in pixels for a marker area given in points squared.
fn marker_radius(size: f64) -> u32 {
    (size.max(0.).sqrt() / 2.).round().max(1.) as u32
}

fn label_position(location: LegendLocation) -> SeriesLabelPosition {
    match location {
        LegendLocation::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendLocation::LowerLeft => SeriesLabelPosition::LowerLeft,
        LegendLocation::LowerRight => SeriesLabelPosition::LowerRight,
        LegendLocation::UpperRight | LegendLocation::Best => SeriesLabelPosition::UpperRight,
    }
}

/// Cuts a polyline into dashes. Lengths are measured after scaling each axis
/// by `scale`, so that dashes look even whatever the data units are.
pub(crate) fn dash_segments(
    points: &[(f64, f64)],
    scale: (f64, f64),
    dash: f64,
) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let first = match points.first() {
        Some(&point) => point,
        None => return segments,
    };

    let mut on = true;
    let mut remaining = dash;
    let mut current = vec![first];

    for pair in points.windows(2) {
        let (p, q) = (pair[0], pair[1]);
        let length = (((q.0 - p.0) * scale.0).powi(2) + ((q.1 - p.1) * scale.1).powi(2)).sqrt();
        if !length.is_finite() || length == 0. {
            continue;
        }

        let mut t = 0.;
        while length - t > remaining {
            t += remaining;
            let ratio = t / length;
            let cut = (p.0 + (q.0 - p.0) * ratio, p.1 + (q.1 - p.1) * ratio);
            if on {
                current.push(cut);
                segments.push(std::mem::take(&mut current));
            } else {
                current.push(cut);
            }
            on = !on;
            remaining = dash;
        }
        remaining -= length - t;
        if on {
            current.push(q);
        }
    }

    if on && current.len() > 1 {
        segments.push(current);
    }
    segments
}

fn draw_canvas<F, DB>(canvas: &Canvas<F>, root: &DrawingArea<DB, Shift>, params: &RenderValidParams) -> Result<()>
where
    F: Float,
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(render_error)?;

    let (x0, x1) = canvas.x_range();
    let (y0, y1) = canvas.y_range();
    let (x0, x1, y0, y1) = (x0.as_f64(), x1.as_f64(), y0.as_f64(), y1.as_f64());

    let mut builder = ChartBuilder::on(root);
    builder
        .margin(params.margin())
        .x_label_area_size(params.font_size() * 3)
        .y_label_area_size(params.font_size() * 4);
    if let Some(title) = canvas.title() {
        builder.caption(title, ("sans-serif", params.font_size() + 6));
    }
    let mut chart = builder
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(render_error)?;

    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh()
        .label_style(("sans-serif", params.font_size()))
        .axis_desc_style(("sans-serif", params.font_size()));
    if let Some(label) = canvas.xlabel() {
        mesh.x_desc(label);
    }
    if let Some(label) = canvas.ylabel() {
        mesh.y_desc(label);
    }
    mesh.draw().map_err(render_error)?;

    let scale = (1. / (x1 - x0).abs(), 1. / (y1 - y0).abs());
    let (labels, n_labelled) = canvas
        .current_legend()
        .map(|legend| (legend.labels.clone(), legend.n_marks))
        .unwrap_or_default();
    let mut labels = labels.into_iter().take(n_labelled);

    for mark in canvas.marks() {
        let label = labels.next();
        match mark {
            Mark::Scatter(scatter) => {
                let style = rgb(scatter.style.color)
                    .mix(scatter.style.alpha)
                    .filled();
                let radius = marker_radius(scatter.style.size);
                let series = chart
                    .draw_series(
                        scatter
                            .points()
                            .map(|(x, y)| Circle::new((x.as_f64(), y.as_f64()), radius, style)),
                    )
                    .map_err(render_error)?;
                if let Some(label) = label {
                    series
                        .label(label)
                        .legend(move |(x, y)| Circle::new((x + LEGEND_SAMPLE / 2, y), radius, style));
                }
            }
            Mark::Line(line) => {
                let style = line_shape(&line.style);
                let points: Vec<_> = line.points().map(|(x, y)| (x.as_f64(), y.as_f64())).collect();
                let pieces = match line.style.dash {
                    LineDash::Solid => vec![points],
                    LineDash::Dashed => dash_segments(&points, scale, DASH_LENGTH),
                };
                let series = chart
                    .draw_series(pieces.into_iter().map(|piece| PathElement::new(piece, style)))
                    .map_err(render_error)?;
                if let Some(label) = label {
                    series.label(label).legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + LEGEND_SAMPLE, y)], style)
                    });
                }
            }
            Mark::HLine(hline) => {
                let style = line_shape(&hline.style);
                let y = hline.y.as_f64();
                let points = vec![(x0, y), (x1, y)];
                let pieces = match hline.style.dash {
                    LineDash::Solid => vec![points],
                    LineDash::Dashed => dash_segments(&points, scale, DASH_LENGTH),
                };
                let series = chart
                    .draw_series(pieces.into_iter().map(|piece| PathElement::new(piece, style)))
                    .map_err(render_error)?;
                if let Some(label) = label {
                    series.label(label).legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + LEGEND_SAMPLE, y)], style)
                    });
                }
            }
        }
    }

    if let (Some(legend), Some(location)) = (canvas.current_legend(), canvas.resolved_legend_location()) {
        let mut series_labels = chart.configure_series_labels();
        series_labels
            .position(label_position(location))
            .label_font(("sans-serif", params.font_size()));
        if legend.frameon {
            series_labels
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK);
        }
        series_labels.draw().map_err(render_error)?;
    }

    root.present().map_err(render_error)?;
    Ok(())
}

/// Renders `canvas` into an SVG file at `path`.
pub fn render_svg<F, P>(canvas: &Canvas<F>, path: P, params: &RenderParams) -> Result<()>
where
    F: Float,
    P: AsRef<Path>,
{
    let params = params.check_ref()?;
    let path = path.as_ref();
    let root = SVGBackend::new(path, (params.width(), params.height())).into_drawing_area();
    draw_canvas(canvas, &root, params)?;

    log::info!("wrote {}x{} figure to {}", params.width(), params.height(), path.display());
    Ok(())
}

/// Renders `canvas` into an SVG document held in memory.
pub fn render_svg_string<F: Float>(canvas: &Canvas<F>, params: &RenderParams) -> Result<String> {
    let params = params.check_ref()?;
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (params.width(), params.height()))
            .into_drawing_area();
        draw_canvas(canvas, &root, params)?;
    }
    log::debug!("rendered {} marks to an in-memory figure", canvas.marks().len());
    Ok(svg)
}
