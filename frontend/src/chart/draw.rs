//! Renders a [`ChartModel`] onto an HTML canvas with plotters.
//!
//! This module only drives the charting library; axis layout, scaling
//! and rasterization all belong to plotters.

use anyhow::{anyhow, Context, Result};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;

use super::model::ChartModel;
use crate::services::date_utils;

/// Layout padding applied on all four sides of the drawing surface.
const LAYOUT_PADDING: u32 = 20;

/// Upper bound on visible x-axis ticks; denser label sets are skipped.
const MAX_X_TICKS: usize = 20;

/// Fixed palette cycled across datasets.
const SERIES_COLORS: &[RGBColor] = &[
    RGBColor(102, 126, 234),
    RGBColor(237, 100, 166),
    RGBColor(72, 187, 120),
    RGBColor(246, 173, 85),
    RGBColor(159, 122, 234),
];

/// Per-variant rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOptions {
    /// Render a series-label legend in the plot area.
    pub show_legend: bool,
    /// Marker radius at each data point; zero suppresses markers.
    pub point_radius: i32,
    /// Format tick labels as "Mar 2024" instead of rendering them raw.
    pub month_year_ticks: bool,
}

/// Draw the model onto the canvas. Fails when the canvas has no 2D
/// context or the charting library rejects the layout; callers decide
/// how to surface that.
pub fn draw_chart(
    canvas: HtmlCanvasElement,
    model: &ChartModel,
    options: DrawOptions,
) -> Result<()> {
    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| anyhow!("canvas does not expose a 2d drawing context"))?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).context("failed to clear drawing area")?;

    let x_max = model.labels.len().saturating_sub(1).max(1) as f64;
    let (y_min, y_max) = value_bounds(model);

    let mut chart = ChartBuilder::on(&root)
        .margin(LAYOUT_PADDING)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)
        .context("failed to build chart axes")?;

    let labels = &model.labels;
    chart
        .configure_mesh()
        .x_labels(labels.len().clamp(1, MAX_X_TICKS))
        .y_labels(8)
        .x_label_formatter(&|x| tick_label(labels, *x, options.month_year_ticks))
        .label_style(("sans-serif", 12))
        .axis_style(&RGBColor(230, 230, 230))
        .light_line_style(&RGBColor(245, 245, 245))
        .draw()
        .context("failed to draw chart mesh")?;

    for (index, series) in model.datasets.iter().enumerate() {
        let color = SERIES_COLORS[index % SERIES_COLORS.len()];
        let points: Vec<(f64, f64)> = series
            .data
            .iter()
            .enumerate()
            .map(|(i, value)| (i as f64, *value))
            .collect();

        let anno = chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(2),
            ))
            .with_context(|| format!("failed to draw series {:?}", series.label))?;
        anno.label(series.label.clone()).legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
        });

        if options.point_radius > 0 {
            chart
                .draw_series(points.iter().map(|&(x, y)| {
                    Circle::new((x, y), options.point_radius, color.filled())
                }))
                .with_context(|| format!("failed to draw markers for {:?}", series.label))?;
        }
    }

    let has_labeled_series = model.datasets.iter().any(|series| !series.label.is_empty());
    if options.show_legend && has_labeled_series {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&RGBColor(230, 230, 230))
            .draw()
            .context("failed to draw legend")?;
    }

    root.present().context("failed to present chart")?;
    Ok(())
}

/// Y-axis bounds spanning every dataset with 10% headroom, anchored at
/// zero when all values are non-negative.
fn value_bounds(model: &ChartModel) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for series in &model.datasets {
        for &value in &series.data {
            min = min.min(value);
            max = max.max(value);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let range = (max - min).max(1.0);
    let padding = range * 0.1;
    (0f64.min(min - padding), max + padding)
}

/// Label for a tick position. Plotters hands back fractional key
/// points; only integer positions correspond to a category label.
fn tick_label(labels: &[String], x: f64, month_year: bool) -> String {
    let index = x.round();
    if (x - index).abs() > 0.01 || index < 0.0 {
        return String::new();
    }
    match labels.get(index as usize) {
        Some(label) if month_year => date_utils::format_month_year(label),
        Some(label) => label.clone(),
        None => String::new(),
    }
}
