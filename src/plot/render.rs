//! Plotters-backed overlay rendering.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::density::{Histogram, Kde, histogram, kde};
use super::{DistributionSeries, OverlayChart};
use crate::error::{Result, StudyError};

/// Per-series translucency of the histogram bars
const BAR_ALPHA: f64 = 0.35;

fn plot_err<E: std::error::Error>(e: E) -> StudyError {
    StudyError::Plot(e.to_string())
}

/// Sturges' rule bin count
fn bin_count(n: usize) -> usize {
    ((n as f64).log2().ceil() as usize + 1).max(1)
}

/// One series prepared for drawing
struct PreparedSeries<'a> {
    label: &'a str,
    hist: Histogram,
    kde: Kde,
}

fn prepare(series: &DistributionSeries) -> Option<PreparedSeries<'_>> {
    Some(PreparedSeries {
        label: &series.label,
        hist: histogram(&series.values, bin_count(series.values.len()))?,
        kde: kde(&series.values)?,
    })
}

/// Draw an overlaid-distribution chart onto a drawing area
///
/// Each cohort gets translucent histogram bars plus its kernel-density
/// curve, sharing one axis; the legend carries the cohort labels.
/// Cohorts too degenerate for a density (fewer than 2 values, zero
/// variance) are left out of the drawing.
pub fn render_overlay<DB: DrawingBackend>(
    chart: &OverlayChart,
    root: &DrawingArea<DB, Shift>,
) -> Result<()> {
    root.fill(&WHITE).map_err(plot_err)?;

    let prepared: Vec<PreparedSeries<'_>> = chart.series.iter().filter_map(prepare).collect();
    if prepared.is_empty() {
        return Ok(());
    }

    let x_min = prepared.iter().map(|s| s.kde.x[0]).fold(f64::INFINITY, f64::min);
    let x_max = prepared
        .iter()
        .map(|s| *s.kde.x.last().unwrap_or(&f64::NEG_INFINITY))
        .fold(f64::NEG_INFINITY, f64::max);
    let y_max = prepared
        .iter()
        .flat_map(|s| s.kde.density.iter().chain(s.hist.densities.iter()))
        .fold(0.0f64, |acc, &d| acc.max(d));

    let mut builder = ChartBuilder::on(root);
    let mut ctx = builder
        .caption(&chart.title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max * 1.05)
        .map_err(plot_err)?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc("density")
        .draw()
        .map_err(plot_err)?;

    for (idx, series) in prepared.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();

        let bars = series.hist.densities.iter().enumerate().map(|(i, &d)| {
            Rectangle::new(
                [(series.hist.edges[i], 0.0), (series.hist.edges[i + 1], d)],
                color.mix(BAR_ALPHA).filled(),
            )
        });
        ctx.draw_series(bars).map_err(plot_err)?;

        let curve = series.kde.x.iter().copied().zip(series.kde.density.iter().copied());
        ctx.draw_series(LineSeries::new(curve, color.stroke_width(2)))
            .map_err(plot_err)?
            .label(series.label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    ctx.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;
    root.present().map_err(plot_err)?;
    Ok(())
}

/// Render a chart to an SVG file
pub fn render_svg(chart: &OverlayChart, path: &Path, size: (u32, u32)) -> Result<()> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    render_overlay(chart, &root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_chart() -> OverlayChart {
        OverlayChart::new("suicide rate distribution", "suicide rate")
            .with_series("April-August", vec![10.0, 11.0, 12.5, 11.5, 10.5, 13.0])
            .with_series("November-March", vec![12.0, 13.5, 14.0, 13.0, 15.0, 12.5])
    }

    #[test]
    fn test_renders_to_svg_without_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.svg");
        render_svg(&sample_chart(), &path, (800, 600)).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_degenerate_series_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");
        let chart = OverlayChart::new("empty", "x").with_series("flat", vec![1.0, 1.0, 1.0]);
        render_svg(&chart, &path, (400, 300)).unwrap();
    }
}
