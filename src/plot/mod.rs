//! Overlaid-distribution charts
//!
//! The comparator hands each cohort's raw values to an [`OverlayChart`];
//! [`density`] turns them into normalized histogram and kernel-density
//! series, and [`render`] draws the overlay onto any `plotters` drawing
//! area. Only the renderer touches a drawing surface — the chart object
//! itself is plain data.

pub mod density;
pub mod render;

pub use density::{Histogram, Kde, histogram, kde};
pub use render::{render_overlay, render_svg};

/// One cohort's values with its legend label
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSeries {
    pub label: String,
    pub values: Vec<f64>,
}

/// An overlaid distribution comparison of two or more cohorts
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayChart {
    pub title: String,
    pub x_label: String,
    pub series: Vec<DistributionSeries>,
}

impl OverlayChart {
    /// Create an empty chart
    #[must_use]
    pub fn new(title: impl Into<String>, x_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            series: Vec::new(),
        }
    }

    /// Add a cohort's values under a legend label
    #[must_use]
    pub fn with_series(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.series.push(DistributionSeries {
            label: label.into(),
            values,
        });
        self
    }
}
