//! Histogram and kernel-density series.

use crate::stats;

/// Grid resolution for kernel-density curves
const KDE_POINTS: usize = 200;

/// A density-normalized histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin edges (length = bins + 1).
    pub edges: Vec<f64>,
    /// Density per bin; bar areas sum to 1.
    pub densities: Vec<f64>,
}

/// A Gaussian kernel density estimate evaluated on a regular grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Kde {
    pub x: Vec<f64>,
    pub density: Vec<f64>,
    pub bandwidth: f64,
}

/// Equal-width histogram normalized to a density.
///
/// # Returns
///
/// `None` if fewer than 2 values, zero bins requested, or zero range.
pub fn histogram(values: &[f64], bins: usize) -> Option<Histogram> {
    if values.len() < 2 || bins == 0 {
        return None;
    }
    let min = values.iter().copied().reduce(f64::min)?;
    let max = values.iter().copied().reduce(f64::max)?;
    let range = max - min;
    if !(range > 0.0) {
        return None;
    }

    let width = range / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| min + i as f64 * width).collect();
    let mut counts = vec![0usize; bins];
    for &v in values {
        let i = (((v - min) / width) as usize).min(bins - 1);
        counts[i] += 1;
    }

    let norm = 1.0 / (values.len() as f64 * width);
    let densities = counts.iter().map(|&c| c as f64 * norm).collect();
    Some(Histogram { edges, densities })
}

/// Scott's-rule bandwidth: h = σ·n^(-1/5).
fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    let sd = stats::sample_std(values)?;
    if !(sd > 0.0) {
        return None;
    }
    Some(sd * (values.len() as f64).powf(-0.2))
}

/// Gaussian kernel density estimate.
///
/// # Algorithm
///
/// Scott's-rule bandwidth; the evaluation grid extends 3 bandwidths past
/// the data range.
///
/// # Returns
///
/// `None` if fewer than 2 values or zero variance.
pub fn kde(values: &[f64]) -> Option<Kde> {
    let bandwidth = scott_bandwidth(values)?;
    let min = values.iter().copied().reduce(f64::min)?;
    let max = values.iter().copied().reduce(f64::max)?;
    let x_min = min - 3.0 * bandwidth;
    let x_max = max + 3.0 * bandwidth;
    let step = (x_max - x_min) / (KDE_POINTS - 1) as f64;

    let x: Vec<f64> = (0..KDE_POINTS).map(|i| x_min + i as f64 * step).collect();

    let inv_h = 1.0 / bandwidth;
    let inv_nh = inv_h / values.len() as f64;
    let inv_sqrt_2pi = 1.0 / (2.0 * std::f64::consts::PI).sqrt();
    let density: Vec<f64> = x
        .iter()
        .map(|&xi| {
            let sum: f64 = values
                .iter()
                .map(|&xj| {
                    let u = (xi - xj) * inv_h;
                    inv_sqrt_2pi * (-0.5 * u * u).exp()
                })
                .sum();
            sum * inv_nh
        })
        .collect();

    Some(Kde {
        x,
        density,
        bandwidth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_bar_areas_sum_to_one() {
        let values = [1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0];
        let hist = histogram(&values, 4).unwrap();
        assert_eq!(hist.edges.len(), 5);
        let width = hist.edges[1] - hist.edges[0];
        let total: f64 = hist.densities.iter().map(|d| d * width).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_histogram_maximum_lands_in_last_bin() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0];
        let hist = histogram(&values, 4).unwrap();
        // 4.0 sits exactly on the final edge
        assert!(hist.densities[3] > 0.0);
    }

    #[test]
    fn test_histogram_degenerate_input() {
        assert!(histogram(&[1.0], 4).is_none());
        assert!(histogram(&[2.0, 2.0, 2.0], 4).is_none());
    }

    #[test]
    fn test_kde_grid_covers_data_range() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let k = kde(&values).unwrap();
        assert_eq!(k.x.len(), 200);
        assert!(k.x[0] < 1.0);
        assert!(*k.x.last().unwrap() > 5.0);
        assert!(k.density.iter().all(|&d| d >= 0.0));
        // Density integrates to roughly 1 over the grid
        let step = k.x[1] - k.x[0];
        let total: f64 = k.density.iter().map(|d| d * step).sum();
        assert!((total - 1.0).abs() < 0.05);
    }
}
