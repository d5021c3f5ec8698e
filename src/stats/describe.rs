//! Descriptive statistics.

/// Arithmetic mean.
///
/// # Returns
///
/// `None` if the data is empty.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample variance with one degree of freedom removed (ddof = 1).
///
/// # Returns
///
/// `None` if fewer than 2 observations.
pub fn sample_variance(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 2 {
        return None;
    }
    let m = mean(data)?;
    let ss: f64 = data.iter().map(|v| (v - m) * (v - m)).sum();
    Some(ss / (n - 1) as f64)
}

/// Sample standard deviation (ddof = 1).
///
/// # Returns
///
/// `None` if fewer than 2 observations.
pub fn sample_std(data: &[f64]) -> Option<f64> {
    sample_variance(data).map(f64::sqrt)
}

/// Quantile with linear interpolation between order statistics.
///
/// # Algorithm
///
/// The index h = (n-1)·q is split into its floor and fraction; the result
/// interpolates linearly between the two surrounding order statistics.
/// This matches the numpy default, and the choice matters: boundary ties
/// at the computed quantile land in both cohorts of a percentile split.
///
/// # Returns
///
/// `None` if the data is empty or q is outside [0, 1].
///
/// # Examples
///
/// ```
/// use heat_study::stats::quantile;
///
/// let data = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(quantile(&data, 0.5), Some(2.5));
/// assert_eq!(quantile(&data, 0.0), Some(1.0));
/// assert_eq!(quantile(&data, 1.0), Some(4.0));
/// ```
pub fn quantile(data: &[f64], q: f64) -> Option<f64> {
    if data.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_sample_variance_uses_ddof_one() {
        // Sum of squared deviations is 8 over n-1 = 1
        assert_eq!(sample_variance(&[2.0, 6.0]), Some(8.0));
        assert_eq!(sample_variance(&[5.0]), None);
    }

    #[test]
    fn test_quantile_interpolates_linearly() {
        let data = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert_eq!(quantile(&data, 0.5), Some(30.0));
        // h = 4 * 0.1 = 0.4 between 10 and 20
        assert!((quantile(&data, 0.1).unwrap() - 14.0).abs() < 1e-12);
        assert!((quantile(&data, 0.9).unwrap() - 46.0).abs() < 1e-12);
    }

    #[test]
    fn test_quantile_rejects_bad_input() {
        assert_eq!(quantile(&[], 0.5), None);
        assert_eq!(quantile(&[1.0], 1.5), None);
    }
}
