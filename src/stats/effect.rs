//! Standardized effect size.

/// Cohen's d effect size for two samples.
///
/// # Algorithm
///
/// Absolute standardized mean difference over the pooled standard
/// deviation, with ddof-corrected sample variances:
///
/// d = |x̄ - ȳ| / √(((n₁-1)·s₁² + (n₂-1)·s₂²) / (n₁+n₂-2))
///
/// Standard interpretation thresholds:
///
/// | d    | Effect size | Reference        |
/// |------|-------------|------------------|
/// | 0.01 | Very small  | Sawilowsky, 2009 |
/// | 0.20 | Small       | Cohen, 1988      |
/// | 0.50 | Medium      | Cohen, 1988      |
/// | 0.80 | Large       | Cohen, 1988      |
/// | 1.20 | Very large  | Sawilowsky, 2009 |
/// | 2.0  | Huge        | Sawilowsky, 2009 |
///
/// Degenerate input — n₁ + n₂ ≤ 2, or two zero-variance samples with equal
/// means — yields NaN, not 0: a vanishing pooled denominator leaves the
/// quantity undefined.
pub fn cohen_d(x: &[f64], y: &[f64]) -> f64 {
    let nx = x.len() as f64;
    let ny = y.len() as f64;
    let dof = nx + ny - 2.0;
    let var_x = super::sample_variance(x).unwrap_or(f64::NAN);
    let var_y = super::sample_variance(y).unwrap_or(f64::NAN);
    let s_squared = ((nx - 1.0) * var_x + (ny - 1.0) * var_y) / dof;

    let mean_x = super::mean(x).unwrap_or(f64::NAN);
    let mean_y = super::mean(y).unwrap_or(f64::NAN);
    ((mean_x - mean_y) / s_squared.sqrt()).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_value() {
        // Both samples have variance 2, pooled sd √2, mean gap 2
        let d = cohen_d(&[2.0, 4.0], &[0.0, 2.0]);
        assert!((d - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_symmetry_and_non_negativity() {
        let x = [5.0, 7.0, 9.0, 6.0];
        let y = [1.0, 2.0, 3.0];
        assert!((cohen_d(&x, &y) - cohen_d(&y, &x)).abs() < 1e-12);
        assert!(cohen_d(&x, &y) >= 0.0);
    }

    #[test]
    fn test_degenerate_samples_are_nan_not_zero() {
        // No variance and no mean difference: denominator is 0, result
        // is undefined rather than silently 0
        assert!(cohen_d(&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0]).is_nan());
        // Combined length 2 leaves zero pooled degrees of freedom
        assert!(cohen_d(&[1.0], &[2.0]).is_nan());
    }
}
