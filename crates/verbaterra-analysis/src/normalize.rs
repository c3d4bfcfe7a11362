//! Column statistics shared by the engines and metrics.

use verbaterra_core::constants::NORMALIZE_RANGE_TOLERANCE;

/// Min-max scale `values` into [0, 1].
///
/// A zero range (all values equal, or a single value) yields all zeros
/// instead of dividing by zero.
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range.abs() <= NORMALIZE_RANGE_TOLERANCE {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v - min) / range).collect()
}

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divisor `n`). NaN for an empty slice.
pub fn population_std(values: &[f64]) -> f64 {
    let m = mean(values);
    if m.is_nan() {
        return f64::NAN;
    }
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Trailing rolling mean with `min_periods = 1`: row `i` averages the
/// non-NaN rows in `max(0, i + 1 - window)..=i`, or is NaN when there are
/// none. A window of 0 is treated as 1.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let lo = (i + 1).saturating_sub(window);
            let (sum, count) = values[lo..=i]
                .iter()
                .filter(|v| !v.is_nan())
                .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
            if count == 0 {
                f64::NAN
            } else {
                sum / count as f64
            }
        })
        .collect()
}

/// Evenly spaced points from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bounds() {
        let out = min_max_normalize(&[2.0, 4.0, 6.0]);
        assert_eq!(out, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_constant_column_all_zeros() {
        assert_eq!(min_max_normalize(&[3.3, 3.3, 3.3]), vec![0.0; 3]);
        assert_eq!(min_max_normalize(&[7.0]), vec![0.0]);
        assert!(min_max_normalize(&[]).is_empty());
    }

    #[test]
    fn test_range_within_tolerance_is_zero() {
        assert_eq!(min_max_normalize(&[1.0, 1.0 + 1e-9]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_rolling_mean_min_periods_one() {
        let out = rolling_mean(&[1.0, 2.0, 3.0, 4.0], 3);
        assert_eq!(out, vec![1.0, 1.5, 2.0, 3.0]);
        assert_eq!(rolling_mean(&[5.0, 1.0], 0), vec![5.0, 1.0]);
    }

    #[test]
    fn test_rolling_mean_skips_nan() {
        let out = rolling_mean(&[1.0, f64::NAN, 3.0, 5.0, 2.0], 3);
        assert_eq!(out, vec![1.0, 1.0, 2.0, 4.0, 10.0 / 3.0]);
        assert!(rolling_mean(&[f64::NAN, f64::NAN], 2).iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_population_std() {
        let std = population_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((std - 2.0).abs() < 1e-12);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_linspace_endpoints() {
        let t = linspace(0.0, 1.0, 5);
        assert_eq!(t, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
    }
}
