//! Descriptive statistics over a slice of values.
//!
//! Every function returns `None` for an empty slice. Sums are naive
//! left-to-right accumulations. Ordering uses `f64::total_cmp`, so a `NaN`
//! in the input never panics (it sorts above `+inf`).

use serde::Serialize;

/// Arithmetic mean, kept within `[min, max]` of the data.
///
/// Rounding in the running sum can land a hair outside the data's range
/// (`[0.1, 0.1, 0.1]` sums to `0.30000000000000004`), and a sum of large
/// values can overflow to infinity. Both are clamped back to the extremes.
pub fn mean(data: &[f64]) -> Option<f64> {
    let lo = min(data)?;
    let hi = max(data)?;
    let raw = data.iter().sum::<f64>() / data.len() as f64;
    Some(clamp_between(raw, lo, hi))
}

/// Population variance (divisor `n`). The mean is recomputed on every call.
pub fn variance(data: &[f64]) -> Option<f64> {
    let mean = mean(data)?;
    let sum_sq = data.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    Some(sum_sq / data.len() as f64)
}

/// Population standard deviation, `sqrt(variance)`.
pub fn std_dev(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// Smallest value, ordered by `f64::total_cmp`.
pub fn min(data: &[f64]) -> Option<f64> {
    data.iter().copied().min_by(f64::total_cmp)
}

/// Largest value, ordered by `f64::total_cmp`.
pub fn max(data: &[f64]) -> Option<f64> {
    data.iter().copied().max_by(f64::total_cmp)
}

/// Median of a sorted copy; `data` itself is left untouched.
///
/// Odd length returns the middle element, even length the average of the
/// two middle elements. The halves are added separately so two values near
/// `f64::MAX` do not overflow.
pub fn median(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let mid = count / 2;
    if count % 2 == 0 {
        let (lo, hi) = (sorted[mid - 1], sorted[mid]);
        Some(clamp_between(lo / 2.0 + hi / 2.0, lo, hi))
    } else {
        Some(sorted[mid])
    }
}

// NaN passes through untouched; `f64::clamp` would panic on NaN bounds.
fn clamp_between(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        value
    } else {
        value.max(lo).min(hi)
    }
}

/// Statistics for a data series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesStats {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

impl SeriesStats {
    /// Compute every statistic at once. `None` if `data` is empty.
    pub fn compute(data: &[f64]) -> Option<Self> {
        let variance = variance(data)?;
        Some(SeriesStats {
            count: data.len(),
            mean: mean(data)?,
            variance,
            std_dev: variance.sqrt(),
            min: min(data)?,
            max: max(data)?,
            median: median(data)?,
        })
    }
}
