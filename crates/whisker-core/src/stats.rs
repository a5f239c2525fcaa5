//! Quartiles and whisker bounds for a single group's sample.
//!
//! Everything here operates on an ascending, finite sample as produced by
//! [`crate::data::extract_renderable_groups`].

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WHISKER_IQR_FACTOR: f64 = 1.5;

/// Linear-interpolated quantile (R-7, the `d3.quantile` definition) of an ascending sample.
pub fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || !p.is_finite() {
        return None;
    }
    if p <= 0.0 || n == 1 {
        return Some(sorted[0]);
    }
    if p >= 1.0 {
        return Some(sorted[n - 1]);
    }
    let h = (n - 1) as f64 * p;
    let i = h.floor() as usize;
    let lo = sorted[i];
    let hi = sorted[(i + 1).min(n - 1)];
    Some(lo + (hi - lo) * (h - i as f64))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

impl Quartiles {
    pub fn new(q1: f64, median: f64, q3: f64) -> Self {
        Self { q1, median, q3 }
    }

    /// Returns `None` for an empty sample; callers filter such groups out before rendering.
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        Some(Self {
            q1: quantile(sorted, 0.25)?,
            median: quantile(sorted, 0.5)?,
            q3: quantile(sorted, 0.75)?,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.q1, self.median, self.q3]
    }
}

/// Inclusive index range `[low, high]` of the non-outlier part of an ascending sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhiskerBounds {
    pub low: usize,
    pub high: usize,
}

impl WhiskerBounds {
    pub fn new(low: usize, high: usize) -> Self {
        Self { low, high }
    }

    /// Whiskers spanning the whole sample.
    pub fn full(len: usize) -> Self {
        Self {
            low: 0,
            high: len.saturating_sub(1),
        }
    }

    /// Forces the bounds into `0 <= low <= high <= len - 1`.
    ///
    /// An inverted range collapses to the whole sample, the same tie-break
    /// [`compute_bounds`] uses for an empty fence.
    pub fn clamp_to(self, len: usize) -> Self {
        let last = len.saturating_sub(1);
        let low = self.low.min(last);
        let high = self.high.min(last);
        if low > high {
            Self::full(len)
        } else {
            Self { low, high }
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.low..=self.high).contains(&index)
    }
}

/// Finds the first and last sample values inside `[q1 - k*IQR, q3 + k*IQR]`.
///
/// When no value lies inside the fence (every value is an outlier on one side, or the two
/// scans cross), the bounds clamp to the whole sample `[0, len - 1]` and nothing is drawn as
/// an outlier.
pub fn compute_bounds(sorted: &[f64], quartiles: &Quartiles, k: f64) -> WhiskerBounds {
    if sorted.is_empty() {
        return WhiskerBounds::full(0);
    }
    let iqr = quartiles.iqr() * k;
    let lower_fence = quartiles.q1 - iqr;
    let upper_fence = quartiles.q3 + iqr;

    let low = sorted.iter().position(|&v| v >= lower_fence);
    let high = sorted.iter().rposition(|&v| v <= upper_fence);

    match (low, high) {
        (Some(low), Some(high)) if low <= high => WhiskerBounds { low, high },
        _ => {
            tracing::debug!(
                len = sorted.len(),
                lower_fence,
                upper_fence,
                "whisker fence holds no values; clamping to the full sample"
            );
            WhiskerBounds::full(sorted.len())
        }
    }
}

/// Strategy deciding which part of a sample the whiskers cover.
///
/// Any `Fn(&[f64], &Quartiles) -> WhiskerBounds` closure is a strategy.
pub trait WhiskerStrategy {
    fn bounds(&self, sorted: &[f64], quartiles: &Quartiles) -> WhiskerBounds;
}

impl<F> WhiskerStrategy for F
where
    F: Fn(&[f64], &Quartiles) -> WhiskerBounds,
{
    fn bounds(&self, sorted: &[f64], quartiles: &Quartiles) -> WhiskerBounds {
        self(sorted, quartiles)
    }
}

/// Tukey fences: whiskers reach the most extreme values within `factor * IQR` of the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrWhiskers {
    factor: f64,
}

impl IqrWhiskers {
    pub fn new(factor: f64) -> Result<Self> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(Error::InvalidWhiskerFactor { factor });
        }
        Ok(Self { factor })
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Default for IqrWhiskers {
    fn default() -> Self {
        Self {
            factor: DEFAULT_WHISKER_IQR_FACTOR,
        }
    }
}

impl WhiskerStrategy for IqrWhiskers {
    fn bounds(&self, sorted: &[f64], quartiles: &Quartiles) -> WhiskerBounds {
        compute_bounds(sorted, quartiles, self.factor)
    }
}
