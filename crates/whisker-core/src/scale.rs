//! Minimal x/y scales for a coordinate-grid chart.

use crate::key::GroupKey;
use indexmap::IndexSet;

/// Ordinal band scale (`d3.scale.ordinal().rangeBands(...)` semantics).
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale {
    domain: IndexSet<GroupKey>,
    range: (f64, f64),
    padding: f64,
    outer_padding: f64,
}

impl Default for OrdinalScale {
    fn default() -> Self {
        Self {
            domain: IndexSet::new(),
            range: (0.0, 1.0),
            padding: 0.0,
            outer_padding: 0.0,
        }
    }
}

impl OrdinalScale {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain(&self) -> &IndexSet<GroupKey> {
        &self.domain
    }

    /// Replaces the domain; duplicate keys keep their first position.
    pub fn set_domain<I: IntoIterator<Item = GroupKey>>(&mut self, keys: I) {
        self.domain = keys.into_iter().collect();
    }

    pub fn range_bands(&mut self, range: (f64, f64), padding: f64, outer_padding: f64) {
        self.range = range;
        self.padding = padding;
        self.outer_padding = outer_padding;
    }

    fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        let denom = n - self.padding + 2.0 * self.outer_padding;
        if self.domain.is_empty() || denom <= 0.0 {
            return 0.0;
        }
        (self.range.1 - self.range.0) / denom
    }

    pub fn band_width(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of the band for `key`, or `None` when the key is not in the domain.
    pub fn position(&self, key: &GroupKey) -> Option<f64> {
        let idx = self.domain.get_index_of(key)?;
        let step = self.step();
        Some(self.range.0 + step * self.outer_padding + step * idx as f64)
    }
}

/// Unclamped linear mapping from `domain` to `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl Default for LinearScale {
    fn default() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 {
            return r0 + (r1 - r0) * 0.5;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum XScale {
    Ordinal(OrdinalScale),
    Linear(LinearScale),
}

impl Default for XScale {
    fn default() -> Self {
        XScale::Ordinal(OrdinalScale::default())
    }
}

impl XScale {
    pub fn is_ordinal(&self) -> bool {
        matches!(self, XScale::Ordinal(_))
    }

    /// Band width of an ordinal scale; continuous scales have none.
    pub fn band_width(&self) -> Option<f64> {
        match self {
            XScale::Ordinal(s) => Some(s.band_width()),
            XScale::Linear(_) => None,
        }
    }

    /// Pixel offset of the key's box.
    pub fn position(&self, key: &GroupKey) -> Option<f64> {
        match self {
            XScale::Ordinal(s) => s.position(key),
            XScale::Linear(s) => key.as_f64().map(|v| s.apply(v)),
        }
    }

    /// Number of x units the plotting width is divided into.
    ///
    /// Ordinal: one per domain key. Continuous: whole units between the domain ends
    /// (`dc.units.integers`), never less than one.
    pub fn unit_count(&self) -> usize {
        match self {
            XScale::Ordinal(s) => s.domain().len().max(1),
            XScale::Linear(s) => {
                let span = (s.domain.1 - s.domain.0).abs();
                if span.is_finite() {
                    (span.round() as usize).max(1)
                } else {
                    1
                }
            }
        }
    }

    /// Drops the domain so the next pass rebuilds it from data.
    pub fn reset_domain(&mut self) {
        match self {
            XScale::Ordinal(s) => s.set_domain(std::iter::empty()),
            XScale::Linear(s) => s.domain = (0.0, 0.0),
        }
    }

    /// Rebuilds the domain from the keys being drawn, in draw order.
    pub fn fit_domain<'a, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'a GroupKey>,
    {
        match self {
            XScale::Ordinal(s) => s.set_domain(keys.into_iter().cloned()),
            XScale::Linear(s) => {
                let extent = keys
                    .into_iter()
                    .filter_map(GroupKey::as_f64)
                    .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                        None => Some((v, v)),
                        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                    });
                if let Some(extent) = extent {
                    s.domain = extent;
                }
            }
        }
    }

    /// Appends keys missing from an ordinal domain, the way d3 ordinal scales grow on lookup.
    /// Continuous scales are left alone.
    pub fn extend_domain<'a, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'a GroupKey>,
    {
        if let XScale::Ordinal(s) = self {
            for key in keys {
                s.domain.insert(key.clone());
            }
        }
    }

    /// Lays the scale out across `[0, width]`.
    pub fn set_extent(&mut self, width: f64, padding: f64, outer_padding: f64) {
        match self {
            XScale::Ordinal(s) => s.range_bands((0.0, width), padding, outer_padding),
            XScale::Linear(s) => s.range = (0.0, width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<GroupKey> {
        names.iter().map(|n| GroupKey::from(*n)).collect()
    }

    #[test]
    fn ordinal_bands_follow_d3_range_bands() {
        let mut s = OrdinalScale::new();
        s.set_domain(keys(&["a", "b", "c"]));
        s.range_bands((0.0, 270.0), 0.8, 0.5);
        // step = 270 / (3 - 0.8 + 1) = 84.375
        let step = 270.0 / 3.2;
        assert!((s.band_width() - step * 0.2).abs() < 1e-9);
        assert!((s.position(&GroupKey::from("a")).unwrap() - step * 0.5).abs() < 1e-9);
        assert!((s.position(&GroupKey::from("c")).unwrap() - step * 2.5).abs() < 1e-9);
        assert_eq!(s.position(&GroupKey::from("zzz")), None);
    }

    #[test]
    fn empty_ordinal_domain_has_zero_bands() {
        let s = OrdinalScale::new();
        assert_eq!(s.band_width(), 0.0);
    }

    #[test]
    fn linear_scale_maps_and_handles_degenerate_domain() {
        let s = LinearScale::new((0.0, 10.0), (100.0, 0.0));
        assert_eq!(s.apply(0.0), 100.0);
        assert_eq!(s.apply(10.0), 0.0);
        assert_eq!(s.apply(2.5), 75.0);
        let flat = LinearScale::new((4.0, 4.0), (0.0, 50.0));
        assert_eq!(flat.apply(4.0), 25.0);
    }

    #[test]
    fn linear_x_fits_numeric_keys_and_counts_integer_units() {
        let mut x = XScale::Linear(LinearScale::default());
        let ks = vec![GroupKey::from(3i64), GroupKey::from("9"), GroupKey::from(1i64)];
        x.fit_domain(&ks);
        x.set_extent(800.0, 0.8, 0.5);
        assert_eq!(x.unit_count(), 8);
        assert_eq!(x.position(&GroupKey::from(1i64)), Some(0.0));
        assert_eq!(x.position(&GroupKey::from("north")), None);
        assert!(x.band_width().is_none());
    }

    #[test]
    fn reset_then_fit_rebuilds_ordinal_domain() {
        let mut x = XScale::default();
        x.fit_domain(&keys(&["a", "b"]));
        x.reset_domain();
        x.fit_domain(&keys(&["c"]));
        assert_eq!(x.unit_count(), 1);
        let XScale::Ordinal(s) = &x else {
            panic!("expected ordinal scale");
        };
        assert_eq!(s.domain().len(), 1);
    }
}
