//! Dataset adapter: turns host records into renderable groups.

use crate::key::GroupKey;
use crate::stats::Quartiles;
use serde_json::Value;

/// Maps a raw record to its sample.
pub type ValueAccessor<R> = Box<dyn Fn(&R) -> Vec<f64>>;
/// Maps a raw record (and its position in the host input sequence) to its identity.
pub type KeyAccessor<R> = Box<dyn Fn(&R, usize) -> GroupKey>;
/// Maps a raw record to a fill color.
pub type ColorAccessor<R> = Box<dyn Fn(&R) -> String>;

/// A record that survived the adapter: non-empty finite sample, sorted ascending, with quartiles.
#[derive(Debug, Clone)]
pub struct Group<'a, R> {
    pub record: &'a R,
    /// Position of the record in the host's input sequence.
    pub source_index: usize,
    pub values: Vec<f64>,
    pub quartiles: Quartiles,
}

impl<R> Group<'_, R> {
    pub fn min(&self) -> f64 {
        self.values[0]
    }

    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }
}

/// Extracts the groups that can be drawn, in input order.
///
/// Non-finite entries are dropped from each sample; a group whose sample ends up empty is
/// skipped rather than reported.
pub fn extract_renderable_groups<'a, R>(
    records: &'a [R],
    value_accessor: &dyn Fn(&R) -> Vec<f64>,
) -> Vec<Group<'a, R>> {
    let mut out = Vec::with_capacity(records.len());
    for (source_index, record) in records.iter().enumerate() {
        let mut values: Vec<f64> = value_accessor(record)
            .into_iter()
            .filter(|v| v.is_finite())
            .collect();
        if values.is_empty() {
            tracing::trace!(source_index, "skipping group with an empty sample");
            continue;
        }
        values.sort_by(f64::total_cmp);
        let Some(quartiles) = Quartiles::from_sorted(&values) else {
            continue;
        };
        out.push(Group {
            record,
            source_index,
            values,
            quartiles,
        });
    }
    out
}

/// Min and max over every group's sample.
pub fn value_extent<R>(groups: &[Group<'_, R>]) -> Option<(f64, f64)> {
    groups.iter().fold(None, |acc, g| match acc {
        None => Some((g.min(), g.max())),
        Some((lo, hi)) => Some((lo.min(g.min()), hi.max(g.max()))),
    })
}

fn json_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Reads the sample of a crossfilter-style `{ "key": ..., "value": [...] }` record.
///
/// A missing or non-array `value` reads as an empty sample; entries that are not numbers (or
/// numeric strings) are dropped.
pub fn json_values(record: &Value) -> Vec<f64> {
    record
        .get("value")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(json_number).collect())
        .unwrap_or_default()
}

/// Reads the `key` of a crossfilter-style record, falling back to its position in the input.
pub fn json_key(record: &Value, index: usize) -> GroupKey {
    match record.get("key") {
        Some(Value::Number(n)) => n
            .as_f64()
            .map(GroupKey::Number)
            .unwrap_or_else(|| GroupKey::Text(n.to_string())),
        Some(Value::String(s)) => GroupKey::Text(s.clone()),
        Some(Value::Null) | None => GroupKey::Number(index as f64),
        Some(other) => GroupKey::Text(other.to_string()),
    }
}
