use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a group (and of the glyph drawn for it).
///
/// Crossfilter-style groups key their buckets by either a number or a string, so the key is an
/// untagged union of the two. Numeric keys compare by bit pattern after folding `-0` into `0`,
/// which keeps `Eq` and `Hash` consistent for use as a map key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupKey {
    Number(f64),
    Text(String),
}

impl GroupKey {
    /// Numeric position of the key on a continuous axis.
    ///
    /// Text keys that parse as numbers are accepted (`"3"` lands at `3.0`).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GroupKey::Number(n) => Some(*n).filter(|n| n.is_finite()),
            GroupKey::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GroupKey::Text(s) => Some(s.as_str()),
            GroupKey::Number(_) => None,
        }
    }

    fn number_bits(n: f64) -> u64 {
        if n == 0.0 { 0.0f64.to_bits() } else { n.to_bits() }
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (GroupKey::Number(a), GroupKey::Number(b)) => {
                Self::number_bits(*a) == Self::number_bits(*b)
            }
            (GroupKey::Text(a), GroupKey::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for GroupKey {}

impl Hash for GroupKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            GroupKey::Number(n) => {
                0u8.hash(state);
                Self::number_bits(*n).hash(state);
            }
            GroupKey::Text(s) => {
                1u8.hash(state);
                s.hash(state);
            }
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Number(n) => f.write_str(&crate::format::js_number(*n)),
            GroupKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for GroupKey {
    fn from(value: &str) -> Self {
        GroupKey::Text(value.to_string())
    }
}

impl From<String> for GroupKey {
    fn from(value: String) -> Self {
        GroupKey::Text(value)
    }
}

impl From<f64> for GroupKey {
    fn from(value: f64) -> Self {
        GroupKey::Number(value)
    }
}

impl From<i64> for GroupKey {
    fn from(value: i64) -> Self {
        GroupKey::Number(value as f64)
    }
}
