use crate::key::GroupKey;
use rustc_hash::FxHashMap;

/// `d3.scale.category20c()`, the default palette of coordinate-grid charts.
pub const CATEGORY20C: [&str; 20] = [
    "#3182bd", "#6baed6", "#9ecae1", "#c6dbef", "#e6550d", "#fd8d3c", "#fdae6b", "#fdd0a2",
    "#31a354", "#74c476", "#a1d99b", "#c7e9c0", "#756bb1", "#9e9ac8", "#bcbddc", "#dadaeb",
    "#636363", "#969696", "#bdbdbd", "#d9d9d9",
];

/// Ordinal color scale: the first key seen takes the first palette entry, and so on.
///
/// Assignments are sticky, so a key keeps its color across redraws even when other keys come
/// and go.
#[derive(Debug, Clone)]
pub struct OrdinalColors {
    palette: Vec<String>,
    mapping: FxHashMap<GroupKey, usize>,
    next: usize,
}

impl Default for OrdinalColors {
    fn default() -> Self {
        Self::new(CATEGORY20C.iter().map(|c| c.to_string()).collect())
    }
}

impl OrdinalColors {
    pub fn new(palette: Vec<String>) -> Self {
        Self {
            palette,
            mapping: FxHashMap::default(),
            next: 0,
        }
    }

    pub fn color_for(&mut self, key: &GroupKey) -> String {
        if self.palette.is_empty() {
            return "none".to_string();
        }
        if let Some(idx) = self.mapping.get(key).copied() {
            return self.palette[idx % self.palette.len()].clone();
        }
        let idx = self.next;
        self.next += 1;
        self.mapping.insert(key.clone(), idx);
        self.palette[idx % self.palette.len()].clone()
    }
}
