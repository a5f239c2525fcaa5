#![forbid(unsafe_code)]

//! `whisker-core` is the headless half of a box-and-whisker chart: it turns grouped samples into
//! quartiles and whisker bounds and carries the scale, color, and filter state a coordinate-grid
//! chart needs. Geometry, reconciliation and SVG output live in `whisker-render`.

pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod format;
pub mod key;
pub mod scale;
pub mod stats;

pub use color::OrdinalColors;
pub use config::{BoxPlotConfig, Margins};
pub use data::{
    ColorAccessor, Group, KeyAccessor, ValueAccessor, extract_renderable_groups, json_key,
    json_values, value_extent,
};
pub use error::{Error, Result};
pub use filter::FilterSet;
pub use format::{TickFormat, default_tick_format, js_number};
pub use key::GroupKey;
pub use scale::{LinearScale, OrdinalScale, XScale};
pub use stats::{IqrWhiskers, Quartiles, WhiskerBounds, WhiskerStrategy, compute_bounds, quantile};
