#![forbid(unsafe_code)]

//! Box-and-whisker glyph layout, keyed reconciliation and SVG output on top of `whisker-core`.

pub mod chart;
pub mod layout;
pub mod model;
pub mod reconcile;
pub mod registry;
pub mod svg;

pub use chart::{BoxPlotChart, BoxWidthFn, CoordinateGridChart};
pub use model::{BoxGeometry, BoxGlyph, BoxPlotLayout, Highlight, RenderPass, Transition};
pub use registry::{ChartRegistry, GroupMember, SharedChart};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] whisker_core::Error),
    #[error("x scale cannot place group key {key:?}")]
    UnpositionedKey { key: String },
    #[error("unknown chart group: {group}")]
    UnknownChartGroup { group: String },
    #[error("chart {chart_id} is already borrowed (re-entrant redraw?)")]
    ChartBusy { chart_id: String },
}

pub type Result<T> = std::result::Result<T, Error>;
