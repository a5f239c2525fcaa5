#![forbid(unsafe_code)]

//! `whisker` is a headless box-and-whisker chart in Rust.
//!
//! # Features
//!
//! - `render`: enable glyph layout, keyed reconciliation and SVG output (`whisker::render`)

pub use whisker_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use whisker_render::chart::{BoxPlotChart, BoxWidthFn, CoordinateGridChart};
    pub use whisker_render::model::{
        BoxGeometry, BoxGlyph, BoxPlotLayout, Highlight, RenderPass, Transition,
    };
    pub use whisker_render::registry::{ChartRegistry, GroupMember, SharedChart};
    pub use whisker_render::svg::{SvgRenderOptions, render_box_plot_svg};

    use serde_json::Value;

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Config(#[from] whisker_core::Error),
        #[error(transparent)]
        Render(#[from] whisker_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Lays out crossfilter-style records (`{ "key": ..., "value": [...] }`) once.
    ///
    /// The chart uses an ordinal x axis and reads its options from the `boxPlot` section of
    /// `effective_config`.
    pub fn layout_json_box_plot(
        records: Vec<Value>,
        effective_config: &Value,
    ) -> Result<BoxPlotLayout> {
        let config = whisker_core::BoxPlotConfig::from_effective_config(effective_config)?;
        let host = CoordinateGridChart::from_config(&config, "default");
        let mut chart =
            BoxPlotChart::from_json_source("boxplot", host, &config, move || records.clone())?;
        chart.render()?;
        Ok(chart.layout())
    }

    /// One-shot SVG render of crossfilter-style records.
    pub fn render_json_box_plot_svg(
        records: Vec<Value>,
        effective_config: &Value,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        let layout = layout_json_box_plot(records, effective_config)?;
        Ok(render_box_plot_svg(&layout, svg_options))
    }
}
