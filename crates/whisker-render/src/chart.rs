//! The box plot chart component and the coordinate-grid capabilities it is built on.

use crate::layout::{GlyphFrame, default_box_width, layout_box_geometry};
use crate::model::{BoxGlyph, BoxPlotLayout, Highlight, RenderPass, Transition};
use crate::reconcile::reconcile;
use crate::registry::{ChartRegistry, GroupMember};
use crate::{Error, Result};
use indexmap::IndexMap;
use serde_json::Value;
use whisker_core::{
    BoxPlotConfig, ColorAccessor, FilterSet, GroupKey, IqrWhiskers, KeyAccessor, LinearScale,
    Margins, OrdinalColors, TickFormat, ValueAccessor, WhiskerStrategy, XScale,
    Group, default_tick_format, extract_renderable_groups, json_key, json_values, value_extent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    /// Replace every glyph; nothing animates.
    Render,
    /// Reconcile against the retained glyphs; persisting ones animate.
    Redraw,
}

/// Computes the box width from the x scale, the plot width and the x unit count.
pub type BoxWidthFn = Box<dyn Fn(&XScale, f64, usize) -> f64>;

/// What a coordinate-grid host hands to a chart: scales, filter state, layout and timing.
#[derive(Debug, Clone)]
pub struct CoordinateGridChart {
    pub x: XScale,
    pub y: LinearScale,
    pub filters: FilterSet,
    /// Name of the chart group redrawn together after a filter change.
    pub chart_group: String,
    pub transition_duration_ms: u64,
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub elastic_x: bool,
    pub elastic_y: bool,
}

impl CoordinateGridChart {
    /// An ordinal-x host sized and timed from `config`.
    pub fn from_config(config: &BoxPlotConfig, chart_group: impl Into<String>) -> Self {
        Self {
            x: XScale::default(),
            y: LinearScale::default(),
            filters: FilterSet::new(),
            chart_group: chart_group.into(),
            transition_duration_ms: config.transition_duration_ms,
            width: config.width,
            height: config.height,
            margins: config.margins,
            elastic_x: config.elastic_x,
            elastic_y: config.elastic_y,
        }
    }

    pub fn with_x(mut self, x: XScale) -> Self {
        self.x = x;
        self
    }

    pub fn effective_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    pub fn effective_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    pub fn has_filter(&self) -> bool {
        self.filters.has_filter()
    }

    pub fn has_filter_key(&self, key: &GroupKey) -> bool {
        self.filters.contains(key)
    }
}

/// Box-and-whisker chart: one glyph per non-empty group, reconciled by key on every pass.
pub struct BoxPlotChart<R> {
    id: String,
    host: CoordinateGridChart,
    box_padding: f64,
    outer_padding: f64,
    y_axis_padding: f64,
    source: Box<dyn Fn() -> Vec<R>>,
    value_accessor: ValueAccessor<R>,
    key_accessor: KeyAccessor<R>,
    color_accessor: Option<ColorAccessor<R>>,
    colors: OrdinalColors,
    whiskers: Box<dyn WhiskerStrategy>,
    box_width: Option<BoxWidthFn>,
    tick_format: TickFormat,
    glyphs: IndexMap<GroupKey, BoxGlyph>,
    next_serial: u64,
}

impl<R> std::fmt::Debug for BoxPlotChart<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxPlotChart")
            .field("id", &self.id)
            .field("host", &self.host)
            .field("glyphs", &self.glyphs.len())
            .finish_non_exhaustive()
    }
}

impl BoxPlotChart<Value> {
    /// Chart over crossfilter-style `{ "key": ..., "value": [...] }` records.
    pub fn from_json_source(
        id: impl Into<String>,
        host: CoordinateGridChart,
        config: &BoxPlotConfig,
        source: impl Fn() -> Vec<Value> + 'static,
    ) -> Result<Self> {
        Self::new(id, host, config, source, json_values, json_key)
    }
}

impl<R> BoxPlotChart<R> {
    pub fn new(
        id: impl Into<String>,
        host: CoordinateGridChart,
        config: &BoxPlotConfig,
        source: impl Fn() -> Vec<R> + 'static,
        value_accessor: impl Fn(&R) -> Vec<f64> + 'static,
        key_accessor: impl Fn(&R, usize) -> GroupKey + 'static,
    ) -> Result<Self> {
        config.validate()?;
        let whiskers = IqrWhiskers::new(config.whisker_iqr_factor)?;
        Ok(Self {
            id: id.into(),
            host,
            box_padding: config.box_padding,
            outer_padding: config.outer_padding,
            y_axis_padding: config.y_axis_padding,
            source: Box::new(source),
            value_accessor: Box::new(value_accessor),
            key_accessor: Box::new(key_accessor),
            color_accessor: None,
            colors: OrdinalColors::default(),
            whiskers: Box::new(whiskers),
            box_width: None,
            tick_format: default_tick_format(),
            glyphs: IndexMap::new(),
            next_serial: 0,
        })
    }

    pub fn with_whiskers(mut self, strategy: impl WhiskerStrategy + 'static) -> Self {
        self.whiskers = Box::new(strategy);
        self
    }

    pub fn with_whisker_iqr_factor(self, factor: f64) -> Result<Self> {
        Ok(self.with_whiskers(IqrWhiskers::new(factor)?))
    }

    pub fn with_box_width(mut self, f: impl Fn(&XScale, f64, usize) -> f64 + 'static) -> Self {
        self.box_width = Some(Box::new(f));
        self
    }

    pub fn with_tick_format(mut self, f: impl Fn(f64) -> String + 'static) -> Self {
        self.tick_format = Box::new(f);
        self
    }

    pub fn with_color_accessor(mut self, f: impl Fn(&R) -> String + 'static) -> Self {
        self.color_accessor = Some(Box::new(f));
        self
    }

    pub fn with_colors(mut self, colors: OrdinalColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn set_source(&mut self, source: impl Fn() -> Vec<R> + 'static) {
        self.source = Box::new(source);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn host(&self) -> &CoordinateGridChart {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut CoordinateGridChart {
        &mut self.host
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &BoxGlyph> {
        self.glyphs.values()
    }

    pub fn glyph(&self, key: &GroupKey) -> Option<&BoxGlyph> {
        self.glyphs.get(key)
    }

    pub fn glyph_keys(&self) -> Vec<GroupKey> {
        self.glyphs.keys().cloned().collect()
    }

    /// Drops every glyph and draws the dataset from scratch.
    pub fn render(&mut self) -> Result<RenderPass> {
        self.plot_data(Pass::Render)
    }

    /// Reconciles glyphs against the current dataset, animating the ones that persist.
    pub fn redraw(&mut self) -> Result<RenderPass> {
        self.plot_data(Pass::Redraw)
    }

    /// Toggles the filter on `key` and redraws this chart.
    pub fn toggle_filter(&mut self, key: &GroupKey) -> Result<RenderPass> {
        let active = self.host.filters.toggle(key);
        tracing::debug!(chart = %self.id, key = %key, active, "filter toggled");
        self.redraw()
    }

    /// Click on the glyph for `key`: toggle the filter, then redraw the whole chart group.
    pub fn click(&mut self, key: &GroupKey, registry: &ChartRegistry) -> Result<RenderPass> {
        if !registry.has_group(&self.host.chart_group) {
            return Err(Error::UnknownChartGroup {
                group: self.host.chart_group.clone(),
            });
        }
        let pass = self.toggle_filter(key)?;
        registry.redraw_group_except(&self.host.chart_group, &self.id)?;
        Ok(pass)
    }

    pub fn is_selected_node(&self, key: &GroupKey) -> bool {
        self.host.has_filter_key(key)
    }

    /// Highlights filtered glyphs and fades the rest; resets everything when unfiltered.
    pub fn fade_deselected_area(&mut self) {
        let has_filter = self.host.has_filter();
        for (key, glyph) in self.glyphs.iter_mut() {
            glyph.highlight = if !has_filter {
                Highlight::Normal
            } else if self.host.filters.contains(key) {
                Highlight::Selected
            } else {
                Highlight::Deselected
            };
        }
    }

    /// Lower end of the y axis: smallest value over all drawn groups minus the y-axis padding.
    pub fn y_axis_min(&self) -> Option<f64> {
        self.drawn_extent().map(|(lo, _)| lo - self.y_axis_padding)
    }

    /// Upper end of the y axis: largest value over all drawn groups plus the y-axis padding.
    pub fn y_axis_max(&self) -> Option<f64> {
        self.drawn_extent().map(|(_, hi)| hi + self.y_axis_padding)
    }

    fn drawn_extent(&self) -> Option<(f64, f64)> {
        let records = (self.source)();
        let groups = extract_renderable_groups(&records, self.value_accessor.as_ref());
        let (_, kept) = self.keyed_groups(groups);
        value_extent(&kept)
    }

    /// Keys each group by its source position; the first group with a given key wins.
    fn keyed_groups<'a>(&self, groups: Vec<Group<'a, R>>) -> (Vec<GroupKey>, Vec<Group<'a, R>>) {
        let mut keyed: IndexMap<GroupKey, Group<'a, R>> = IndexMap::with_capacity(groups.len());
        for group in groups {
            let key = (self.key_accessor)(group.record, group.source_index);
            if keyed.contains_key(&key) {
                tracing::debug!(chart = %self.id, key = %key, "duplicate group key ignored");
                continue;
            }
            keyed.insert(key, group);
        }
        keyed.into_iter().unzip()
    }

    pub fn x_unit_count(&self) -> usize {
        self.host.x.unit_count()
    }

    pub fn layout(&self) -> BoxPlotLayout {
        BoxPlotLayout {
            chart_id: self.id.clone(),
            width: self.host.width,
            height: self.host.height,
            margins: self.host.margins,
            effective_height: self.host.effective_height(),
            y_domain: self.host.y.domain,
            glyphs: self.glyphs.values().cloned().collect(),
        }
    }

    fn preprocess_data(&self, x: &mut XScale) {
        if self.host.elastic_x {
            x.reset_domain();
        }
    }

    fn plot_data(&mut self, pass: Pass) -> Result<RenderPass> {
        let records = (self.source)();
        let groups = extract_renderable_groups(&records, self.value_accessor.as_ref());
        let (keys, kept) = self.keyed_groups(groups);

        // Scales are laid out on copies and committed once every key has a place.
        let mut x = self.host.x.clone();
        self.preprocess_data(&mut x);
        if self.host.elastic_x {
            x.fit_domain(&keys);
        } else {
            x.extend_domain(&keys);
        }
        let effective_width = self.host.effective_width();
        let effective_height = self.host.effective_height();
        x.set_extent(effective_width, self.box_padding, self.outer_padding);

        let mut offsets = Vec::with_capacity(keys.len());
        for key in &keys {
            let offset = x.position(key).ok_or_else(|| Error::UnpositionedKey {
                key: key.to_string(),
            })?;
            offsets.push(offset);
        }

        let mut y = self.host.y;
        if self.host.elastic_y {
            if let Some((lo, hi)) = value_extent(&kept) {
                y.domain = (lo - self.y_axis_padding, hi + self.y_axis_padding);
            }
        }
        y.range = (effective_height, 0.0);

        let units = x.unit_count();
        let box_width = match &self.box_width {
            Some(f) => f(&x, effective_width, units),
            None => default_box_width(&x, effective_width, units, self.box_padding),
        };

        self.host.x = x;
        self.host.y = y;
        if pass == Pass::Render {
            self.glyphs.clear();
        }
        let plan = reconcile(self.glyphs.keys(), &keys);
        let animate = pass == Pass::Redraw && self.host.transition_duration_ms > 0;

        let frame = GlyphFrame {
            y: &self.host.y,
            box_width,
            tick_format: self.tick_format.as_ref(),
        };
        let mut next: IndexMap<GroupKey, BoxGlyph> = IndexMap::with_capacity(keys.len());
        for ((key, group), x_offset) in keys.into_iter().zip(&kept).zip(offsets) {
            let whiskers = self
                .whiskers
                .bounds(&group.values, &group.quartiles)
                .clamp_to(group.values.len());
            let geometry =
                layout_box_geometry(&group.values, &group.quartiles, whiskers, x_offset, &frame);
            let fill = match &self.color_accessor {
                Some(f) => f(group.record),
                None => self.colors.color_for(&key),
            };

            let glyph = match self.glyphs.shift_remove(&key) {
                Some(prev) => {
                    let transition = animate.then(|| Transition {
                        duration_ms: self.host.transition_duration_ms,
                        from: prev.geometry,
                    });
                    BoxGlyph {
                        key: key.clone(),
                        serial: prev.serial,
                        quartiles: group.quartiles,
                        whiskers,
                        fill,
                        highlight: prev.highlight,
                        geometry,
                        transition,
                    }
                }
                None => {
                    let serial = self.next_serial;
                    self.next_serial += 1;
                    tracing::trace!(chart = %self.id, key = %key, serial, "glyph created");
                    BoxGlyph {
                        key: key.clone(),
                        serial,
                        quartiles: group.quartiles,
                        whiskers,
                        fill,
                        highlight: Highlight::Normal,
                        geometry,
                        transition: None,
                    }
                }
            };
            next.insert(key, glyph);
        }

        for key in self.glyphs.keys() {
            tracing::trace!(chart = %self.id, key = %key, "glyph removed");
        }
        self.glyphs = next;
        self.fade_deselected_area();

        tracing::debug!(
            chart = %self.id,
            entered = plan.enter.len(),
            updated = plan.update.len(),
            exited = plan.exit.len(),
            "box plot pass"
        );
        Ok(RenderPass {
            entered: plan.enter,
            updated: plan.update,
            exited: plan.exit,
        })
    }
}

impl<R> GroupMember for BoxPlotChart<R> {
    fn chart_id(&self) -> &str {
        &self.id
    }

    fn group_redraw(&mut self) -> Result<()> {
        self.redraw().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn chart_over(records: Vec<Value>) -> BoxPlotChart<Value> {
        let config = BoxPlotConfig::default();
        let host = CoordinateGridChart::from_config(&config, "main");
        BoxPlotChart::from_json_source("box", host, &config, move || records.clone()).unwrap()
    }

    #[test]
    fn y_axis_range_pads_the_data_extent() {
        let chart = chart_over(vec![
            json!({ "key": "a", "value": [2, 8] }),
            json!({ "key": "b", "value": [5, 9] }),
            json!({ "key": "c", "value": [1, 20] }),
        ]);
        assert_eq!(chart.y_axis_min(), Some(-11.0));
        assert_eq!(chart.y_axis_max(), Some(32.0));
    }

    #[test]
    fn y_axis_range_is_none_without_data() {
        let chart = chart_over(vec![json!({ "key": "a", "value": [] })]);
        assert_eq!(chart.y_axis_min(), None);
        assert_eq!(chart.y_axis_max(), None);
    }

    #[test]
    fn render_creates_one_glyph_per_non_empty_group() {
        let mut chart = chart_over(vec![
            json!({ "key": "a", "value": [1, 2, 3] }),
            json!({ "key": "empty", "value": [] }),
            json!({ "key": "broken" }),
            json!({ "key": "b", "value": [4, 5, 6] }),
        ]);
        let pass = chart.render().unwrap();
        assert_eq!(pass.entered, vec![GroupKey::from("a"), GroupKey::from("b")]);
        assert_eq!(chart.glyph_keys(), pass.entered);
        assert!(chart.glyph(&GroupKey::from("empty")).is_none());
    }

    #[test]
    fn elastic_y_sets_domain_and_inverted_range() {
        let mut chart = chart_over(vec![json!({ "key": "a", "value": [0, 100] })]);
        chart.render().unwrap();
        assert_eq!(chart.host().y.domain, (-12.0, 112.0));
        assert_eq!(chart.host().y.range, (440.0, 0.0));
    }

    #[test]
    fn ordinal_boxes_use_band_width() {
        let mut chart = chart_over(vec![
            json!({ "key": "a", "value": [1] }),
            json!({ "key": "b", "value": [2] }),
        ]);
        chart.render().unwrap();
        let band = chart.host().x.band_width().unwrap();
        for glyph in chart.glyphs() {
            assert_eq!(glyph.geometry.width, band);
        }
        let a = chart.glyph(&GroupKey::from("a")).unwrap();
        let b = chart.glyph(&GroupKey::from("b")).unwrap();
        assert!(a.geometry.x_offset < b.geometry.x_offset);
    }

    #[test]
    fn continuous_x_uses_padded_unit_width() {
        let config = BoxPlotConfig::default();
        let host = CoordinateGridChart::from_config(&config, "main")
            .with_x(XScale::Linear(LinearScale::default()));
        let records = vec![
            json!({ "key": 0, "value": [1, 2] }),
            json!({ "key": 4, "value": [3, 4] }),
        ];
        let mut chart =
            BoxPlotChart::from_json_source("box", host, &config, move || records.clone()).unwrap();
        chart.render().unwrap();
        assert_eq!(chart.x_unit_count(), 4);
        let expected = 560.0 / 1.8 / 4.0;
        let glyph = chart.glyph(&GroupKey::from(4i64)).unwrap();
        assert!((glyph.geometry.width - expected).abs() < 1e-9);
        assert_eq!(glyph.geometry.x_offset, 560.0);
    }

    #[test]
    fn non_numeric_key_on_continuous_axis_is_reported_and_keeps_glyphs() {
        let config = BoxPlotConfig::default();
        let host = CoordinateGridChart::from_config(&config, "main")
            .with_x(XScale::Linear(LinearScale::default()));
        let data = Rc::new(RefCell::new(vec![json!({ "key": 1, "value": [1] })]));
        let source = data.clone();
        let mut chart =
            BoxPlotChart::from_json_source("box", host, &config, move || source.borrow().clone())
                .unwrap();
        chart.render().unwrap();

        data.borrow_mut().push(json!({ "key": "north", "value": [2] }));
        let err = chart.redraw().unwrap_err();
        assert!(matches!(err, Error::UnpositionedKey { .. }));
        assert_eq!(chart.glyph_keys(), vec![GroupKey::from(1i64)]);
    }

    fn shared_over(
        config: &BoxPlotConfig,
        host: CoordinateGridChart,
        records: Vec<Value>,
    ) -> (Rc<RefCell<Vec<Value>>>, BoxPlotChart<Value>) {
        let data = Rc::new(RefCell::new(records));
        let source = data.clone();
        let chart =
            BoxPlotChart::from_json_source("box", host, config, move || source.borrow().clone())
                .unwrap();
        (data, chart)
    }

    #[test]
    fn failed_render_keeps_glyphs_and_scales() {
        let config = BoxPlotConfig::default();
        let host = CoordinateGridChart::from_config(&config, "main")
            .with_x(XScale::Linear(LinearScale::default()));
        let (data, mut chart) =
            shared_over(&config, host, vec![json!({ "key": 1, "value": [1, 3] })]);
        chart.render().unwrap();
        let x_before = chart.host().x.clone();
        let y_before = chart.host().y;

        data.borrow_mut().push(json!({ "key": "north", "value": [50, 90] }));
        let err = chart.render().unwrap_err();
        assert!(matches!(err, Error::UnpositionedKey { .. }));
        assert_eq!(chart.glyph_keys(), vec![GroupKey::from(1i64)]);
        assert_eq!(chart.host().x, x_before);
        assert_eq!(chart.host().y, y_before);

        assert!(chart.redraw().is_err());
        assert_eq!(chart.host().x, x_before);
        assert_eq!(chart.host().y, y_before);
    }

    #[test]
    fn keyless_record_keeps_its_identity_when_an_earlier_group_empties() {
        let config = BoxPlotConfig::default();
        let host = CoordinateGridChart::from_config(&config, "main");
        let (data, mut chart) = shared_over(
            &config,
            host,
            vec![
                json!({ "key": "a", "value": [1] }),
                json!({ "value": [5, 6] }),
            ],
        );
        chart.render().unwrap();
        let keyless = GroupKey::from(1i64);
        let serial = chart.glyph(&keyless).unwrap().serial;

        data.borrow_mut()[0] = json!({ "key": "a", "value": [] });
        let pass = chart.redraw().unwrap();
        assert!(pass.entered.is_empty());
        assert_eq!(pass.updated, vec![keyless.clone()]);
        assert_eq!(pass.exited, vec![GroupKey::from("a")]);
        assert_eq!(chart.glyph(&keyless).unwrap().serial, serial);
    }

    #[test]
    fn fixed_ordinal_domain_keeps_the_band_of_an_exited_key() {
        let config = BoxPlotConfig {
            elastic_x: false,
            ..BoxPlotConfig::default()
        };
        let host = CoordinateGridChart::from_config(&config, "main");
        let (data, mut chart) = shared_over(
            &config,
            host,
            vec![
                json!({ "key": "a", "value": [1] }),
                json!({ "key": "b", "value": [2] }),
                json!({ "key": "c", "value": [3] }),
            ],
        );
        chart.render().unwrap();
        let b_offset = chart.glyph(&GroupKey::from("b")).unwrap().geometry.x_offset;
        let a_position = chart.host().x.position(&GroupKey::from("a"));

        data.borrow_mut().remove(0);
        let pass = chart.redraw().unwrap();
        assert_eq!(pass.exited, vec![GroupKey::from("a")]);
        assert_eq!(chart.host().x.position(&GroupKey::from("a")), a_position);
        assert!(a_position.is_some());
        assert_eq!(
            chart.glyph(&GroupKey::from("b")).unwrap().geometry.x_offset,
            b_offset
        );
    }

    #[test]
    fn fixed_y_domain_drives_geometry() {
        let config = BoxPlotConfig {
            elastic_y: false,
            ..BoxPlotConfig::default()
        };
        let mut host = CoordinateGridChart::from_config(&config, "main");
        host.y.domain = (0.0, 100.0);
        let (_data, mut chart) =
            shared_over(&config, host, vec![json!({ "key": "a", "value": [25, 50, 75] })]);
        chart.render().unwrap();
        chart.redraw().unwrap();

        assert_eq!(chart.host().y.domain, (0.0, 100.0));
        assert_eq!(chart.host().y.range, (440.0, 0.0));
        let glyph = chart.glyph(&GroupKey::from("a")).unwrap();
        assert!((glyph.geometry.median_y - 220.0).abs() < 1e-9);
        assert_eq!(chart.layout().y_domain, (0.0, 100.0));
    }

    #[test]
    fn duplicate_key_does_not_stretch_the_y_axis() {
        let mut chart = chart_over(vec![
            json!({ "key": "a", "value": [1, 2] }),
            json!({ "key": "a", "value": [500] }),
        ]);
        chart.render().unwrap();
        assert_eq!(chart.glyph_keys(), vec![GroupKey::from("a")]);
        assert_eq!(chart.host().y.domain, (-11.0, 14.0));
        assert_eq!(chart.y_axis_max(), Some(14.0));
        assert_eq!(chart.y_axis_min(), Some(-11.0));
    }

    #[test]
    fn custom_strategies_replace_defaults() {
        let mut chart = chart_over(vec![json!({ "key": "a", "value": [1, 2, 3, 4, 5, 100] })])
            .with_whiskers(|v: &[f64], _: &whisker_core::Quartiles| {
                whisker_core::WhiskerBounds::full(v.len())
            })
            .with_box_width(|_: &XScale, _: f64, _: usize| 7.0)
            .with_tick_format(|v| format!("{v:.1}"))
            .with_color_accessor(|_: &Value| "teal".to_string());
        chart.render().unwrap();
        let glyph = chart.glyph(&GroupKey::from("a")).unwrap();
        assert!(glyph.geometry.outliers.is_empty());
        assert_eq!(glyph.geometry.width, 7.0);
        assert_eq!(glyph.geometry.box_labels[1].text, "3.5");
        assert_eq!(glyph.fill, "teal");
    }

    #[test]
    fn out_of_range_strategy_is_clamped() {
        let mut chart = chart_over(vec![json!({ "key": "a", "value": [1, 2, 3] })]).with_whiskers(
            |_: &[f64], _: &whisker_core::Quartiles| whisker_core::WhiskerBounds::new(2, 99),
        );
        chart.render().unwrap();
        let glyph = chart.glyph(&GroupKey::from("a")).unwrap();
        assert_eq!(glyph.whiskers, whisker_core::WhiskerBounds::new(2, 2));
    }

    #[test]
    fn invalid_whisker_factor_is_rejected() {
        let chart = chart_over(vec![]);
        assert!(chart.with_whisker_iqr_factor(-2.0).is_err());
    }
}
