use serde::{Deserialize, Serialize};
use whisker_core::{GroupKey, Margins, Quartiles, WhiskerBounds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAnchor {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLabel {
    pub value: f64,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub anchor: TextAnchor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlier {
    /// Index into the group's sorted sample.
    pub index: usize,
    pub value: f64,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// Pixel geometry of one box, relative to its own `translate(x_offset, 0)` frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxGeometry {
    pub x_offset: f64,
    pub width: f64,
    /// Top of the box (q3).
    pub box_y: f64,
    /// Box height, q3 down to q1.
    pub box_height: f64,
    pub median_y: f64,
    pub whisker_low_y: f64,
    pub whisker_high_y: f64,
    pub outliers: Vec<Outlier>,
    pub box_labels: Vec<TickLabel>,
    pub whisker_labels: Vec<TickLabel>,
}

impl BoxGeometry {
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }
}

/// Selection feedback state of a glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Highlight {
    #[default]
    Normal,
    Selected,
    Deselected,
}

impl Highlight {
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Highlight::Normal => None,
            Highlight::Selected => Some("selected"),
            Highlight::Deselected => Some("deselected"),
        }
    }
}

/// Animation an updated glyph plays from its previous geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub duration_ms: u64,
    pub from: BoxGeometry,
}

/// One retained box-and-whisker glyph, keyed by its group key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxGlyph {
    pub key: GroupKey,
    /// Creation serial; unchanged for as long as the key stays in the dataset.
    pub serial: u64,
    pub quartiles: Quartiles,
    pub whiskers: WhiskerBounds,
    pub fill: String,
    pub highlight: Highlight,
    pub geometry: BoxGeometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
}

/// Keys touched by one render pass, split by lifecycle action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPass {
    pub entered: Vec<GroupKey>,
    pub updated: Vec<GroupKey>,
    pub exited: Vec<GroupKey>,
}

/// Snapshot of a chart's retained glyphs plus the frame they are drawn in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxPlotLayout {
    pub chart_id: String,
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub effective_height: f64,
    pub y_domain: (f64, f64),
    pub glyphs: Vec<BoxGlyph>,
}
