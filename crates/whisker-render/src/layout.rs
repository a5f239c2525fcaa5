use crate::model::{BoxGeometry, Outlier, TextAnchor, TickLabel};
use whisker_core::{LinearScale, Quartiles, WhiskerBounds, XScale};

pub const OUTLIER_RADIUS: f64 = 5.0;
const LABEL_GAP: f64 = 6.0;

/// Shared inputs for laying out every box of one pass.
pub struct GlyphFrame<'a> {
    pub y: &'a LinearScale,
    pub box_width: f64,
    pub tick_format: &'a dyn Fn(f64) -> String,
}

/// Default box width: the band width on an ordinal axis, otherwise the plot width split into
/// `units` slots with `box_padding` of each slot left empty.
pub fn default_box_width(
    x: &XScale,
    effective_width: f64,
    units: usize,
    box_padding: f64,
) -> f64 {
    match x.band_width() {
        Some(band) => band,
        None => effective_width / (1.0 + box_padding) / units.max(1) as f64,
    }
}

/// Lays out one box from its sorted sample, quartiles and whisker bounds.
///
/// `whiskers` must already be clamped to the sample.
pub fn layout_box_geometry(
    values: &[f64],
    quartiles: &Quartiles,
    whiskers: WhiskerBounds,
    x_offset: f64,
    frame: &GlyphFrame<'_>,
) -> BoxGeometry {
    let y = |v: f64| frame.y.apply(v);
    let width = frame.box_width;

    let q3_y = y(quartiles.q3);
    let q1_y = y(quartiles.q1);
    let whisker_low = values[whiskers.low];
    let whisker_high = values[whiskers.high];

    let outliers = values
        .iter()
        .enumerate()
        .filter(|(i, _)| !whiskers.contains(*i))
        .map(|(index, &value)| Outlier {
            index,
            value,
            cx: width / 2.0,
            cy: y(value),
            r: OUTLIER_RADIUS,
        })
        .collect();

    // q1 and q3 labels sit left of the box, the median label right of it.
    let box_labels = quartiles
        .as_array()
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let right = i & 1 == 1;
            TickLabel {
                value,
                text: (frame.tick_format)(value),
                x: if right { width + LABEL_GAP } else { -LABEL_GAP },
                y: y(value),
                anchor: if right {
                    TextAnchor::Start
                } else {
                    TextAnchor::End
                },
            }
        })
        .collect();

    let whisker_labels = [whisker_low, whisker_high]
        .into_iter()
        .map(|value| TickLabel {
            value,
            text: (frame.tick_format)(value),
            x: width + LABEL_GAP,
            y: y(value),
            anchor: TextAnchor::Start,
        })
        .collect();

    BoxGeometry {
        x_offset,
        width,
        box_y: q3_y.min(q1_y),
        box_height: (q1_y - q3_y).abs(),
        median_y: y(quartiles.median),
        whisker_low_y: y(whisker_low),
        whisker_high_y: y(whisker_high),
        outliers,
        box_labels,
        whisker_labels,
    }
}
