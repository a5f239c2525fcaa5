use crate::model::{BoxGlyph, BoxPlotLayout, TextAnchor, TickLabel};
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Root `<svg id>`; defaults to the chart id.
    pub diagram_id: Option<String>,
    /// When true, draw quartile and whisker value labels.
    pub include_labels: bool,
    /// When true, draw a circle for every value outside the whiskers.
    pub include_outliers: bool,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            diagram_id: None,
            include_labels: true,
            include_outliers: true,
        }
    }
}

/// Fixed 3-decimal formatting with trailing zeros trimmed; `-0` prints as `0`.
fn fmt(v: f64) -> String {
    if !v.is_finite() || v.abs() < 0.0005 {
        return "0".to_string();
    }
    let mut s = format!("{:.3}", (v * 1000.0).round() / 1000.0);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn box_plot_css(id: &str) -> String {
    format!(
        "#{id} g.box line,#{id} g.box rect,#{id} g.box circle{{stroke:#000;stroke-width:1px;}}\
#{id} g.box line.center{{stroke-dasharray:3,3;}}\
#{id} g.box circle.outlier{{fill:none;stroke:#ccc;}}\
#{id} g.box text{{font:10px sans-serif;}}\
#{id} g.box.deselected rect.box{{fill-opacity:0.5;fill:#ccc;}}\
#{id} g.box.deselected .box{{fill:#ccc;}}"
    )
}

fn write_label(out: &mut String, class: &str, label: &TickLabel) {
    let anchor = match label.anchor {
        TextAnchor::Start => "start",
        TextAnchor::End => "end",
    };
    let _ = write!(
        out,
        r#"<text class="{class}" x="{}" y="{}" dy=".3em" text-anchor="{anchor}">{}</text>"#,
        fmt(label.x),
        fmt(label.y),
        escape_xml(&label.text)
    );
}

fn write_glyph(out: &mut String, glyph: &BoxGlyph, options: &SvgRenderOptions) {
    let g = &glyph.geometry;
    let class = match glyph.highlight.css_class() {
        Some(extra) => format!("box {extra}"),
        None => "box".to_string(),
    };
    let _ = write!(
        out,
        r#"<g class="{class}" data-key="{}" transform="translate({},0)""#,
        escape_xml(&glyph.key.to_string()),
        fmt(g.x_offset)
    );
    if let Some(t) = &glyph.transition {
        let _ = write!(out, r#" data-transition-ms="{}""#, t.duration_ms);
    }
    out.push('>');

    let cx = fmt(g.center_x());
    let _ = write!(
        out,
        r#"<line class="center" x1="{cx}" y1="{}" x2="{cx}" y2="{}"/>"#,
        fmt(g.whisker_low_y),
        fmt(g.whisker_high_y)
    );
    let _ = write!(
        out,
        r#"<rect class="box" x="0" y="{}" width="{}" height="{}" fill="{}"/>"#,
        fmt(g.box_y),
        fmt(g.width),
        fmt(g.box_height),
        escape_xml(&glyph.fill)
    );
    let _ = write!(
        out,
        r#"<line class="median" x1="0" y1="{y}" x2="{}" y2="{y}"/>"#,
        fmt(g.width),
        y = fmt(g.median_y)
    );
    for y in [g.whisker_low_y, g.whisker_high_y] {
        let _ = write!(
            out,
            r#"<line class="whisker" x1="0" y1="{y}" x2="{}" y2="{y}"/>"#,
            fmt(g.width),
            y = fmt(y)
        );
    }
    if options.include_outliers {
        for o in &g.outliers {
            let _ = write!(
                out,
                r#"<circle class="outlier" cx="{}" cy="{}" r="{}"/>"#,
                fmt(o.cx),
                fmt(o.cy),
                fmt(o.r)
            );
        }
    }
    if options.include_labels {
        for label in &g.box_labels {
            write_label(out, "box", label);
        }
        for label in &g.whisker_labels {
            write_label(out, "whisker", label);
        }
    }
    out.push_str("</g>");
}

/// Renders the retained glyphs of a box plot as a standalone SVG document.
///
/// Glyphs are emitted in layout order, one `g.box` per key, inside a `g.chart-body` offset by
/// the chart margins.
pub fn render_box_plot_svg(layout: &BoxPlotLayout, options: &SvgRenderOptions) -> String {
    let id = escape_xml(options.diagram_id.as_deref().unwrap_or(&layout.chart_id));
    let w = fmt(layout.width.max(1.0));
    let h = fmt(layout.height.max(1.0));

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{id}" width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" role="graphics-document document" aria-roledescription="boxplot">"#
    );
    let _ = write!(&mut out, "<style>{}</style>", box_plot_css(&id));
    let _ = write!(
        &mut out,
        r#"<g class="chart-body" transform="translate({},{})">"#,
        fmt(layout.margins.left),
        fmt(layout.margins.top)
    );
    for glyph in &layout.glyphs {
        write_glyph(&mut out, glyph, options);
    }
    out.push_str("</g></svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::{escape_xml, fmt};

    #[test]
    fn fmt_trims_and_rounds() {
        assert_eq!(fmt(12.0), "12");
        assert_eq!(fmt(1.23456), "1.235");
        assert_eq!(fmt(-0.0001), "0");
        assert_eq!(fmt(f64::NAN), "0");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml(r#"a<b & "c""#), "a&lt;b &amp; &quot;c&quot;");
    }
}
