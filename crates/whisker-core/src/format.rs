use ryu_js::Buffer;

/// Tick label formatter: maps a data value to the text drawn next to a box or whisker.
pub type TickFormat = Box<dyn Fn(f64) -> String>;

/// Formats a number the way JavaScript's `String(n)` does (`3` rather than `3.0`).
///
/// Non-finite values print as `NaN` so a broken label is visible instead of silently empty.
pub fn js_number(mut v: f64) -> String {
    if !v.is_finite() {
        return "NaN".to_string();
    }
    if v == -0.0 {
        v = 0.0;
    }
    let mut buf = Buffer::new();
    buf.format_finite(v).to_string()
}

pub fn default_tick_format() -> TickFormat {
    Box::new(js_number)
}
