use crate::stats::DEFAULT_WHISKER_IQR_FACTOR;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 50.0,
            bottom: 30.0,
            left: 30.0,
        }
    }
}

/// Box plot options, normally read from the `boxPlot` section of an effective config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotConfig {
    pub whisker_iqr_factor: f64,
    /// Gap between boxes as a ratio of the band step (ordinal band padding).
    pub box_padding: f64,
    /// Space before the first and after the last box, as a ratio of the band step.
    pub outer_padding: f64,
    /// Headroom above and below the data extent, so whisker labels are not clipped.
    pub y_axis_padding: f64,
    pub transition_duration_ms: u64,
    pub elastic_x: bool,
    pub elastic_y: bool,
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl Default for BoxPlotConfig {
    fn default() -> Self {
        Self {
            whisker_iqr_factor: DEFAULT_WHISKER_IQR_FACTOR,
            box_padding: 0.8,
            outer_padding: 0.5,
            y_axis_padding: 12.0,
            transition_duration_ms: 750,
            elastic_x: true,
            elastic_y: true,
            width: 640.0,
            height: 480.0,
            margins: Margins::default(),
        }
    }
}

fn json_f64(v: &Value) -> Option<f64> {
    v.as_f64()
        .or_else(|| v.as_i64().map(|n| n as f64))
        .or_else(|| v.as_u64().map(|n| n as f64))
}

fn config_f64(cfg: &Value, path: &[&str]) -> Option<f64> {
    let mut cur = cfg;
    for key in path {
        cur = cur.get(*key)?;
    }
    json_f64(cur)
}

fn config_bool(cfg: &Value, path: &[&str]) -> Option<bool> {
    let mut cur = cfg;
    for key in path {
        cur = cur.get(*key)?;
    }
    cur.as_bool()
}

impl BoxPlotConfig {
    /// Reads `boxPlot.*` keys from an effective config, falling back to defaults key by key.
    pub fn from_effective_config(effective_config: &Value) -> Result<Self> {
        let base = Self::default();
        let m = base.margins;
        let cfg = Self {
            whisker_iqr_factor: config_f64(effective_config, &["boxPlot", "whiskerIqrFactor"])
                .unwrap_or(base.whisker_iqr_factor),
            box_padding: config_f64(effective_config, &["boxPlot", "boxPadding"])
                .unwrap_or(base.box_padding),
            outer_padding: config_f64(effective_config, &["boxPlot", "outerPadding"])
                .unwrap_or(base.outer_padding),
            y_axis_padding: config_f64(effective_config, &["boxPlot", "yAxisPadding"])
                .unwrap_or(base.y_axis_padding),
            transition_duration_ms: config_f64(
                effective_config,
                &["boxPlot", "transitionDuration"],
            )
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v.round() as u64)
            .unwrap_or(base.transition_duration_ms),
            elastic_x: config_bool(effective_config, &["boxPlot", "elasticX"])
                .unwrap_or(base.elastic_x),
            elastic_y: config_bool(effective_config, &["boxPlot", "elasticY"])
                .unwrap_or(base.elastic_y),
            width: config_f64(effective_config, &["boxPlot", "width"]).unwrap_or(base.width),
            height: config_f64(effective_config, &["boxPlot", "height"]).unwrap_or(base.height),
            margins: Margins {
                top: config_f64(effective_config, &["boxPlot", "margins", "top"]).unwrap_or(m.top),
                right: config_f64(effective_config, &["boxPlot", "margins", "right"])
                    .unwrap_or(m.right),
                bottom: config_f64(effective_config, &["boxPlot", "margins", "bottom"])
                    .unwrap_or(m.bottom),
                left: config_f64(effective_config, &["boxPlot", "margins", "left"])
                    .unwrap_or(m.left),
            },
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.whisker_iqr_factor.is_finite() || self.whisker_iqr_factor < 0.0 {
            return Err(Error::InvalidWhiskerFactor {
                factor: self.whisker_iqr_factor,
            });
        }
        for (name, v) in [
            ("boxPadding", self.box_padding),
            ("outerPadding", self.outer_padding),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(Error::InvalidConfig {
                    message: format!("{name} must be within [0, 1], got {v}"),
                });
            }
        }
        if !self.y_axis_padding.is_finite() || self.y_axis_padding < 0.0 {
            return Err(Error::InvalidConfig {
                message: format!(
                    "yAxisPadding must be a finite value >= 0, got {}",
                    self.y_axis_padding
                ),
            });
        }
        if !(self.effective_width() > 0.0) || !(self.effective_height() > 0.0) {
            return Err(Error::InvalidConfig {
                message: format!(
                    "plot area is empty: {}x{} after margins",
                    self.effective_width(),
                    self.effective_height()
                ),
            });
        }
        Ok(())
    }

    pub fn effective_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    pub fn effective_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = BoxPlotConfig::from_effective_config(&json!({})).unwrap();
        assert_eq!(cfg, BoxPlotConfig::default());
        assert_eq!(cfg.effective_width(), 560.0);
        assert_eq!(cfg.effective_height(), 440.0);
    }

    #[test]
    fn reads_box_plot_section() {
        let cfg = BoxPlotConfig::from_effective_config(&json!({
            "boxPlot": {
                "whiskerIqrFactor": 3,
                "boxPadding": 0.5,
                "yAxisPadding": 0,
                "transitionDuration": 0,
                "elasticX": false,
                "margins": { "left": 0, "right": 0 }
            }
        }))
        .unwrap();
        assert_eq!(cfg.whisker_iqr_factor, 3.0);
        assert_eq!(cfg.box_padding, 0.5);
        assert_eq!(cfg.outer_padding, 0.5);
        assert_eq!(cfg.y_axis_padding, 0.0);
        assert_eq!(cfg.transition_duration_ms, 0);
        assert!(!cfg.elastic_x);
        assert!(cfg.elastic_y);
        assert_eq!(cfg.effective_width(), 640.0);
    }

    #[test]
    fn rejects_bad_values() {
        let err = BoxPlotConfig::from_effective_config(&json!({
            "boxPlot": { "whiskerIqrFactor": -1 }
        }))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidWhiskerFactor { .. }));

        let err = BoxPlotConfig::from_effective_config(&json!({
            "boxPlot": { "boxPadding": 1.5 }
        }))
        .unwrap_err();
        assert!(err.to_string().contains("boxPadding"));

        let err = BoxPlotConfig::from_effective_config(&json!({
            "boxPlot": { "width": 40 }
        }))
        .unwrap_err();
        assert!(err.to_string().contains("plot area is empty"));
    }
}
