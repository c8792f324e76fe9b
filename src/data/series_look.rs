//! SeriesLook: visual styling for one plotted series.

use egui::Color32;
use egui_plot::LineStyle;

use crate::error::TimePlotError;

/// The visual presentation of a series (label, color, width, line style).
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLook {
    /// Legend label. Empty or `None` labels are left out of the legend.
    pub label: Option<String>,
    /// Line color; `None` uses the theme's foreground color.
    pub color: Option<Color32>,
    pub width: f32,
    pub style: LineStyle,
}

impl Default for SeriesLook {
    fn default() -> Self {
        Self {
            label: None,
            color: None,
            width: 1.0,
            style: LineStyle::Solid,
        }
    }
}

impl SeriesLook {
    pub fn labeled<S: Into<String>>(label: S) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Label to show in the legend, if any.
    pub fn legend_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }

    /// Resolve the drawing color against a theme foreground.
    pub fn resolved_color(&self, fallback: Color32) -> Color32 {
        self.color.unwrap_or(fallback)
    }
}

/// Parse a line style name. Accepts the words `solid`, `dashed`, `dotted`
/// and the short forms `-`, `--`, `:`.
pub fn parse_line_style(s: &str) -> Result<LineStyle, TimePlotError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "solid" | "-" => Ok(LineStyle::Solid),
        "dashed" | "--" => Ok(LineStyle::Dashed { length: 10.0 }),
        "dotted" | ":" => Ok(LineStyle::Dotted { spacing: 5.0 }),
        other => Err(TimePlotError::config(format!(
            "unknown line style '{}' (expected solid, dashed or dotted)",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_label_is_hidden_from_legend() {
        assert_eq!(SeriesLook::labeled("").legend_label(), None);
        assert_eq!(SeriesLook::labeled("sma").legend_label(), Some("sma"));
    }

    #[test]
    fn short_style_names() {
        assert_eq!(parse_line_style("--").unwrap(), LineStyle::Dashed { length: 10.0 });
        assert!(parse_line_style("wavy").is_err());
    }
}
