//! RenderContext: everything the plot widget needs to draw one frame.
//!
//! The updater writes it, the GUI only reads it. Keeping the figure state in
//! an owned struct lets the update logic run and be tested without a window.

use egui::Color32;

use crate::data::series_look::SeriesLook;

/// One drawable line.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedLine {
    pub look: SeriesLook,
    pub color: Color32,
    /// `[x, y]` pairs; x in seconds since the epoch, non-finite samples left out.
    pub points: Vec<[f64; 2]>,
}

/// Current-value box on the right edge of the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueLabel {
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    /// Visible time range; `None` until the first tick arrived.
    pub x_bounds: Option<(f64, f64)>,
    pub y_bounds: (f64, f64),
    pub lines: Vec<RenderedLine>,
    /// Date of the newest tick, shown below the x-axis.
    pub date_label: String,
    pub value_label: Option<ValueLabel>,
    pub title: Option<String>,
    /// Successful updates applied so far.
    pub redraws: u64,
}

impl RenderContext {
    pub fn new(title: Option<String>) -> Self {
        Self {
            y_bounds: (0.0, 1.0),
            title,
            ..Default::default()
        }
    }

    /// Whether any line carries a non-empty legend label.
    pub fn has_legend(&self) -> bool {
        self.lines.iter().any(|l| l.look.legend_label().is_some())
    }

    /// Points of `line` that fall inside the visible time range.
    pub fn visible_points(&self, line: usize) -> Vec<[f64; 2]> {
        let Some((lo, hi)) = self.x_bounds else {
            return Vec::new();
        };
        self.lines
            .get(line)
            .map(|l| {
                l.points
                    .iter()
                    .filter(|p| p[0] >= lo && p[0] <= hi)
                    .copied()
                    .collect()
            })
            .unwrap_or_default()
    }
}
