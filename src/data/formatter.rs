//! Axis label and grid formatting.
//!
//! [`AxisFormatter`] turns plot coordinates into tick labels, the date label
//! below the x-axis and the current-value label. It also places time grid
//! marks: major marks on whole minutes, minor marks at seconds 15, 30 and 45.
//! It is pure: the same inputs always give the same labels.

use egui::Color32;

use crate::color_theme::ThemeColors;
use crate::config::TimePlotConfig;
use crate::data::series_look::SeriesLook;
use crate::tick::from_plot_x;

/// Candidate spacings (seconds) for major time marks, finest first.
const MAJOR_STEPS_SECS: [f64; 10] = [
    60.0, 120.0, 300.0, 600.0, 900.0, 1_800.0, 3_600.0, 7_200.0, 21_600.0, 86_400.0,
];

/// Upper bound on major marks in the visible range before a coarser step is picked.
const MAX_MAJOR_MARKS: f64 = 20.0;

/// Hard cap on generated marks; wider ranges get no time grid at all.
const MAX_MARKS: f64 = 4_000.0;

/// A grid mark on the time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGridMark {
    /// Position in plot coordinates (seconds since the epoch).
    pub value: f64,
    /// Spacing of the mark's level; used by egui_plot for line intensity.
    pub step_size: f64,
    pub major: bool,
}

/// Formats labels from the static style configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisFormatter {
    pub time_format: String,
    pub date_format: String,
    pub value_decimals: usize,
    pub colors: ThemeColors,
}

impl AxisFormatter {
    pub fn from_config(cfg: &TimePlotConfig) -> Self {
        Self {
            time_format: cfg.time_format.clone(),
            date_format: cfg.date_format.clone(),
            value_decimals: cfg.value_decimals,
            colors: cfg.color_theme.colors(),
        }
    }

    /// Label for a time tick.
    pub fn format_time(&self, x: f64) -> String {
        from_plot_x(x).format(&self.time_format).to_string()
    }

    /// Date label shown below the x-axis.
    pub fn format_date(&self, x: f64) -> String {
        from_plot_x(x).format(&self.date_format).to_string()
    }

    /// Label for a y value (tick labels and the current-value box).
    pub fn format_value(&self, y: f64) -> String {
        if y.is_finite() {
            format!("{:.*}", self.value_decimals, y)
        } else {
            "n/a".to_string()
        }
    }

    /// Label for a time tick at `value` when `[lo, hi]` is visible.
    /// Only major marks are labeled; minor marks get an empty string.
    pub fn tick_label(&self, value: f64, lo: f64, hi: f64) -> String {
        let step = major_step((hi - lo).abs());
        if is_multiple_of(value, step) {
            self.format_time(value)
        } else {
            String::new()
        }
    }

    /// Color a series is drawn with.
    pub fn line_color(&self, look: &SeriesLook) -> Color32 {
        look.resolved_color(self.colors.fg1)
    }

    /// Grid marks for the visible range `[lo, hi]`, sorted by value.
    pub fn grid_marks(&self, lo: f64, hi: f64) -> Vec<TimeGridMark> {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        if !(lo.is_finite() && hi.is_finite()) {
            return Vec::new();
        }
        let major = major_step(hi - lo);
        let minor = major / 4.0;
        if (hi - lo) / minor > MAX_MARKS {
            return Vec::new();
        }

        let mut marks = Vec::new();
        let mut k = (lo / minor).ceil() as i64;
        loop {
            let value = k as f64 * minor;
            if value > hi {
                break;
            }
            let is_major = k.rem_euclid(4) == 0;
            marks.push(TimeGridMark {
                value,
                step_size: if is_major { major } else { minor },
                major: is_major,
            });
            k += 1;
        }
        marks
    }
}

/// Spacing of major time marks for a visible span: whole minutes, coarser
/// when the span would otherwise hold too many labels.
pub fn major_step(span_secs: f64) -> f64 {
    MAJOR_STEPS_SECS
        .iter()
        .copied()
        .find(|step| span_secs / step <= MAX_MAJOR_MARKS)
        .unwrap_or(MAJOR_STEPS_SECS[MAJOR_STEPS_SECS.len() - 1])
}

fn is_multiple_of(value: f64, step: f64) -> bool {
    ((value / step).round() * step - value).abs() < 1e-6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minute_and_quarter_marks() {
        let f = AxisFormatter::from_config(&TimePlotConfig::default());
        let marks = f.grid_marks(0.0, 120.0);
        let values: Vec<f64> = marks.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![0.0, 15.0, 30.0, 45.0, 60.0, 75.0, 90.0, 105.0, 120.0]);
        let majors: Vec<f64> = marks.iter().filter(|m| m.major).map(|m| m.value).collect();
        assert_eq!(majors, vec![0.0, 60.0, 120.0]);
    }

    #[test]
    fn only_whole_minutes_are_labeled() {
        let f = AxisFormatter::from_config(&TimePlotConfig::default());
        // 1970-01-01 00:01:00 and 00:01:15
        assert_eq!(f.tick_label(60.0, 0.0, 300.0), "00:01");
        assert_eq!(f.tick_label(75.0, 0.0, 300.0), "");
    }

    #[test]
    fn wide_range_uses_coarser_step() {
        let f = AxisFormatter::from_config(&TimePlotConfig::default());
        let marks = f.grid_marks(0.0, 6.0 * 3_600.0);
        let majors = marks.iter().filter(|m| m.major).count();
        assert!(majors as f64 <= MAX_MAJOR_MARKS + 1.0, "got {} majors", majors);
    }
}
