//! Configuration for a time plot session.
//!
//! [`TimePlotConfig`] is read once at setup and never mutated while the plot
//! runs. It can be built in code or loaded from a JSON/YAML file through the
//! serializable [`TimePlotConfigFile`] mirror.

use std::fmt::{self, Write as _};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::color_theme::{parse_color, ColorTheme};
use crate::data::series_look::{parse_line_style, SeriesLook};
use crate::error::TimePlotError;

// ─────────────────────────────────────────────────────────────────────────────
// UpdateStyle
// ─────────────────────────────────────────────────────────────────────────────

/// How the visible time range follows new ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateStyle {
    /// The window slides with every tick; the newest point sits `padding`
    /// seconds left of the right border.
    Cont,
    /// The window stays put and jumps forward by whole steps once the newest
    /// tick reaches the right margin.
    Jump,
}

impl Default for UpdateStyle {
    fn default() -> Self {
        UpdateStyle::Jump
    }
}

impl FromStr for UpdateStyle {
    type Err = TimePlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "cont" => Ok(UpdateStyle::Cont),
            "jump" => Ok(UpdateStyle::Jump),
            other => Err(TimePlotError::config(format!(
                "update_style must be 'cont' or 'jump', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for UpdateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateStyle::Cont => write!(f, "cont"),
            UpdateStyle::Jump => write!(f, "jump"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RetentionPolicy
// ─────────────────────────────────────────────────────────────────────────────

/// Which ticks the series buffer keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionPolicy {
    /// Keep every tick for the whole session.
    Unbounded,
    /// Keep the most recent K ticks.
    Capped(usize),
    /// Keep ticks inside the displayed period plus one tick before it, so the
    /// line always reaches the left border.
    Period,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        RetentionPolicy::Period
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TimePlotConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for a time plot.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `interval`       | Wall-clock time between ticks |
/// | `update_style`   | `cont` (scrolling) or `jump` (stepping) time axis |
/// | `period_secs`    | Width of the visible time range |
/// | `padding_secs`   | Minimal gap between the newest tick and the right border |
/// | `retention`      | Buffer eviction policy |
/// | `color_theme`    | Named palette |
/// | `time_format`    | strftime format of the x tick labels |
/// | `date_format`    | strftime format of the date shown below the x-axis |
/// | `series`         | Optional per-series looks; also fixes the series count |
#[derive(Clone)]
pub struct TimePlotConfig {
    // ── Timing ───────────────────────────────────────────────────────────────
    /// Time between two ticks.
    pub interval: Duration,
    /// Stop requesting ticks after this many successful frames.
    pub frame_limit: Option<u64>,

    // ── Window ───────────────────────────────────────────────────────────────
    pub update_style: UpdateStyle,
    /// Size of the visible time range in seconds.
    pub period_secs: f64,
    /// Minimal distance in seconds between the newest tick and the right border.
    pub padding_secs: f64,
    /// How far the window moves in `jump` mode, in seconds.
    pub jump_step_secs: f64,
    /// Extra room above and below the data, as a fraction of the data span.
    pub y_margin: f64,
    pub retention: RetentionPolicy,

    // ── Appearance ───────────────────────────────────────────────────────────
    pub color_theme: ColorTheme,
    pub time_format: String,
    pub date_format: String,
    /// Decimal places of y tick labels and the current-value label.
    pub value_decimals: usize,
    /// Annotation shown in the upper left corner of the plot.
    pub title: Option<String>,
    /// Per-series looks. When non-empty this also declares the series count.
    pub series: Vec<SeriesLook>,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub window_title: String,
    pub native_options: Option<eframe::NativeOptions>,
}

// `eframe::NativeOptions` is not `Debug`, so only its presence is shown.
impl fmt::Debug for TimePlotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimePlotConfig")
            .field("interval", &self.interval)
            .field("frame_limit", &self.frame_limit)
            .field("update_style", &self.update_style)
            .field("period_secs", &self.period_secs)
            .field("padding_secs", &self.padding_secs)
            .field("jump_step_secs", &self.jump_step_secs)
            .field("y_margin", &self.y_margin)
            .field("retention", &self.retention)
            .field("color_theme", &self.color_theme)
            .field("time_format", &self.time_format)
            .field("date_format", &self.date_format)
            .field("value_decimals", &self.value_decimals)
            .field("title", &self.title)
            .field("series", &self.series)
            .field("window_title", &self.window_title)
            .field("native_options", &self.native_options.as_ref().map(|_| ".."))
            .finish()
    }
}

impl Default for TimePlotConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(10),
            frame_limit: None,

            update_style: UpdateStyle::default(),
            period_secs: 300.0,
            padding_secs: 15.0,
            jump_step_secs: 60.0,
            y_margin: 0.8,
            retention: RetentionPolicy::default(),

            color_theme: ColorTheme::default(),
            time_format: "%H:%M".to_string(),
            date_format: "%d.%m.%Y".to_string(),
            value_decimals: 5,
            title: None,
            series: Vec::new(),

            window_title: "timeplot".to_string(),
            native_options: None,
        }
    }
}

impl TimePlotConfig {
    /// Check every option. Called before the first tick is requested.
    pub fn validate(&self) -> Result<(), TimePlotError> {
        if self.interval.is_zero() {
            return Err(TimePlotError::config("interval must be greater than zero"));
        }
        if !(self.period_secs.is_finite() && self.period_secs > 0.0) {
            return Err(TimePlotError::config(format!(
                "period must be a positive number of seconds, got {}",
                self.period_secs
            )));
        }
        if !(self.padding_secs.is_finite() && self.padding_secs >= 0.0) {
            return Err(TimePlotError::config(format!(
                "padding must be a non-negative number of seconds, got {}",
                self.padding_secs
            )));
        }
        if !(self.jump_step_secs.is_finite() && self.jump_step_secs > 0.0) {
            return Err(TimePlotError::config(format!(
                "jump step must be positive, got {}",
                self.jump_step_secs
            )));
        }
        if !(self.y_margin.is_finite() && self.y_margin >= 0.0) {
            return Err(TimePlotError::config(format!(
                "y margin must be non-negative, got {}",
                self.y_margin
            )));
        }
        if self.retention == RetentionPolicy::Capped(0) {
            return Err(TimePlotError::config("capped retention needs room for at least one tick"));
        }
        if self.frame_limit == Some(0) {
            return Err(TimePlotError::config("frame limit must be at least 1"));
        }
        if self.value_decimals > 17 {
            return Err(TimePlotError::config("value decimals must be at most 17"));
        }
        check_strftime("time_format", &self.time_format)?;
        check_strftime("date_format", &self.date_format)?;
        for (i, look) in self.series.iter().enumerate() {
            if !(look.width.is_finite() && look.width > 0.0) {
                return Err(TimePlotError::config(format!(
                    "series {} has invalid line width {}",
                    i, look.width
                )));
            }
        }
        Ok(())
    }

    /// Series count fixed by configuration, if any.
    pub fn declared_series_count(&self) -> Option<usize> {
        if self.series.is_empty() {
            None
        } else {
            Some(self.series.len())
        }
    }

    /// Load a config from a `.json`, `.yaml` or `.yml` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TimePlotError> {
        TimePlotConfigFile::load(path)?.into_config()
    }
}

/// Reject formats chrono cannot parse, and formats a naive timestamp cannot
/// render (zone names and offsets), before the first label is drawn.
fn check_strftime(field: &str, pattern: &str) -> Result<(), TimePlotError> {
    let parsed = !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));
    let mut sample = String::new();
    if !parsed || write!(sample, "{}", NaiveDateTime::default().format(pattern)).is_err() {
        return Err(TimePlotError::config(format!(
            "{} '{}' is not a valid strftime format for zone-less timestamps",
            field, pattern
        )));
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Serializable mirror
// ─────────────────────────────────────────────────────────────────────────────

/// Serializable version of [`SeriesLook`]; colors and styles are strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesLookFile {
    pub label: Option<String>,
    pub color: Option<String>,
    pub width: Option<f32>,
    pub style: Option<String>,
}

impl SeriesLookFile {
    fn into_look(self) -> Result<SeriesLook, TimePlotError> {
        let mut look = SeriesLook {
            label: self.label,
            ..Default::default()
        };
        if let Some(c) = self.color {
            look.color = Some(parse_color(&c)?);
        }
        if let Some(w) = self.width {
            look.width = w;
        }
        if let Some(s) = self.style {
            look.style = parse_line_style(&s)?;
        }
        Ok(look)
    }
}

/// Serializable version of [`TimePlotConfig`]. Missing fields keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimePlotConfigFile {
    pub interval_ms: Option<u64>,
    pub frame_limit: Option<u64>,
    pub update_style: Option<String>,
    pub period_secs: Option<f64>,
    pub padding_secs: Option<f64>,
    pub jump_step_secs: Option<f64>,
    pub y_margin: Option<f64>,
    pub retention: Option<RetentionPolicy>,
    pub color_theme: Option<String>,
    pub time_format: Option<String>,
    pub date_format: Option<String>,
    pub value_decimals: Option<usize>,
    pub title: Option<String>,
    pub window_title: Option<String>,
    pub series: Vec<SeriesLookFile>,
}

impl TimePlotConfigFile {
    pub fn from_json_str(s: &str) -> Result<Self, TimePlotError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, TimePlotError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Read a file, picking the parser from its extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TimePlotError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Self::from_json_str(&text),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            _ => Err(TimePlotError::config(format!(
                "unsupported config file extension: {}",
                path.display()
            ))),
        }
    }

    /// Apply the file's values over [`TimePlotConfig::default`] and validate.
    pub fn into_config(self) -> Result<TimePlotConfig, TimePlotError> {
        let mut cfg = TimePlotConfig::default();
        if let Some(ms) = self.interval_ms {
            cfg.interval = Duration::from_millis(ms);
        }
        cfg.frame_limit = self.frame_limit;
        if let Some(style) = self.update_style {
            cfg.update_style = style.parse()?;
        }
        if let Some(v) = self.period_secs {
            cfg.period_secs = v;
        }
        if let Some(v) = self.padding_secs {
            cfg.padding_secs = v;
        }
        if let Some(v) = self.jump_step_secs {
            cfg.jump_step_secs = v;
        }
        if let Some(v) = self.y_margin {
            cfg.y_margin = v;
        }
        if let Some(r) = self.retention {
            cfg.retention = r;
        }
        if let Some(name) = self.color_theme {
            cfg.color_theme = ColorTheme::named(&name)?;
        }
        if let Some(f) = self.time_format {
            cfg.time_format = f;
        }
        if let Some(f) = self.date_format {
            cfg.date_format = f;
        }
        if let Some(d) = self.value_decimals {
            cfg.value_decimals = d;
        }
        cfg.title = self.title;
        if let Some(t) = self.window_title {
            cfg.window_title = t;
        }
        cfg.series = self
            .series
            .into_iter()
            .map(SeriesLookFile::into_look)
            .collect::<Result<_, _>>()?;
        cfg.validate()?;
        Ok(cfg)
    }
}
