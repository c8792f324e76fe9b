//! Color themes for the time plot.
//!
//! A theme is four colors: `fg1` for lines, axes and labels, `fg2` for grid
//! lines, `bg1` for the plot area and `bg2` for the surrounding window.

use egui::{Color32, Context, Visuals};

use crate::error::TimePlotError;

/// The four colors a theme assigns to plot elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    /// Default color for lines, axes, tick labels and text annotations.
    pub fg1: Color32,
    /// Grid line color.
    pub fg2: Color32,
    /// Plot area background.
    pub bg1: Color32,
    /// Window background around the plot.
    pub bg2: Color32,
}

/// Named palette selecting line, grid and background colors.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorTheme {
    /// Dark blue lines with light blue grid on white.
    Classic,
    Dark,
    SolarizedDark,
    SolarizedLight,
    Nord,
    Dracula,
    GruvboxDark,
    /// Pure white on black.
    HighContrast,
    /// User-defined colors.
    Custom(ThemeColors),
}

impl Default for ColorTheme {
    fn default() -> Self {
        ColorTheme::Classic
    }
}

impl ColorTheme {
    /// All built-in themes.
    pub fn all() -> &'static [ColorTheme] {
        &[
            ColorTheme::Classic,
            ColorTheme::Dark,
            ColorTheme::SolarizedDark,
            ColorTheme::SolarizedLight,
            ColorTheme::Nord,
            ColorTheme::Dracula,
            ColorTheme::GruvboxDark,
            ColorTheme::HighContrast,
        ]
    }

    /// Lookup key used by [`ColorTheme::named`] and config files.
    pub fn name(&self) -> &'static str {
        match self {
            ColorTheme::Classic => "classic",
            ColorTheme::Dark => "dark",
            ColorTheme::SolarizedDark => "solarized-dark",
            ColorTheme::SolarizedLight => "solarized-light",
            ColorTheme::Nord => "nord",
            ColorTheme::Dracula => "dracula",
            ColorTheme::GruvboxDark => "gruvbox-dark",
            ColorTheme::HighContrast => "high-contrast",
            ColorTheme::Custom(_) => "custom",
        }
    }

    /// Resolve a built-in theme by name (case-insensitive, `_` and `-` interchangeable).
    pub fn named(name: &str) -> Result<ColorTheme, TimePlotError> {
        let key = name.trim().to_ascii_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .find(|t| t.name() == key)
            .cloned()
            .ok_or_else(|| {
                let known: Vec<&str> = Self::all().iter().map(|t| t.name()).collect();
                TimePlotError::config(format!(
                    "unknown color theme '{}' (expected one of: {})",
                    name,
                    known.join(", ")
                ))
            })
    }

    pub fn colors(&self) -> ThemeColors {
        match self {
            ColorTheme::Classic => ThemeColors {
                fg1: Color32::from_rgb(0, 0, 139),
                fg2: Color32::from_rgb(173, 216, 230),
                bg1: Color32::WHITE,
                bg2: Color32::WHITE,
            },
            ColorTheme::Dark => ThemeColors {
                fg1: Color32::from_rgb(31, 119, 180),
                fg2: Color32::from_rgb(80, 80, 80),
                bg1: Color32::from_rgb(10, 10, 10),
                bg2: Color32::from_rgb(27, 27, 27),
            },
            ColorTheme::SolarizedDark => ThemeColors {
                fg1: Color32::from_rgb(131, 148, 150),
                fg2: Color32::from_rgb(88, 110, 117),
                bg1: Color32::from_rgb(0, 43, 54),
                bg2: Color32::from_rgb(7, 54, 66),
            },
            ColorTheme::SolarizedLight => ThemeColors {
                fg1: Color32::from_rgb(101, 123, 131),
                fg2: Color32::from_rgb(147, 161, 161),
                bg1: Color32::from_rgb(253, 246, 227),
                bg2: Color32::from_rgb(238, 232, 213),
            },
            ColorTheme::Nord => ThemeColors {
                fg1: Color32::from_rgb(136, 192, 208),
                fg2: Color32::from_rgb(76, 86, 106),
                bg1: Color32::from_rgb(46, 52, 64),
                bg2: Color32::from_rgb(59, 66, 82),
            },
            ColorTheme::Dracula => ThemeColors {
                fg1: Color32::from_rgb(189, 147, 249),
                fg2: Color32::from_rgb(98, 114, 164),
                bg1: Color32::from_rgb(40, 42, 54),
                bg2: Color32::from_rgb(68, 71, 90),
            },
            ColorTheme::GruvboxDark => ThemeColors {
                fg1: Color32::from_rgb(235, 219, 178),
                fg2: Color32::from_rgb(102, 92, 84),
                bg1: Color32::from_rgb(40, 40, 40),
                bg2: Color32::from_rgb(60, 56, 54),
            },
            ColorTheme::HighContrast => ThemeColors {
                fg1: Color32::WHITE,
                fg2: Color32::from_rgb(90, 90, 90),
                bg1: Color32::BLACK,
                bg2: Color32::from_rgb(10, 10, 10),
            },
            ColorTheme::Custom(colors) => *colors,
        }
    }

    /// Whether the theme is built on egui's dark visuals.
    pub fn is_dark(&self) -> bool {
        let bg = self.colors().bg1;
        // Rec. 601 luma
        let luma = 0.299 * bg.r() as f32 + 0.587 * bg.g() as f32 + 0.114 * bg.b() as f32;
        luma < 128.0
    }

    pub fn visuals(&self) -> Visuals {
        let c = self.colors();
        let mut v = if self.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        };
        v.panel_fill = c.bg2;
        v.window_fill = c.bg2;
        v.extreme_bg_color = c.bg1;
        v.faint_bg_color = c.bg1;
        v.override_text_color = Some(c.fg1);
        v.widgets.noninteractive.bg_stroke.color = c.fg1;
        v.widgets.noninteractive.fg_stroke.color = c.fg1;
        v
    }

    /// Apply this theme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }
}

/// Parse a color given as `#rrggbb`, `#rrggbbaa` or one of a few common names.
pub fn parse_color(s: &str) -> Result<Color32, TimePlotError> {
    let key = s.trim().to_ascii_lowercase();
    let named = match key.as_str() {
        "black" => Some(Color32::BLACK),
        "white" => Some(Color32::WHITE),
        "red" => Some(Color32::from_rgb(255, 0, 0)),
        "green" => Some(Color32::from_rgb(0, 128, 0)),
        "blue" => Some(Color32::from_rgb(0, 0, 255)),
        "darkblue" => Some(Color32::from_rgb(0, 0, 139)),
        "lightblue" => Some(Color32::from_rgb(173, 216, 230)),
        "orange" => Some(Color32::from_rgb(255, 165, 0)),
        "gray" | "grey" => Some(Color32::from_rgb(128, 128, 128)),
        _ => None,
    };
    if let Some(c) = named {
        return Ok(c);
    }
    if key.starts_with('#') {
        if let Ok(c) = Color32::from_hex(&key) {
            return Ok(c);
        }
    }
    Err(TimePlotError::config(format!("cannot parse color '{}'", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_accepts_underscores_and_case() {
        assert_eq!(ColorTheme::named("Solarized_Dark").unwrap(), ColorTheme::SolarizedDark);
        assert!(ColorTheme::named("neon").is_err());
    }

    #[test]
    fn classic_is_light_and_dracula_is_dark() {
        assert!(!ColorTheme::Classic.is_dark());
        assert!(ColorTheme::Dracula.is_dark());
    }

    #[test]
    fn parse_hex_and_names() {
        assert_eq!(parse_color("#ff0000").unwrap(), Color32::from_rgb(255, 0, 0));
        assert_eq!(parse_color("DarkBlue").unwrap(), Color32::from_rgb(0, 0, 139));
        assert!(parse_color("#zz").is_err());
    }
}
