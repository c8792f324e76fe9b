//! timeplot crate root: re-exports and module wiring.
//!
//! A realtime plot for time series. A user function is called once per tick
//! and returns a timestamp plus one value per line; the plot keeps a rolling
//! buffer of those ticks and redraws them in an egui/eframe window.
//!
//! - `tick`: tick values and the [`TickSource`] contract
//! - `config`: [`TimePlotConfig`], update style, retention policy, config files
//! - `color_theme`: named palettes
//! - `data`: buffer, formatter, render context and the per-tick updater
//! - `session`: fail-fast tick loop, also usable without a window
//! - `app`: eframe application and the [`timeplot`] entry point

pub mod app;
pub mod color_theme;
pub mod config;
pub mod data;
pub mod error;
pub mod session;
pub mod tick;

// Public re-exports for a compact external API
pub use app::{run_timeplot, timeplot, TimePlotApp};
pub use color_theme::{ColorTheme, ThemeColors};
pub use config::{RetentionPolicy, TimePlotConfig, TimePlotConfigFile, UpdateStyle};
pub use data::render::RenderContext;
pub use data::series_look::SeriesLook;
pub use data::updater::Updater;
pub use error::TimePlotError;
pub use session::{Session, SessionState, StepOutcome};
pub use tick::{SourceError, Tick, TickSource};
