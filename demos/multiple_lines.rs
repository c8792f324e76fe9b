//! Example: several lines with custom colors, widths and labels
//!
//! What it demonstrates
//! - A tick source that blocks (sleeps) before returning, like a slow API.
//! - Four series: a wandering signal, its 1-minute moving average and
//!   +/- 2 standard deviation bands. Indicators are NaN (not drawn) until one
//!   minute of history exists.
//! - Declaring series looks in the config, which also fixes the series count.
//!
//! How to run
//! ```bash
//! RUST_LOG=debug cargo run --example multiple_lines
//! ```

use std::collections::VecDeque;
use std::time::Duration;

use egui::Color32;
use timeplot::{run_timeplot, SeriesLook, SourceError, Tick, TickSource, TimePlotConfig, TimePlotError};

/// Simple time series with moving average and Bollinger bands.
struct SimpleTimeSeries {
    y: f64,
    n: u64,
    history: VecDeque<f64>,
    window: usize,
}

impl SimpleTimeSeries {
    fn new() -> Self {
        Self {
            y: 0.0,
            n: 0,
            history: VecDeque::new(),
            window: 60,
        }
    }

    /// Deterministic wobble standing in for random increments.
    fn step(&mut self) -> f64 {
        self.n += 1;
        let n = self.n as f64;
        (n * 0.7).sin() + 0.5 * (n * 1.9).cos() - 0.1 * (n * 0.05).sin()
    }

    fn indicators(&mut self, y: f64) -> [f64; 3] {
        self.history.push_back(y);
        if self.history.len() > self.window {
            self.history.pop_front();
        }
        if self.history.len() < self.window {
            return [f64::NAN; 3];
        }
        let len = self.history.len() as f64;
        let mean = self.history.iter().sum::<f64>() / len;
        let var = self.history.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / len;
        let sd = var.sqrt();
        [mean, mean + 2.0 * sd, mean - 2.0 * sd]
    }
}

impl TickSource for SimpleTimeSeries {
    fn next_tick(&mut self) -> Result<Tick, SourceError> {
        std::thread::sleep(Duration::from_millis(250));
        self.y += self.step();
        let [sma, up, down] = self.indicators(self.y);
        Ok(Tick::new(
            chrono::Local::now().naive_local(),
            vec![self.y, sma, up, down],
        ))
    }
}

fn main() -> Result<(), TimePlotError> {
    env_logger::init();

    let light_blue = Color32::from_rgb(173, 216, 230);
    let cfg = TimePlotConfig {
        title: Some("SimpleTimeSeries".to_string()),
        series: vec![
            SeriesLook::labeled("SimpleTimeSeries")
                .with_color(Color32::from_rgb(0, 0, 139))
                .with_width(1.0),
            SeriesLook::labeled("Moving average (1 minute)")
                .with_color(Color32::from_rgb(255, 165, 0))
                .with_width(0.8),
            SeriesLook::labeled("Moving average +/- 2 std. dev. (1 minute)")
                .with_color(light_blue)
                .with_width(0.4),
            SeriesLook::labeled("").with_color(light_blue).with_width(0.4),
        ],
        ..Default::default()
    };

    run_timeplot(SimpleTimeSeries::new(), cfg)
}
