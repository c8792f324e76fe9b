//! Tick values and the producer contract.
//!
//! A tick source is any zero-argument callable returning one [`Tick`]. It runs
//! on the render thread; a slow source simply delays the next redraw.

use chrono::NaiveDateTime;

/// Error type a tick source may return. Any error halts the session.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A single sample: a timestamp plus one value per series.
///
/// Non-finite values (e.g. `f64::NAN`) are kept in the buffer but not drawn,
/// which is handy for indicators that are undefined during a warm-up phase.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub timestamp: NaiveDateTime,
    pub values: Vec<f64>,
}

impl Tick {
    pub fn new<V: Into<Vec<f64>>>(timestamp: NaiveDateTime, values: V) -> Self {
        Self {
            timestamp,
            values: values.into(),
        }
    }

    /// Number of series values carried by this tick.
    #[inline]
    pub fn arity(&self) -> usize {
        self.values.len()
    }
}

/// Producer of ticks, called once per animation frame.
pub trait TickSource {
    fn next_tick(&mut self) -> Result<Tick, SourceError>;
}

impl<F> TickSource for F
where
    F: FnMut() -> Result<Tick, SourceError>,
{
    fn next_tick(&mut self) -> Result<Tick, SourceError> {
        self()
    }
}

/// Convert a naive timestamp to plot X coordinates (seconds since the epoch).
///
/// Timestamps are treated as wall-clock values without a zone; the same
/// convention is used when formatting labels so round trips are exact.
pub fn to_plot_x(ts: NaiveDateTime) -> f64 {
    let utc = ts.and_utc();
    utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) * 1e-9
}

/// Inverse of [`to_plot_x`]. Out-of-range values fall back to the UNIX epoch.
pub fn from_plot_x(x: f64) -> NaiveDateTime {
    if !x.is_finite() {
        return NaiveDateTime::default();
    }
    let secs = x.floor() as i64;
    let nanos = (((x - secs as f64) * 1e9).round() as u32).min(999_999_999);
    chrono::DateTime::from_timestamp(secs, nanos)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default()
}
