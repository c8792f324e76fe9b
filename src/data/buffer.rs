//! SeriesBuffer: the rolling, index-aligned history of received ticks.

use std::collections::VecDeque;

use chrono::{NaiveDateTime, TimeDelta};

use crate::config::RetentionPolicy;
use crate::error::TimePlotError;
use crate::tick::Tick;

/// Timestamps plus one value column per series, all of equal length.
///
/// The buffer only ever grows at the back and shrinks at the front.
#[derive(Debug, Clone)]
pub struct SeriesBuffer {
    timestamps: VecDeque<NaiveDateTime>,
    columns: Vec<VecDeque<f64>>,
    retention: RetentionPolicy,
}

impl SeriesBuffer {
    /// Create an empty buffer for `series_count` value columns.
    pub fn new(series_count: usize, retention: RetentionPolicy) -> Self {
        Self {
            timestamps: VecDeque::new(),
            columns: vec![VecDeque::new(); series_count],
            retention,
        }
    }

    pub fn series_count(&self) -> usize {
        self.columns.len()
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Append a tick, then evict according to the retention policy.
    ///
    /// `period` is only consulted by [`RetentionPolicy::Period`].
    pub fn push(&mut self, tick: &Tick, period: TimeDelta) -> Result<(), TimePlotError> {
        if tick.arity() != self.columns.len() {
            return Err(TimePlotError::ArityMismatch {
                expected: self.columns.len(),
                found: tick.arity(),
            });
        }
        self.timestamps.push_back(tick.timestamp);
        for (col, v) in self.columns.iter_mut().zip(tick.values.iter()) {
            col.push_back(*v);
        }
        self.evict(tick.timestamp, period);
        Ok(())
    }

    fn evict(&mut self, newest: NaiveDateTime, period: TimeDelta) {
        match self.retention {
            RetentionPolicy::Unbounded => {}
            RetentionPolicy::Capped(k) => {
                while self.timestamps.len() > k {
                    self.pop_front();
                }
            }
            RetentionPolicy::Period => {
                // Nothing can be older than a cutoff before the earliest date.
                let Some(cutoff) = newest.checked_sub_signed(period) else {
                    return;
                };
                // Keep one tick left of the cutoff so the line starts at the border.
                while self.timestamps.len() > 1 && self.timestamps[1] < cutoff {
                    self.pop_front();
                }
            }
        }
    }

    fn pop_front(&mut self) {
        self.timestamps.pop_front();
        for col in self.columns.iter_mut() {
            col.pop_front();
        }
    }

    pub fn timestamps(&self) -> &VecDeque<NaiveDateTime> {
        &self.timestamps
    }

    /// Values of one series, index-aligned with [`timestamps`](Self::timestamps).
    pub fn column(&self, series: usize) -> Option<&VecDeque<f64>> {
        self.columns.get(series)
    }

    pub fn columns(&self) -> &[VecDeque<f64>] {
        &self.columns
    }

    /// The most recent tick, reassembled.
    pub fn latest(&self) -> Option<Tick> {
        let ts = *self.timestamps.back()?;
        let values = self
            .columns
            .iter()
            .map(|c| c.back().copied().unwrap_or(f64::NAN))
            .collect::<Vec<_>>();
        Some(Tick::new(ts, values))
    }

    /// Iterate `(timestamp, values)` rows from oldest to newest.
    pub fn rows(&self) -> impl Iterator<Item = (NaiveDateTime, Vec<f64>)> + '_ {
        self.timestamps
            .iter()
            .enumerate()
            .map(move |(i, ts)| (*ts, self.columns.iter().map(|c| c[i]).collect()))
    }
}
