//! Updater: advances the plot by exactly one tick.
//!
//! Per tick the updater
//! 1. pulls one [`Tick`] from the source,
//! 2. appends it to the [`SeriesBuffer`] (which evicts per retention policy),
//! 3. moves the visible time range according to the [`UpdateStyle`],
//! 4. rebuilds line data, y range and labels in the [`RenderContext`].

use chrono::TimeDelta;

use crate::config::{RetentionPolicy, TimePlotConfig, UpdateStyle};
use crate::data::buffer::SeriesBuffer;
use crate::data::formatter::AxisFormatter;
use crate::data::render::{RenderContext, RenderedLine, ValueLabel};
use crate::data::series_look::SeriesLook;
use crate::error::TimePlotError;
use crate::tick::{to_plot_x, Tick, TickSource};

/// Window geometry, copied out of the config at setup.
#[derive(Debug, Clone, Copy)]
struct WindowSettings {
    update_style: UpdateStyle,
    period_secs: f64,
    padding_secs: f64,
    jump_step_secs: f64,
    y_margin: f64,
}

pub struct Updater {
    window: WindowSettings,
    formatter: AxisFormatter,
    looks: Vec<SeriesLook>,
    /// Series count fixed by configuration; inferred from the first tick otherwise.
    declared_series: Option<usize>,
    retention: RetentionPolicy,
    period: TimeDelta,
    /// Created on the first tick, once the series count is known.
    buffer: Option<SeriesBuffer>,
}

impl Updater {
    /// Validate `cfg` and prepare an updater with empty buffers.
    pub fn new(cfg: &TimePlotConfig) -> Result<Self, TimePlotError> {
        cfg.validate()?;
        let period = TimeDelta::try_milliseconds((cfg.period_secs * 1_000.0).round() as i64)
            .ok_or_else(|| TimePlotError::config("period is out of range"))?;
        Ok(Self {
            window: WindowSettings {
                update_style: cfg.update_style,
                period_secs: cfg.period_secs,
                padding_secs: cfg.padding_secs,
                jump_step_secs: cfg.jump_step_secs,
                y_margin: cfg.y_margin,
            },
            formatter: AxisFormatter::from_config(cfg),
            looks: cfg.series.clone(),
            declared_series: cfg.declared_series_count(),
            retention: cfg.retention,
            period,
            buffer: None,
        })
    }

    pub fn formatter(&self) -> &AxisFormatter {
        &self.formatter
    }

    pub fn buffer(&self) -> Option<&SeriesBuffer> {
        self.buffer.as_ref()
    }

    /// Pull one tick from `source` and apply it. Source errors are returned
    /// unchanged in meaning and leave the buffer untouched.
    pub fn advance<S>(&mut self, source: &mut S, ctx: &mut RenderContext) -> Result<(), TimePlotError>
    where
        S: TickSource + ?Sized,
    {
        let tick = source.next_tick().map_err(TimePlotError::Source)?;
        self.apply(&tick, ctx)
    }

    /// Apply an already produced tick.
    pub fn apply(&mut self, tick: &Tick, ctx: &mut RenderContext) -> Result<(), TimePlotError> {
        if self.buffer.is_none() {
            self.init(tick, ctx)?;
        }
        let Some(buffer) = self.buffer.as_mut() else {
            return Err(TimePlotError::Halted);
        };
        buffer.push(tick, self.period)?;

        let t = to_plot_x(tick.timestamp);
        self.move_window(t, ctx);
        self.rebuild_lines(ctx);
        self.fit_y(ctx);

        ctx.date_label = self.formatter.format_date(t);
        ctx.value_label = tick
            .values
            .first()
            .copied()
            .filter(|v| v.is_finite())
            .map(|y| ValueLabel {
                y,
                text: self.formatter.format_value(y),
            });
        ctx.redraws += 1;
        Ok(())
    }

    /// Fix the series count, create line artists and the initial window.
    fn init(&mut self, first: &Tick, ctx: &mut RenderContext) -> Result<(), TimePlotError> {
        let n = first.arity();
        if n == 0 {
            return Err(TimePlotError::config("ticks must carry at least one value"));
        }
        match self.declared_series {
            Some(expected) if expected != n => {
                return Err(TimePlotError::ArityMismatch { expected, found: n });
            }
            Some(_) => {}
            None => self.looks = vec![SeriesLook::default(); n],
        }
        self.buffer = Some(SeriesBuffer::new(n, self.retention));

        ctx.lines = self
            .looks
            .iter()
            .map(|look| RenderedLine {
                look: look.clone(),
                color: self.formatter.line_color(look),
                points: Vec::new(),
            })
            .collect();

        let t0 = to_plot_x(first.timestamp);
        ctx.x_bounds = Some((t0, t0 + self.window.period_secs + self.window.padding_secs));
        log::info!(
            "time plot started with {} series, update style '{}'",
            n,
            self.window.update_style
        );
        Ok(())
    }

    fn move_window(&self, t: f64, ctx: &mut RenderContext) {
        let Some((mut lo, mut hi)) = ctx.x_bounds else {
            return;
        };
        let w = &self.window;
        if hi >= t + w.padding_secs {
            return;
        }
        match w.update_style {
            UpdateStyle::Jump => {
                let steps = ((t + w.padding_secs - hi) / w.jump_step_secs).ceil().max(1.0);
                lo += steps * w.jump_step_secs;
                hi += steps * w.jump_step_secs;
                log::debug!("time window jumped by {} step(s) to start at {}", steps, lo);
            }
            UpdateStyle::Cont => {
                lo = t - w.period_secs;
                hi = t + w.padding_secs;
            }
        }
        ctx.x_bounds = Some((lo, hi));
    }

    fn rebuild_lines(&self, ctx: &mut RenderContext) {
        let Some(buffer) = &self.buffer else {
            return;
        };
        let xs: Vec<f64> = buffer.timestamps().iter().map(|ts| to_plot_x(*ts)).collect();
        for (line, column) in ctx.lines.iter_mut().zip(buffer.columns()) {
            line.points = xs
                .iter()
                .zip(column.iter())
                .filter(|(_, y)| y.is_finite())
                .map(|(x, y)| [*x, *y])
                .collect();
        }
    }

    /// Autoscale y over the samples inside the visible time range.
    fn fit_y(&self, ctx: &mut RenderContext) {
        let Some((x_lo, x_hi)) = ctx.x_bounds else {
            return;
        };
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for line in ctx.lines.iter() {
            for p in line.points.iter().filter(|p| p[0] >= x_lo && p[0] <= x_hi) {
                min_y = min_y.min(p[1]);
                max_y = max_y.max(p[1]);
            }
        }
        if !(min_y.is_finite() && max_y.is_finite()) {
            return;
        }
        let (lo, hi) = if max_y > min_y {
            (min_y, max_y)
        } else {
            (min_y - 0.5, max_y + 0.5)
        };
        let pad = (hi - lo) * self.window.y_margin;
        ctx.y_bounds = (lo - pad, hi + pad);
    }
}
