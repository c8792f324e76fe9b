//! Session: drives an [`Updater`] from a [`TickSource`] at a fixed interval.
//!
//! A session is fail-fast. The first error from the tick source (or an arity
//! mismatch) is recorded, the session halts and no further ticks are requested.
//! It stops cleanly once the optional frame limit is reached.

use std::time::{Duration, Instant};

use crate::config::TimePlotConfig;
use crate::data::render::RenderContext;
use crate::data::updater::Updater;
use crate::error::TimePlotError;
use crate::tick::TickSource;

/// Result of a single [`Session::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// One tick was consumed and the render context updated.
    Advanced,
    /// The frame limit was already reached; nothing was requested.
    Finished,
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Finished,
    Failed,
}

pub struct Session<S: TickSource> {
    source: S,
    updater: Updater,
    render: RenderContext,
    interval: Duration,
    frame_limit: Option<u64>,
    frames: u64,
    state: SessionState,
    last_tick: Option<Instant>,
}

impl<S: TickSource> Session<S> {
    /// Validate `cfg` and create a session. No tick is requested yet.
    pub fn new(source: S, cfg: &TimePlotConfig) -> Result<Self, TimePlotError> {
        let updater = Updater::new(cfg)?;
        Ok(Self {
            source,
            updater,
            render: RenderContext::new(cfg.title.clone()),
            interval: cfg.interval,
            frame_limit: cfg.frame_limit,
            frames: 0,
            state: SessionState::Running,
            last_tick: None,
        })
    }

    pub fn render(&self) -> &RenderContext {
        &self.render
    }

    pub fn updater(&self) -> &Updater {
        &self.updater
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Successful frames so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Consume exactly one tick.
    pub fn step(&mut self) -> Result<StepOutcome, TimePlotError> {
        match self.state {
            SessionState::Failed => return Err(TimePlotError::Halted),
            SessionState::Finished => return Ok(StepOutcome::Finished),
            SessionState::Running => {}
        }
        if self.frame_limit.is_some_and(|limit| self.frames >= limit) {
            self.state = SessionState::Finished;
            log::warn!("frame limit of {} reached, no more ticks requested", self.frames);
            return Ok(StepOutcome::Finished);
        }

        self.last_tick = Some(Instant::now());
        match self.updater.advance(&mut self.source, &mut self.render) {
            Ok(()) => {
                self.frames += 1;
                Ok(StepOutcome::Advanced)
            }
            Err(e) => {
                self.state = SessionState::Failed;
                log::error!("time plot halted after {} frame(s): {}", self.frames, e);
                Err(e)
            }
        }
    }

    /// Time left until the next tick is due at `now`. Zero means due.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        match self.last_tick {
            None => Duration::ZERO,
            Some(last) => self.interval.saturating_sub(now.saturating_duration_since(last)),
        }
    }

    /// Step if the interval has elapsed since the previous tick.
    pub fn step_if_due(&mut self, now: Instant) -> Result<Option<StepOutcome>, TimePlotError> {
        if self.state != SessionState::Running || !self.time_until_due(now).is_zero() {
            return Ok(None);
        }
        self.step().map(Some)
    }

    /// Run without a window: step, hand the frame to `redraw`, sleep, repeat.
    ///
    /// Returns when the frame limit is reached or on the first error. Without a
    /// frame limit this only returns on error.
    pub fn run_blocking<F>(&mut self, mut redraw: F) -> Result<(), TimePlotError>
    where
        F: FnMut(&RenderContext),
    {
        log::info!("starting headless time plot, interval {:?}", self.interval);
        loop {
            let started = Instant::now();
            match self.step()? {
                StepOutcome::Finished => return Ok(()),
                StepOutcome::Advanced => redraw(&self.render),
            }
            if self.frame_limit.is_some_and(|limit| self.frames >= limit) {
                self.state = SessionState::Finished;
                log::info!("headless time plot finished after {} frame(s)", self.frames);
                return Ok(());
            }
            let wait = self.interval.saturating_sub(started.elapsed());
            if !wait.is_zero() {
                std::thread::sleep(wait);
            }
        }
    }
}
