//! Top-level entry points for running a time plot in a native window.

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;

use crate::config::TimePlotConfig;
use crate::error::TimePlotError;
use crate::session::Session;
use crate::tick::{SourceError, Tick, TickSource};

use super::TimePlotApp;

/// Launch a time plot fed by `source` in a native window.
///
/// The configuration is validated before the window opens. The call blocks
/// until the window is closed. If the tick source fails, the window closes and
/// the error is returned.
pub fn run_timeplot<S>(source: S, mut cfg: TimePlotConfig) -> Result<(), TimePlotError>
where
    S: TickSource + 'static,
{
    let session = Session::new(source, &cfg)?;
    let failure = Rc::new(RefCell::new(None));
    let app = TimePlotApp::new(session, cfg.color_theme.clone(), Rc::clone(&failure));

    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Set a default window size if one is not provided by config.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(900.0, 600.0));
    }

    eframe::run_native(&cfg.window_title, opts, Box::new(move |_cc| Ok(Box::new(app))))?;

    let failed = failure.borrow_mut().take();
    match failed {
        Some(e) => Err(e),
        None => {
            log::info!("time plot window closed");
            Ok(())
        }
    }
}

/// Plot the ticks returned by `producer`, a zero-argument function.
///
/// ```no_run
/// use timeplot::{timeplot, Tick, TimePlotConfig, UpdateStyle};
///
/// let mut i = 0.0_f64;
/// let cfg = TimePlotConfig {
///     update_style: UpdateStyle::Cont,
///     ..Default::default()
/// };
/// timeplot(
///     move || {
///         i += 0.1;
///         Ok(Tick::new(chrono::Local::now().naive_local(), vec![i.sin()]))
///     },
///     cfg,
/// )
/// .unwrap();
/// ```
pub fn timeplot<F>(producer: F, cfg: TimePlotConfig) -> Result<(), TimePlotError>
where
    F: FnMut() -> Result<Tick, SourceError> + 'static,
{
    run_timeplot(producer, cfg)
}
