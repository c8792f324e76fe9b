//! eframe front end for timeplot.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`plot`]   | Drawing a [`RenderContext`](crate::data::render::RenderContext) with egui_plot |
//! | [`run`]    | The [`run_timeplot`] / [`timeplot`] entry points |
//!
//! The eframe event loop acts as the timer: every frame the app checks whether
//! the tick interval has elapsed, advances the session if so, and schedules the
//! next repaint for when the following tick is due.

mod plot;
mod run;

pub use run::{run_timeplot, timeplot};

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use eframe::egui;

use crate::color_theme::ColorTheme;
use crate::data::formatter::AxisFormatter;
use crate::error::TimePlotError;
use crate::session::{Session, SessionState};
use crate::tick::TickSource;

/// Slot the app leaves the fatal error in for the caller of `run_native`.
pub(crate) type FailureSlot = Rc<RefCell<Option<TimePlotError>>>;

/// Standalone eframe application showing one live time plot.
pub struct TimePlotApp<S: TickSource> {
    session: Session<S>,
    formatter: AxisFormatter,
    theme: ColorTheme,
    theme_applied: bool,
    failure: FailureSlot,
}

impl<S: TickSource> TimePlotApp<S> {
    pub(crate) fn new(session: Session<S>, theme: ColorTheme, failure: FailureSlot) -> Self {
        let formatter = session.updater().formatter().clone();
        Self {
            session,
            formatter,
            theme,
            theme_applied: false,
            failure,
        }
    }
}

impl<S: TickSource> eframe::App for TimePlotApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply the color theme once on the first frame.
        if !self.theme_applied {
            self.theme.apply(ctx);
            self.theme_applied = true;
        }

        if let Err(e) = self.session.step_if_due(Instant::now()) {
            *self.failure.borrow_mut() = Some(e);
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        egui::TopBottomPanel::bottom("timeplot_date")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(&self.session.render().date_label);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            plot::show_plot(ui, self.session.render(), &self.formatter);
        });

        if self.session.state() == SessionState::Running {
            ctx.request_repaint_after(self.session.time_until_due(Instant::now()));
        }
    }
}
