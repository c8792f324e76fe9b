//! Plot rendering for [`TimePlotApp`](super::TimePlotApp).
//!
//! Everything shown here is read from the render context; the widget itself is
//! not interactive, so zoom and pan are disabled.

use egui::{Align2, RichText};
use egui_plot::{Corner, GridInput, GridMark, Legend, Line, Plot, PlotPoint, Text};

use crate::data::formatter::AxisFormatter;
use crate::data::render::RenderContext;

/// Fraction of the plot size used to inset the title from the top-left corner.
const TITLE_INSET: (f64, f64) = (0.02, 0.055);

pub(super) fn show_plot(ui: &mut egui::Ui, render: &RenderContext, fmt: &AxisFormatter) {
    let colors = fmt.colors;

    let mut plot = Plot::new("timeplot")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_x(false)
        .show_y(false)
        .y_axis_position(egui_plot::HPlacement::Right)
        .x_grid_spacer(|input: GridInput| {
            fmt.grid_marks(input.bounds.0, input.bounds.1)
                .into_iter()
                .map(|m| GridMark {
                    value: m.value,
                    step_size: m.step_size,
                })
                .collect()
        })
        .x_axis_formatter(|mark, range| fmt.tick_label(mark.value, *range.start(), *range.end()))
        .y_axis_formatter(|mark, _range| fmt.format_value(mark.value));

    if render.has_legend() {
        plot = plot.legend(Legend::default().position(Corner::LeftBottom));
    }

    plot.show(ui, |plot_ui| {
        let Some((x_lo, x_hi)) = render.x_bounds else {
            return;
        };
        let (y_lo, y_hi) = render.y_bounds;
        plot_ui.set_plot_bounds_x(x_lo..=x_hi);
        plot_ui.set_plot_bounds_y(y_lo..=y_hi);

        for line in render.lines.iter() {
            let name = line.look.legend_label().unwrap_or_default();
            plot_ui.line(
                Line::new(name, line.points.clone())
                    .color(line.color)
                    .width(line.look.width)
                    .style(line.look.style),
            );
        }

        if let Some(title) = &render.title {
            let pos = PlotPoint::new(
                x_lo + (x_hi - x_lo) * TITLE_INSET.0,
                y_hi - (y_hi - y_lo) * TITLE_INSET.1,
            );
            plot_ui.text(
                Text::new("title", pos, RichText::new(title).color(colors.fg1))
                    .anchor(Align2::LEFT_TOP),
            );
        }

        if let Some(value) = &render.value_label {
            plot_ui.text(
                Text::new(
                    "value",
                    PlotPoint::new(x_hi, value.y),
                    RichText::new(&value.text)
                        .color(colors.fg1)
                        .background_color(colors.bg1),
                )
                .anchor(Align2::RIGHT_CENTER),
            );
        }
    });
}
