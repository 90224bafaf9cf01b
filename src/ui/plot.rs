use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::chart::PieChart;
use crate::color::{FAILURE_COLOR, SUCCESS_COLOR};
use crate::data::model::SiteSelection;
use crate::state::AppState;

/// Arc resolution of a full circle.
const PIE_SEGMENTS: usize = 128;

// ---------------------------------------------------------------------------
// Pie geometry
// ---------------------------------------------------------------------------

/// Outline of a unit-circle wedge covering `[start, end)` of the full turn.
///
/// Wedges start at twelve o'clock and run clockwise.
pub fn wedge_points(start: f64, end: f64) -> Vec<[f64; 2]> {
    let steps = (((end - start) * PIE_SEGMENTS as f64).ceil() as usize).max(1);
    let mut pts = Vec::with_capacity(steps + 2);
    pts.push([0.0, 0.0]);
    for i in 0..=steps {
        let frac = start + (end - start) * i as f64 / steps as f64;
        let angle = FRAC_PI_2 - frac * TAU;
        pts.push([angle.cos(), angle.sin()]);
    }
    pts
}

/// Where a wedge's label goes: the middle of its arc, inside the rim.
fn label_anchor(start: f64, end: f64) -> PlotPoint {
    let angle = FRAC_PI_2 - (start + end) / 2.0 * TAU;
    PlotPoint::new(0.65 * angle.cos(), 0.65 * angle.sin())
}

fn slice_color(state: &AppState, label: &str) -> Color32 {
    match state.selection.site {
        SiteSelection::All => state.site_colors.color_for(label),
        SiteSelection::Site(_) if label == "1" => SUCCESS_COLOR,
        SiteSelection::Site(_) => FAILURE_COLOR,
    }
}

fn notice(ui: &mut Ui, title: &str, msg: &str) {
    ui.heading(title);
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(RichText::new(msg).italics());
    });
}

// ---------------------------------------------------------------------------
// Output slot A: outcome pie
// ---------------------------------------------------------------------------

/// Render the outcome proportion chart.
pub fn success_pie(ui: &mut Ui, state: &AppState) {
    let pie: &PieChart = &state.pie;
    if let Some(msg) = &pie.notice {
        notice(ui, &pie.title, msg);
        return;
    }
    if pie.is_empty() || pie.total() <= 0.0 {
        notice(ui, &pie.title, "No successful launches to show");
        return;
    }

    ui.heading(&pie.title);
    let fractions = pie.fractions();

    Plot::new("success_pie")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .show(ui, |plot_ui| {
            let mut start: f64 = 0.0;
            for (slice, frac) in pie.slices.iter().zip(&fractions) {
                let end = start + *frac;
                if *frac > 0.0 {
                    let color = slice_color(state, &slice.label);
                    let wedge = Polygon::new(PlotPoints::from(wedge_points(start, end)))
                        .name(&slice.label)
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE));
                    plot_ui.polygon(wedge);

                    let text = format!("{:.1}%", frac * 100.0);
                    plot_ui.text(
                        Text::new(label_anchor(start, end), RichText::new(text).strong())
                            .color(Color32::WHITE),
                    );
                }
                start = end;
            }
        });
}

// ---------------------------------------------------------------------------
// Output slot B: payload vs outcome scatter
// ---------------------------------------------------------------------------

/// Render the payload / outcome scatter plot, one series per booster category.
pub fn payload_scatter(ui: &mut Ui, state: &AppState) {
    let chart = &state.scatter;
    if let Some(msg) = &chart.notice {
        notice(ui, &chart.title, msg);
        return;
    }

    ui.heading(&chart.title);
    if chart.is_empty() {
        ui.label(RichText::new("No launches in the selected payload range").italics());
    }

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(state.slider_bounds.min)
        .include_x(state.slider_bounds.max)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, points) in chart.series() {
                let series = Points::new(PlotPoints::from(points))
                    .name(category)
                    .color(state.booster_colors.color_for(category))
                    .radius(5.0);
                plot_ui.points(series);
            }
        });
}
