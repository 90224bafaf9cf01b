use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::{FAILURE_COLOR, SUCCESS_COLOR};
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Launches currently plotted in the scatter chart.
pub fn launch_table(ui: &mut Ui, state: &AppState) {
    let records = state.dataset.records();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for name in ["Flight", "Launch Site", "Payload (kg)", "Outcome", "Booster Version", "Category"] {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.visible_indices.len(), |mut row| {
                let rec = &records[state.visible_indices[row.index()]];
                row.col(|ui| {
                    ui.label(rec.flight_number.map(|n| n.to_string()).unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(&rec.launch_site);
                });
                row.col(|ui| {
                    ui.label(format!("{:.0}", rec.payload_mass_kg));
                });
                row.col(|ui| {
                    let (text, color) = if rec.is_success() {
                        ("success", SUCCESS_COLOR)
                    } else {
                        ("failure", FAILURE_COLOR)
                    };
                    ui.label(RichText::new(text).color(color));
                });
                row.col(|ui| {
                    ui.label(rec.booster_version.as_deref().unwrap_or("–"));
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(&rec.booster_version_category)
                            .color(state.booster_colors.color_for(&rec.booster_version_category)),
                    );
                });
            });
        });
}
