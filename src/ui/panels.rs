use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the left control panel: site dropdown, payload sliders, legend.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Control A: launch site ----
            ui.strong("Launch site");
            let current = state.selection.site.clone();
            let mut picked = None;
            egui::ComboBox::from_id_salt("site_dropdown")
                .selected_text(current.label())
                .width(ui.available_width())
                .show_ui(ui, |ui: &mut Ui| {
                    for option in state.site_options() {
                        if ui
                            .selectable_label(option == current, option.label())
                            .clicked()
                        {
                            picked = Some(option);
                        }
                    }
                });
            if let Some(site) = picked {
                state.select_site(site);
            }
            ui.separator();

            // ---- Control B: payload interval ----
            ui.strong("Payload range (kg)");
            let bounds = state.slider_bounds;
            let step = state.slider_step;

            let mut min = state.selection.payload.min;
            let min_slider = egui::Slider::new(&mut min, bounds.min..=bounds.max)
                .step_by(step)
                .text("min");
            if ui.add(min_slider).changed() {
                state.set_payload_min(min);
            }

            let mut max = state.selection.payload.max;
            let max_slider = egui::Slider::new(&mut max, bounds.min..=bounds.max)
                .step_by(step)
                .text("max");
            if ui.add(max_slider).changed() {
                state.set_payload_max(max);
            }

            if ui.small_button("Full range").clicked() {
                state.reset_payload();
            }
            ui.separator();

            // ---- Booster colour legend ----
            egui::CollapsingHeader::new(RichText::new("Booster Version Category").strong())
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    for (label, color) in state.booster_colors.legend_entries() {
                        ui.label(RichText::new(format!("● {label}")).color(color));
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} launches loaded, {} in view",
            state.dataset.len(),
            state.visible_indices.len()
        ));

        ui.separator();
        ui.label(format!("{}  ·  {}", state.selection.site.label(), state.selection.payload));

        let notice = state.pie.notice.as_ref().or(state.scatter.notice.as_ref());
        if let Some(msg) = notice {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
