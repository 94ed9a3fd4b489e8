// src/gui/components/controls.rs
//
// Left panel: sources, date window, toggles. Any change recomputes the
// outcome right away; the core pass is cheap.

use eframe::egui;
use egui_extras::DatePickerButton;

use crate::config::consts::MissingTierPolicy;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Sources");

    ui.label("Schedule:");
    ui.add(egui::TextEdit::singleline(&mut app.state.gui.schedule_text)
        .font(egui::TextStyle::Monospace));
    ui.label("Ratings (blank = counts only):");
    ui.add(egui::TextEdit::singleline(&mut app.state.gui.ratings_text)
        .font(egui::TextStyle::Monospace));

    if ui.button("Reload").clicked() {
        logf!("UI: Reload ({} | {})", app.state.gui.schedule_text, app.state.gui.ratings_text);
        app.reload();
    }

    ui.separator();
    ui.heading("Filter Range");

    let mut changed = false;
    let query = &mut app.state.options.query;

    let before = query.back_to_back;
    ui.checkbox(&mut query.back_to_back, "Teams playing today & tomorrow (back-to-back)");
    if query.back_to_back != before {
        logf!("UI: back_to_back → {}", query.back_to_back);
        changed = true;
    }

    ui.add_enabled_ui(!query.back_to_back, |ui| {
        if ui.checkbox(&mut query.start_from_today, "Start from today").changed() {
            changed = true;
        }

        let gui = &mut app.state.gui;
        ui.add_enabled_ui(!query.start_from_today, |ui| {
            ui.horizontal(|ui| {
                ui.label("Start Date");
                if ui.add(DatePickerButton::new(&mut gui.start).id_salt("start_date")).changed() {
                    changed = true;
                }
            });
        });
        ui.horizontal(|ui| {
            ui.label("End Date");
            if ui.add(DatePickerButton::new(&mut gui.end).id_salt("end_date")).changed() {
                changed = true;
            }
        });
    });

    ui.separator();
    ui.label("Unrated opponents count as:");
    ui.horizontal(|ui| {
        let policy = &mut app.state.options.query.missing_tier;
        let prev = *policy;
        ui.selectable_value(policy, MissingTierPolicy::Neutral, "Neutral");
        ui.selectable_value(policy, MissingTierPolicy::Unknown, "Unknown");
        if *policy != prev {
            logf!("UI: missing_tier → {}", policy.as_str());
            changed = true;
        }
    });

    ui.separator();
    if ui.button("Show games").clicked() {
        changed = true;
    }

    if changed {
        app.refresh();
    }
}
