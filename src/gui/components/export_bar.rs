// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{config::options::ExportFormat, file, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let export = &mut app.state.options.export;

    ui.horizontal(|ui| {
        ui.label("Format:");
        let prev = export.format;
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        if export.format != prev {
            logf!("UI: Export format → {:?}", export.format);
            // Keep the text field in step unless the user typed their own extension.
            let mut probe = export.clone();
            probe.set_path(&app.state.gui.out_path_text);
            app.state.gui.out_path_text = probe.out_path().to_string_lossy().into_owned();
        }

        ui.checkbox(&mut export.include_headers, "Include headers");
    });

    ui.horizontal(|ui| {
        ui.label("Output:");
        ui.add(egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
            .font(egui::TextStyle::Monospace));

        let ready = app.outcome.as_ref().is_some_and(|o| !o.is_empty());

        if ui.add_enabled(ready, egui::Button::new("Export")).clicked() {
            export.set_path(&app.state.gui.out_path_text);
            if let Some(outcome) = &app.outcome {
                app.status = match file::write_export(export, &outcome.groups) {
                    Ok(path) => format!("Exported {}", path.display()),
                    Err(e) => {
                        loge!("Export: {}", e);
                        format!("⚠ Export failed: {e}")
                    }
                };
            }
        }

        if ui.add_enabled(ready, egui::Button::new("Copy")).clicked() {
            if let Some(outcome) = &app.outcome {
                let text = file::to_export_string(&outcome.groups, export.include_headers, export.format.delim());
                ui.ctx().copy_text(text);
                app.status = format!("Copied {} teams", outcome.groups.team_count());
            }
        }
    });
}
