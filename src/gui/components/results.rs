// src/gui/components/results.rs

use eframe::egui;

use crate::config::consts::{BATCH_SIZE, DISPLAY_DATE_FORMAT};
use crate::core::sanitize::batch_lines;
use crate::gui::app::App;
use crate::records::TeamRecord;
use crate::report::{NO_BACK_TO_BACK, NO_GAMES};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let has_ratings = app.has_ratings();

    let Some(outcome) = &app.outcome else {
        if app.data.is_some() {
            ui.colored_label(egui::Color32::YELLOW, NO_GAMES);
        } else {
            ui.label("No data loaded.");
        }
        return;
    };

    egui::ScrollArea::vertical()
        .id_salt("results_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if outcome.query.is_back_to_back() {
                ui.heading("Teams playing today & tomorrow");
                if outcome.back_to_back.is_empty() {
                    ui.label(NO_BACK_TO_BACK);
                } else {
                    let teams: Vec<&str> = outcome.back_to_back.iter().map(String::as_str).collect();
                    for line in batch_lines(&teams, BATCH_SIZE) {
                        ui.label(line);
                    }
                }
                ui.separator();
            }

            ui.label(format!(
                "{} → {}",
                outcome.range.start().format(DISPLAY_DATE_FORMAT),
                outcome.range.end().format(DISPLAY_DATE_FORMAT)
            ));

            if outcome.is_empty() {
                ui.colored_label(egui::Color32::YELLOW, NO_GAMES);
                return;
            }

            for group in &outcome.groups {
                ui.add_space(6.0);
                ui.heading(format!("Teams playing {} games", group.game_count));

                if has_ratings {
                    for r in &group.teams {
                        team_section(ui, r);
                    }
                } else {
                    let teams: Vec<&str> = group.teams.iter().map(|r| r.team.as_str()).collect();
                    for line in batch_lines(&teams, BATCH_SIZE) {
                        ui.label(line);
                    }
                }
            }

            if let Some(data) = &app.data {
                ui.add_space(12.0);
                egui::CollapsingHeader::new("🛠 Debug Information")
                    .id_salt("debug_info")
                    .show(ui, |ui| {
                        ui.label(format!("Games in schedule: {}", data.schedule.len()));
                        ui.label(format!("Teams found in Ratings: {}", data.ratings.teams().join(", ")));
                    });
            }
        });
}

fn team_section(ui: &mut egui::Ui, r: &TeamRecord) {
    let b2b = if r.has_back_to_back { "  · B2B" } else { "" };
    let title = format!(
        "{} {} ({} Matchup Score){}",
        r.vibe().glyph(), r.team, r.quality_score, b2b
    );

    egui::CollapsingHeader::new(title)
        .id_salt(("team", r.team.as_str()))
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Matchups:").strong());
            for m in &r.opponents {
                let at = if m.home { "vs" } else { "@" };
                ui.label(format!(
                    "{}  {} {} {} ({})",
                    m.date.format(DISPLAY_DATE_FORMAT), m.glyph, at, m.opponent, m.tier
                ));
            }
        });
}
