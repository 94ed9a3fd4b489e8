// src/gui/app.rs
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{Local, NaiveDate};
use eframe::egui;

use crate::{
    config::{self, consts::CONFIG_FILE, state::AppState},
    query::{run_query, Query, QueryOutcome},
    ratings::MissingRating,
    schedule::{schedule_bounds, DateRange},
    store::{Dataset, Sources},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let today = Local::now().date_naive();
    let opts = config::file::load(Path::new(CONFIG_FILE));
    eframe::run_native(
        "Streamer's Edge",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(AppState::new(opts, today), today)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub today: NaiveDate,

    sources: Sources,
    pub data: Option<Dataset>,
    pub outcome: Option<QueryOutcome>,

    pub status: String,
}

impl App {
    pub fn new(state: AppState, today: NaiveDate) -> Self {
        let sources = Sources::new(&state.options.sources);
        let mut app = Self {
            state,
            today,
            sources,
            data: None,
            outcome: None,
            status: s!("Idle"),
        };
        app.load(true);
        app
    }

    /// Apply the source text fields and read both tables again.
    pub fn reload(&mut self) {
        let gui = &self.state.gui;
        let sources = &mut self.state.options.sources;
        sources.schedule = PathBuf::from(gui.schedule_text.trim());
        sources.ratings = match gui.ratings_text.trim() {
            "" => None,
            p => Some(PathBuf::from(p)),
        };
        self.sources = Sources::new(sources);
        self.load(true);
    }

    /// Fetch tables through the cache. `reset_window` moves the date pickers
    /// to the schedule's first and last game.
    fn load(&mut self, reset_window: bool) {
        match self.sources.load() {
            Ok(data) => {
                if reset_window {
                    if let Some(b) = schedule_bounds(&data.schedule) {
                        self.state.gui.start = b.start();
                        self.state.gui.end = b.end();
                    }
                }
                logf!(
                    "GUI: Data ready (games={}, rated teams={})",
                    data.schedule.len(), data.ratings.len()
                );
                self.status = format!(
                    "Loaded {} games, {} rated teams",
                    data.schedule.len(), data.ratings.len()
                );
                self.data = Some(data);
                self.recompute();
            }
            Err(e) => {
                loge!("GUI: Data loading failed: {}", e);
                self.status = format!("⚠ Data loading error: {e}");
                self.data = None;
                self.outcome = None;
            }
        }
    }

    /// Controls changed: re-read expired tables, then recompute.
    pub fn refresh(&mut self) {
        if self.sources.is_stale(Instant::now()) {
            logd!("GUI: Cache expired, reloading");
            self.load(false);
        } else {
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        let Some(data) = &self.data else { return };

        let gui = &self.state.gui;
        let window = match DateRange::new(gui.start, gui.end) {
            Ok(w) => w,
            Err(e) => {
                self.status = format!("⚠ {e}");
                self.outcome = None;
                return;
            }
        };

        let query = match Query::from_options(&self.state.options.query, window, self.today) {
            Ok(q) => q,
            Err(e) => {
                logd!("GUI: No window left to query: {}", e);
                self.outcome = None;
                return;
            }
        };
        let missing = MissingRating::from_policy(self.state.options.query.missing_tier);
        self.outcome = Some(run_query(&data.schedule, &data.ratings, &query, &missing));
    }

    pub fn has_ratings(&self) -> bool {
        self.data.as_ref().is_some_and(|d| !d.ratings.is_empty())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::controls::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("🏀 Streamer's Edge");
            ui.label("Defensive matchups & quality games");

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::results::draw(ui, self);
        });
    }
}
