// src/config/state.rs
use chrono::NaiveDate;

use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub start: NaiveDate,
    pub end: NaiveDate,

    /// Source path text fields (applied on Reload)
    pub schedule_text: String,
    pub ratings_text: String,

    /// Export text field UX (mapped to ExportOptions on export)
    pub out_path_text: String,
}

impl GuiState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            start: today,
            end: today,
            schedule_text: s!(),
            ratings_text: s!(),
            out_path_text: s!(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions, today: NaiveDate) -> Self {
        let mut gui = GuiState::new(today);
        gui.schedule_text = options.sources.schedule.to_string_lossy().into_owned();
        gui.ratings_text = options
            .sources
            .ratings
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        gui.out_path_text = options.export.out_path().to_string_lossy().into_owned();
        Self { options, gui }
    }
}
