// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub sources: SourceOptions,
    pub query: QueryOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub schedule: PathBuf,
    /// No ratings file means plain game counts (every opponent resolves to the missing tier).
    pub ratings: Option<PathBuf>,
    pub cache_ttl: Duration,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            schedule: PathBuf::from(DEFAULT_SCHEDULE_FILE),
            ratings: Some(PathBuf::from(DEFAULT_RATINGS_FILE)),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    pub missing_tier: MissingTierPolicy,
    pub start_from_today: bool,
    pub back_to_back: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            missing_tier: DEFAULT_MISSING_TIER,
            start_from_today: false,
            back_to_back: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`, or the user's own extension if they typed one.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = self
            .out_path
            .ext
            .as_deref()
            .unwrap_or_else(|| self.format.ext());
        path.push(join!(stem, ".", ext));
        path
    }

    /// Parse GUI/CLI text into dir + stem (+ explicit extension, if any).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        self.out_path.dir = p
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .filter(|e| !e.eq_ignore_ascii_case(ExportFormat::Csv.ext())
                && !e.eq_ignore_ascii_case(ExportFormat::Tsv.ext()));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<String>, // user-typed, non-format extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_follows_format() {
        let mut export = ExportOptions::default();
        assert!(export.out_path().to_string_lossy().ends_with("teams.csv"));
        export.format = ExportFormat::Tsv;
        assert!(export.out_path().to_string_lossy().ends_with("teams.tsv"));
    }

    #[test]
    fn format_extension_typed_by_user_is_replaced() {
        let mut export = ExportOptions::default();
        export.set_path("week/games.csv");
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), PathBuf::from("week").join("games.tsv"));
    }

    #[test]
    fn custom_extension_survives_format_change() {
        let mut export = ExportOptions::default();
        export.set_path("week/games.txt");
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), PathBuf::from("week").join("games.txt"));
    }
}
