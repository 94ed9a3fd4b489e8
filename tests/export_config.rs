// tests/export_config.rs
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;

use streamers_edge::config::{self, consts::MissingTierPolicy, options::{AppOptions, ExportFormat}};
use streamers_edge::file;
use streamers_edge::grouping::group_and_sort;
use streamers_edge::ratings::{MissingRating, RatingLookup};
use streamers_edge::records::compute_team_records;
use streamers_edge::schedule::{DateRange, ScheduleRow};
use streamers_edge::store::Sources;

fn tmp_dir(name: &str) -> PathBuf {
    streamers_edge::log::set_log_file(std::env::temp_dir().join("streamers_edge_export.log"));
    let mut p = std::env::temp_dir();
    p.push(format!("streamers_edge_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
}

fn game(day: u32, home: &str, away: &str) -> ScheduleRow {
    ScheduleRow { date: d(day), home_team: home.into(), away_team: away.into() }
}

#[test]
fn export_writes_tsv_into_new_directory() {
    let rows = vec![game(1, "Suns", "Jazz"), game(2, "Jazz", "Kings")];
    let range = DateRange::new(d(1), d(2)).unwrap();
    let groups = group_and_sort(compute_team_records(&rows, &RatingLookup::new(), range, &MissingRating::default()));

    let dir = tmp_dir("export").join("nested");
    let mut opts = AppOptions::default();
    opts.export.format = ExportFormat::Tsv;
    opts.export.set_path(dir.join("week").to_str().unwrap());

    let written = file::write_export(&opts.export, &groups).unwrap();
    assert!(written.to_string_lossy().ends_with("week.tsv"));

    let text = fs::read_to_string(&written).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Games\tTeam\tScore\tVibe\tBack-to-back\tMatchups");
    assert_eq!(lines[1], "2\tJazz\t0\t⚪\tyes\t⚪ vs Suns | ⚪ vs Kings");
    assert_eq!(lines.len(), 4);
}

#[test]
fn user_extension_survives_format_change() {
    let dir = tmp_dir("ext");
    let mut opts = AppOptions::default();
    opts.export.set_path(dir.join("teams.txt").to_str().unwrap());
    opts.export.format = ExportFormat::Tsv;
    assert!(opts.export.out_path().to_string_lossy().ends_with("teams.txt"));
}

#[test]
fn config_round_trips_through_disk() {
    let dir = tmp_dir("config");
    let path = dir.join("edge.cfg");

    let mut opts = AppOptions::default();
    opts.sources.schedule = PathBuf::from("data/season.csv");
    opts.sources.ratings = None;
    opts.sources.cache_ttl = Duration::from_secs(90);
    opts.query.missing_tier = MissingTierPolicy::Unknown;
    opts.export.format = ExportFormat::Tsv;
    opts.export.include_headers = false;
    opts.export.set_path("exports/streamers");

    config::file::save(&path, &opts).unwrap();
    let loaded = config::file::load(&path);
    assert_eq!(loaded.sources, opts.sources);
    assert_eq!(loaded.query.missing_tier, MissingTierPolicy::Unknown);
    assert_eq!(loaded.export, opts.export);
}

#[test]
fn sources_load_counts_only_without_ratings() {
    let dir = tmp_dir("sources");
    let schedule = dir.join("schedule.csv");
    fs::write(&schedule, "Date,Home Team,Away Team\n01/02/2026,Suns,Jazz\n").unwrap();

    let mut opts = AppOptions::default();
    opts.sources.schedule = schedule;
    opts.sources.ratings = None;

    let data = Sources::new(&opts.sources).load().unwrap();
    assert_eq!(data.schedule.len(), 1);
    assert!(data.ratings.is_empty());
}

#[test]
fn missing_schedule_file_is_an_error() {
    let dir = tmp_dir("missing");
    let mut opts = AppOptions::default();
    opts.sources.schedule = dir.join("nope.csv");
    opts.sources.ratings = None;

    let err = Sources::new(&opts.sources).load().unwrap_err();
    assert!(err.to_string().contains("nope.csv"));
}
