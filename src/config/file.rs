// src/config/file.rs
//
// `key=value` settings file. Unknown keys are ignored; a missing or unreadable
// file yields defaults.
use std::{fs, io, path::{Path, PathBuf}, time::Duration};

use super::consts::MissingTierPolicy;
use super::options::{AppOptions, ExportFormat};

pub fn load(path: &Path) -> AppOptions {
    match fs::read_to_string(path) {
        Ok(text) => {
            logd!("Config: Loaded {}", path.display());
            parse(&text)
        }
        Err(_) => AppOptions::default(),
    }
}

pub fn parse(text: &str) -> AppOptions {
    let mut opts = AppOptions::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some((key, val)) = line.split_once('=') else { continue };
        let (key, val) = (key.trim(), val.trim());
        match key {
            "schedule" => opts.sources.schedule = PathBuf::from(val),
            "ratings" => {
                opts.sources.ratings = if val.is_empty() { None } else { Some(PathBuf::from(val)) };
            }
            "cache_ttl_secs" => match val.parse::<u64>() {
                Ok(secs) => opts.sources.cache_ttl = Duration::from_secs(secs),
                Err(_) => loge!("Config: Bad cache_ttl_secs '{}'", val),
            },
            "missing_tier" => match MissingTierPolicy::parse(val) {
                Some(p) => opts.query.missing_tier = p,
                None => loge!("Config: Bad missing_tier '{}'", val),
            },
            "format" => match ExportFormat::parse(val) {
                Some(f) => opts.export.format = f,
                None => loge!("Config: Bad format '{}'", val),
            },
            "include_headers" => opts.export.include_headers = parse_bool(val),
            "out_path" => opts.export.set_path(val),
            _ => logd!("Config: Ignoring key '{}'", key),
        }
    }
    opts
}

pub fn save(path: &Path, opts: &AppOptions) -> io::Result<()> {
    fs::write(path, render(opts))
}

pub fn render(opts: &AppOptions) -> String {
    let mut s = s!();
    s.push_str(&format!("schedule={}\n", opts.sources.schedule.display()));
    let ratings = opts.sources.ratings.as_ref().map(|p| p.display().to_string()).unwrap_or_default();
    s.push_str(&format!("ratings={}\n", ratings));
    s.push_str(&format!("cache_ttl_secs={}\n", opts.sources.cache_ttl.as_secs()));
    s.push_str(&format!("missing_tier={}\n", opts.query.missing_tier.as_str()));
    s.push_str(&format!("format={}\n", opts.export.format.ext()));
    s.push_str(&format!("include_headers={}\n", if opts.export.include_headers { 1 } else { 0 }));
    s.push_str(&format!("out_path={}\n", opts.export.out_path().display()));
    s
}

fn parse_bool(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true") || val.eq_ignore_ascii_case("yes")
}
