// src/file.rs
use std::{
    error::Error,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::config::options::ExportOptions;
use crate::grouping::GroupedResults;

#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Games")]
    games: usize,
    #[serde(rename = "Team")]
    team: &'a str,
    #[serde(rename = "Score")]
    score: i32,
    #[serde(rename = "Vibe")]
    vibe: &'static str,
    #[serde(rename = "Back-to-back")]
    back_to_back: &'static str,
    #[serde(rename = "Matchups")]
    matchups: String,
}

/// Serialize grouped records, in display order, to any writer.
pub fn write_records<W: Write>(
    w: W,
    groups: &GroupedResults,
    include_headers: bool,
    delim: u8,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delim)
        .has_headers(include_headers)
        .from_writer(w);

    for r in groups.records() {
        wtr.serialize(ExportRow {
            games: r.game_count,
            team: &r.team,
            score: r.quality_score,
            vibe: r.vibe().glyph(),
            back_to_back: if r.has_back_to_back { "yes" } else { "" },
            matchups: r.matchup_summary(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Export text for Copy (no file involved).
pub fn to_export_string(groups: &GroupedResults, include_headers: bool, delim: u8) -> String {
    let mut buf: Vec<u8> = Vec::new();
    if let Err(e) = write_records(&mut buf, groups, include_headers, delim) {
        loge!("Export: serialize failed: {}", e);
    }
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// Write one export file per ExportOptions. Returns the path written.
pub fn write_export(
    export: &ExportOptions,
    groups: &GroupedResults,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = fs::File::create(&path)?;
    write_records(file, groups, export.include_headers, export.format.delim())?;
    logf!("Export: {} teams -> {}", groups.team_count(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group_and_sort;
    use crate::records::TeamRecord;

    fn rec(team: &str, games: usize, score: i32, b2b: bool) -> TeamRecord {
        TeamRecord {
            team: s!(team),
            game_count: games,
            quality_score: score,
            opponents: Vec::new(),
            has_back_to_back: b2b,
        }
    }

    #[test]
    fn csv_with_headers_in_display_order() {
        let groups = group_and_sort(vec![rec("Bulls", 1, 0, false), rec("Nets", 2, -1, true)]);
        let text = to_export_string(&groups, true, b',');
        assert_eq!(
            text,
            "Games,Team,Score,Vibe,Back-to-back,Matchups\n2,Nets,-1,❄,yes,\n1,Bulls,0,⚪,,\n"
        );
    }

    #[test]
    fn tsv_without_headers() {
        let groups = group_and_sort(vec![rec("Bulls", 3, 2, false)]);
        assert_eq!(to_export_string(&groups, false, b'\t'), "3\tBulls\t2\t🔥\t\t\n");
    }
}
