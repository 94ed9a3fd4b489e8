// src/report.rs
//
// Plain-text rendering of a query outcome (CLI output, GUI copy button).
use std::fmt::Write;

use crate::config::consts::{BATCH_SIZE, DISPLAY_DATE_FORMAT};
use crate::core::sanitize::batch_lines;
use crate::query::QueryOutcome;
use crate::records::TeamRecord;

pub const NO_GAMES: &str = "No games found for this date range.";
pub const NO_BACK_TO_BACK: &str = "No teams play on both days.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Detail {
    /// Team names only, batched per line.
    Counts,
    /// One line per team with score and matchups.
    Matchups,
}

pub fn team_line(r: &TeamRecord) -> String {
    let b2b = if r.has_back_to_back { " [B2B]" } else { "" };
    format!(
        "{} {} ({} Matchup Score){}: {}",
        r.vibe().glyph(), r.team, r.quality_score, b2b, r.matchup_summary()
    )
}

pub fn render(outcome: &QueryOutcome, detail: Detail) -> String {
    let mut out = s!();
    let range = outcome.range;

    if outcome.query.is_back_to_back() {
        let _ = writeln!(out, "Teams playing today & tomorrow");
        if outcome.back_to_back.is_empty() {
            let _ = writeln!(out, "{NO_BACK_TO_BACK}");
        } else {
            let teams: Vec<&str> = outcome.back_to_back.iter().map(String::as_str).collect();
            for line in batch_lines(&teams, BATCH_SIZE) {
                let _ = writeln!(out, "{line}");
            }
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "Games from {} to {}",
        range.start().format(DISPLAY_DATE_FORMAT),
        range.end().format(DISPLAY_DATE_FORMAT)
    );

    if outcome.is_empty() {
        let _ = writeln!(out, "{NO_GAMES}");
        return out;
    }

    for group in &outcome.groups {
        let _ = writeln!(out, "\nTeams playing {} games", group.game_count);
        match detail {
            Detail::Counts => {
                let teams: Vec<&str> = group.teams.iter().map(|r| r.team.as_str()).collect();
                for line in batch_lines(&teams, BATCH_SIZE) {
                    let _ = writeln!(out, "{line}");
                }
            }
            Detail::Matchups => {
                for r in &group.teams {
                    let _ = writeln!(out, "{}", team_line(r));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::query::{run_query, Query};
    use crate::ratings::{MissingRating, RatingLookup};
    use crate::schedule::{DateRange, ScheduleRow};

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, day).unwrap()
    }

    fn game(day: u32, home: &str, away: &str) -> ScheduleRow {
        ScheduleRow { date: d(day), home_team: s!(home), away_team: s!(away) }
    }

    #[test]
    fn counts_are_batched_three_per_line() {
        let schedule = vec![game(1, "A", "B"), game(1, "C", "D"), game(2, "E", "A")];
        let q = Query::Range(DateRange::new(d(1), d(2)).unwrap());
        let out = run_query(&schedule, &RatingLookup::new(), &q, &MissingRating::default());
        let text = render(&out, Detail::Counts);
        assert_eq!(
            text,
            "Games from 01/12/2025 to 02/12/2025\n\
             \nTeams playing 2 games\nA\n\
             \nTeams playing 1 games\nB, C, D\nE\n"
        );
    }

    #[test]
    fn matchup_lines_show_vibe_and_b2b() {
        let schedule = vec![game(1, "A", "B"), game(2, "B", "A")];
        let q = Query::Range(DateRange::new(d(1), d(2)).unwrap());
        let out = run_query(&schedule, &RatingLookup::new(), &q, &MissingRating::default());
        let text = render(&out, Detail::Matchups);
        assert!(text.contains("⚪ A (0 Matchup Score) [B2B]: ⚪ vs B | ⚪ vs B"));
    }

    #[test]
    fn back_to_back_header_and_empty_states() {
        let schedule = vec![game(1, "A", "B")];
        let q = Query::BackToBack { base: d(1) };
        let out = run_query(&schedule, &RatingLookup::new(), &q, &MissingRating::default());
        let text = render(&out, Detail::Counts);
        assert!(text.starts_with("Teams playing today & tomorrow\nNo teams play on both days.\n"));

        let q = Query::Range(DateRange::single(d(9)));
        let out = run_query(&schedule, &RatingLookup::new(), &q, &MissingRating::default());
        assert!(render(&out, Detail::Matchups).ends_with("No games found for this date range.\n"));
    }
}
