// src/records.rs
//
// Per-team aggregation over a date window: game count, opponent-quality score,
// chronological opponent list, back-to-back flag.
use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::back_to_back::has_back_to_back;
use crate::config::consts::{GLYPH_LOCKDOWN, GLYPH_NEUTRAL, GLYPH_PUSHOVER};
use crate::ratings::{MissingRating, RatingLookup, Tier};
use crate::schedule::{DateRange, ScheduleRow};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matchup {
    pub date: NaiveDate,
    pub opponent: String,
    pub glyph: String,
    pub tier: Tier,
    /// Whether the record's team is the home side.
    pub home: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamRecord {
    pub team: String,
    pub game_count: usize,
    pub quality_score: i32,
    /// Chronological; same-day games keep schedule order.
    pub opponents: Vec<Matchup>,
    pub has_back_to_back: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vibe {
    Hot,
    Even,
    Cold,
}

impl Vibe {
    pub fn of(score: i32) -> Self {
        match score {
            s if s > 0 => Vibe::Hot,
            s if s < 0 => Vibe::Cold,
            _ => Vibe::Even,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Vibe::Hot => GLYPH_PUSHOVER,
            Vibe::Even => GLYPH_NEUTRAL,
            Vibe::Cold => GLYPH_LOCKDOWN,
        }
    }
}

impl TeamRecord {
    pub fn vibe(&self) -> Vibe { Vibe::of(self.quality_score) }

    /// `(glyph, opponent)` pairs in game order.
    pub fn opponent_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.opponents.iter().map(|m| (m.glyph.as_str(), m.opponent.as_str()))
    }

    /// `"🔥 vs Wizards | ❄ vs Celtics"`
    pub fn matchup_summary(&self) -> String {
        self.opponent_pairs()
            .map(|(glyph, opp)| s!("{glyph} vs {opp}"))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.opponents.iter().map(|m| m.date).collect()
    }
}

/// Distinct team names across the whole schedule, in first-appearance order.
pub fn teams_in_order(schedule: &[ScheduleRow]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for r in schedule {
        for t in [r.home_team.as_str(), r.away_team.as_str()] {
            if seen.insert(t) { out.push(t); }
        }
    }
    out
}

/// One record per team with at least one game in `range`. Teams that appear
/// in the schedule but not in the window are left out entirely.
pub fn compute_team_records(
    schedule: &[ScheduleRow],
    lookup: &RatingLookup,
    range: DateRange,
    missing: &MissingRating,
) -> Vec<TeamRecord> {
    // Single pass: team -> its in-range games, schedule order.
    let mut games_by_team: HashMap<&str, Vec<&ScheduleRow>> = HashMap::new();
    for r in schedule.iter().filter(|r| range.contains(r.date)) {
        games_by_team.entry(r.home_team.as_str()).or_default().push(r);
        games_by_team.entry(r.away_team.as_str()).or_default().push(r);
    }

    let mut out = Vec::with_capacity(games_by_team.len());
    for team in teams_in_order(schedule) {
        let Some(games) = games_by_team.get_mut(team) else { continue };
        // Stable: same-day games stay in schedule order.
        games.sort_by_key(|r| r.date);
        out.push(build_record(team, games, lookup, missing));
    }

    logd!(
        "Records: {}..={} -> {} teams with games",
        range.start(), range.end(), out.len()
    );
    out
}

fn build_record(
    team: &str,
    games: &[&ScheduleRow],
    lookup: &RatingLookup,
    missing: &MissingRating,
) -> TeamRecord {
    let mut quality_score = 0;
    let mut opponents = Vec::with_capacity(games.len());

    for game in games {
        let Some(opponent) = game.opponent_of(team) else { continue };
        let home = game.home_team == team;
        let rating = lookup.resolve(opponent, missing);

        quality_score += rating.tier.score();
        opponents.push(Matchup {
            date: game.date,
            opponent: s!(opponent),
            glyph: s!(rating.glyph),
            tier: rating.tier.clone(),
            home,
        });
    }

    let dates: Vec<NaiveDate> = opponents.iter().map(|m| m.date).collect();

    TeamRecord {
        team: s!(team),
        game_count: opponents.len(),
        quality_score,
        has_back_to_back: has_back_to_back(&dates),
        opponents,
    }
}
