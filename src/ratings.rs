// src/ratings.rs
use std::collections::HashMap;
use std::fmt;

use crate::config::consts::*;
use crate::error::DataFormatError;
use crate::table::{cell, RawTable};

const TABLE: &str = "ratings";

pub const COL_TEAM: &str = "Team";
pub const COL_TIER: &str = "Tier";
/// Glyph column; the first name present wins.
pub const COL_GLYPH: [&str; 2] = ["Emoji", "Glyph"];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Pushover,
    Neutral,
    Lockdown,
    /// Anything else, kept verbatim.
    Unknown(String),
}

impl Tier {
    pub fn parse(s: &str) -> Self {
        let t = s.trim();
        if t.eq_ignore_ascii_case("pushover") { Tier::Pushover }
        else if t.eq_ignore_ascii_case("neutral") { Tier::Neutral }
        else if t.eq_ignore_ascii_case("lockdown") { Tier::Lockdown }
        else { Tier::Unknown(s!(s)) }
    }

    /// Contribution of one game against an opponent of this tier.
    pub fn score(&self) -> i32 {
        match self {
            Tier::Pushover => 1,
            Tier::Lockdown => -1,
            Tier::Neutral | Tier::Unknown(_) => 0,
        }
    }

    pub fn default_glyph(&self) -> &'static str {
        match self {
            Tier::Pushover => GLYPH_PUSHOVER,
            Tier::Neutral => GLYPH_NEUTRAL,
            Tier::Lockdown => GLYPH_LOCKDOWN,
            Tier::Unknown(_) => GLYPH_UNKNOWN,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Pushover => f.write_str("Pushover"),
            Tier::Neutral => f.write_str("Neutral"),
            Tier::Lockdown => f.write_str("Lockdown"),
            Tier::Unknown(raw) if raw.is_empty() => f.write_str("Unknown"),
            Tier::Unknown(raw) => f.write_str(raw),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatingEntry {
    pub team: String,
    pub tier: Tier,
    pub glyph: String,
}

/// What an opponent absent from the ratings table resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingRating {
    pub tier: Tier,
    pub glyph: String,
}

impl MissingRating {
    pub fn from_policy(policy: MissingTierPolicy) -> Self {
        let tier = match policy {
            MissingTierPolicy::Neutral => Tier::Neutral,
            MissingTierPolicy::Unknown => Tier::Unknown(s!()),
        };
        let glyph = s!(tier.default_glyph());
        Self { tier, glyph }
    }
}

impl Default for MissingRating {
    fn default() -> Self {
        Self::from_policy(DEFAULT_MISSING_TIER)
    }
}

/// Resolved (tier, glyph) for one opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub tier: &'a Tier,
    pub glyph: &'a str,
}

/// Team name (exact, case preserved) → rating. Read-only once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RatingLookup {
    entries: HashMap<String, RatingEntry>,
}

impl RatingLookup {
    pub fn new() -> Self { Self::default() }

    pub fn from_entries<I: IntoIterator<Item = RatingEntry>>(entries: I) -> Self {
        let mut lookup = Self::new();
        for e in entries {
            lookup.entries.insert(e.team.clone(), e);
        }
        lookup
    }

    pub fn get(&self, team: &str) -> Option<&RatingEntry> {
        self.entries.get(team)
    }

    /// Never fails: absent teams resolve to `missing`.
    pub fn resolve<'a>(&'a self, team: &str, missing: &'a MissingRating) -> Resolved<'a> {
        match self.entries.get(team) {
            Some(e) => Resolved { tier: &e.tier, glyph: &e.glyph },
            None => Resolved { tier: &missing.tier, glyph: &missing.glyph },
        }
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Rated team names, sorted.
    pub fn teams(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        v.sort_unstable();
        v
    }
}

/// Raw ratings table → lookup. Repeated team names: last row wins.
pub fn build_rating_lookup(raw: &RawTable) -> Result<RatingLookup, DataFormatError> {
    let team_ix = raw.require_column(TABLE, COL_TEAM)?;
    let tier_ix = raw.require_column(TABLE, COL_TIER)?;
    let glyph_ix = raw.column_any(&COL_GLYPH);

    let mut lookup = RatingLookup::new();
    for r in &raw.rows {
        let team = cell(r, team_ix).trim();
        if team.is_empty() { continue; }

        let tier = Tier::parse(cell(r, tier_ix));
        let glyph = match glyph_ix.map(|ix| cell(r, ix).trim()) {
            Some(g) if !g.is_empty() => s!(g),
            _ => s!(tier.default_glyph()),
        };

        if let Some(prev) = lookup.entries.insert(s!(team), RatingEntry { team: s!(team), tier, glyph }) {
            logd!("Ratings: '{}' repeated, {} replaced", team, prev.tier);
        }
    }

    logd!("Ratings: {} teams", lookup.len());
    Ok(lookup)
}
