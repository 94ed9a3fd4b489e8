// src/query.rs
//
// One request in, one outcome out. Front-ends build a `Query` from their
// widgets or flags and hand it the already-loaded tables.
use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::back_to_back::detect_back_to_back_teams;
use crate::config::options::QueryOptions;
use crate::error::RangeError;
use crate::grouping::{group_and_sort, GroupedResults};
use crate::ratings::{MissingRating, RatingLookup};
use crate::records::compute_team_records;
use crate::schedule::{DateRange, ScheduleRow};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Query {
    /// Games inside a window.
    Range(DateRange),
    /// "Today & tomorrow": window narrowed to `[base, base + 1]`.
    BackToBack { base: NaiveDate },
}

impl Query {
    /// Apply the toggles to a selected window. `today` is the base date for
    /// both "start from today" and back-to-back mode. Starting from a day past
    /// the window's end leaves nothing to query.
    pub fn from_options(
        opts: &QueryOptions,
        window: DateRange,
        today: NaiveDate,
    ) -> Result<Self, RangeError> {
        if opts.back_to_back {
            Ok(Query::BackToBack { base: today })
        } else if opts.start_from_today {
            window.starting_from(today).map(Query::Range)
        } else {
            Ok(Query::Range(window))
        }
    }

    pub fn effective_range(&self) -> DateRange {
        match *self {
            Query::Range(r) => r,
            Query::BackToBack { base } => DateRange::two_days(base),
        }
    }

    pub fn is_back_to_back(&self) -> bool {
        matches!(self, Query::BackToBack { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryOutcome {
    pub query: Query,
    pub range: DateRange,
    pub groups: GroupedResults,
    /// Teams flagged back-to-back inside `range`, sorted.
    pub back_to_back: BTreeSet<String>,
}

impl QueryOutcome {
    /// Nobody plays in the window. A normal outcome, shown as "no data".
    pub fn is_empty(&self) -> bool { self.groups.is_empty() }
}

pub fn run_query(
    schedule: &[ScheduleRow],
    lookup: &RatingLookup,
    query: &Query,
    missing: &MissingRating,
) -> QueryOutcome {
    let range = query.effective_range();
    let records = compute_team_records(schedule, lookup, range, missing);

    let tagged: BTreeSet<String> = records
        .iter()
        .filter(|r| r.has_back_to_back)
        .map(|r| r.team.clone())
        .collect();

    let back_to_back = match *query {
        Query::BackToBack { base } => {
            let league = detect_back_to_back_teams(schedule, base);
            debug_assert_eq!(league, tagged, "league-wide and per-team back-to-back disagree");
            league
        }
        Query::Range(_) => tagged,
    };

    let groups = group_and_sort(records);
    logf!(
        "Query: {:?} -> {} teams in {} groups, {} back-to-back",
        query, groups.team_count(), groups.group_count(), back_to_back.len()
    );

    QueryOutcome { query: *query, range, groups, back_to_back }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratings::{RatingEntry, Tier};

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    fn game(day: u32, home: &str, away: &str) -> ScheduleRow {
        ScheduleRow { date: d(day), home_team: s!(home), away_team: s!(away) }
    }

    fn schedule() -> Vec<ScheduleRow> {
        vec![
            game(1, "Lakers", "Clippers"),
            game(1, "Knicks", "Heat"),
            game(2, "Clippers", "Knicks"),
            game(2, "Magic", "Hornets"),
            game(3, "Lakers", "Magic"),
            game(4, "Heat", "Lakers"),
        ]
    }

    #[test]
    fn back_to_back_mode_narrows_and_tags() {
        let q = Query::BackToBack { base: d(1) };
        let out = run_query(&schedule(), &RatingLookup::new(), &q, &MissingRating::default());
        assert_eq!(out.range, DateRange::new(d(1), d(2)).unwrap());
        assert_eq!(out.back_to_back.iter().map(String::as_str).collect::<Vec<_>>(), vec!["Clippers", "Knicks"]);
        // Everyone playing either day is listed; only two of them twice.
        assert_eq!(out.groups.get(2).unwrap().teams.len(), 2);
        assert_eq!(out.groups.get(1).unwrap().teams.len(), 4);
    }

    #[test]
    fn range_mode_tags_from_records() {
        let q = Query::Range(DateRange::new(d(1), d(4)).unwrap());
        let out = run_query(&schedule(), &RatingLookup::new(), &q, &MissingRating::default());
        // Lakers: 1, 3, 4. Magic: 2, 3. Clippers/Knicks: 1, 2.
        let b2b: Vec<&str> = out.back_to_back.iter().map(String::as_str).collect();
        assert_eq!(b2b, vec!["Clippers", "Knicks", "Lakers", "Magic"]);
    }

    #[test]
    fn scores_order_inside_a_group() {
        let lookup = RatingLookup::from_entries([RatingEntry {
            team: s!("Heat"),
            tier: Tier::Pushover,
            glyph: s!("🔥"),
        }]);
        let q = Query::Range(DateRange::new(d(1), d(4)).unwrap());
        let out = run_query(&schedule(), &lookup, &q, &MissingRating::default());
        let two: Vec<&str> = out.groups.get(2).unwrap().teams.iter().map(|r| r.team.as_str()).collect();
        // Knicks played the Heat (+1); the rest are level and sort by name.
        assert_eq!(two, vec!["Knicks", "Clippers", "Heat", "Magic"]);
    }

    #[test]
    fn empty_window() {
        let q = Query::Range(DateRange::single(d(20)));
        let out = run_query(&schedule(), &RatingLookup::new(), &q, &MissingRating::default());
        assert!(out.is_empty());
        assert!(out.back_to_back.is_empty());
    }

    #[test]
    fn toggles() {
        let window = DateRange::new(d(1), d(10)).unwrap();
        let mut opts = QueryOptions::default();
        assert_eq!(Query::from_options(&opts, window, d(5)), Ok(Query::Range(window)));

        opts.start_from_today = true;
        assert_eq!(
            Query::from_options(&opts, window, d(5)).unwrap().effective_range(),
            DateRange::new(d(5), d(10)).unwrap()
        );

        opts.back_to_back = true;
        let q = Query::from_options(&opts, window, d(5)).unwrap();
        assert!(q.is_back_to_back());
        assert_eq!(q.effective_range(), DateRange::new(d(5), d(6)).unwrap());
    }

    #[test]
    fn today_past_window_end_has_no_query() {
        let window = DateRange::new(d(1), d(10)).unwrap();
        let opts = QueryOptions { start_from_today: true, ..QueryOptions::default() };
        assert!(Query::from_options(&opts, window, d(11)).is_err());
        assert!(Query::from_options(&opts, window, d(10)).is_ok());
    }
}
