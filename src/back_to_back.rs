// src/back_to_back.rs
use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::schedule::ScheduleRow;

/// True if two consecutive entries of the chronologically sorted `dates`
/// are exactly one calendar day apart.
pub fn has_back_to_back(dates: &[NaiveDate]) -> bool {
    debug_assert!(dates.is_sorted(), "dates must be sorted");
    dates.windows(2).any(|w| (w[1] - w[0]).num_days() == 1)
}

/// Every team with a game on `date`, home or away.
pub fn teams_playing_on(schedule: &[ScheduleRow], date: NaiveDate) -> BTreeSet<&str> {
    schedule
        .iter()
        .filter(|r| r.date == date)
        .flat_map(|r| [r.home_team.as_str(), r.away_team.as_str()])
        .collect()
}

/// Teams playing on `date` and again on the next calendar day.
pub fn detect_back_to_back_teams(schedule: &[ScheduleRow], date: NaiveDate) -> BTreeSet<String> {
    let Some(next) = date.succ_opt() else { return BTreeSet::new() };
    let today = teams_playing_on(schedule, date);
    let tomorrow = teams_playing_on(schedule, next);
    today.intersection(&tomorrow).map(|t| s!(*t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, day).unwrap()
    }

    fn game(day: u32, home: &str, away: &str) -> ScheduleRow {
        ScheduleRow { date: d(day), home_team: s!(home), away_team: s!(away) }
    }

    #[test]
    fn consecutive_days_only() {
        assert!(has_back_to_back(&[d(1), d(2)]));
        assert!(has_back_to_back(&[d(1), d(4), d(5)]));
        assert!(!has_back_to_back(&[d(1), d(3)]));
        assert!(!has_back_to_back(&[d(1)]));
        assert!(!has_back_to_back(&[]));
    }

    #[test]
    fn same_day_twice_is_not_back_to_back() {
        assert!(!has_back_to_back(&[d(1), d(1)]));
        assert!(has_back_to_back(&[d(1), d(1), d(2)]));
    }

    #[test]
    fn crosses_month_boundary() {
        let last = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
        let first = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert!(has_back_to_back(&[last, first]));
    }

    #[test]
    fn league_wide_on_base_date() {
        let schedule = vec![
            game(10, "Bucks", "Magic"),
            game(10, "Kings", "Suns"),
            game(11, "Magic", "Suns"),
            game(12, "Bucks", "Kings"),
        ];
        let b2b = detect_back_to_back_teams(&schedule, d(10));
        assert_eq!(b2b.into_iter().collect::<Vec<_>>(), vec!["Magic", "Suns"]);

        // Bucks play the 10th and 12th only.
        assert!(!detect_back_to_back_teams(&schedule, d(11)).contains("Bucks"));
        assert!(detect_back_to_back_teams(&schedule, d(12)).is_empty());
    }
}
