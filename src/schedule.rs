// src/schedule.rs
use chrono::NaiveDate;

use crate::error::{DataFormatError, RangeError};
use crate::table::{cell, RawTable};

const TABLE: &str = "schedule";

pub const COL_DATE: &str = "Date";
pub const COL_HOME: &str = "Home Team";
pub const COL_AWAY: &str = "Away Team";

/// Day-first shapes, tried in order. `%Y` also accepts two digits, so the
/// `%y` shape must come before it; `%y` rejects four-digit years.
const DATE_FORMATS: [&str; 5] = ["%d/%m/%y", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleRow {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
}

impl ScheduleRow {
    /// The other side of this game for `team`, if `team` plays in it.
    pub fn opponent_of(&self, team: &str) -> Option<&str> {
        if self.home_team == team {
            Some(&self.away_team)
        } else if self.away_team == team {
            Some(&self.home_team)
        } else {
            None
        }
    }
}

/// Inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    /// `[day, day + 1]`
    pub fn two_days(day: NaiveDate) -> Self {
        Self { start: day, end: day.succ_opt().unwrap_or(day) }
    }

    pub fn start(&self) -> NaiveDate { self.start }
    pub fn end(&self) -> NaiveDate { self.end }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Same range with `start` moved to `today`. Past the end there is no
    /// window left to show.
    pub fn starting_from(&self, today: NaiveDate) -> Result<Self, RangeError> {
        Self::new(today, self.end)
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let v = value.trim();
    // Drop any time component: "21/10/2025 19:30" or "2025-10-21T19:30:00".
    let day = v
        .split(|c: char| c.is_whitespace() || c == 'T')
        .next()
        .unwrap_or("");
    if day.is_empty() { return None; }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(day, fmt).ok())
}

/// Raw schedule table → typed rows, in source order.
pub fn normalize_schedule(raw: &RawTable) -> Result<Vec<ScheduleRow>, DataFormatError> {
    let date_ix = raw.require_column(TABLE, COL_DATE)?;
    let home_ix = raw.require_column(TABLE, COL_HOME)?;
    let away_ix = raw.require_column(TABLE, COL_AWAY)?;

    let mut out = Vec::with_capacity(raw.rows.len());
    for (i, r) in raw.rows.iter().enumerate() {
        let row = i + 1;

        let value = cell(r, date_ix);
        let date = parse_date(value).ok_or_else(|| DataFormatError::BadDate {
            table: TABLE,
            row,
            value: s!(value),
        })?;

        let home_team = team_cell(r, home_ix, row, COL_HOME)?;
        let away_team = team_cell(r, away_ix, row, COL_AWAY)?;
        if home_team == away_team {
            return Err(DataFormatError::SameTeam { table: TABLE, row, team: home_team });
        }

        out.push(ScheduleRow { date, home_team, away_team });
    }

    logd!("Schedule: Normalized {} rows", out.len());
    Ok(out)
}

fn team_cell(r: &[String], ix: usize, row: usize, column: &str) -> Result<String, DataFormatError> {
    let name = cell(r, ix).trim();
    if name.is_empty() {
        return Err(DataFormatError::EmptyCell { table: TABLE, row, column: s!(column) });
    }
    Ok(s!(name))
}

/// Rows inside `range`, original order kept.
pub fn filter_range(rows: &[ScheduleRow], range: DateRange) -> Vec<&ScheduleRow> {
    rows.iter().filter(|r| range.contains(r.date)).collect()
}

/// Earliest and latest game date, or None for an empty schedule.
pub fn schedule_bounds(rows: &[ScheduleRow]) -> Option<DateRange> {
    let start = rows.iter().map(|r| r.date).min()?;
    let end = rows.iter().map(|r| r.date).max()?;
    Some(DateRange { start, end })
}
