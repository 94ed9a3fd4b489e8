// benches/records.rs
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use streamers_edge::{
    grouping::group_and_sort,
    ratings::{MissingRating, RatingEntry, RatingLookup, Tier},
    records::compute_team_records,
    schedule::{DateRange, ScheduleRow},
};

/// Thirty teams, every pair meeting on a rotating calendar over ~160 days.
fn synthetic_season() -> (Vec<ScheduleRow>, RatingLookup) {
    let teams: Vec<String> = (0..30).map(|i| format!("Team {i:02}")).collect();
    let opening = NaiveDate::from_ymd_opt(2025, 10, 21).expect("valid date");

    let mut rows = Vec::new();
    for (i, home) in teams.iter().enumerate() {
        for (j, away) in teams.iter().enumerate() {
            if i == j || (i + j) % 2 == 1 {
                continue;
            }
            let offset = ((i * 7 + j * 3) % 160) as i64;
            rows.push(ScheduleRow {
                date: opening + Duration::days(offset),
                home_team: home.clone(),
                away_team: away.clone(),
            });
        }
    }

    let tiers = [Tier::Pushover, Tier::Neutral, Tier::Lockdown];
    let lookup = RatingLookup::from_entries(teams.iter().enumerate().map(|(i, t)| {
        let tier = tiers[i % 3].clone();
        RatingEntry { team: t.clone(), glyph: tier.default_glyph().to_string(), tier }
    }));
    (rows, lookup)
}

fn bench_records(c: &mut Criterion) {
    streamers_edge::log::set_log_file(std::env::temp_dir().join("streamers_edge_bench.log"));
    let (rows, lookup) = synthetic_season();
    let missing = MissingRating::default();
    let opening = rows.iter().map(|r| r.date).min().expect("non-empty season");
    let week = DateRange::new(opening, opening + Duration::days(6)).expect("ordered");
    let season = DateRange::new(opening, opening + Duration::days(160)).expect("ordered");

    c.bench_function("records_week", |b| {
        b.iter(|| {
            let recs = compute_team_records(black_box(&rows), &lookup, week, &missing);
            black_box(group_and_sort(recs).team_count())
        })
    });

    c.bench_function("records_season", |b| {
        b.iter(|| {
            let recs = compute_team_records(black_box(&rows), &lookup, season, &missing);
            black_box(group_and_sort(recs).team_count())
        })
    });
}

criterion_group!(benches, bench_records);
criterion_main!(benches);
