// src/store.rs
//
// Memoized table loading for front-ends. The core never reads files; the
// GUI keeps one `Sources` alive and asks it for fresh tables per query.
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::options::SourceOptions;
use crate::error::LoadError;
use crate::ratings::{build_rating_lookup, RatingLookup};
use crate::schedule::{normalize_schedule, ScheduleRow};
use crate::table::RawTable;

/// One file, reloaded once `ttl` has passed since the last successful load.
#[derive(Debug)]
pub struct CachedTable {
    table: &'static str,
    path: PathBuf,
    ttl: Duration,
    entry: Option<(Instant, RawTable)>,
}

impl CachedTable {
    pub fn new(table: &'static str, path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self { table, path: path.into(), ttl, entry: None }
    }

    pub fn path(&self) -> &Path { &self.path }

    pub fn get(&mut self) -> Result<&RawTable, LoadError> {
        self.get_at(Instant::now())
    }

    /// Like `get`, with the clock supplied by the caller.
    pub fn get_at(&mut self, now: Instant) -> Result<&RawTable, LoadError> {
        let fresh = self.is_fresh(now);
        // A stale entry is dropped even if the reload fails.
        let entry = match self.entry.take() {
            Some(entry) if fresh => entry,
            _ => {
                let t = Instant::now();
                let table = RawTable::from_path(self.table, &self.path)?;
                logf!(
                    "Store: Loaded {} from {} ({} rows) in {:?}",
                    self.table, self.path.display(), table.row_count(), t.elapsed()
                );
                (now, table)
            }
        };
        Ok(&self.entry.insert(entry).1)
    }

    pub fn is_fresh(&self, now: Instant) -> bool {
        match &self.entry {
            Some((loaded, _)) => now.saturating_duration_since(*loaded) < self.ttl,
            None => false,
        }
    }

    /// Drop the cached copy; the next `get` reads the file again.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

/// Normalized inputs for one query.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub schedule: Vec<ScheduleRow>,
    pub ratings: RatingLookup,
}

/// Schedule + optional ratings, each behind its own cache.
#[derive(Debug)]
pub struct Sources {
    schedule: CachedTable,
    ratings: Option<CachedTable>,
}

impl Sources {
    pub fn new(opts: &SourceOptions) -> Self {
        Self {
            schedule: CachedTable::new("schedule", &opts.schedule, opts.cache_ttl),
            ratings: opts
                .ratings
                .as_ref()
                .map(|p| CachedTable::new("ratings", p, opts.cache_ttl)),
        }
    }

    pub fn invalidate(&mut self) {
        self.schedule.invalidate();
        if let Some(r) = self.ratings.as_mut() { r.invalidate(); }
    }

    /// Any table due for a reload at `now`.
    pub fn is_stale(&self, now: Instant) -> bool {
        !self.schedule.is_fresh(now)
            || self.ratings.as_ref().is_some_and(|r| !r.is_fresh(now))
    }

    pub fn load(&mut self) -> Result<Dataset, LoadError> {
        self.load_at(Instant::now())
    }

    pub fn load_at(&mut self, now: Instant) -> Result<Dataset, LoadError> {
        let schedule = normalize_schedule(self.schedule.get_at(now)?)?;
        let ratings = match self.ratings.as_mut() {
            Some(cache) => build_rating_lookup(cache.get_at(now)?)?,
            None => RatingLookup::new(),
        };
        Ok(Dataset { schedule, ratings })
    }
}
