// src/config/consts.rs

// Sources
pub const DEFAULT_SCHEDULE_FILE: &str = "schedule.csv";
pub const DEFAULT_RATINGS_FILE: &str = "ratings.csv";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

// Local state
pub const LOG_FILE: &str = ".store/debug.log";
pub const CONFIG_FILE: &str = "edge.cfg";

// Glyphs
pub const GLYPH_PUSHOVER: &str = "🔥";
pub const GLYPH_NEUTRAL: &str = "⚪";
pub const GLYPH_LOCKDOWN: &str = "❄";
pub const GLYPH_UNKNOWN: &str = "❓";

// Opponents missing from the ratings table resolve to this tier.
pub const DEFAULT_MISSING_TIER: MissingTierPolicy = MissingTierPolicy::Neutral;

// Display
pub const BATCH_SIZE: usize = 3;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "teams";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingTierPolicy {
    Neutral,
    Unknown,
}

impl MissingTierPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            MissingTierPolicy::Neutral => "neutral",
            MissingTierPolicy::Unknown => "unknown",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neutral" => Some(MissingTierPolicy::Neutral),
            "unknown" => Some(MissingTierPolicy::Unknown),
            _ => None,
        }
    }
}

// Day-first, matching the schedule files.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";
