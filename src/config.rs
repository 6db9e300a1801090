use std::collections::{HashMap, HashSet};
use std::env;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::scoring::MAX_RANKED;

/// Content language used for tokenization.
///
/// Resolved once per request and threaded through as a parameter, never
/// re-derived from locale strings inside the scoring code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    German,
}

impl Language {
    /// Resolve a locale string like "de_DE" or "en-US" to a language.
    /// Unknown locales fall back to English.
    pub fn from_locale(locale: &str) -> Self {
        if locale.to_ascii_lowercase().starts_with("de") {
            Language::German
        } else {
            Language::English
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "German",
        }
    }
}

/// When the calling layer runs the suggestion pipeline.
///
/// The core itself never schedules anything; this is carried in the
/// settings record so the caller (editor hook, cron, CLI) can decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerMode {
    Manual,
    OnSave,
    Interval,
}

impl TriggerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerMode::Manual => "manual",
            TriggerMode::OnSave => "on save",
            TriggerMode::Interval => "interval",
        }
    }
}

/// An editorial boost: multiply a candidate's relevance score by `factor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostEntry {
    pub id: u64,
    pub factor: f64,
}

/// Normalized boost lookup: candidate id -> factor (always >= 1.0).
pub type BoostMap = HashMap<u64, f64>;

/// Link suggestion settings, as supplied by the settings store.
///
/// Deserialized leniently (every field has a default) and then normalized
/// once via [`Settings::normalize`], so downstream scoring code never has to
/// re-validate boost entries or clamp limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Candidate ids the editor has blacklisted from suggestions
    pub excluded_ids: HashSet<u64>,
    /// Editorial boosts, normalized at load time
    pub boost_entries: Vec<BoostEntry>,
    pub trigger_mode: TriggerMode,
    /// Minutes between runs when `trigger_mode` is `Interval`
    pub interval_minutes: u32,
    /// How many scored candidates survive ranking (top-N truncation)
    pub max_candidates: usize,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            excluded_ids: HashSet::new(),
            boost_entries: Vec::new(),
            trigger_mode: TriggerMode::Manual,
            interval_minutes: 60,
            max_candidates: MAX_RANKED,
            language: Language::English,
        }
    }
}

impl Settings {
    /// Normalize in place. Invalid boost entries are silently dropped
    /// (id 0) or clamped (factor below 1.0 becomes 1.0, NaN included);
    /// limits are kept sane. Never an error; bad editor input degrades
    /// to defaults.
    pub fn normalize(&mut self) {
        self.boost_entries.retain(|b| b.id != 0);
        for boost in &mut self.boost_entries {
            boost.factor = boost.factor.max(1.0);
        }
        if self.max_candidates == 0 {
            self.max_candidates = MAX_RANKED;
        }
        if self.interval_minutes == 0 {
            self.interval_minutes = 60;
        }
    }

    /// Boost lookup map. Call after `normalize`: entries here are
    /// guaranteed to have factor >= 1.0.
    pub fn boost_map(&self) -> BoostMap {
        self.boost_entries.iter().map(|b| (b.id, b.factor)).collect()
    }
}

/// Process configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Path to the content library JSON file
    pub library_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Only the library path is read; everything else lives in the
    /// settings record inside the library file.
    pub fn load() -> Result<Self> {
        Ok(Self {
            library_path: env::var("INTERLINK_LIBRARY")
                .unwrap_or_else(|_| "./demos/library.json".to_string()),
        })
    }

    /// Check that the library file exists before commands that need it.
    pub fn require_library(&self) -> Result<()> {
        if !std::path::Path::new(&self.library_path).exists() {
            anyhow::bail!(
                "Content library not found at {}.\n\
                 Set INTERLINK_LIBRARY in your .env file (see .env.example),\n\
                 or run from a directory containing demos/library.json.",
                self.library_path
            );
        }
        Ok(())
    }
}
