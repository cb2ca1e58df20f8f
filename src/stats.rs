//! Persistent per-player statistics.
//!
//! The whole collection lives in one JSON file. It is read once when the
//! store is created and rewritten in full after every [`PlayerStatsStore::save`].

use crate::debug_log;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading or writing persisted game data.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("corrupt state in '{}': {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn corrupt(path: &Path, source: serde_json::Error) -> Self {
        Self::Corrupt {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Cumulative counters for one player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub score: u32,
    pub words_guessed: u32,
    pub games_played: u32,
    pub category_scores: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_name: String,
    pub score: u32,
    pub words_guessed: u32,
    pub games_played: u32,
    #[serde(default)]
    pub category_scores: BTreeMap<String, u32>,
}

impl PlayerStats {
    fn new(player_name: &str, totals: Totals) -> Self {
        Self {
            player_name: player_name.to_string(),
            score: totals.score,
            words_guessed: totals.words_guessed,
            games_played: totals.games_played,
            category_scores: totals.category_scores,
        }
    }

    fn update(&mut self, totals: Totals) {
        self.score = totals.score;
        self.words_guessed = totals.words_guessed;
        self.games_played = totals.games_played;
        self.category_scores = totals.category_scores;
    }

    /// `"Animals: 20 Fruits: 10"`, in category name order.
    #[must_use]
    pub fn category_summary(&self) -> String {
        self.category_scores
            .iter()
            .map(|(category, score)| format!("{category}: {score}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Which rows the statistics view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsScope {
    AllPlayers,
    Player(String),
}

#[derive(Debug)]
pub struct PlayerStatsStore {
    path: PathBuf,
    records: Vec<PlayerStats>,
}

impl PlayerStatsStore {
    /// Load the store at `path`. A missing, unreadable or corrupt file gives an
    /// empty store; the last two are logged.
    pub fn load<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let records = if path.exists() {
            match try_load(&path) {
                Ok(records) => records,
                Err(e) => {
                    log::warn!("{e}; starting with empty player stats");
                    Vec::new()
                }
            }
        } else {
            log::info!(
                "Stats file '{}' not found, starting with empty player stats",
                path.display()
            );
            Vec::new()
        };
        Self { path, records }
    }

    /// Upsert `player_name` with absolute `totals` and rewrite the file.
    ///
    /// `current_category` is recorded with a score of 0 if the player has not
    /// scored in it yet.
    pub fn save(
        &mut self,
        player_name: &str,
        totals: &Totals,
        current_category: &str,
    ) -> Result<(), StoreError> {
        let mut totals = totals.clone();
        totals
            .category_scores
            .entry(current_category.to_string())
            .or_insert(0);

        match self
            .records
            .iter_mut()
            .find(|stats| stats.player_name == player_name)
        {
            Some(stats) => stats.update(totals),
            None => self.records.push(PlayerStats::new(player_name, totals)),
        }
        debug_log!("Saving stats for '{}' ({} records)", player_name, self.records.len());
        self.persist()
    }

    fn persist(&self) -> Result<(), StoreError> {
        write_json(&self.path, &self.records)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn all(&self) -> &[PlayerStats] {
        &self.records
    }

    #[must_use]
    pub fn find(&self, player_name: &str) -> Option<&PlayerStats> {
        self.records
            .iter()
            .find(|stats| stats.player_name == player_name)
    }

    /// All records, highest score first. Equal scores keep file order.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<PlayerStats> {
        let mut rows = self.records.clone();
        rows.sort_by(|a, b| b.score.cmp(&a.score));
        rows
    }

    #[must_use]
    pub fn rows(&self, scope: &StatsScope) -> Vec<PlayerStats> {
        match scope {
            StatsScope::AllPlayers => self.leaderboard(),
            StatsScope::Player(name) => self.find(name).cloned().into_iter().collect(),
        }
    }
}

/// Read and schema-check the stats file.
pub fn try_load(path: &Path) -> Result<Vec<PlayerStats>, StoreError> {
    let data = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    serde_json::from_str(&data).map_err(|e| StoreError::corrupt(path, e))
}

pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|e| StoreError::corrupt(path, e))?;
    fs::write(path, json).map_err(|e| StoreError::io(path, e))
}
