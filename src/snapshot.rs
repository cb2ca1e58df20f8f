//! Per-player session snapshot, written whenever a session ends or a round is lost.

use crate::stats::{StoreError, Totals, write_json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A round that was still being played when the session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub word_to_guess: String,
    pub tried_letters: Vec<char>,
    pub incorrect_guesses: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub player_name: String,
    pub category: String,
    #[serde(flatten)]
    pub totals: Totals,
    #[serde(default)]
    pub round: Option<RoundSnapshot>,
    pub saved_at: DateTime<Utc>,
}

impl SessionSnapshot {
    /// Read the snapshot at `path`. `Ok(None)` when the player has none yet.
    pub fn load(path: &Path) -> Result<Option<Self>, StoreError> {
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        serde_json::from_str(&data)
            .map(Some)
            .map_err(|e| StoreError::corrupt(path, e))
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        write_json(path, self)
    }

    /// The saved round, if it can be resumed in `category`.
    ///
    /// A round is only trusted when its counters still satisfy the round
    /// invariants; anything else is discarded.
    #[must_use]
    pub fn resumable_round(&self, category: &str, max_incorrect: u8) -> Option<&RoundSnapshot> {
        let round = self.round.as_ref()?;
        let valid = self.category == category
            && !round.word_to_guess.is_empty()
            && round.incorrect_guesses < max_incorrect
            && round
                .tried_letters
                .iter()
                .all(|c| c.is_alphabetic() && c.is_uppercase());
        valid.then_some(round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn snapshot(round: Option<RoundSnapshot>) -> SessionSnapshot {
        SessionSnapshot {
            player_name: "alice".to_string(),
            category: "Animals".to_string(),
            totals: Totals {
                score: 20,
                words_guessed: 2,
                games_played: 3,
                category_scores: BTreeMap::from([("Animals".to_string(), 20)]),
            },
            round,
            saved_at: Utc::now(),
        }
    }

    fn round(incorrect: u8) -> RoundSnapshot {
        RoundSnapshot {
            word_to_guess: "CAT".to_string(),
            tried_letters: vec!['C', 'X'],
            incorrect_guesses: incorrect,
        }
    }

    #[test]
    fn test_missing_snapshot_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = SessionSnapshot::load(&dir.path().join("alice_game.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("alice_game.json");
        let original = snapshot(Some(round(1)));
        original.save(&path).unwrap();
        let loaded = SessionSnapshot::load(&path).unwrap().unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_corrupt_snapshot_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("alice_game.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(
            SessionSnapshot::load(&path),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_resumable_round_requires_same_category() {
        let snap = snapshot(Some(round(1)));
        assert!(snap.resumable_round("Animals", 6).is_some());
        assert!(snap.resumable_round("Fruits", 6).is_none());
    }

    #[test]
    fn test_finished_or_absent_round_is_not_resumable() {
        assert!(snapshot(None).resumable_round("Animals", 6).is_none());
        assert!(snapshot(Some(round(6))).resumable_round("Animals", 6).is_none());
    }
}
