use std::path::{Path, PathBuf};

pub const STATS_FILE_NAME: &str = "player_stats.json";
pub const LOG_FILE_NAME: &str = "hangman.log";

/// Everything a session needs to know before it starts.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub player_name: String,
    /// Category picked by the player; `None` plays the default category.
    pub category: Option<String>,
    pub data_dir: PathBuf,
    /// Word list to load instead of the embedded one.
    pub words_path: Option<PathBuf>,
}

impl GameConfig {
    pub fn new(player_name: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            player_name: player_name.into(),
            category: None,
            data_dir: data_dir.into(),
            words_path: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.words_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn stats_path(&self) -> PathBuf {
        self.data_dir.join(STATS_FILE_NAME)
    }

    #[must_use]
    pub fn snapshot_path(&self) -> PathBuf {
        snapshot_path(&self.data_dir, &self.player_name)
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }
}

/// Default data directory: `<platform data dir>/hangman`, or `./data`.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from("data"), |dir| dir.join("hangman"))
}

/// Per-player snapshot file. Anything outside `[A-Za-z0-9_-]` in the name
/// becomes `_` so names cannot escape `data_dir`.
#[must_use]
pub fn snapshot_path(data_dir: &Path, player_name: &str) -> PathBuf {
    let sanitized: String = player_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    data_dir.join(format!("{sanitized}_game.json"))
}
