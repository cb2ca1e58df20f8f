// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod config;
pub mod game_state;
pub mod logging;
pub mod snapshot;
pub mod stats;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use config::GameConfig;
pub use game_state::{Game, GameInterface, GuessOutcome, RoundState, UserAction, game_loop};
pub use stats::{PlayerStats, PlayerStatsStore, StatsScope};
pub use wordbank::{WordBank, load_wordbank_from_file, load_wordbank_from_str};
