//! Hangman round lifecycle and the loop that connects it to a front end.
//!
//! A [`Game`] lives for one session of one player. Each round moves from
//! `InProgress` to either `Won` (every letter revealed, or the whole word
//! guessed) or `Lost` (six incorrect guesses). Cumulative counters survive
//! across rounds and are written to the stats store and the player's
//! snapshot file whenever a round is lost or the session ends.

use crate::config::GameConfig;
use crate::snapshot::{RoundSnapshot, SessionSnapshot};
use crate::stats::{PlayerStats, PlayerStatsStore, StatsScope, Totals};
use crate::wordbank::{DEFAULT_CATEGORY, FALLBACK_WORD, WordBank, load_wordbank_or_default};
use crate::{debug_log, info_log};
use chrono::Utc;
use rand::Rng;
use std::path::PathBuf;

pub const MAX_INCORRECT_GUESSES: u8 = 6;
pub const POINTS_PER_WORD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

/// Why a guess was refused without touching the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Empty,
    NotALetter(char),
    AlreadyTried(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Rejected(RejectReason),
    /// The letter is in the word but the word is not complete yet.
    Hit { letter: char },
    Miss { letter: char, remaining: u8 },
    WrongWord { guess: String, remaining: u8 },
    Won { word: String },
    Lost { word: String },
    /// A guess arrived after the round was already decided.
    RoundOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    NewRound,
    ShowStats(StatsScope),
    Exit,
}

/// Everything a front end needs to draw the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub player_name: String,
    pub category: String,
    pub masked_word: String,
    pub missed_letters: Vec<char>,
    pub incorrect_guesses: u8,
    pub score: u32,
    pub words_guessed: u32,
    pub games_played: u32,
    pub state: RoundState,
    /// The answer, once the round is decided.
    pub revealed_word: Option<String>,
}

impl RoundView {
    #[must_use]
    pub fn remaining_guesses(&self) -> u8 {
        MAX_INCORRECT_GUESSES.saturating_sub(self.incorrect_guesses)
    }
}

/// Abstraction over the user interface driving a [`Game`].
pub trait GameInterface {
    fn display_round(&mut self, view: &RoundView);
    /// `None` means nothing actionable was entered; the loop asks again.
    /// Input that is gone for good (EOF, a dead terminal) must map to
    /// [`UserAction::Exit`].
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_outcome(&mut self, outcome: &GuessOutcome);
    /// Asked after every win: `true` plays another round, `false` ends the session.
    fn ask_continue(&mut self) -> bool;
    fn display_stats(&mut self, rows: &[PlayerStats], scope: &StatsScope);
    fn display_exit_message(&mut self, view: &RoundView);
}

pub struct Game {
    player_name: String,
    category: String,
    word_bank: WordBank,
    stats_store: PlayerStatsStore,
    snapshot_path: PathBuf,
    word_to_guess: String,
    tried_letters: Vec<char>,
    incorrect_guesses: u8,
    totals: Totals,
    state: RoundState,
}

impl Game {
    /// Load the word list, the stats store and the player's snapshot, then
    /// resume the saved round or start a fresh one.
    pub fn new(config: &GameConfig) -> Self {
        let word_bank = load_wordbank_or_default(config.words_path.as_deref());
        Self::with_word_bank(config, word_bank)
    }

    pub fn with_word_bank(config: &GameConfig, word_bank: WordBank) -> Self {
        let stats_store = PlayerStatsStore::load(config.stats_path());
        let mut game = Self {
            player_name: config.player_name.clone(),
            category: config
                .category
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            word_bank,
            stats_store,
            snapshot_path: config.snapshot_path(),
            word_to_guess: String::new(),
            tried_letters: Vec::new(),
            incorrect_guesses: 0,
            totals: Totals::default(),
            state: RoundState::InProgress,
        };
        if !game.restore() {
            game.start_new_round();
        }
        game
    }

    /// Copy saved counters in and resume the saved round if there is one.
    /// Returns `true` when a round was resumed.
    fn restore(&mut self) -> bool {
        let snapshot = match SessionSnapshot::load(&self.snapshot_path) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::warn!("{e}; ignoring saved session");
                None
            }
        };

        let Some(snapshot) = snapshot.filter(|s| s.player_name == self.player_name) else {
            if let Some(stats) = self.stats_store.find(&self.player_name) {
                self.totals = Totals {
                    score: stats.score,
                    words_guessed: stats.words_guessed,
                    games_played: stats.games_played,
                    category_scores: stats.category_scores.clone(),
                };
            }
            return false;
        };

        self.totals = snapshot.totals.clone();
        let Some(round) = snapshot.resumable_round(&self.category, MAX_INCORRECT_GUESSES) else {
            return false;
        };
        self.word_to_guess.clone_from(&round.word_to_guess);
        self.tried_letters.clone_from(&round.tried_letters);
        self.incorrect_guesses = round.incorrect_guesses;
        self.state = RoundState::InProgress;
        log::info!(
            "Resumed round for '{}' saved at {}",
            self.player_name,
            snapshot.saved_at
        );
        true
    }

    pub fn start_new_round(&mut self) {
        self.start_new_round_with_rng(&mut rand::thread_rng());
    }

    pub fn start_new_round_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tried_letters.clear();
        self.incorrect_guesses = 0;
        self.word_to_guess = match self.word_bank.pick_word(&self.category, rng) {
            Some(word) => word,
            None => {
                log::warn!(
                    "No words for category '{}', using fallback word",
                    self.category
                );
                FALLBACK_WORD.to_string()
            }
        };
        self.totals.games_played += 1;
        self.state = RoundState::InProgress;
        debug_log!(
            "Selected word for category {}: {}",
            self.category,
            self.word_to_guess
        );
    }

    /// Evaluate one guess: a single letter or the whole word.
    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        if self.state != RoundState::InProgress {
            return GuessOutcome::RoundOver;
        }
        let input = raw.trim().to_uppercase();
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (None, _) => GuessOutcome::Rejected(RejectReason::Empty),
            (Some(letter), None) => self.guess_letter(letter),
            _ => self.guess_word(input),
        }
    }

    fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        // Letters without an uppercase form (CJK, ordinal indicators) are refused.
        if !(letter.is_alphabetic() && letter.is_uppercase()) {
            return GuessOutcome::Rejected(RejectReason::NotALetter(letter));
        }
        if self.tried_letters.contains(&letter) {
            return GuessOutcome::Rejected(RejectReason::AlreadyTried(letter));
        }
        self.tried_letters.push(letter);

        if self.word_to_guess.contains(letter) {
            if self.is_revealed() {
                self.win()
            } else {
                GuessOutcome::Hit { letter }
            }
        } else {
            self.incorrect_guesses += 1;
            if self.incorrect_guesses >= MAX_INCORRECT_GUESSES {
                self.lose()
            } else {
                GuessOutcome::Miss {
                    letter,
                    remaining: self.remaining_guesses(),
                }
            }
        }
    }

    fn guess_word(&mut self, guess: String) -> GuessOutcome {
        if guess == self.word_to_guess {
            return self.win();
        }
        self.incorrect_guesses += 1;
        if self.incorrect_guesses >= MAX_INCORRECT_GUESSES {
            self.lose()
        } else {
            GuessOutcome::WrongWord {
                guess,
                remaining: self.remaining_guesses(),
            }
        }
    }

    fn is_revealed(&self) -> bool {
        self.word_to_guess
            .chars()
            .all(|c| c == ' ' || self.tried_letters.contains(&c))
    }

    fn win(&mut self) -> GuessOutcome {
        self.totals.score += POINTS_PER_WORD;
        self.totals.words_guessed += 1;
        *self
            .totals
            .category_scores
            .entry(self.category.clone())
            .or_insert(0) += POINTS_PER_WORD;
        self.state = RoundState::Won;
        info_log!("'{}' guessed {}", self.player_name, self.word_to_guess);
        GuessOutcome::Won {
            word: self.word_to_guess.clone(),
        }
    }

    fn lose(&mut self) -> GuessOutcome {
        self.state = RoundState::Lost;
        info_log!("'{}' lost on {}", self.player_name, self.word_to_guess);
        self.persist();
        GuessOutcome::Lost {
            word: self.word_to_guess.clone(),
        }
    }

    /// Save everything; a round still in progress goes into the snapshot so
    /// the next session can pick it up.
    pub fn end_session(&mut self) {
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = self
            .stats_store
            .save(&self.player_name, &self.totals, &self.category)
        {
            log::warn!("Failed to save player stats: {e}");
        }

        let round = (self.state == RoundState::InProgress).then(|| RoundSnapshot {
            word_to_guess: self.word_to_guess.clone(),
            tried_letters: self.tried_letters.clone(),
            incorrect_guesses: self.incorrect_guesses,
        });
        let snapshot = SessionSnapshot {
            player_name: self.player_name.clone(),
            category: self.category.clone(),
            totals: self.totals.clone(),
            round,
            saved_at: Utc::now(),
        };
        if let Err(e) = snapshot.save(&self.snapshot_path) {
            log::warn!("Failed to save session snapshot: {e}");
        }
    }

    #[must_use]
    pub fn masked_display(&self) -> String {
        mask_word(&self.word_to_guess, &self.tried_letters)
    }

    /// Tried letters that are not in the word, in the order they were guessed.
    #[must_use]
    pub fn missed_letters(&self) -> Vec<char> {
        self.tried_letters
            .iter()
            .copied()
            .filter(|c| !self.word_to_guess.contains(*c))
            .collect()
    }

    #[must_use]
    pub fn view(&self) -> RoundView {
        RoundView {
            player_name: self.player_name.clone(),
            category: self.category.clone(),
            masked_word: self.masked_display(),
            missed_letters: self.missed_letters(),
            incorrect_guesses: self.incorrect_guesses,
            score: self.totals.score,
            words_guessed: self.totals.words_guessed,
            games_played: self.totals.games_played,
            state: self.state,
            revealed_word: (self.state != RoundState::InProgress)
                .then(|| self.word_to_guess.clone()),
        }
    }

    #[must_use]
    pub fn stats_rows(&self, scope: &StatsScope) -> Vec<PlayerStats> {
        self.stats_store.rows(scope)
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn word_to_guess(&self) -> &str {
        &self.word_to_guess
    }

    #[must_use]
    pub fn tried_letters(&self) -> &[char] {
        &self.tried_letters
    }

    #[must_use]
    pub fn incorrect_guesses(&self) -> u8 {
        self.incorrect_guesses
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> u8 {
        MAX_INCORRECT_GUESSES.saturating_sub(self.incorrect_guesses)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.totals.score
    }

    #[must_use]
    pub fn words_guessed(&self) -> u32 {
        self.totals.words_guessed
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.totals.games_played
    }

    #[must_use]
    pub fn category_scores(&self) -> &std::collections::BTreeMap<String, u32> {
        &self.totals.category_scores
    }

    #[must_use]
    pub fn round_state(&self) -> RoundState {
        self.state
    }
}

/// Render `word` with untried letters as `_`. Each character takes two
/// columns (`"C "`, `"_ "`); a space becomes four.
#[must_use]
pub fn mask_word(word: &str, tried_letters: &[char]) -> String {
    let mut display = String::with_capacity(word.len() * 2);
    for c in word.chars().map(|c| c.to_ascii_uppercase()) {
        if c == ' ' {
            display.push_str("    ");
        } else if tried_letters.contains(&c) {
            display.push(c);
            display.push(' ');
        } else {
            display.push_str("_ ");
        }
    }
    display
}

/// Drive `game` from `interface` until the player leaves.
pub fn game_loop<I: GameInterface + ?Sized>(game: &mut Game, interface: &mut I) {
    loop {
        interface.display_round(&game.view());

        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action: {:?}", action);

        match action {
            UserAction::Exit => {
                game.end_session();
                interface.display_exit_message(&game.view());
                break;
            }
            UserAction::NewRound => game.start_new_round(),
            UserAction::ShowStats(scope) => {
                let rows = game.stats_rows(&scope);
                interface.display_stats(&rows, &scope);
            }
            UserAction::Guess(input) => {
                let outcome = game.submit_guess(&input);
                interface.display_outcome(&outcome);
                match outcome {
                    GuessOutcome::Won { .. } => {
                        if interface.ask_continue() {
                            game.start_new_round();
                        } else {
                            game.end_session();
                            let scope = StatsScope::AllPlayers;
                            interface.display_stats(&game.stats_rows(&scope), &scope);
                            interface.display_exit_message(&game.view());
                            break;
                        }
                    }
                    GuessOutcome::Lost { .. } => {
                        let scope = StatsScope::AllPlayers;
                        interface.display_stats(&game.stats_rows(&scope), &scope);
                    }
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::load_wordbank_from_str;
    use tempfile::TempDir;

    fn new_game(dir: &TempDir, words: &str, category: &str) -> Game {
        let config = GameConfig::new("tester", dir.path()).with_category(category);
        Game::with_word_bank(&config, load_wordbank_from_str(words))
    }

    #[test]
    fn test_mask_word_hides_untried_letters() {
        assert_eq!(mask_word("CAT", &[]), "_ _ _ ");
        assert_eq!(mask_word("CAT", &['C']), "C _ _ ");
        assert_eq!(mask_word("CAT", &['C', 'A', 'T']), "C A T ");
        assert_eq!(mask_word("CAT", &['X', 'Q']), "_ _ _ ");
    }

    #[test]
    fn test_mask_word_preserves_spaces() {
        assert_eq!(mask_word("SEA CAT", &['A']), "_ _ A     _ A _ ");
    }

    #[test]
    fn test_mask_word_matches_lowercase_word() {
        assert_eq!(mask_word("cat", &['C']), "C _ _ ");
    }

    #[test]
    fn test_new_game_starts_round() {
        let dir = TempDir::new().unwrap();
        let game = new_game(&dir, "[Animals]\nCat\n", "Animals");
        assert_eq!(game.word_to_guess(), "CAT");
        assert_eq!(game.round_state(), RoundState::InProgress);
        assert_eq!(game.games_played(), 1);
        assert_eq!(game.incorrect_guesses(), 0);
        assert!(game.tried_letters().is_empty());
    }

    #[test]
    fn test_caseless_letters_are_rejected() {
        let dir = TempDir::new().unwrap();
        let mut game = new_game(&dir, "[Animals]\nCat\n", "Animals");

        for input in ["中", "ª"] {
            let c = input.chars().next().unwrap();
            assert_eq!(
                game.submit_guess(input),
                GuessOutcome::Rejected(RejectReason::NotALetter(c))
            );
        }
        assert!(game.tried_letters().is_empty());
        assert_eq!(game.incorrect_guesses(), 0);
    }

    #[test]
    fn test_mid_round_exit_after_rejected_letter_still_resumes() {
        let dir = TempDir::new().unwrap();
        let mut game = new_game(&dir, "[Animals]\nCat\n", "Animals");
        game.submit_guess("中");
        game.submit_guess("q");
        game.end_session();

        let resumed = new_game(&dir, "[Animals]\nCat\n", "Animals");
        assert_eq!(resumed.tried_letters(), ['Q']);
        assert_eq!(resumed.incorrect_guesses(), 1);
        assert_eq!(resumed.games_played(), 1);
    }

    #[test]
    fn test_wrong_words_lose_and_persist() {
        let dir = TempDir::new().unwrap();
        let mut game = new_game(&dir, "[Animals]\nCat\n", "Animals");
        let wrong = ["DOG", "COW", "EMU", "YAK", "APE"];
        for (i, guess) in wrong.iter().enumerate() {
            assert_eq!(
                game.submit_guess(guess),
                GuessOutcome::WrongWord {
                    guess: (*guess).to_string(),
                    remaining: MAX_INCORRECT_GUESSES - 1 - i as u8,
                }
            );
        }
        assert_eq!(
            game.submit_guess("owl"),
            GuessOutcome::Lost {
                word: "CAT".to_string()
            }
        );
        assert_eq!(game.round_state(), RoundState::Lost);
        assert_eq!(game.incorrect_guesses(), MAX_INCORRECT_GUESSES);
        assert!(game.tried_letters().is_empty());

        let store = PlayerStatsStore::load(dir.path().join(crate::config::STATS_FILE_NAME));
        let stats = store.find("tester").unwrap();
        assert_eq!(stats.score, 0);
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.category_scores.get("Animals"), Some(&0));
    }

    #[test]
    fn test_letter_completion_wins() {
        let dir = TempDir::new().unwrap();
        let mut game = new_game(&dir, "[Animals]\nCAT\n", "Animals");

        assert_eq!(game.submit_guess("c"), GuessOutcome::Hit { letter: 'C' });
        assert_eq!(game.masked_display(), "C _ _ ");
        assert_eq!(game.submit_guess("A"), GuessOutcome::Hit { letter: 'A' });
        assert_eq!(game.masked_display(), "C A _ ");
        assert_eq!(
            game.submit_guess("t"),
            GuessOutcome::Won {
                word: "CAT".to_string()
            }
        );
        assert_eq!(game.masked_display(), "C A T ");
        assert_eq!(game.round_state(), RoundState::Won);
        assert_eq!(game.score(), 10);
        assert_eq!(game.words_guessed(), 1);
        assert_eq!(game.category_scores().get("Animals"), Some(&10));
    }

    #[test]
    fn test_full_word_guess_wins_with_same_reward() {
        let dir = TempDir::new().unwrap();
        let mut game = new_game(&dir, "[Animals]\nCAT\n", "Animals");
        assert!(matches!(game.submit_guess(" cat "), GuessOutcome::Won { .. }));
        assert_eq!(game.score(), 10);
        assert_eq!(game.words_guessed(), 1);
        assert_eq!(game.category_scores().get("Animals"), Some(&10));
    }

    #[test]
    fn test_repeated_letter_rejected_without_change() {
        let dir = TempDir::new().unwrap();
        let mut game = new_game(&dir, "[Animals]\nDOG\n", "Animals");
        game.submit_guess("Q");
        let before = (game.incorrect_guesses(), game.tried_letters().len());
        assert_eq!(
            game.submit_guess("q"),
            GuessOutcome::Rejected(RejectReason::AlreadyTried('Q'))
        );
        assert_eq!((game.incorrect_guesses(), game.tried_letters().len()), before);
    }

    #[test]
    fn test_non_letter_and_empty_rejected() {
        let dir = TempDir::new().unwrap();
        let mut game = new_game(&dir, "[Animals]\nDOG\n", "Animals");
        assert_eq!(
            game.submit_guess("7"),
            GuessOutcome::Rejected(RejectReason::NotALetter('7'))
        );
        assert_eq!(
            game.submit_guess("   "),
            GuessOutcome::Rejected(RejectReason::Empty)
        );
        assert!(game.tried_letters().is_empty());
        assert_eq!(game.incorrect_guesses(), 0);
    }

    #[test]
    fn test_six_misses_lose() {
        let dir = TempDir::new().unwrap();
        let mut game = new_game(&dir, "[Animals]\nDOG\n", "Animals");
        let mut last = 0;
        for letter in ["Q", "X", "Z", "J", "V"] {
            assert!(matches!(game.submit_guess(letter), GuessOutcome::Miss { .. }));
            assert!(game.incorrect_guesses() > last);
            last = game.incorrect_guesses();
        }
        assert_eq!(
            game.submit_guess("K"),
            GuessOutcome::Lost {
                word: "DOG".to_string()
            }
        );
        assert_eq!(game.incorrect_guesses(), MAX_INCORRECT_GUESSES);
        assert_eq!(game.round_state(), RoundState::Lost);
        assert_eq!(game.score(), 0);
        assert_eq!(game.missed_letters(), vec!['Q', 'X', 'Z', 'J', 'V', 'K']);

        // The round is over: nothing else counts.
        assert_eq!(game.submit_guess("W"), GuessOutcome::RoundOver);
        assert_eq!(game.incorrect_guesses(), MAX_INCORRECT_GUESSES);
    }

    #[test]
    fn test_wrong_word_counts_as_one_miss() {
        let dir = TempDir::new().unwrap();
        let mut game = new_game(&dir, "[Animals]\nDOG\n", "Animals");
        assert_eq!(
            game.submit_guess("cat"),
            GuessOutcome::WrongWord {
                guess: "CAT".to_string(),
                remaining: 5
            }
        );
        assert_eq!(game.incorrect_guesses(), 1);
        assert!(game.tried_letters().is_empty());
    }

    #[test]
    fn test_loss_persists_stats_and_snapshot() {
        let dir = TempDir::new().unwrap();
        let mut game = new_game(&dir, "[Animals]\nDOG\n", "Animals");
        for letter in ["Q", "X", "Z", "J", "V", "K"] {
            game.submit_guess(letter);
        }
        let config = GameConfig::new("tester", dir.path());
        let store = PlayerStatsStore::load(config.stats_path());
        let stats = store.find("tester").unwrap();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.category_scores.get("Animals"), Some(&0));

        let snapshot = SessionSnapshot::load(&config.snapshot_path())
            .unwrap()
            .unwrap();
        assert!(snapshot.round.is_none());
    }

    #[test]
    fn test_phrase_won_by_letters() {
        let dir = TempDir::new().unwrap();
        let mut game = new_game(&dir, "[Animals]\nSea Cow\n", "Animals");
        for letter in ["S", "E", "A", "C", "O"] {
            assert!(matches!(game.submit_guess(letter), GuessOutcome::Hit { .. }));
        }
        assert!(matches!(game.submit_guess("W"), GuessOutcome::Won { .. }));
        assert_eq!(game.masked_display(), "S E A     C O W ");
    }

    #[test]
    fn test_missing_category_uses_fallback_word() {
        let dir = TempDir::new().unwrap();
        let game = new_game(&dir, "[Animals]\nCAT\n", "Nonexistent");
        assert_eq!(game.word_to_guess(), FALLBACK_WORD);
        assert_eq!(game.round_state(), RoundState::InProgress);
    }

    #[test]
    fn test_no_category_uses_default_token() {
        let dir = TempDir::new().unwrap();
        let config = GameConfig::new("tester", dir.path());
        let game = Game::with_word_bank(&config, WordBank::default());
        assert_eq!(game.category(), DEFAULT_CATEGORY);
        assert_eq!(game.word_to_guess(), FALLBACK_WORD);
    }

    #[test]
    fn test_new_round_resets_round_state() {
        let dir = TempDir::new().unwrap();
        let mut game = new_game(&dir, "[Animals]\nDOG\n", "Animals");
        game.submit_guess("Q");
        game.submit_guess("D");
        game.start_new_round();
        assert!(game.tried_letters().is_empty());
        assert_eq!(game.incorrect_guesses(), 0);
        assert_eq!(game.games_played(), 2);
        assert_eq!(game.masked_display(), "_ _ _ ");
    }

    #[test]
    fn test_mid_round_exit_resumes() {
        let dir = TempDir::new().unwrap();
        {
            let mut game = new_game(&dir, "[Animals]\nDOG\n", "Animals");
            game.submit_guess("D");
            game.submit_guess("Q");
            game.end_session();
        }
        let game = new_game(&dir, "[Animals]\nDOG\n", "Animals");
        assert_eq!(game.tried_letters(), ['D', 'Q']);
        assert_eq!(game.incorrect_guesses(), 1);
        assert_eq!(game.games_played(), 1);
        assert_eq!(game.masked_display(), "D _ _ ");
    }

    #[test]
    fn test_other_category_starts_fresh_but_keeps_totals() {
        let dir = TempDir::new().unwrap();
        {
            let mut game = new_game(&dir, "[Animals]\nDOG\n[Fruits]\nFIG\n", "Animals");
            game.submit_guess("DOG");
            game.end_session();
        }
        let game = new_game(&dir, "[Animals]\nDOG\n[Fruits]\nFIG\n", "Fruits");
        assert_eq!(game.word_to_guess(), "FIG");
        assert!(game.tried_letters().is_empty());
        assert_eq!(game.score(), 10);
        assert_eq!(game.games_played(), 2);
        assert_eq!(game.category_scores().get("Animals"), Some(&10));
    }

    #[test]
    fn test_view_reveals_word_only_when_decided() {
        let dir = TempDir::new().unwrap();
        let mut game = new_game(&dir, "[Animals]\nDOG\n", "Animals");
        assert_eq!(game.view().revealed_word, None);
        game.submit_guess("DOG");
        let view = game.view();
        assert_eq!(view.revealed_word.as_deref(), Some("DOG"));
        assert_eq!(view.state, RoundState::Won);
        assert_eq!(view.remaining_guesses(), 6);
    }
}
