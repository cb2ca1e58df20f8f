use crate::config::{GameConfig, default_data_dir};
use crate::game_state::{GameInterface, GuessOutcome, RejectReason, RoundState, RoundView, UserAction};
use crate::stats::{PlayerStats, StatsScope};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Hangman: guess the word one letter at a time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Player name (asked for on startup when omitted)
    #[arg(short = 'n', long = "name")]
    pub player_name: Option<String>,

    /// Word category to play (asked for on startup when omitted)
    #[arg(short = 'c', long = "category")]
    pub category: Option<String>,

    /// Path to a word list file in `[Category]` format
    #[arg(short = 'w', long = "words")]
    pub words_path: Option<PathBuf>,

    /// Directory holding player statistics, saved sessions and the log
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Print the statistics of all players and exit
    #[arg(long)]
    pub stats: bool,

    /// Print the available categories and exit
    #[arg(long = "list-categories")]
    pub list_categories: bool,
}

impl Cli {
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    #[must_use]
    pub fn to_config(&self, player_name: String, category: Option<String>) -> GameConfig {
        GameConfig {
            player_name,
            category,
            data_dir: self.data_dir(),
            words_path: self.words_path.clone(),
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

/// Ask for a non-empty player name. `None` on end of input.
pub fn read_player_name<R: BufRead>(reader: &mut R) -> Option<String> {
    loop {
        println!("Enter your name:");
        let name = read_trimmed_line(reader)?;
        if !name.is_empty() {
            return Some(name);
        }
        println!("The name cannot be empty.");
    }
}

/// Let the player pick a category by number or name. An empty answer takes
/// the first one; `None` on end of input or when there is nothing to pick.
pub fn choose_category<R: BufRead>(reader: &mut R, categories: &[&str]) -> Option<String> {
    if categories.is_empty() {
        return None;
    }
    loop {
        println!("Choose a category:");
        for (i, name) in categories.iter().enumerate() {
            println!("{}. {}", i + 1, name);
        }
        let answer = read_trimmed_line(reader)?;
        if answer.is_empty() {
            return Some(categories[0].to_string());
        }
        if let Ok(index) = answer.parse::<usize>()
            && (1..=categories.len()).contains(&index)
        {
            return Some(categories[index - 1].to_string());
        }
        if let Some(name) = categories.iter().find(|c| c.eq_ignore_ascii_case(&answer)) {
            return Some((*name).to_string());
        }
        println!("Unknown category '{answer}'.");
    }
}

/// ASCII gallows for `incorrect_guesses` misses: head, torso, left arm,
/// right arm, left leg, right leg.
#[must_use]
pub fn gallows_lines(incorrect_guesses: u8) -> Vec<String> {
    let part = |stage: u8, c: char| if incorrect_guesses >= stage { c } else { ' ' };
    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  |   {}", part(1, 'O')),
        format!("  |  {}{}{}", part(3, '/'), part(2, '|'), part(4, '\\')),
        format!("  |  {} {}", part(5, '/'), part(6, '\\')),
        "  |".to_string(),
        "=======".to_string(),
    ]
}

#[must_use]
pub fn format_missed_letters(missed: &[char]) -> String {
    missed
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[must_use]
pub fn outcome_message(outcome: &GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Rejected(RejectReason::Empty) => {
            "Type a letter or the whole word.".to_string()
        }
        GuessOutcome::Rejected(RejectReason::NotALetter(c)) => {
            format!("Enter a valid, new letter! ('{c}' is not a letter)")
        }
        GuessOutcome::Rejected(RejectReason::AlreadyTried(c)) => {
            format!("Enter a valid, new letter! ('{c}' was already tried)")
        }
        GuessOutcome::Hit { letter } => format!("Good guess! '{letter}' is in the word."),
        GuessOutcome::Miss { letter, remaining } => {
            format!("No '{letter}' in the word. {remaining} incorrect guesses left.")
        }
        GuessOutcome::WrongWord { guess, remaining } => {
            format!("Incorrect guess! It is not {guess}. {remaining} incorrect guesses left.")
        }
        GuessOutcome::Won { word } => format!("Congratulations! You guessed the word: {word}"),
        GuessOutcome::Lost { word } => format!("Game over, you lost! The word was: {word}"),
        GuessOutcome::RoundOver => {
            "This round is over. Start a new word or quit.".to_string()
        }
    }
}

/// Table rows for the statistics view, header first.
#[must_use]
pub fn format_stats_rows(rows: &[PlayerStats]) -> Vec<String> {
    let name_width = rows
        .iter()
        .map(|s| s.player_name.chars().count())
        .chain(std::iter::once("Player Name".len()))
        .max()
        .unwrap_or_default();
    let mut lines = vec![format!(
        "{:<name_width$}  {:>5}  {:>13}  {:>12}  Category Scores",
        "Player Name", "Score", "Words Guessed", "Games Played"
    )];
    for stats in rows {
        lines.push(format!(
            "{:<name_width$}  {:>5}  {:>13}  {:>12}  {}",
            stats.player_name,
            stats.score,
            stats.words_guessed,
            stats.games_played,
            stats.category_summary()
        ));
    }
    lines
}

pub fn display_round(view: &RoundView) {
    println!();
    println!(
        "{} | Category: {} | Score: {}",
        view.player_name.to_uppercase(),
        view.category,
        view.score
    );
    for line in gallows_lines(view.incorrect_guesses) {
        println!("{line}");
    }
    println!("Missed Letters: {}", format_missed_letters(&view.missed_letters));
    println!("Word: {}", view.masked_word);
}

pub fn display_stats(rows: &[PlayerStats], scope: &StatsScope) {
    match scope {
        StatsScope::AllPlayers => println!("\nHighscores"),
        StatsScope::Player(name) => println!("\nStatistics for {name}"),
    }
    if rows.is_empty() {
        println!("No statistics recorded yet.");
        return;
    }
    for line in format_stats_rows(rows) {
        println!("{line}");
    }
}

pub fn display_exit_message(view: &RoundView) {
    println!(
        "Final score for {}: {} ({} words guessed in {} games). Exiting.",
        view.player_name, view.score, view.words_guessed, view.games_played
    );
}

pub fn read_action<R: BufRead>(reader: &mut R, player_name: &str) -> UserAction {
    println!("\nGuess a letter or the word ('new' for a new word, 'stats', 'me', 'exit'):");
    let Some(input) = read_trimmed_line(reader) else {
        return UserAction::Exit;
    };
    match input.to_lowercase().as_str() {
        "exit" | "quit" => UserAction::Exit,
        "new" | "next" => UserAction::NewRound,
        "stats" => UserAction::ShowStats(StatsScope::AllPlayers),
        "me" | "mystats" => UserAction::ShowStats(StatsScope::Player(player_name.to_string())),
        _ => UserAction::Guess(input),
    }
}

pub fn ask_continue<R: BufRead>(reader: &mut R) -> bool {
    println!("Continue? (y/n):");
    read_trimmed_line(reader)
        .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
    player_name: String,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            player_name: String::new(),
        }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round(&mut self, view: &RoundView) {
        self.player_name.clone_from(&view.player_name);
        if view.state == RoundState::InProgress {
            display_round(view);
        }
    }

    fn read_action(&mut self) -> Option<UserAction> {
        Some(read_action(&mut self.reader, &self.player_name))
    }

    fn display_outcome(&mut self, outcome: &GuessOutcome) {
        println!("{}", outcome_message(outcome));
    }

    fn ask_continue(&mut self) -> bool {
        ask_continue(&mut self.reader)
    }

    fn display_stats(&mut self, rows: &[PlayerStats], scope: &StatsScope) {
        display_stats(rows, scope);
    }

    fn display_exit_message(&mut self, view: &RoundView) {
        display_exit_message(view);
    }
}
