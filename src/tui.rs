//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `EnteringGuess` → `ConfirmingContinue` after a win → back to `EnteringGuess`
//! - `EnteringGuess` → `RoundOver` after a loss → `EnteringGuess` on a new round
//! - `ViewingStats` is an overlay over any state, closed by any key

use crate::cli::{format_missed_letters, gallows_lines, outcome_message};
use crate::game_state::{
    GameInterface, GuessOutcome, MAX_INCORRECT_GUESSES, RoundState, RoundView, UserAction,
    mask_word,
};
use crate::stats::{PlayerStats, StatsScope};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};
use std::io;

const MAX_INPUT_LENGTH: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const GALLOWS_WIDTH: u16 = 24;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq)]
enum TuiState {
    EnteringGuess,
    /// Word guessed, waiting for the continue/stop answer.
    ConfirmingContinue,
    /// Round lost; only a new round, the stats or quitting are possible.
    RoundOver,
    ViewingStats,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    view: Option<&'a RoundView>,
    current_input: &'a str,
    state: TuiState,
    stats_rows: &'a [PlayerStats],
    stats_scope: &'a StatsScope,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and round display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    view: Option<RoundView>,
    current_input: String,
    state: TuiState,
    stats_rows: Vec<PlayerStats>,
    stats_scope: StatsScope,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            view: None,
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            stats_rows: Vec::new(),
            stats_scope: StatsScope::AllPlayers,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            view: self.view.as_ref(),
            current_input: &self.current_input,
            state: self.state,
            stats_rows: &self.stats_rows,
            stats_scope: &self.stats_scope,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(12),   // Board or stats table
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.view);
        if ctx.state == TuiState::ViewingStats {
            Self::render_stats(f, chunks[1], ctx.stats_rows, ctx.stats_scope);
        } else {
            Self::render_board(f, chunks[1], ctx);
        }
        Self::render_status(f, chunks[2], ctx.status);
        Self::render_instructions(f, chunks[3], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect, view: Option<&RoundView>) {
        let text = match view {
            Some(view) => format!(
                "HANGMAN - {} - {}",
                view.player_name.to_uppercase(),
                view.category
            ),
            None => "HANGMAN".to_string(),
        };
        let title = Paragraph::new(text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GALLOWS_WIDTH), Constraint::Min(20)])
            .split(area);

        let incorrect = ctx.view.map_or(0, |v| v.incorrect_guesses);
        let gallows: Vec<Line> = gallows_lines(incorrect)
            .into_iter()
            .map(Line::from)
            .collect();
        let gallows = Paragraph::new(gallows)
            .block(Block::default().title("Gallows").borders(Borders::ALL));
        f.render_widget(gallows, columns[0]);

        Self::render_info(f, columns[1], ctx);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if let Some(view) = ctx.view {
            let word_style = match view.state {
                RoundState::Won => SUCCESS_STYLE,
                RoundState::Lost => ERROR_STYLE,
                RoundState::InProgress => Style::default().add_modifier(Modifier::BOLD),
            };
            lines.push(Line::from(vec![Span::styled(
                view.masked_word.clone(),
                word_style,
            )]));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Missed Letters: ", INFO_STYLE),
                Span::raw(format_missed_letters(&view.missed_letters)),
            ]));
            lines.push(Line::from(format!(
                "Incorrect guesses: {}/{}",
                view.incorrect_guesses, MAX_INCORRECT_GUESSES
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![Span::styled(
                format!("Score: {}", view.score),
                HEADER_STYLE,
            )]));
            lines.push(Line::from(format!(
                "Words guessed: {} | Games played: {}",
                view.words_guessed, view.games_played
            )));
            lines.push(Line::from(""));
        }

        if ctx.state == TuiState::EnteringGuess {
            lines.push(Line::from(vec![
                Span::styled("Guess a letter or the word: ", INFO_STYLE),
                Span::styled(
                    format!("{}_", ctx.current_input),
                    Style::default().fg(Color::White).bg(Color::DarkGray),
                ),
            ]));
            lines.push(Line::from(""));
        }

        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, MESSAGE_STYLE)]));
        }
        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Word").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_stats(f: &mut Frame, area: Rect, rows: &[PlayerStats], scope: &StatsScope) {
        let title = match scope {
            StatsScope::AllPlayers => "Highscores".to_string(),
            StatsScope::Player(name) => format!("Statistics for {name}"),
        };
        let header = Row::new(vec![
            Cell::from("Player Name"),
            Cell::from("Score"),
            Cell::from("Words Guessed"),
            Cell::from("Games Played"),
            Cell::from("Category Scores"),
        ])
        .style(HEADER_STYLE);
        let body: Vec<Row> = rows
            .iter()
            .map(|stats| {
                Row::new(vec![
                    Cell::from(stats.player_name.clone()),
                    Cell::from(stats.score.to_string()),
                    Cell::from(stats.words_guessed.to_string()),
                    Cell::from(stats.games_played.to_string()),
                    Cell::from(stats.category_summary()),
                ])
            })
            .collect();
        let widths = [
            Constraint::Length(16),
            Constraint::Length(7),
            Constraint::Length(14),
            Constraint::Length(13),
            Constraint::Min(20),
        ];
        let table = Table::new(body, widths)
            .header(header)
            .block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(table, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => {
                "Type a letter or word | ENTER: Guess | F2: New word | F3: Highscores | F4: My stats | ESC: Quit"
            }
            TuiState::ConfirmingContinue => "Continue? Y / ENTER: Next word | N / ESC: Stop",
            TuiState::RoundOver => "N / F2: New word | F3: Highscores | F4: My stats | ESC: Quit",
            TuiState::ViewingStats => "Press any key to go back",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    /// Wait up to one poll interval for a key press worth handling.
    fn next_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let key = match event::read()? {
            Event::Key(key) => key,
            other => {
                debug_log!("next_key() - Ignoring non-key event: {:?}", other);
                return Ok(None);
            }
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        // Garbage from escape sequences when alt-tabbing
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
        {
            debug_log!("next_key() - Ignoring invalid character: {:?}", c);
            return Ok(None);
        }

        debug_log!(
            "next_key() - code={:?}, modifiers={:?}, state={:?}",
            key.code,
            key.modifiers,
            self.state
        );
        Ok(Some(key))
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn own_stats_action(&self) -> UserAction {
        let name = self
            .view
            .as_ref()
            .map(|v| v.player_name.clone())
            .unwrap_or_default();
        UserAction::ShowStats(StatsScope::Player(name))
    }

    /// Keys shared by the guessing and round-over screens.
    fn handle_menu_key(&self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Esc => Some(UserAction::Exit),
            KeyCode::F(2) => Some(UserAction::NewRound),
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(UserAction::NewRound)
            }
            KeyCode::F(3) => Some(UserAction::ShowStats(StatsScope::AllPlayers)),
            KeyCode::F(4) => Some(self.own_stats_action()),
            _ => None,
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        if let Some(action) = self.handle_menu_key(key) {
            return Some(action);
        }
        self.error_message.clear();

        match key.code {
            KeyCode::Char(c) if Self::has_modifier_keys(&key) => {
                debug_log!("handle_guess_input() - Ignoring '{}' with modifier", c);
            }
            KeyCode::Char(c)
                if (c.is_alphabetic() || c == ' ')
                    && self.current_input.chars().count() < MAX_INPUT_LENGTH =>
            {
                self.current_input.extend(c.to_uppercase());
            }
            KeyCode::Char(c) if !c.is_alphabetic() && c != ' ' => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter if !self.current_input.trim().is_empty() => {
                let guess = std::mem::take(&mut self.current_input);
                info_log!("handle_guess_input() - Submitting guess '{}'", guess);
                return Some(UserAction::Guess(guess));
            }
            KeyCode::Enter => {
                self.error_message = "Type a letter or the whole word first!".to_string();
            }
            _ => {}
        }
        None
    }

    fn handle_round_over_input(&self, key: KeyEvent) -> Option<UserAction> {
        if let KeyCode::Char('n' | 'N') = key.code
            && !Self::has_modifier_keys(&key)
        {
            return Some(UserAction::NewRound);
        }
        self.handle_menu_key(key)
    }

    /// Block until a key press arrives; `None` if the terminal failed.
    fn wait_for_key(&mut self) -> Option<KeyEvent> {
        loop {
            if self.draw().is_err() {
                return None;
            }
            match self.next_key() {
                Ok(Some(key)) => return Some(key),
                Ok(None) => {}
                Err(e) => {
                    debug_log!("wait_for_key() - Input error: {}", e);
                    return None;
                }
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_round(&mut self, view: &RoundView) {
        let round_changed = self
            .view
            .as_ref()
            .is_none_or(|old| old.games_played != view.games_played);
        self.state = match view.state {
            RoundState::InProgress => TuiState::EnteringGuess,
            RoundState::Won | RoundState::Lost => TuiState::RoundOver,
        };
        if round_changed && view.state == RoundState::InProgress {
            self.current_input.clear();
            self.error_message.clear();
            self.status = format!("New word from {} - good luck!", view.category);
        }
        self.view = Some(view.clone());
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        let key = self.wait_for_key();
        let action = action_for_key(key, |key| match self.state {
            TuiState::EnteringGuess => self.handle_guess_input(key),
            TuiState::RoundOver => self.handle_round_over_input(key),
            TuiState::ConfirmingContinue | TuiState::ViewingStats => None,
        });
        if action.is_some() {
            info_log!("read_action() - {:?}", action);
        }
        action
    }

    fn display_outcome(&mut self, outcome: &GuessOutcome) {
        self.message.clear();
        self.error_message.clear();
        match outcome {
            GuessOutcome::Rejected(_) | GuessOutcome::RoundOver => {
                self.error_message = outcome_message(outcome);
            }
            GuessOutcome::Won { word } | GuessOutcome::Lost { word } => {
                if let Some(view) = self.view.as_mut() {
                    let letters: Vec<char> = word.chars().collect();
                    view.masked_word = mask_word(word, &letters);
                    view.state = if matches!(outcome, GuessOutcome::Won { .. }) {
                        RoundState::Won
                    } else {
                        RoundState::Lost
                    };
                }
                self.message = outcome_message(outcome);
                self.status = self.message.clone();
            }
            _ => self.message = outcome_message(outcome),
        }
        self.draw_or_log();
    }

    fn ask_continue(&mut self) -> bool {
        self.state = TuiState::ConfirmingContinue;
        self.status = "Continue with a new word? (Y/N)".to_string();
        loop {
            let Some(key) = self.wait_for_key() else {
                return false;
            };
            match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => return true,
                KeyCode::Char('n' | 'N') | KeyCode::Esc => return false,
                _ => {}
            }
        }
    }

    fn display_stats(&mut self, rows: &[PlayerStats], scope: &StatsScope) {
        let previous = self.state;
        self.stats_rows = rows.to_vec();
        self.stats_scope = scope.clone();
        self.state = TuiState::ViewingStats;
        if rows.is_empty() {
            self.status = "No statistics recorded yet".to_string();
        }
        let _ = self.wait_for_key();
        self.state = previous;
        self.draw_or_log();
    }

    fn display_exit_message(&mut self, view: &RoundView) {
        self.view = Some(view.clone());
        self.message = format!("Final score: {}", view.score);
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Map a key press to an action. A terminal that can no longer be read or
/// drawn (`key` is `None`) ends the session so it is saved.
fn action_for_key(
    key: Option<KeyEvent>,
    handle: impl FnOnce(KeyEvent) -> Option<UserAction>,
) -> Option<UserAction> {
    match key {
        Some(key) => handle(key),
        None => {
            log::warn!("Terminal input failed, ending the session");
            Some(UserAction::Exit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_failure_exits() {
        assert_eq!(action_for_key(None, |_| None), Some(UserAction::Exit));
    }

    #[test]
    fn test_key_goes_to_handler() {
        let key = KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE);
        let new_round = |k: KeyEvent| (k.code == KeyCode::F(2)).then_some(UserAction::NewRound);
        assert_eq!(action_for_key(Some(key), new_round), Some(UserAction::NewRound));
        assert_eq!(action_for_key(Some(key), |_| None), None);
    }
}
