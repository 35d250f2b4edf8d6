//! TUI (Terminal User Interface) module for Unscramble
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! - `Playing` → `GameOver` when the session ends
//! - `GameOver` → `Playing` on a new game

use crate::error::GameError;
use crate::game_state::{GameInterface, RoundView, SessionSummary, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const MAX_INPUT_LEN: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const TILE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
const INPUT_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    Playing,
    /// Session has ended - summary stored in interface.summary
    GameOver,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    round: Option<&'a RoundView>,
    current_input: &'a str,
    state: TuiState,
    summary: Option<&'a SessionSummary>,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    round: Option<RoundView>,
    current_input: String,
    state: TuiState,
    summary: Option<SessionSummary>,
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
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            round: None,
            current_input: String::new(),
            state: TuiState::Playing,
            summary: None,
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
            round: self.round.as_ref(),
            current_input: &self.current_input,
            state: self.state,
            summary: self.summary.as_ref(),
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

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
                Constraint::Length(7), // Scrambled word and input
                Constraint::Min(6),    // Info panel
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx.round, ctx.current_input, ctx.state);
        Self::render_info(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("UNSCRAMBLE")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(
        f: &mut Frame,
        area: Rect,
        round: Option<&RoundView>,
        current_input: &str,
        state: TuiState,
    ) {
        let title = match round {
            Some(r) => format!("Word {} of {}", r.word_count, r.max_words),
            None => "Word".to_string(),
        };
        let block = Block::default().title(title).borders(Borders::ALL);

        let mut lines = vec![Line::from("")];
        if let Some(r) = round {
            let mut tiles = vec![Span::raw("  ")];
            for letter in r.scrambled.chars() {
                tiles.push(Span::styled(format!(" {letter} "), TILE_STYLE));
                tiles.push(Span::raw(" "));
            }
            lines.push(Line::from(tiles));
        }
        lines.push(Line::from(""));
        if state == TuiState::Playing {
            lines.push(Line::from(vec![
                Span::raw("  Your guess: "),
                Span::styled(format!("{current_input}_"), INPUT_STYLE),
            ]));
        }

        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if let Some(r) = ctx.round {
            lines.push(Line::from(vec![Span::styled(
                format!("Score: {}", r.score),
                INFO_STYLE,
            )]));
            lines.push(Line::from(""));
        }

        if let (TuiState::GameOver, Some(summary)) = (ctx.state, ctx.summary) {
            lines.push(Line::from(vec![Span::styled(
                "Congratulations!",
                SUCCESS_STYLE,
            )]));
            lines.push(Line::from(format!(
                "  You scored {} over {} of {} words.",
                summary.score, summary.words_played, summary.max_words
            )));
            lines.push(Line::from(""));
        }

        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, MESSAGE_STYLE)]));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                ctx.error_message,
                ERROR_STYLE,
            )]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::Playing => "Type your guess | ENTER: Submit | TAB: Skip | ESC: Quit",
            TuiState::GameOver => "N: Play Again | ESC: Quit",
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

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to avoid double input
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }
                debug_log!(
                    "handle_input() - Key event received: code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                Ok(match self.state {
                    TuiState::Playing => self.handle_guess_input(key),
                    TuiState::GameOver => Self::handle_game_over_input(key),
                })
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char(c) if Self::is_guess_char(c) && !Self::has_modifier_keys(&key) => {
                if self.current_input.chars().count() < MAX_INPUT_LEN {
                    self.current_input.push(c);
                    self.error_message.clear();
                }
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Enter if self.current_input.is_empty() => {
                self.error_message = "Type a word before submitting!".to_string();
                None
            }
            KeyCode::Enter => {
                let guess = std::mem::take(&mut self.current_input);
                info_log!("handle_guess_input() - Submitting guess: '{}'", guess);
                Some(UserAction::Guess(guess))
            }
            KeyCode::Tab => {
                self.current_input.clear();
                Some(UserAction::Skip)
            }
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn is_guess_char(c: char) -> bool {
        // Replacement and control characters come from escape sequences (e.g. alt-tab).
        c != '\u{FFFD}' && !c.is_control()
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }
}

impl GameInterface for TuiInterface {
    fn display_round(&mut self, round: &RoundView) {
        self.round = Some(round.clone());
        self.state = TuiState::Playing;
        self.status = format!(
            "Unscramble the word! ({} letters)",
            round.scrambled.chars().count()
        );
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_correct_guess(&mut self, score: u32) {
        self.message = format!("Correct! Score: {score}");
        self.error_message.clear();
        self.draw_or_log();
    }

    fn display_wrong_guess(&mut self, guess: &str) {
        self.message.clear();
        self.error_message = format!("Wrong word: '{guess}'. Try again!");
        self.draw_or_log();
    }

    fn display_skipped(&mut self, answer: &str) {
        self.message = format!("Skipped. The word was: {answer}");
        self.error_message.clear();
        self.draw_or_log();
    }

    fn display_session_complete(&mut self, summary: &SessionSummary) {
        self.state = TuiState::GameOver;
        self.summary = Some(summary.clone());
        self.current_input.clear();
        self.status = format!("Game Over - Final score: {}", summary.score);
        self.draw_or_log();
    }

    fn display_error(&mut self, error: &GameError) {
        self.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self) {
        self.summary = None;
        self.current_input.clear();
        self.message = "New game started.".to_string();
        self.error_message.clear();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
