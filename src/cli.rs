use clap::Parser;
use crate::engine::{EngineConfig, MAX_NO_OF_WORDS, SCORE_INCREASE};
use crate::error::GameError;
use crate::game_state::{GameInterface, RoundView, SessionSummary, UserAction};
use std::io::BufRead;
use std::path::PathBuf;

/// Unscramble the word game
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Play in the terminal UI instead of line mode
    #[arg(long)]
    pub tui: bool,

    /// Seed for word selection and scrambling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Words per session
    #[arg(long, default_value_t = MAX_NO_OF_WORDS)]
    pub max_words: usize,

    /// Points for each correct guess
    #[arg(long, default_value_t = SCORE_INCREASE)]
    pub score_increase: u32,

    /// Continue the session saved when the game last exited
    #[arg(long)]
    pub resume: bool,

    /// Write logs to this file (TUI mode logs to the data directory by default)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            max_words: self.max_words,
            score_increase: self.score_increase,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

const SKIP_COMMAND: &str = ":skip";
const NEW_GAME_COMMAND: &str = ":new";
const EXIT_COMMAND: &str = ":exit";

/// Turn one input line into an action. Only the line ending is stripped
/// because guesses are compared exactly.
fn parse_action(line: &str) -> Option<UserAction> {
    let line = line.trim_end_matches(['\n', '\r']);
    match line {
        SKIP_COMMAND => Some(UserAction::Skip),
        NEW_GAME_COMMAND => Some(UserAction::NewGame),
        EXIT_COMMAND => Some(UserAction::Exit),
        "" => {
            println!(
                "Please enter a guess, or {SKIP_COMMAND}, {NEW_GAME_COMMAND}, {EXIT_COMMAND}."
            );
            None
        }
        guess => Some(UserAction::Guess(guess.to_string())),
    }
}

pub fn read_action<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!(
        "\nYour guess ({SKIP_COMMAND} skip, {NEW_GAME_COMMAND} new game, {EXIT_COMMAND} quit):"
    );
    let mut input = String::new();
    match reader.read_line(&mut input) {
        // End of input behaves like quitting.
        Ok(0) => Some(UserAction::Exit),
        Ok(_) => parse_action(&input),
        Err(e) => {
            println!("Could not read input: {e}");
            Some(UserAction::Exit)
        }
    }
}

pub fn display_round(round: &RoundView) {
    println!(
        "\nWord {} of {}   Score: {}",
        round.word_count, round.max_words, round.score
    );
    println!("Unscramble: {}", round.scrambled);
}

pub fn display_correct_guess(score: u32) {
    println!("Correct! Score: {score}");
}

pub fn display_wrong_guess(guess: &str) {
    println!("Wrong word: '{guess}'. Try again!");
}

pub fn display_skipped(answer: &str) {
    println!("Skipped. The word was: {answer}");
}

pub fn display_session_complete(summary: &SessionSummary) {
    println!("\nCongratulations!");
    println!(
        "You scored {} over {} of {} words.",
        summary.score, summary.words_played, summary.max_words
    );
    println!("Type '{NEW_GAME_COMMAND}' to play again or '{EXIT_COMMAND}' to quit.");
}

pub fn display_error(error: &GameError) {
    println!("Error: {error}");
}

pub fn display_new_game_message() {
    println!("New game started.");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round(&mut self, round: &RoundView) {
        display_round(round);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        read_action(&mut self.reader)
    }

    fn display_correct_guess(&mut self, score: u32) {
        display_correct_guess(score);
    }

    fn display_wrong_guess(&mut self, guess: &str) {
        display_wrong_guess(guess);
    }

    fn display_skipped(&mut self, answer: &str) {
        display_skipped(answer);
    }

    fn display_session_complete(&mut self, summary: &SessionSummary) {
        display_session_complete(summary);
    }

    fn display_error(&mut self, error: &GameError) {
        display_error(error);
    }

    fn display_new_game_message(&mut self) {
        display_new_game_message();
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
