use crate::session_store::StoreError;
use std::io;
use thiserror::Error;

/// Errors raised by the game engine and the scrambler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("session complete: all {max_words} words have been played")]
    SessionComplete { max_words: usize },

    #[error("word pool exhausted: all {seen} words have already been served")]
    PoolExhausted { seen: usize },

    #[error("'{0}' cannot be scrambled into a different word")]
    Unscramblable(String),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Errors that stop the application before or after a game.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load word list from '{path}': {source}")]
    WordBank { path: String, source: io::Error },

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
