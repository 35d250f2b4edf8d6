//! Word selection, scrambling and bounded-session tracking.
//!
//! # State Machine
//! - `InProgress` while `word_count < max_words`
//! - `Complete` once `word_count == max_words`, until [`WordGameEngine::reset`]
//!
//! Only [`WordGameEngine::advance_word`] moves the word count forward and
//! only a correct [`WordGameEngine::submit_guess`] changes the score.

use crate::error::GameError;
use crate::rng::GameRng;
use crate::scramble::{can_scramble, is_scramble_of, scramble};
use crate::{debug_log, info_log};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MAX_NO_OF_WORDS: usize = 10;
pub const SCORE_INCREASE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub max_words: usize,
    pub score_increase: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_words: MAX_NO_OF_WORDS,
            score_increase: SCORE_INCREASE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Complete,
}

/// A served word and its scrambled form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub word: String,
    pub scrambled: String,
}

/// The primitive state tuple a host persists between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub score: u32,
    pub word_count: usize,
    pub current_word: String,
    pub current_scrambled_word: String,
    #[serde(default)]
    pub seen_words: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct WordGameEngine {
    words: Vec<String>,
    seen_words: HashSet<String>,
    current_word: String,
    current_scrambled_word: String,
    score: u32,
    word_count: usize,
    config: EngineConfig,
    rng: GameRng,
}

impl WordGameEngine {
    /// Start a session seeded from the operating system.
    pub fn new(words: Vec<String>, config: EngineConfig) -> Result<Self, GameError> {
        Self::with_rng(words, config, GameRng::from_entropy())
    }

    /// Start a session and serve the first word.
    pub fn with_rng(
        words: Vec<String>,
        config: EngineConfig,
        rng: GameRng,
    ) -> Result<Self, GameError> {
        validate_config(&words, config)?;
        info_log!(
            "WordGameEngine::with_rng() - {} words, max {} per session, seed {}",
            words.len(),
            config.max_words,
            rng.seed()
        );
        let mut engine = Self {
            words,
            seen_words: HashSet::new(),
            current_word: String::new(),
            current_scrambled_word: String::new(),
            score: 0,
            word_count: 0,
            config,
            rng,
        };
        engine.advance_word()?;
        Ok(engine)
    }

    /// Rebuild a session from a saved snapshot without selecting a new word.
    pub fn from_snapshot(
        words: Vec<String>,
        config: EngineConfig,
        snapshot: SessionSnapshot,
        rng: GameRng,
    ) -> Result<Self, GameError> {
        validate_config(&words, config)?;
        if snapshot.word_count == 0 || snapshot.word_count > config.max_words {
            return Err(GameError::InvalidSnapshot(format!(
                "word count {} outside 1..={}",
                snapshot.word_count, config.max_words
            )));
        }
        if !is_scramble_of(&snapshot.current_scrambled_word, &snapshot.current_word) {
            return Err(GameError::InvalidSnapshot(format!(
                "'{}' is not a scramble of '{}'",
                snapshot.current_scrambled_word, snapshot.current_word
            )));
        }

        let mut seen_words: HashSet<String> = snapshot.seen_words.into_iter().collect();
        seen_words.insert(snapshot.current_word.clone());
        if seen_words.len() > snapshot.word_count {
            return Err(GameError::InvalidSnapshot(format!(
                "{} words seen but only {} served",
                seen_words.len(),
                snapshot.word_count
            )));
        }
        if !words.contains(&snapshot.current_word) {
            warn!(
                "from_snapshot() - current word '{}' is not in the word pool",
                snapshot.current_word
            );
        }
        info_log!(
            "WordGameEngine::from_snapshot() - restored word {}/{}, score {}",
            snapshot.word_count,
            config.max_words,
            snapshot.score
        );

        Ok(Self {
            words,
            seen_words,
            current_word: snapshot.current_word,
            current_scrambled_word: snapshot.current_scrambled_word,
            score: snapshot.score,
            word_count: snapshot.word_count,
            config,
            rng,
        })
    }

    /// Serve the next unseen word.
    ///
    /// Leaves the state untouched on `SessionComplete` and `PoolExhausted`.
    pub fn advance_word(&mut self) -> Result<Round, GameError> {
        if self.is_session_complete() {
            return Err(GameError::SessionComplete {
                max_words: self.config.max_words,
            });
        }

        let unseen: Vec<&String> = self
            .words
            .iter()
            .filter(|w| !self.seen_words.contains(*w))
            .collect();
        let Some(&word) = self.rng.choose(&unseen) else {
            return Err(GameError::PoolExhausted {
                seen: self.seen_words.len(),
            });
        };
        let word = word.clone();
        let scrambled = scramble(&word, &mut self.rng)?;

        self.seen_words.insert(word.clone());
        self.word_count += 1;
        self.current_word.clone_from(&word);
        self.current_scrambled_word.clone_from(&scrambled);
        debug_log!(
            "advance_word() - word {}/{}: '{}' -> '{}'",
            self.word_count,
            self.config.max_words,
            word,
            scrambled
        );

        Ok(Round { word, scrambled })
    }

    /// Compare `guess` to the current word exactly. A match adds to the score,
    /// which saturates at `u32::MAX`.
    pub fn submit_guess(&mut self, guess: &str) -> bool {
        if guess == self.current_word {
            self.score = self.score.saturating_add(self.config.score_increase);
            debug_log!("submit_guess() - correct, score now {}", self.score);
            true
        } else {
            debug_log!("submit_guess() - '{}' is wrong", guess);
            false
        }
    }

    /// Start over with the same pool and configuration.
    pub fn reset(&mut self) -> Result<Round, GameError> {
        info_log!("WordGameEngine::reset() - starting a new session");
        self.score = 0;
        self.word_count = 0;
        self.seen_words.clear();
        self.advance_word()
    }

    #[must_use]
    pub fn current_scrambled_word(&self) -> &str {
        &self.current_scrambled_word
    }

    /// The unscrambled answer for the current round.
    #[must_use]
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub fn max_words(&self) -> usize {
        self.config.max_words
    }

    #[must_use]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    #[must_use]
    pub fn has_next_word(&self) -> bool {
        self.word_count < self.config.max_words
    }

    #[must_use]
    pub fn is_session_complete(&self) -> bool {
        self.word_count >= self.config.max_words
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.is_session_complete() {
            SessionState::Complete
        } else {
            SessionState::InProgress
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut seen_words: Vec<String> = self.seen_words.iter().cloned().collect();
        seen_words.sort();
        SessionSnapshot {
            score: self.score,
            word_count: self.word_count,
            current_word: self.current_word.clone(),
            current_scrambled_word: self.current_scrambled_word.clone(),
            seen_words,
        }
    }
}

fn validate_config(words: &[String], config: EngineConfig) -> Result<(), GameError> {
    if words.is_empty() {
        return Err(GameError::InvalidConfiguration(
            "word pool is empty".to_string(),
        ));
    }
    if config.max_words == 0 {
        return Err(GameError::InvalidConfiguration(
            "max words per session must be at least 1".to_string(),
        ));
    }
    if let Some(word) = words.iter().find(|w| !can_scramble(w)) {
        return Err(GameError::InvalidConfiguration(format!(
            "'{word}' needs at least two distinct letters"
        )));
    }
    Ok(())
}
