use crate::engine::WordGameEngine;
use crate::error::GameError;
use crate::info_log;

/// What the player asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Skip,
    NewGame,
    Exit,
}

/// State shown to the player for the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub scrambled: String,
    pub score: u32,
    pub word_count: usize,
    pub max_words: usize,
}

impl RoundView {
    #[must_use]
    pub fn from_engine(engine: &WordGameEngine) -> Self {
        Self {
            scrambled: engine.current_scrambled_word().to_string(),
            score: engine.score(),
            word_count: engine.word_count(),
            max_words: engine.max_words(),
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub words_played: usize,
    pub max_words: usize,
}

/// A front end the game loop can drive.
pub trait GameInterface {
    fn display_round(&mut self, round: &RoundView);
    /// `None` means the input was unusable and should be asked for again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_correct_guess(&mut self, score: u32);
    fn display_wrong_guess(&mut self, guess: &str);
    fn display_skipped(&mut self, answer: &str);
    fn display_session_complete(&mut self, summary: &SessionSummary);
    fn display_error(&mut self, error: &GameError);
    fn display_new_game_message(&mut self);
    fn display_exit_message(&mut self);
}

enum Progress {
    Continue,
    Finished,
}

/// Where the session stood when the player left the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitState {
    InProgress,
    Finished,
}

/// Play sessions on `engine` until the player exits.
///
/// The engine is left as it was when the player quit so the caller can
/// persist it.
pub fn game_loop<I: GameInterface>(engine: &mut WordGameEngine, interface: &mut I) -> ExitState {
    // The last word is still playable when the engine reports completion.
    let mut finished = false;
    interface.display_round(&RoundView::from_engine(engine));

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        info_log!("game_loop() - action {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                if let Err(e) = engine.reset() {
                    interface.display_error(&e);
                    return ExitState::Finished;
                }
                finished = false;
                interface.display_new_game_message();
                interface.display_round(&RoundView::from_engine(engine));
            }
            // Only a new game or exit is possible after the session ends.
            UserAction::Guess(_) | UserAction::Skip if finished => {
                interface.display_session_complete(&summary(engine));
            }
            UserAction::Guess(guess) => {
                if engine.submit_guess(&guess) {
                    interface.display_correct_guess(engine.score());
                    finished = matches!(next_round(engine, interface), Progress::Finished);
                } else {
                    interface.display_wrong_guess(&guess);
                }
            }
            UserAction::Skip => {
                interface.display_skipped(engine.current_word());
                finished = matches!(next_round(engine, interface), Progress::Finished);
            }
        }
    }

    if finished {
        ExitState::Finished
    } else {
        ExitState::InProgress
    }
}

fn next_round<I: GameInterface>(engine: &mut WordGameEngine, interface: &mut I) -> Progress {
    if !engine.has_next_word() {
        interface.display_session_complete(&summary(engine));
        return Progress::Finished;
    }
    match engine.advance_word() {
        Ok(_) => {
            interface.display_round(&RoundView::from_engine(engine));
            Progress::Continue
        }
        Err(e) => {
            interface.display_error(&e);
            interface.display_session_complete(&summary(engine));
            Progress::Finished
        }
    }
}

fn summary(engine: &WordGameEngine) -> SessionSummary {
    SessionSummary {
        score: engine.score(),
        words_played: engine.word_count(),
        max_words: engine.max_words(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineConfig;
    use crate::rng::GameRng;
    use std::collections::VecDeque;

    /// Scripted interface that records what was displayed.
    #[derive(Default)]
    struct ScriptedInterface {
        actions: VecDeque<Option<UserAction>>,
        rounds: Vec<RoundView>,
        correct: Vec<u32>,
        wrong: Vec<String>,
        skipped: Vec<String>,
        completed: Vec<SessionSummary>,
        errors: Vec<GameError>,
        new_games: usize,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            Self {
                actions: actions.into(),
                ..Self::default()
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_round(&mut self, round: &RoundView) {
            self.rounds.push(round.clone());
        }

        fn read_action(&mut self) -> Option<UserAction> {
            // Exit once the script runs dry so a broken loop cannot spin forever.
            self.actions.pop_front().unwrap_or(Some(UserAction::Exit))
        }

        fn display_correct_guess(&mut self, score: u32) {
            self.correct.push(score);
        }

        fn display_wrong_guess(&mut self, guess: &str) {
            self.wrong.push(guess.to_string());
        }

        fn display_skipped(&mut self, answer: &str) {
            self.skipped.push(answer.to_string());
        }

        fn display_session_complete(&mut self, summary: &SessionSummary) {
            self.completed.push(summary.clone());
        }

        fn display_error(&mut self, error: &GameError) {
            self.errors.push(error.clone());
        }

        fn display_new_game_message(&mut self) {
            self.new_games += 1;
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    fn engine(words: &[&str], max_words: usize) -> WordGameEngine {
        let config = EngineConfig {
            max_words,
            score_increase: 20,
        };
        let words = words.iter().map(|w| (*w).to_string()).collect();
        WordGameEngine::with_rng(words, config, GameRng::new(3)).unwrap()
    }

    #[test]
    fn test_immediate_exit() {
        let mut e = engine(&["rust", "swift"], 2);
        let mut ui = ScriptedInterface::new(vec![Some(UserAction::Exit)]);
        assert_eq!(game_loop(&mut e, &mut ui), ExitState::InProgress);
        assert!(ui.exited);
        assert_eq!(ui.rounds.len(), 1);
        assert_eq!(ui.rounds[0].word_count, 1);
    }

    #[test]
    fn test_wrong_guess_keeps_word() {
        let mut e = engine(&["rust", "swift"], 2);
        let word = e.current_word().to_string();
        let mut ui = ScriptedInterface::new(vec![
            Some(UserAction::Guess("nope".to_string())),
            Some(UserAction::Exit),
        ]);
        game_loop(&mut e, &mut ui);
        assert_eq!(ui.wrong, vec!["nope"]);
        assert_eq!(e.current_word(), word);
        assert_eq!(e.score(), 0);
        assert_eq!(e.word_count(), 1);
    }

    #[test]
    fn test_correct_guess_advances() {
        let mut e = engine(&["rust", "swift"], 2);
        let answer = e.current_word().to_string();
        let mut ui = ScriptedInterface::new(vec![
            Some(UserAction::Guess(answer)),
            Some(UserAction::Exit),
        ]);
        game_loop(&mut e, &mut ui);
        assert_eq!(ui.correct, vec![20]);
        assert_eq!(ui.rounds.len(), 2);
        assert_eq!(ui.rounds[1].word_count, 2);
        assert_eq!(ui.rounds[1].score, 20);
    }

    #[test]
    fn test_skip_to_end_of_session() {
        let mut e = engine(&["rust", "swift", "kotlin"], 2);
        let mut ui = ScriptedInterface::new(vec![
            Some(UserAction::Skip),
            Some(UserAction::Skip),
            Some(UserAction::Skip),
            Some(UserAction::Exit),
        ]);
        assert_eq!(game_loop(&mut e, &mut ui), ExitState::Finished);
        assert_eq!(ui.skipped.len(), 2);
        assert_eq!(
            ui.completed,
            vec![
                SessionSummary {
                    score: 0,
                    words_played: 2,
                    max_words: 2,
                };
                2
            ]
        );
        assert_eq!(e.word_count(), 2);
    }

    #[test]
    fn test_invalid_input_is_asked_again() {
        let mut e = engine(&["rust"], 1);
        let mut ui = ScriptedInterface::new(vec![None, None, Some(UserAction::Exit)]);
        game_loop(&mut e, &mut ui);
        assert!(ui.exited);
    }

    #[test]
    fn test_new_game_after_completion() {
        let mut e = engine(&["rust", "swift"], 1);
        let answer = e.current_word().to_string();
        let mut ui = ScriptedInterface::new(vec![
            Some(UserAction::Guess(answer)),
            Some(UserAction::NewGame),
            Some(UserAction::Exit),
        ]);
        game_loop(&mut e, &mut ui);
        assert_eq!(ui.completed.len(), 1);
        assert_eq!(ui.completed[0].score, 20);
        assert_eq!(ui.new_games, 1);
        assert_eq!(e.score(), 0);
        assert_eq!(e.word_count(), 1);
    }

    #[test]
    fn test_pool_exhausted_ends_session() {
        let mut e = engine(&["rust", "swift"], 5);
        let mut ui = ScriptedInterface::new(vec![
            Some(UserAction::Skip),
            Some(UserAction::Skip),
            Some(UserAction::Exit),
        ]);
        game_loop(&mut e, &mut ui);
        assert_eq!(ui.errors, vec![GameError::PoolExhausted { seen: 2 }]);
        assert_eq!(ui.completed.len(), 1);
        assert_eq!(e.word_count(), 2);
    }
}
