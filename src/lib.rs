// Library interface for unscramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod rng;
pub mod scramble;
pub mod session_store;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use engine::{EngineConfig, Round, SessionSnapshot, SessionState, WordGameEngine};
pub use error::GameError;
pub use game_state::{ExitState, game_loop};
pub use rng::GameRng;
pub use scramble::{is_scramble_of, scramble};
pub use wordbank::{EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str};
