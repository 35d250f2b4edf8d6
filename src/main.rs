use std::io;
use std::process::ExitCode;
use unscramble::cli::{Cli, CliInterface, parse_cli};
use unscramble::error::AppError;
use unscramble::session_store::{
    clear_snapshot, get_log_path, get_session_path, read_snapshot, write_snapshot,
};
use unscramble::tui::TuiInterface;
use unscramble::wordbank::{EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str};
use unscramble::{ExitState, GameRng, WordGameEngine, game_loop, logging};

fn main() -> ExitCode {
    let cli = parse_cli();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let log_path = match &cli.log_file {
        Some(path) => Some(path.clone()),
        None if cli.tui => get_log_path(),
        None => None,
    };
    logging::init(log_path.as_deref())?;

    let words = match &cli.wordbank_path {
        Some(path) => load_wordbank_from_file(path).map_err(|source| AppError::WordBank {
            path: path.clone(),
            source,
        })?,
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    log::info!("Loaded {} words", words.len());

    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let session_path = get_session_path();
    let mut engine = build_engine(cli, words, rng, session_path.as_deref())?;

    let exit_state = if cli.tui {
        let mut interface = TuiInterface::new()?;
        game_loop(&mut engine, &mut interface)
    } else {
        println!("Unscramble! Guess the word behind the scrambled letters.");
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut engine, &mut interface)
    };

    if let Some(path) = &session_path {
        match exit_state {
            ExitState::InProgress => write_snapshot(path, &engine.snapshot())?,
            ExitState::Finished => clear_snapshot(path)?,
        }
    }
    Ok(())
}

fn build_engine(
    cli: &Cli,
    words: Vec<String>,
    rng: GameRng,
    session_path: Option<&std::path::Path>,
) -> Result<WordGameEngine, AppError> {
    let config = cli.engine_config();
    if cli.resume
        && let Some(path) = session_path
        && let Some(snapshot) = read_snapshot(path)?
    {
        match WordGameEngine::from_snapshot(words.clone(), config, snapshot, rng.clone()) {
            Ok(engine) => return Ok(engine),
            Err(e) => {
                log::warn!("Discarding saved session: {e}");
                eprintln!("Could not resume the saved session ({e}). Starting a new game.");
            }
        }
    }
    Ok(WordGameEngine::with_rng(words, config, rng)?)
}
