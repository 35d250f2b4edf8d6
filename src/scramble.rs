use crate::debug_log;
use crate::error::GameError;
use crate::rng::GameRng;
use std::collections::HashMap;

/// Shuffles allowed before falling back to a rotation.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 16;

/// Returns true if the word has at least two distinct characters, i.e. some
/// permutation of it differs from the word itself.
pub fn can_scramble(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => chars.any(|c| c != first),
        None => false,
    }
}

/// Shuffle the characters of `word` into an arrangement that differs from it.
///
/// Reshuffles up to [`MAX_SHUFFLE_ATTEMPTS`] times, then rotates the
/// characters left by one.
pub fn scramble(word: &str, rng: &mut GameRng) -> Result<String, GameError> {
    if !can_scramble(word) {
        return Err(GameError::Unscramblable(word.to_string()));
    }

    let mut letters: Vec<char> = word.chars().collect();
    for attempt in 1..=MAX_SHUFFLE_ATTEMPTS {
        rng.shuffle(&mut letters);
        let candidate: String = letters.iter().collect();
        if candidate != word {
            debug_log!(
                "scramble() - '{}' resolved after {} shuffle(s)",
                word,
                attempt
            );
            return Ok(candidate);
        }
    }

    debug_log!("scramble() - '{}' fell back to rotation", word);
    Ok(rotate_scramble(word))
}

/// Rotate the characters left by one. Differs from the word whenever it has
/// two distinct characters.
fn rotate_scramble(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.rotate_left(1);
    letters.into_iter().collect()
}

/// True if `candidate` uses exactly the characters of `word` and is not `word`.
pub fn is_scramble_of(candidate: &str, word: &str) -> bool {
    candidate != word && char_counts(candidate) == char_counts(word)
}

fn char_counts(s: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}
