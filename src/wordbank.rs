use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

/// Keep a trimmed line as a word unless it is blank, a `#` comment, or a repeat.
fn accept_line(line: &str, seen: &mut HashSet<String>) -> Option<String> {
    let word = line.trim();
    if word.is_empty() || word.starts_with('#') || !seen.insert(word.to_string()) {
        return None;
    }
    Some(word.to_string())
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    data.lines()
        .filter_map(|line| accept_line(line, &mut seen))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = accept_line(&line?, &mut seen) {
            words.push(word);
        }
    }
    Ok(words)
}
