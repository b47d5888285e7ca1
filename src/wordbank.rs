use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/start.txt");

const APP_DIR: &str = "word-scramble";
const WORDBANK_FILE: &str = "start.txt";

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("word list contains no words")]
    Empty,
}

/// Candidate root words for the game. Never empty.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize_line(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    (!word.is_empty()).then_some(word)
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_line).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let io_error = |source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_line(&line.map_err(io_error)?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Per-user word list override, e.g. `~/.config/word-scramble/start.txt`.
#[must_use]
pub fn get_user_wordbank_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(WORDBANK_FILE))
}

/// Picks the word list source: an explicit path, then the per-user file if present,
/// then the embedded list.
pub fn load_word_list(explicit_path: Option<&Path>) -> Result<WordList, WordListError> {
    let words = match explicit_path {
        Some(path) => {
            log::info!("Loading word list from {}", path.display());
            load_wordbank_from_file(path)?
        }
        None => match get_user_wordbank_path().filter(|p| p.is_file()) {
            Some(path) => {
                log::info!("Loading user word list from {}", path.display());
                load_wordbank_from_file(&path)?
            }
            None => load_wordbank_from_str(EMBEDDED_WORDBANK),
        },
    };
    WordList::new(words)
}
