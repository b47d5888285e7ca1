//! Word recognition.
//!
//! The game only needs a yes/no answer to "is this a real word". That answer comes
//! from a [`WordRecognizer`], so the validation code can be driven by a plain word set,
//! a system spell checker or a test stub alike.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const ENGLISH: &str = "en";

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

pub trait WordRecognizer {
    /// Returns true if `word` is spelled correctly in `language`.
    fn is_recognized_word(&self, word: &str, language: &str) -> bool;
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("could not read dictionary '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// A set of known words for a single language.
#[derive(Debug, Clone)]
pub struct Dictionary {
    language: String,
    words: HashSet<String>,
}

fn parse_entry(line: &str) -> Option<String> {
    let entry = line.trim();
    if entry.is_empty() || entry.starts_with('#') {
        return None;
    }
    Some(entry.to_lowercase())
}

impl Dictionary {
    pub fn new<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            language: language.to_string(),
            words: words
                .into_iter()
                .filter_map(|w| parse_entry(w.as_ref()))
                .collect(),
        }
    }

    #[must_use]
    pub fn from_text(language: &str, data: &str) -> Self {
        Self::new(language, data.lines())
    }

    pub fn from_file<P: AsRef<Path>>(language: &str, path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let io_error = |source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        };
        let reader = BufReader::new(File::open(path).map_err(io_error)?);
        let mut words = HashSet::new();
        for line in reader.lines() {
            if let Some(word) = parse_entry(&line.map_err(io_error)?) {
                words.insert(word);
            }
        }
        Ok(Self {
            language: language.to_string(),
            words,
        })
    }

    #[must_use]
    pub fn embedded_english() -> Self {
        Self::from_text(ENGLISH, EMBEDDED_DICTIONARY)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
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

impl WordRecognizer for Dictionary {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        language == self.language && self.words.contains(word)
    }
}

/// Loads the dictionary from `path` when given, otherwise the embedded English list.
pub fn load_dictionary(path: Option<&Path>) -> Result<Dictionary, DictionaryError> {
    match path {
        Some(path) => {
            log::info!("Loading dictionary from {}", path.display());
            Dictionary::from_file(ENGLISH, path)
        }
        None => Ok(Dictionary::embedded_english()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_known_words() {
        let dict = Dictionary::from_text(ENGLISH, "silk\nworm\nMilk\n");
        assert!(dict.is_recognized_word("silk", ENGLISH));
        assert!(dict.is_recognized_word("milk", ENGLISH));
        assert!(!dict.is_recognized_word("slik", ENGLISH));
    }

    #[test]
    fn test_other_language_not_recognized() {
        let dict = Dictionary::from_text(ENGLISH, "silk\n");
        assert!(!dict.is_recognized_word("silk", "fr"));
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let dict = Dictionary::from_text(ENGLISH, "# header\n\n  owl  \n");
        assert_eq!(dict.len(), 1);
        assert!(dict.is_recognized_word("owl", ENGLISH));
    }

    #[test]
    fn test_embedded_dictionary_covers_sample_round() {
        let dict = Dictionary::embedded_english();
        assert_eq!(dict.language(), ENGLISH);
        for word in ["silk", "worm", "milk", "work", "owl"] {
            assert!(dict.is_recognized_word(word, ENGLISH), "{word} missing");
        }
    }

    #[test]
    fn test_missing_dictionary_file_is_error() {
        let path = std::env::temp_dir().join("word_scramble_missing_dictionary.txt");
        let _ = std::fs::remove_file(&path);
        let message = load_dictionary(Some(&path)).unwrap_err().to_string();
        assert!(message.contains("word_scramble_missing_dictionary.txt"), "{message}");
    }
}
