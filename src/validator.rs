//! Checks applied to every submitted word.
//!
//! The checks run in a fixed order and the first failure wins:
//! length/self → originality → spellable from the root → recognized word.

use crate::dictionary::{ENGLISH, WordRecognizer};
use crate::session::Session;
use thiserror::Error;

pub const MIN_WORD_LENGTH: usize = 3;

/// Why a submission was turned down. Each variant maps to an alert title and message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("Word not valid")]
    TooShortOrSame,
    #[error("Word used already")]
    AlreadyUsed,
    #[error("Word not possible")]
    NotSpellable,
    #[error("Word not recognized")]
    NotRecognizedWord,
}

impl Rejection {
    #[must_use]
    pub fn title(self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::TooShortOrSame => "Too short or the same as the given word!".to_string(),
            Self::AlreadyUsed => "Be more original!".to_string(),
            Self::NotSpellable => format!("You can't spell that word from '{root_word}'"),
            Self::NotRecognizedWord => "You can't just make them up, ya know!".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted(String),
    Rejected(Rejection),
}

impl ValidationOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

#[must_use]
pub fn normalize(candidate: &str) -> String {
    candidate.trim().to_lowercase()
}

pub fn is_long_enough_and_new(word: &str, root_word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH && word != root_word
}

pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

/// Multiset containment: each letter of `root_word` may be used at most as often
/// as it appears there.
pub fn is_possible(word: &str, root_word: &str) -> bool {
    let mut remaining: Vec<char> = root_word.chars().collect();
    for letter in word.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.swap_remove(pos);
            }
            None => return false,
        }
    }
    true
}

pub fn is_real(word: &str, recognizer: &dyn WordRecognizer) -> bool {
    recognizer.is_recognized_word(word, ENGLISH)
}

/// Runs every check against `session` without touching it. Returns the normalized
/// word on success.
pub fn validate(
    session: &Session,
    candidate: &str,
    recognizer: &dyn WordRecognizer,
) -> Result<String, Rejection> {
    let word = normalize(candidate);
    let root_word = session.root_word();

    if !is_long_enough_and_new(&word, root_word) {
        return Err(Rejection::TooShortOrSame);
    }
    if !is_original(&word, session.used_words()) {
        return Err(Rejection::AlreadyUsed);
    }
    if !is_possible(&word, root_word) {
        return Err(Rejection::NotSpellable);
    }
    if !is_real(&word, recognizer) {
        return Err(Rejection::NotRecognizedWord);
    }
    Ok(word)
}
