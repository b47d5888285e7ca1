use crate::dictionary::WordRecognizer;
use crate::validator::{ValidationOutcome, normalize, validate};
use crate::wordbank::WordList;
use rand::Rng;
use rand::seq::SliceRandom;

/// Root word used when the word list yields no selection.
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// State of the game in progress: the current root word, the words found for it
/// (most recent first) and the scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root_word: String,
    used_words: Vec<String>,
    round_score: usize,
    total_score: usize,
}

impl Session {
    /// Creates a session and starts its first round.
    pub fn new<R: Rng + ?Sized>(word_list: &WordList, rng: &mut R) -> Self {
        let mut session = Self::with_root_word(DEFAULT_ROOT_WORD);
        session.start_round(word_list, rng);
        session
    }

    /// Creates a session on a fixed root word, normalized like submitted words.
    #[must_use]
    pub fn with_root_word(root_word: &str) -> Self {
        Self {
            root_word: normalize(root_word),
            used_words: Vec::new(),
            round_score: 0,
            total_score: 0,
        }
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub fn round_score(&self) -> usize {
        self.round_score
    }

    #[must_use]
    pub fn total_score(&self) -> usize {
        self.total_score
    }

    /// Picks a new root word and banks the current round's score.
    pub fn start_round<R: Rng + ?Sized>(&mut self, word_list: &WordList, rng: &mut R) {
        self.root_word = word_list
            .words()
            .choose(rng)
            .map_or_else(|| DEFAULT_ROOT_WORD.to_string(), Clone::clone);
        self.total_score += self.round_score;
        self.round_score = 0;
        self.used_words.clear();
        log::debug!(
            "Started round with root word '{}' (total score {})",
            self.root_word,
            self.total_score
        );
    }

    /// Validates `candidate` and records it when every check passes. A rejected
    /// candidate leaves the session untouched.
    pub fn submit(&mut self, candidate: &str, recognizer: &dyn WordRecognizer) -> ValidationOutcome {
        match validate(self, candidate, recognizer) {
            Ok(word) => {
                self.round_score += word.chars().count();
                self.used_words.insert(0, word.clone());
                log::debug!("Accepted '{}', round score {}", word, self.round_score);
                ValidationOutcome::Accepted(word)
            }
            Err(rejection) => {
                log::debug!("Rejected '{}': {:?}", candidate.trim(), rejection);
                ValidationOutcome::Rejected(rejection)
            }
        }
    }
}
