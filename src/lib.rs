// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod game_state;
pub mod logging;
pub mod session;
pub mod tui;
pub mod validator;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use dictionary::{Dictionary, WordRecognizer, load_dictionary};
pub use game_state::{GameInterface, UserAction, game_loop};
pub use session::{DEFAULT_ROOT_WORD, Session};
pub use validator::{Rejection, ValidationOutcome, is_original, is_possible, validate};
pub use wordbank::{WordList, load_wordbank_from_file, load_wordbank_from_str, load_word_list};
