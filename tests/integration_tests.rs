// Integration tests for the word-scramble game
// These tests verify that all modules work together correctly

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use word_scramble::cli::CliInterface;
use word_scramble::dictionary::ENGLISH;
use word_scramble::*;

/// Recognizer that accepts any word; isolates the other checks from dictionary contents.
struct AnyWord;

impl WordRecognizer for AnyWord {
    fn is_recognized_word(&self, _word: &str, language: &str) -> bool {
        language == ENGLISH
    }
}

fn silkworm_only() -> WordList {
    WordList::new(load_wordbank_from_str("silkworm\n")).unwrap()
}

fn play(input: &str, word_list: &WordList, recognizer: &dyn WordRecognizer) -> Session {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut interface = CliInterface::new(Cursor::new(input.to_string()));
    game_loop(word_list, recognizer, &mut rng, &mut interface)
}

#[test]
fn test_end_to_end_round_with_embedded_dictionary() {
    let dictionary = Dictionary::embedded_english();
    let session = play("silk\nworm\nMILK\n  owl  \n:quit\n", &silkworm_only(), &dictionary);

    assert_eq!(session.root_word(), "silkworm");
    assert_eq!(session.used_words(), ["owl", "milk", "worm", "silk"]);
    assert_eq!(session.round_score(), 4 + 4 + 4 + 3);
    assert_eq!(session.total_score(), 0);
}

#[test]
fn test_rejected_words_do_not_score() {
    let dictionary = Dictionary::embedded_english();
    // too short, the root itself, duplicate, unspellable, made up
    let input = "si\nsilkworm\nsilk\nsilk\nsillk\nwilk\n:quit\n";
    let session = play(input, &silkworm_only(), &dictionary);

    assert_eq!(session.used_words(), ["silk"]);
    assert_eq!(session.round_score(), 4);
}

#[test]
fn test_next_round_moves_score_to_total() {
    let list = WordList::new(vec!["silkworm".to_string(), "baseball".to_string()]).unwrap();
    let session = play("silk\nworm\n:next\n:next\n", &list, &AnyWord);

    assert_eq!(session.total_score(), 8);
    assert_eq!(session.round_score(), 0);
    assert!(session.used_words().is_empty());
    assert!(list.words().iter().any(|w| w == session.root_word()));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let session = play("silk\n", &silkworm_only(), &AnyWord);
    assert_eq!(session.round_score(), 4);
}

#[test]
fn test_blank_lines_are_ignored() {
    let session = play("\n\n   \nsilk\n\n:quit\n", &silkworm_only(), &AnyWord);
    assert_eq!(session.used_words(), ["silk"]);
}

#[test]
fn test_round_score_matches_used_words() {
    let input = "silk\nworms\nmilk\nlows\nrows\nwilk\nslow\n:quit\n";
    let session = play(input, &silkworm_only(), &AnyWord);

    let expected: usize = session.used_words().iter().map(|w| w.chars().count()).sum();
    assert_eq!(session.round_score(), expected);

    let mut unique = session.used_words().to_vec();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), session.used_words().len());
    assert!(session.used_words().iter().all(|w| is_possible(w, "silkworm")));
}

#[test]
fn test_custom_files_to_game() {
    use std::fs::File;
    use std::io::Write;

    let temp_dir = std::env::temp_dir();
    let wordbank_path = temp_dir.join("word_scramble_it_roots.txt");
    let dictionary_path = temp_dir.join("word_scramble_it_dictionary.txt");
    {
        let mut file = File::create(&wordbank_path).unwrap();
        writeln!(file, "Notebook").unwrap();
    }
    {
        let mut file = File::create(&dictionary_path).unwrap();
        writeln!(file, "# test words").unwrap();
        writeln!(file, "book").unwrap();
        writeln!(file, "tone").unwrap();
    }

    let list = load_word_list(Some(&wordbank_path)).unwrap();
    let dictionary = load_dictionary(Some(&dictionary_path)).unwrap();
    // "note" is spellable but missing from this dictionary
    let session = play("book\nnote\ntone\n:quit\n", &list, &dictionary);

    assert_eq!(session.root_word(), "notebook");
    assert_eq!(session.used_words(), ["tone", "book"]);
    assert_eq!(session.round_score(), 8);

    std::fs::remove_file(&wordbank_path).unwrap();
    std::fs::remove_file(&dictionary_path).unwrap();
}

#[test]
fn test_startup_fails_on_empty_word_list_file() {
    let path = std::env::temp_dir().join("word_scramble_it_empty.txt");
    std::fs::write(&path, "\n\n").unwrap();
    assert!(matches!(
        load_word_list(Some(&path)),
        Err(wordbank::WordListError::Empty)
    ));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_validate_does_not_mutate() {
    let session = Session::with_root_word("silkworm");
    assert_eq!(validate(&session, "silk", &AnyWord), Ok("silk".to_string()));
    assert!(session.used_words().is_empty());
    assert_eq!(
        validate(&session, "silkworm", &AnyWord),
        Err(Rejection::TooShortOrSame)
    );
}
