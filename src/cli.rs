use crate::game_state::{GameInterface, UserAction};
use crate::session::Session;
use crate::validator::ValidationOutcome;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Word Scramble: make as many words as you can from the root word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Path to a newline-delimited dictionary of accepted words
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Use the line-based interface instead of the full-screen one
    #[arg(long)]
    pub plain: bool,

    /// Seed for root word selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write logs (defaults to the user cache dir in full-screen mode)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const NEXT_COMMAND: &str = ":next";
const QUIT_COMMANDS: [&str; 2] = [":quit", ":exit"];

pub enum LineInput {
    Word(String),
    Exit,
    NewRound,
}

fn parse_line(line: &str) -> LineInput {
    // Blank entries are still submitted so the player sees why they were refused
    let input = line.trim();
    let lowered = input.to_lowercase();
    if lowered == NEXT_COMMAND {
        LineInput::NewRound
    } else if QUIT_COMMANDS.contains(&lowered.as_str()) {
        LineInput::Exit
    } else {
        LineInput::Word(input.to_string())
    }
}

pub fn read_line_input<R: BufRead>(reader: &mut R) -> LineInput {
    println!("\nEnter a word (':next' for a new root word, ':quit' to exit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => LineInput::Exit,
        Ok(_) => parse_line(&input),
        Err(e) => {
            log::warn!("Failed to read input: {e}");
            LineInput::Exit
        }
    }
}

pub fn display_round(session: &Session) {
    println!("\n=== {} ===", session.root_word().to_uppercase());
    println!("Make a different word from the above word.");
    println!("Your total score is {}", session.total_score());
}

pub fn display_used_words(session: &Session) {
    for word in session.used_words() {
        println!("  ({}) {}", word.chars().count(), word.to_uppercase());
    }
    println!(
        "Your score for {} is {}",
        session.root_word(),
        session.round_score()
    );
}

pub fn display_outcome(outcome: &ValidationOutcome, session: &Session) {
    match outcome {
        ValidationOutcome::Accepted(word) => {
            println!("Accepted: {word} (+{})", word.chars().count());
            display_used_words(session);
        }
        ValidationOutcome::Rejected(rejection) => {
            println!("{}: {}", rejection.title(), rejection.message(session.root_word()));
        }
    }
}

pub fn display_exit_message(session: &Session) {
    println!(
        "Exiting. Final score: {}",
        session.total_score() + session.round_score()
    );
}

/// Line-based implementation of [`GameInterface`] over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round(&mut self, session: &Session) {
        display_round(session);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match read_line_input(&mut self.reader) {
            LineInput::Word(word) => Some(UserAction::Submit(word)),
            LineInput::NewRound => Some(UserAction::NewRound),
            LineInput::Exit => Some(UserAction::Exit),
        }
    }

    fn display_outcome(&mut self, outcome: &ValidationOutcome, session: &Session) {
        display_outcome(outcome, session);
    }

    fn display_exit_message(&mut self, session: &Session) {
        display_exit_message(session);
    }
}
