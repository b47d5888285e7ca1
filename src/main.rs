use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use word_scramble::cli::{CliInterface, parse_cli};
use word_scramble::logging::{default_log_path, init_logging};
use word_scramble::tui::TuiInterface;
use word_scramble::{game_loop, load_dictionary, load_word_list};

fn main() -> ExitCode {
    let cli = parse_cli();

    // Full-screen mode owns the terminal, so its logs go to a file
    let log_path = cli
        .log_file
        .clone()
        .or_else(|| if cli.plain { None } else { default_log_path() });
    if let Err(e) = init_logging(log_path.as_deref()) {
        eprintln!("Failed to set up logging: {e}");
    }

    let word_list = match load_word_list(cli.wordbank_path.as_deref()) {
        Ok(list) => list,
        Err(e) => {
            log::error!("Startup failed: {e}");
            eprintln!("Could not load the word list: {e}");
            return ExitCode::FAILURE;
        }
    };
    let dictionary = match load_dictionary(cli.dictionary_path.as_deref()) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            log::error!("Startup failed: {e}");
            eprintln!("Could not load the dictionary: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Loaded {} root words and {} dictionary words",
        word_list.len(),
        dictionary.len()
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&word_list, &dictionary, &mut rng, &mut interface);
        return ExitCode::SUCCESS;
    }

    match TuiInterface::new() {
        Ok(mut interface) => {
            let session = game_loop(&word_list, &dictionary, &mut rng, &mut interface);
            drop(interface);
            println!(
                "Final score: {}",
                session.total_score() + session.round_score()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to start the terminal interface: {e}");
            eprintln!("Failed to start the terminal interface: {e} (try --plain)");
            ExitCode::FAILURE
        }
    }
}
