use crate::dictionary::WordRecognizer;
use crate::session::Session;
use crate::validator::ValidationOutcome;
use crate::wordbank::WordList;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    NewRound,
    Exit,
}

/// Presentation layer driven by [`game_loop`].
pub trait GameInterface {
    /// Shows the session at the start of a round.
    fn display_round(&mut self, session: &Session);
    /// Blocks for the next action. `None` means the input was unusable and the loop
    /// should ask again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_outcome(&mut self, outcome: &ValidationOutcome, session: &Session);
    fn display_exit_message(&mut self, session: &Session);
}

/// Runs rounds until the interface asks to exit. Returns the final session.
pub fn game_loop<R, I>(
    word_list: &WordList,
    recognizer: &dyn WordRecognizer,
    rng: &mut R,
    interface: &mut I,
) -> Session
where
    R: Rng + ?Sized,
    I: GameInterface + ?Sized,
{
    let mut session = Session::new(word_list, rng);
    log::info!(
        "Game started with {} root words, first root '{}'",
        word_list.len(),
        session.root_word()
    );
    interface.display_round(&session);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        match action {
            UserAction::Exit => {
                interface.display_exit_message(&session);
                break;
            }
            UserAction::NewRound => {
                session.start_round(word_list, rng);
                interface.display_round(&session);
            }
            UserAction::Submit(candidate) => {
                let outcome = session.submit(&candidate, recognizer);
                interface.display_outcome(&outcome, &session);
            }
        }
    }

    log::info!(
        "Game over: total score {} plus {} this round",
        session.total_score(),
        session.round_score()
    );
    session
}
