//! TUI (Terminal User Interface) module for Word Scramble
//!
//! Full-screen interface built on Ratatui and Crossterm.
//!
//! # Layout
//! Root word title, word input, the words found this round (most recent first) with
//! the round score, the total score, a status line and key help.
//!
//! # State Machine
//! - `EnteringWord`: typing a word. `ENTER` submits, `CTRL-N` plays again, `ESC` quits.
//! - `ShowingAlert`: a rejected word is explained in a modal alert. `ENTER` or `ESC`
//!   dismisses it and returns to `EnteringWord` with the input kept for editing.

use crate::game_state::{GameInterface, UserAction};
use crate::session::Session;
use crate::validator::ValidationOutcome;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::io;

const MAX_INPUT_LENGTH: usize = 24;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ALERT_WIDTH: u16 = 50;
const ALERT_HEIGHT: u16 = 7;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ROOT_WORD_STYLE: Style = Style::new()
    .fg(Color::Magenta)
    .add_modifier(Modifier::BOLD);
const TOTAL_STYLE: Style = Style::new()
    .fg(Color::Magenta)
    .bg(Color::Rgb(255, 165, 0))
    .add_modifier(Modifier::BOLD);
const BADGE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);
const ALERT_TITLE_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

#[derive(Debug, Clone, PartialEq)]
enum TuiState {
    EnteringWord,
    ShowingAlert { title: String, message: String },
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    root_word: &'a str,
    used_words: &'a [String],
    round_score: usize,
    total_score: usize,
    current_input: &'a str,
    state: &'a TuiState,
    status: &'a str,
}

/// Everything the screen shows, plus the key handling that changes it.
///
/// Holds no terminal, so the game's input rules can be exercised directly.
#[derive(Debug)]
pub struct InputState {
    root_word: String,
    used_words: Vec<String>,
    round_score: usize,
    total_score: usize,
    current_input: String,
    state: TuiState,
    status: String,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root_word: String::new(),
            used_words: Vec::new(),
            round_score: 0,
            total_score: 0,
            current_input: String::new(),
            state: TuiState::EnteringWord,
            status: "Ready".to_string(),
        }
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Title and message of the open alert, if any.
    #[must_use]
    pub fn alert(&self) -> Option<(&str, &str)> {
        match &self.state {
            TuiState::ShowingAlert { title, message } => Some((title.as_str(), message.as_str())),
            TuiState::EnteringWord => None,
        }
    }

    fn sync_session(&mut self, session: &Session) {
        self.root_word = session.root_word().to_string();
        self.used_words = session.used_words().to_vec();
        self.round_score = session.round_score();
        self.total_score = session.total_score();
    }

    pub fn start_round(&mut self, session: &Session) {
        self.sync_session(session);
        self.current_input.clear();
        self.state = TuiState::EnteringWord;
        self.status = format!("New root word: {}", session.root_word());
    }

    /// Accepted words clear the input; rejected ones stay for editing behind an alert.
    pub fn apply_outcome(&mut self, outcome: &ValidationOutcome, session: &Session) {
        self.sync_session(session);
        match outcome {
            ValidationOutcome::Accepted(word) => {
                self.current_input.clear();
                self.status = format!("{} accepted (+{})", word, word.chars().count());
            }
            ValidationOutcome::Rejected(rejection) => {
                self.state = TuiState::ShowingAlert {
                    title: rejection.title(),
                    message: rejection.message(session.root_word()),
                };
                self.status = rejection.title();
            }
        }
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        debug_log!(
            "handle_key() - Key event received: code={:?}, modifiers={:?}",
            key.code,
            key.modifiers
        );
        match self.state {
            TuiState::EnteringWord => self.handle_word_input(key),
            TuiState::ShowingAlert { .. } => {
                self.handle_alert_input(key);
                None
            }
        }
    }

    fn handle_word_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if matches!(key.code, KeyCode::Char('n' | 'N')) {
                info_log!("handle_word_input() - CTRL-N pressed, starting new round");
                return Some(UserAction::NewRound);
            }
            return None;
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            return None;
        }

        match key.code {
            KeyCode::Char(c)
                if c.is_alphabetic() && self.current_input.chars().count() < MAX_INPUT_LENGTH =>
            {
                self.current_input.push(c);
            }
            KeyCode::Char(c) if !c.is_alphabetic() => {
                self.status = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter => {
                // Empty input is submitted too and comes back as "Word not valid"
                info_log!("handle_word_input() - Submitting '{}'", self.current_input);
                return Some(UserAction::Submit(self.current_input.clone()));
            }
            KeyCode::Esc => {
                info_log!("handle_word_input() - ESC pressed, returning Exit");
                return Some(UserAction::Exit);
            }
            _ => {}
        }
        None
    }

    fn handle_alert_input(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.state = TuiState::EnteringWord;
            self.status = "Try another word".to_string();
        }
    }
}

/// Main TUI interface component.
///
/// Owns the terminal and renders an [`InputState`]; the game loop owns the session.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    input: InputState,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        // Self never exists if setup fails, so Drop cannot restore the terminal
        let terminal = setup_or_restore(Self::setup_terminal, || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        })?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            input: InputState::new(),
        })
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let input = &self.input;
        let ctx = RenderContext {
            root_word: &input.root_word,
            used_words: &input.used_words,
            round_score: input.round_score,
            total_score: input.total_score,
            current_input: &input.current_input,
            state: &input.state,
            status: &input.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Root word
                Constraint::Length(3), // Input
                Constraint::Min(6),    // Used words
                Constraint::Length(3), // Total score
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.root_word);
        Self::render_input(f, chunks[1], ctx.current_input, ctx.state);
        Self::render_used_words(
            f,
            chunks[2],
            ctx.used_words,
            ctx.root_word,
            ctx.round_score,
        );
        Self::render_total(f, chunks[3], ctx.total_score);
        Self::render_status(f, chunks[4], ctx.status);
        Self::render_instructions(f, chunks[5], ctx.state);

        if let TuiState::ShowingAlert { title, message } = ctx.state {
            Self::render_alert(f, title, message);
        }
    }

    fn render_title(f: &mut Frame, area: Rect, root_word: &str) {
        let title = Paragraph::new(root_word.to_uppercase())
            .style(ROOT_WORD_STYLE)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("WORD SCRAMBLE"));
        f.render_widget(title, area);
    }

    fn render_input(f: &mut Frame, area: Rect, current_input: &str, state: &TuiState) {
        let cursor_mark = if *state == TuiState::EnteringWord { "_" } else { "" };
        let paragraph = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(current_input, Style::default().fg(Color::White)),
            Span::styled(cursor_mark, Style::default().fg(Color::Gray)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Make a different word from the above word"),
        );
        f.render_widget(paragraph, area);
    }

    fn render_used_words(
        f: &mut Frame,
        area: Rect,
        used_words: &[String],
        root_word: &str,
        round_score: usize,
    ) {
        let block = Block::default().title("Your words").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        // Last row is reserved for the round score
        let visible = usize::from(inner.height.saturating_sub(1));
        let mut lines: Vec<Line> = used_words
            .iter()
            .take(visible)
            .map(|word| {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!(" {} ", word.chars().count()), BADGE_STYLE),
                    Span::raw(" "),
                    Span::raw(word.to_uppercase()),
                ])
            })
            .collect();
        if used_words.len() > visible && visible > 0 {
            lines.pop();
            lines.push(Line::from(format!(
                "  ... and {} more",
                used_words.len() - visible + 1
            )));
        }

        let list = Paragraph::new(lines);
        f.render_widget(
            list,
            Rect {
                height: inner.height.saturating_sub(1),
                ..inner
            },
        );

        if inner.height > 0 {
            let score = Paragraph::new(Line::from(Span::styled(
                format!("Your score for {root_word} is {round_score}"),
                SUCCESS_STYLE,
            )));
            f.render_widget(
                score,
                Rect {
                    y: inner.y + inner.height - 1,
                    height: 1,
                    ..inner
                },
            );
        }
    }

    fn render_total(f: &mut Frame, area: Rect, total_score: usize) {
        let paragraph = Paragraph::new(format!("Your total score is {total_score}"))
            .style(TOTAL_STYLE)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::EnteringWord => {
                "Type a word | ENTER: Submit | CTRL-N: Play again | ESC: Quit"
            }
            TuiState::ShowingAlert { .. } => "ENTER / ESC: OK",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_alert(f: &mut Frame, title: &str, message: &str) {
        let area = centered_rect(ALERT_WIDTH, ALERT_HEIGHT, f.area());
        let lines = vec![
            Line::from(Span::styled(title, ALERT_TITLE_STYLE)),
            Line::from(""),
            Line::from(message),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            // Only process Press events, ignore Release and Repeat to avoid double input
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(self.input.handle_key(key))
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

/// Runs `setup`, calling `restore` before handing back its error.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    setup().inspect_err(|e| {
        debug_log!("Terminal setup failed: {}", e);
        restore();
    })
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl GameInterface for TuiInterface {
    fn display_round(&mut self, session: &Session) {
        self.input.start_round(session);
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Error handling input: {}", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_outcome(&mut self, outcome: &ValidationOutcome, session: &Session) {
        self.input.apply_outcome(outcome, session);
        self.draw_or_log();
    }

    fn display_exit_message(&mut self, session: &Session) {
        self.input.sync_session(session);
        self.input.set_status("Exiting...");
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, ENGLISH};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word(input: &mut InputState, word: &str) {
        for c in word.chars() {
            assert_eq!(input.handle_key(key(KeyCode::Char(c))), None);
        }
    }

    fn started() -> (InputState, Session, Dictionary) {
        let session = Session::with_root_word("silkworm");
        let mut input = InputState::new();
        input.start_round(&session);
        (input, session, Dictionary::new(ENGLISH, ["silk", "worm"]))
    }

    #[test]
    fn test_enter_submits_typed_word() {
        let (mut input, _, _) = started();
        type_word(&mut input, "Silk");
        assert_eq!(input.current_input(), "Silk");
        assert_eq!(
            input.handle_key(key(KeyCode::Enter)),
            Some(UserAction::Submit("Silk".to_string()))
        );
    }

    #[test]
    fn test_backspace_and_non_letters() {
        let (mut input, _, _) = started();
        type_word(&mut input, "silks");
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.handle_key(key(KeyCode::Char('3'))), None);
        assert_eq!(input.current_input(), "silk");
        assert!(input.status().contains("Only letters"));
    }

    #[test]
    fn test_empty_enter_is_submitted() {
        let (mut input, _, _) = started();
        assert_eq!(
            input.handle_key(key(KeyCode::Enter)),
            Some(UserAction::Submit(String::new()))
        );
    }

    #[test]
    fn test_input_cleared_after_acceptance() {
        let (mut input, mut session, dict) = started();
        type_word(&mut input, "silk");
        let outcome = session.submit(input.current_input(), &dict);
        input.apply_outcome(&outcome, &session);
        assert_eq!(input.current_input(), "");
        assert_eq!(input.alert(), None);
        assert_eq!(input.round_score, 4);
        assert_eq!(input.used_words, vec!["silk"]);
    }

    #[test]
    fn test_rejection_opens_alert_and_keeps_input() {
        let (mut input, mut session, dict) = started();
        type_word(&mut input, "sillk");
        let outcome = session.submit(input.current_input(), &dict);
        input.apply_outcome(&outcome, &session);

        assert_eq!(input.current_input(), "sillk");
        assert_eq!(
            input.alert(),
            Some(("Word not possible", "You can't spell that word from 'silkworm'"))
        );

        // Typing does nothing while the alert is open
        assert_eq!(input.handle_key(key(KeyCode::Char('x'))), None);
        assert_eq!(input.current_input(), "sillk");
    }

    #[test]
    fn test_alert_dismissed_with_enter_or_esc() {
        for dismiss in [KeyCode::Enter, KeyCode::Esc] {
            let (mut input, mut session, dict) = started();
            let outcome = session.submit("si", &dict);
            input.apply_outcome(&outcome, &session);
            assert_eq!(input.alert().map(|(title, _)| title), Some("Word not valid"));

            // Dismissing must not quit or submit
            assert_eq!(input.handle_key(key(dismiss)), None);
            assert_eq!(input.alert(), None);

            type_word(&mut input, "k");
            assert_eq!(input.current_input(), "k");
        }
    }

    #[test]
    fn test_ctrl_n_starts_new_round() {
        let (mut input, _, _) = started();
        type_word(&mut input, "wor");
        assert_eq!(
            input.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(UserAction::NewRound)
        );
        // Ctrl with anything else is ignored
        assert_eq!(
            input.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(input.current_input(), "wor");

        input.start_round(&Session::with_root_word("baseball"));
        assert_eq!(input.current_input(), "");
        assert_eq!(input.root_word, "baseball");
    }

    #[test]
    fn test_esc_exits_while_entering() {
        let (mut input, _, _) = started();
        assert_eq!(input.handle_key(key(KeyCode::Esc)), Some(UserAction::Exit));
    }

    #[test]
    fn test_failed_setup_restores_terminal() {
        let mut restored = false;
        let result: io::Result<()> = setup_or_restore(
            || Err(io::Error::other("no terminal")),
            || restored = true,
        );
        assert!(result.is_err());
        assert!(restored);
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let mut restored = false;
        let result = setup_or_restore(|| Ok(5), || restored = true);
        assert_eq!(result.unwrap(), 5);
        assert!(!restored);
    }

    #[test]
    fn test_centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(ALERT_WIDTH, ALERT_HEIGHT, area);
        assert_eq!(rect.width, ALERT_WIDTH);
        assert_eq!(rect.height, ALERT_HEIGHT);
        assert_eq!(rect.x, 15);
        assert_eq!(rect.y, 8);
    }

    #[test]
    fn test_centered_rect_clamps_to_small_area() {
        let area = Rect::new(2, 1, 20, 4);
        let rect = centered_rect(ALERT_WIDTH, ALERT_HEIGHT, area);
        assert_eq!(rect, Rect::new(2, 1, 20, 4));
    }
}
