//! Terminal input → quiz commands
//!
//! `Controls` owns the live radio groups (the selection surface the
//! submission engine re-reads) plus purely visual state: option highlight,
//! confirmation prompt and report scroll. It never touches `AttemptState`;
//! everything that changes the attempt goes out as a `QuizEvent`.
//!
//! Keys:
//! - `1`..`n`: jump to question
//! - Left/Right or `h`/`l`: previous/next question
//! - Up/Down or `k`/`j`: move option highlight
//! - Space/Enter: select highlighted option, `a`..`d`: select directly
//! - Backspace/Delete: clear selection
//! - `s`: submit (asks first), `q`: leave (asks first, disqualifies)

use crate::answers::{SelectionSource, Selections};
use crate::monitor::{self, Violation};
use crate::navigation;
use crate::quiz::QuizEvent;
use crate::submission::USER_SUBMITTED;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(QuizEvent),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    None,
    ConfirmSubmit,
    ConfirmLeave,
}

impl Prompt {
    pub fn text(&self) -> Option<&'static str> {
        match self {
            Prompt::None => None,
            Prompt::ConfirmSubmit => Some("Submit Quiz? (y/n)"),
            Prompt::ConfirmLeave => {
                Some("Leaving now disqualifies this attempt. Are you sure? (y/n)")
            }
        }
    }
}

/// Snapshot of what the quiz currently shows
#[derive(Debug, Clone, Copy)]
pub struct View {
    pub current: usize,
    pub question_count: usize,
    pub option_count: usize,
    pub submitted: bool,
}

pub struct Controls {
    selections: Selections,
    highlight: Vec<usize>,
    prompt: Prompt,
    report_scroll: usize,
}

impl Controls {
    pub fn new(question_count: usize) -> Self {
        Self {
            selections: Selections::new(question_count),
            highlight: vec![0; question_count],
            prompt: Prompt::None,
            report_scroll: 0,
        }
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn highlight(&self, question: usize) -> usize {
        self.highlight.get(question).copied().unwrap_or(0)
    }

    pub fn prompt(&self) -> Prompt {
        self.prompt
    }

    pub fn report_scroll(&self) -> usize {
        self.report_scroll
    }

    pub fn handle(&mut self, event: &Event, view: View) -> Vec<Command> {
        if view.submitted {
            return self.handle_report(event);
        }
        match event {
            Event::FocusLost => vec![Command::Dispatch(QuizEvent::Violation(Violation::FocusLost))],
            Event::Key(key) => self.handle_key(key, view),
            // Mouse is captured only to swallow right-click and drag-selection
            Event::Mouse(_) => Vec::new(),
            _ => Vec::new(),
        }
    }

    fn handle_report(&mut self, event: &Event) -> Vec<Command> {
        let Event::Key(key) = event else {
            return Vec::new();
        };
        if key.kind == KeyEventKind::Release {
            return Vec::new();
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char('q') => vec![Command::Exit],
            KeyCode::Up | KeyCode::Char('k') => {
                self.report_scroll = self.report_scroll.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.report_scroll += 1;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, view: View) -> Vec<Command> {
        if key.kind == KeyEventKind::Release {
            return Vec::new();
        }

        // Violations win over everything, including an open prompt
        if let Some(violation) = monitor::classify_key(key) {
            self.prompt = Prompt::None;
            return vec![Command::Dispatch(QuizEvent::Violation(violation))];
        }

        match self.prompt {
            Prompt::None => self.handle_quiz_key(key, view),
            prompt => {
                self.prompt = Prompt::None;
                let confirmed = matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'));
                match (prompt, confirmed) {
                    (Prompt::ConfirmSubmit, true) => {
                        vec![Command::Dispatch(QuizEvent::Submit(USER_SUBMITTED.to_string()))]
                    }
                    (Prompt::ConfirmLeave, true) => {
                        vec![Command::Dispatch(QuizEvent::Violation(Violation::Unload))]
                    }
                    _ => Vec::new(),
                }
            }
        }
    }

    fn handle_quiz_key(&mut self, key: &KeyEvent, view: View) -> Vec<Command> {
        let current = view.current;
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                match navigation::digit_target(c, view.question_count) {
                    Some(index) => vec![Command::Dispatch(QuizEvent::Navigate(index))],
                    None => Vec::new(),
                }
            }
            KeyCode::Left | KeyCode::Char('h') => vec![Command::Dispatch(QuizEvent::Prev)],
            KeyCode::Right | KeyCode::Char('l') => vec![Command::Dispatch(QuizEvent::Next)],
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(h) = self.highlight.get_mut(current) {
                    *h = h.saturating_sub(1);
                }
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(h) = self.highlight.get_mut(current) {
                    *h = (*h + 1).min(view.option_count.saturating_sub(1));
                }
                Vec::new()
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let option = self.highlight(current);
                self.select(current, option)
            }
            KeyCode::Char(c @ 'a'..='z') if ((c as u8 - b'a') as usize) < view.option_count => {
                self.select(current, (c as u8 - b'a') as usize)
            }
            KeyCode::Backspace | KeyCode::Delete => {
                // Radio groups never emit a change event when cleared
                self.selections.clear(current);
                Vec::new()
            }
            KeyCode::Char('s') => {
                self.prompt = Prompt::ConfirmSubmit;
                Vec::new()
            }
            KeyCode::Char('q') => {
                self.prompt = Prompt::ConfirmLeave;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn select(&mut self, question: usize, option: usize) -> Vec<Command> {
        self.selections.check(question, option);
        if let Some(h) = self.highlight.get_mut(question) {
            *h = option;
        }
        vec![Command::Dispatch(QuizEvent::Answer { question, option })]
    }

    /// Whether `option` is the checked one for `question`
    pub fn is_checked(&self, question: usize, option: usize) -> bool {
        self.selections.selected(question) == Some(option)
    }
}
