//! Terminal UI with proper cursor management and synchronized updates

use crate::config::ProctoringConfig;
use crate::input::Controls;
use crate::quiz::Quiz;
use crate::report::report_lines;
use crate::status_bar::StatusBarState;
use crate::store::AttemptStore;
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue, style::Print};
use std::io::{self, Write, stdout};

const TITLE: &str = "\x1b[1m📝 Proctored Quiz\x1b[0m";
const HINTS: &str =
    "\x1b[90m1-5 jump · ←/→ prev/next · ↑/↓ + Space or a-d answer · Del clear · s submit\x1b[0m";
const REPORT_HINTS: &str = "\x1b[90m↑/↓ scroll · Enter or q to close\x1b[0m";

pub struct Tui {
    focus_events: bool,
    mouse_capture: bool,
    restored: bool,
}

impl Tui {
    pub fn new(proctoring: &ProctoringConfig) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        if proctoring.focus_events {
            execute!(out, EnableFocusChange)?;
        }
        if proctoring.mouse_capture {
            execute!(out, EnableMouseCapture)?;
        }
        Ok(Self {
            focus_events: proctoring.focus_events,
            mouse_capture: proctoring.mouse_capture,
            restored: false,
        })
    }

    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        let mut out = stdout();
        if self.mouse_capture {
            execute!(out, DisableMouseCapture)?;
        }
        if self.focus_events {
            execute!(out, DisableFocusChange)?;
        }
        execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    /// Redraw the whole screen from the current quiz and control state
    pub fn draw<S: AttemptStore>(&mut self, quiz: &Quiz<S>, controls: &Controls) -> io::Result<()> {
        let (width, height) = terminal::size()
            .map(|(w, h)| (w as usize, h as usize))
            .unwrap_or((80, 24));

        let bar = StatusBarState {
            remaining_secs: quiz.state().remaining_secs(),
            status: quiz.status(),
            nav: quiz.nav_marks(controls.selections()),
        };

        let mut lines = vec![TITLE.to_string(), bar.render_status(width), String::new()];
        match quiz.report() {
            Some(report) => {
                let body = report_lines(report);
                let room = height.saturating_sub(lines.len() + 2).max(1);
                let max_scroll = body.len().saturating_sub(room);
                let scroll = controls.report_scroll().min(max_scroll);
                lines.extend(body.into_iter().skip(scroll).take(room));
                lines.push(String::new());
                lines.push(REPORT_HINTS.to_string());
            }
            None => {
                lines.extend(question_lines(quiz, controls));
                lines.push(String::new());
                match controls.prompt().text() {
                    Some(prompt) => lines.push(format!("\x1b[1;93m{}\x1b[0m", prompt)),
                    None => lines.push(HINTS.to_string()),
                }
            }
        }

        let mut out = stdout();
        queue!(
            out,
            terminal::BeginSynchronizedUpdate,
            cursor::MoveTo(0, 0),
            terminal::Clear(ClearType::All)
        )?;
        for line in &lines {
            queue!(out, Print(line), Print("\r\n"))?;
        }
        queue!(out, terminal::EndSynchronizedUpdate)?;
        out.flush()
    }
}

fn question_lines<S: AttemptStore>(quiz: &Quiz<S>, controls: &Controls) -> Vec<String> {
    let current = quiz.state().current();
    let question = quiz.current_question();
    let mut lines = vec![format!("\x1b[1mQ{}. {}\x1b[0m", current + 1, question.prompt), String::new()];

    for (i, option) in question.options.iter().enumerate() {
        let pointer = if controls.highlight(current) == i { "\x1b[96m›\x1b[0m" } else { " " };
        let radio = if controls.is_checked(current, i) {
            "\x1b[92m(•)\x1b[0m"
        } else {
            "( )"
        };
        let letter = (b'a' + i as u8) as char;
        lines.push(format!(" {} {} {}. {}", pointer, radio, letter, option));
    }
    lines
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
