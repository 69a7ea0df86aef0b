//! Proctoring violation detection
//!
//! Watching → Disqualified is one-way. Only the first violation is recorded;
//! anything after that is a no-op here and in the submission engine.
//!
//! Key rules, on terminal key events:
//! - Ctrl/Cmd+C, Ctrl/Cmd+Insert: keyboard copy
//! - Escape, backtick: disallowed keys
//! - Ctrl/Cmd+A/S/P: prohibited shortcuts
//! - Ctrl/Cmd+Z: suspending the process hides the quiz

use crate::state::AttemptState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Clipboard copy observed outside a keyboard shortcut
    Copy,
    KeyboardCopy,
    DisallowedKey(String),
    /// Letter is stored uppercase
    ProhibitedShortcut(char),
    Hidden,
    FocusLost,
    Unload,
}

impl Violation {
    /// Disqualification reason shown in the report
    pub fn reason(&self) -> String {
        match self {
            Violation::Copy => "Copy action detected".to_string(),
            Violation::KeyboardCopy => "Keyboard copy".to_string(),
            Violation::DisallowedKey(key) => format!("Disallowed key pressed: {}", key),
            Violation::ProhibitedShortcut(c) => format!("Prohibited shortcut: Ctrl+{}", c),
            Violation::Hidden => "Tab/window hidden".to_string(),
            Violation::FocusLost => "Window lost focus".to_string(),
            Violation::Unload => "Page unload/navigation".to_string(),
        }
    }

    /// Reason passed on to the submission engine
    pub fn submit_reason(&self) -> String {
        match self {
            Violation::Copy => "Auto-submitted: Copy".to_string(),
            Violation::KeyboardCopy => "Auto-submitted: Copy shortcut".to_string(),
            Violation::DisallowedKey(key) => format!("Auto-submitted: Disallowed key ({})", key),
            Violation::ProhibitedShortcut(c) => format!("Auto-submitted: Ctrl+{}", c),
            Violation::Hidden => "Auto-submitted: Tab/window hidden".to_string(),
            Violation::FocusLost => "Auto-submitted: Window blur".to_string(),
            Violation::Unload => "Auto-submitted: Page unload".to_string(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Watching,
    Disqualified,
}

pub fn monitor_state(state: &AttemptState) -> MonitorState {
    if state.disqualified {
        MonitorState::Disqualified
    } else {
        MonitorState::Watching
    }
}

/// Record a violation. Returns true only for the first one.
pub fn mark_disqualified(state: &mut AttemptState, violation: &Violation) -> bool {
    if state.disqualified {
        return false;
    }
    state.disqualified = true;
    state.disqualification_reason = Some(violation.reason());
    log::warn!("Disqualified: {}", violation);
    true
}

fn has_command_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER)
}

/// Classify a key press. `None` means the key is allowed.
pub fn classify_key(key: &KeyEvent) -> Option<Violation> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let command = has_command_modifier(key.modifiers);

    match key.code {
        KeyCode::Char(c) if command && c.eq_ignore_ascii_case(&'c') => {
            Some(Violation::KeyboardCopy)
        }
        KeyCode::Insert if command => Some(Violation::KeyboardCopy),
        KeyCode::Esc => Some(Violation::DisallowedKey("Escape".to_string())),
        KeyCode::Char('`') => Some(Violation::DisallowedKey("`".to_string())),
        KeyCode::Char(c) if command && matches!(c.to_ascii_lowercase(), 'a' | 's' | 'p') => {
            Some(Violation::ProhibitedShortcut(c.to_ascii_uppercase()))
        }
        KeyCode::Char(c) if command && c.eq_ignore_ascii_case(&'z') => Some(Violation::Hidden),
        _ => None,
    }
}
