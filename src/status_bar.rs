//! Status bar: timer, attempt badge, and question nav controls

use crate::navigation::NavMark;
use crate::state::AttemptStatus;
use crate::timer::format_time;
use unicode_width::UnicodeWidthStr;

/// Below this the timer turns red
const LOW_TIME_SECS: u64 = 60;

#[derive(Clone, Debug)]
pub struct StatusBarState {
    pub remaining_secs: u64,
    pub status: AttemptStatus,
    pub nav: Vec<NavMark>,
}

impl StatusBarState {
    pub fn timer_string(&self) -> String {
        let color = if self.remaining_secs <= LOW_TIME_SECS {
            "\x1b[91m"
        } else {
            "\x1b[93m"
        };
        format!("{}⏱ Time: {}\x1b[0m", color, format_time(self.remaining_secs))
    }

    /// Badge with color coding
    pub fn badge_string(&self) -> &'static str {
        match self.status {
            AttemptStatus::InProgress => "\x1b[96m● In Progress\x1b[0m",
            AttemptStatus::Completed => "\x1b[92m✓ Completed\x1b[0m",
            AttemptStatus::Disqualified => "\x1b[41;97m ✗ Disqualified \x1b[0m",
        }
    }

    /// One bracketed control per question: active inverted, answered green/bold
    pub fn nav_string(&self) -> String {
        self.nav
            .iter()
            .enumerate()
            .map(|(i, mark)| {
                let style = match (mark.active, mark.answered) {
                    (true, true) => "\x1b[7;1;32m",
                    (true, false) => "\x1b[7m",
                    (false, true) => "\x1b[1;32m",
                    (false, false) => "\x1b[90m",
                };
                format!("{}[{}]\x1b[0m", style, i + 1)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Same layout without escape codes, used for width math
    pub fn plain_status(&self) -> String {
        let nav = (1..=self.nav.len())
            .map(|n| format!("[{}]", n))
            .collect::<Vec<_>>()
            .join(" ");
        let badge = match self.status {
            AttemptStatus::InProgress => "● In Progress".to_string(),
            AttemptStatus::Completed => "✓ Completed".to_string(),
            AttemptStatus::Disqualified => " ✗ Disqualified ".to_string(),
        };
        format!(
            "⏱ Time: {} │ {} │ {}",
            format_time(self.remaining_secs),
            badge,
            nav
        )
    }

    /// Centered status line
    pub fn render_status(&self, term_width: usize) -> String {
        let width = self.plain_status().width();
        let padding = term_width.saturating_sub(width) / 2;
        format!(
            "{}{} │ {} │ {}",
            " ".repeat(padding),
            self.timer_string(),
            self.badge_string(),
            self.nav_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(status: AttemptStatus, remaining_secs: u64) -> StatusBarState {
        StatusBarState {
            remaining_secs,
            status,
            nav: vec![
                NavMark { active: true, answered: false },
                NavMark { active: false, answered: true },
            ],
        }
    }

    #[test]
    fn test_plain_status() {
        let state = bar(AttemptStatus::InProgress, 2400);
        assert_eq!(state.plain_status(), "⏱ Time: 40:00 │ ● In Progress │ [1] [2]");
    }

    #[test]
    fn test_low_time_turns_red() {
        assert!(bar(AttemptStatus::InProgress, 30).timer_string().starts_with("\x1b[91m"));
        assert!(bar(AttemptStatus::InProgress, 300).timer_string().starts_with("\x1b[93m"));
    }

    #[test]
    fn test_nav_marks_styles() {
        let nav = bar(AttemptStatus::InProgress, 10).nav_string();
        assert!(nav.contains("\x1b[7m[1]"));
        assert!(nav.contains("\x1b[1;32m[2]"));
    }

    #[test]
    fn test_render_centers() {
        let state = bar(AttemptStatus::Completed, 10);
        let width = state.plain_status().width();
        let line = state.render_status(width + 10);
        assert!(line.starts_with(&" ".repeat(5)));
        assert!(!state.render_status(0).starts_with(' '));
        assert!(line.contains("Completed"));
    }
}
