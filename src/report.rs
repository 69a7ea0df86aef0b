//! Result report layout

use crate::submission::Report;

const RULE: &str = "────────────────────────────────────────";

/// Styled report lines, top to bottom
pub fn report_lines(report: &Report) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(reason) = &report.disqualification_reason {
        lines.push(
            "\x1b[1;91mDisqualified — Score: 0\x1b[0m   \x1b[41;97m DISQUALIFIED \x1b[0m"
                .to_string(),
        );
        lines.push(format!("\x1b[90mReason: {}\x1b[0m", reason));
        lines.push(RULE.to_string());
    }

    lines.push("\x1b[1mQuiz Result\x1b[0m".to_string());
    lines.push(format!("Reason: {}", report.reason));
    lines.push(format!("\x1b[1m{}\x1b[0m", report.summary_line()));
    lines.push(RULE.to_string());

    for row in &report.rows {
        let (color, mark) = if row.is_correct {
            ("\x1b[32m", "✓")
        } else {
            ("\x1b[31m", "✗")
        };
        lines.push(format!("{}{} Q{}:\x1b[0m {}", color, mark, row.number, row.prompt));
        lines.push(format!("    Your Answer: {}", row.your_answer_text()));
        lines.push(format!("    Correct Answer: {}", row.correct_answer));
        lines.push(String::new());
    }

    lines
}

/// Short uncolored recap printed after the terminal is restored
pub fn plain_summary(report: &Report) -> String {
    let mut out = format!("{}\n", report.status());
    if let Some(reason) = &report.disqualification_reason {
        out.push_str(&format!("Disqualified: {}\n", reason));
    }
    out.push_str(&format!("Reason: {}\n", report.reason));
    out.push_str(&report.summary_line());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::QUESTIONS;
    use crate::state::AttemptState;
    use crate::submission::build_report;

    #[test]
    fn test_completed_layout() {
        let state = AttemptState::new(5, 60);
        let report = build_report(&QUESTIONS, &state, "Time is up");
        let lines = report_lines(&report);
        assert!(lines[0].contains("Quiz Result"));
        assert_eq!(lines[1], "Reason: Time is up");
        assert!(lines.iter().any(|l| l.contains("Your Answer: Not Answered")));
        assert_eq!(lines.len(), 4 + 4 * QUESTIONS.len());
    }

    #[test]
    fn test_disqualified_header_first() {
        let mut state = AttemptState::new(5, 60);
        state.disqualified = true;
        state.disqualification_reason = Some("Keyboard copy".into());
        let report = build_report(&QUESTIONS, &state, "Auto-submitted: Copy shortcut");
        let lines = report_lines(&report);
        assert!(lines[0].contains("Disqualified — Score: 0"));
        assert!(lines[1].contains("Reason: Keyboard copy"));
        assert!(lines.iter().filter(|l| l.contains("✓")).count() == 0);

        let summary = plain_summary(&report);
        assert!(summary.starts_with("Disqualified\n"));
        assert!(summary.contains("Score: 0"));
    }
}
