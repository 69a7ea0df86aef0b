//! Submission engine - finalize, score, persist, report
//!
//! `submit` runs at most once per attempt. Every trigger (manual submit,
//! timer expiry, violation) funnels through it and only the first one does
//! anything.

use crate::answers::{self, SelectionSource};
use crate::questions::Question;
use crate::state::{AttemptState, AttemptStatus};
use crate::store::{AttemptFlag, AttemptStore};
use crate::timer::Timer;

pub const NOT_ANSWERED: &str = "Not Answered";
pub const USER_SUBMITTED: &str = "User submitted";
pub const TIME_IS_UP: &str = "Time is up";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// 1-based
    pub number: usize,
    pub prompt: &'static str,
    pub your_answer: Option<&'static str>,
    pub correct_answer: &'static str,
    pub is_correct: bool,
}

impl ReportRow {
    pub fn your_answer_text(&self) -> &'static str {
        self.your_answer.unwrap_or(NOT_ANSWERED)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub score: usize,
    pub reason: String,
    pub disqualification_reason: Option<String>,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn is_disqualified(&self) -> bool {
        self.disqualification_reason.is_some()
    }

    pub fn status(&self) -> AttemptStatus {
        if self.is_disqualified() {
            AttemptStatus::Disqualified
        } else {
            AttemptStatus::Completed
        }
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Total Questions: {} | Correct: {} | Incorrect: {} | Score: {}",
            self.total, self.correct, self.incorrect, self.score
        )
    }
}

/// `(correct, incorrect)`. Disqualification forces every question wrong.
pub fn tally(questions: &[Question], answers: &[Option<usize>], disqualified: bool) -> (usize, usize) {
    if disqualified {
        return (0, questions.len());
    }
    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(q, a)| q.is_correct(**a))
        .count();
    (correct, questions.len() - correct)
}

pub fn build_report(questions: &[Question], state: &AttemptState, reason: &str) -> Report {
    let disqualified = state.is_disqualified();
    let (correct, incorrect) = tally(questions, state.answers(), disqualified);

    let rows = questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let answer = state.answer(i);
            ReportRow {
                number: i + 1,
                prompt: q.prompt,
                your_answer: answer.and_then(|a| q.option(a)),
                correct_answer: q.correct_text(),
                is_correct: !disqualified && q.is_correct(answer),
            }
        })
        .collect();

    Report {
        total: questions.len(),
        correct,
        incorrect,
        score: if disqualified { 0 } else { correct },
        reason: if reason.is_empty() {
            USER_SUBMITTED.to_string()
        } else {
            reason.to_string()
        },
        disqualification_reason: disqualified
            .then(|| state.disqualification_reason().unwrap_or_default().to_string()),
        rows,
    }
}

/// Finalize the attempt. Returns `None` if it was already submitted.
///
/// A failed flag write is logged and does not block the report.
pub fn submit(
    state: &mut AttemptState,
    timer: &mut Timer,
    questions: &[Question],
    source: &dyn SelectionSource,
    store: &mut dyn AttemptStore,
    reason: &str,
) -> Option<Report> {
    if state.submitted {
        log::debug!("Submit ignored ({}): already submitted", reason);
        return None;
    }
    state.submitted = true;
    timer.stop();

    answers::collect_all(state, source);

    let flag = if state.is_disqualified() {
        AttemptFlag::Disqualified
    } else {
        AttemptFlag::Completed
    };
    if let Err(e) = store.record(flag) {
        log::error!("Failed to persist attempt flag: {}", e);
    }

    let report = build_report(questions, state, reason);
    log::info!(
        "Submitted ({}): {} correct, {} incorrect, score {}",
        report.reason,
        report.correct,
        report.incorrect,
        report.score
    );
    Some(report)
}
