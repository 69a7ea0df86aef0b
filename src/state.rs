//! Attempt state - the single owned value every handler mutates
//!
//! One `AttemptState` exists per run. It is passed by `&mut` into the
//! dispatcher; nothing else holds on to it.

use std::fmt;

/// Status indicator shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptStatus {
    InProgress,
    Completed,
    Disqualified,
}

impl fmt::Display for AttemptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptStatus::InProgress => write!(f, "In Progress"),
            AttemptStatus::Completed => write!(f, "Completed"),
            AttemptStatus::Disqualified => write!(f, "Disqualified"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AttemptState {
    // ========================================================================
    // Navigation
    // ========================================================================
    /// Always within `0..answers.len()`
    pub(crate) current: usize,

    // ========================================================================
    // Answers
    // ========================================================================
    /// One slot per question, `None` = unanswered
    pub(crate) answers: Vec<Option<usize>>,

    // ========================================================================
    // Timer
    // ========================================================================
    pub(crate) remaining_secs: u64,

    // ========================================================================
    // Proctoring
    // ========================================================================
    pub(crate) disqualified: bool,
    pub(crate) disqualification_reason: Option<String>,

    // ========================================================================
    // Submission
    // ========================================================================
    pub(crate) submitted: bool,
}

impl AttemptState {
    pub fn new(question_count: usize, duration_secs: u64) -> Self {
        Self {
            current: 0,
            answers: vec![None; question_count],
            remaining_secs: duration_secs,
            disqualified: false,
            disqualification_reason: None,
            submitted: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn question_count(&self) -> usize {
        self.answers.len()
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_disqualified(&self) -> bool {
        self.disqualified
    }

    pub fn disqualification_reason(&self) -> Option<&str> {
        self.disqualification_reason.as_deref()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn status(&self) -> AttemptStatus {
        if !self.submitted {
            AttemptStatus::InProgress
        } else if self.disqualified {
            AttemptStatus::Disqualified
        } else {
            AttemptStatus::Completed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = AttemptState::new(5, 2400);
        assert_eq!(state.current(), 0);
        assert_eq!(state.answers(), &[None; 5]);
        assert_eq!(state.remaining_secs(), 2400);
        assert!(!state.is_disqualified());
        assert!(!state.is_submitted());
        assert_eq!(state.status(), AttemptStatus::InProgress);
    }

    #[test]
    fn test_status_after_submit() {
        let mut state = AttemptState::new(5, 10);
        state.submitted = true;
        assert_eq!(state.status(), AttemptStatus::Completed);
        state.disqualified = true;
        assert_eq!(state.status(), AttemptStatus::Disqualified);
        assert_eq!(state.status().to_string(), "Disqualified");
    }
}
