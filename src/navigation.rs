//! Question navigation
//!
//! Exactly one question is visible at a time. Nav controls carry two marks:
//! `active` for the visible question and `answered` for a checked radio in
//! the live selection surface.

use crate::answers::SelectionSource;
use crate::state::AttemptState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavMark {
    pub active: bool,
    pub answered: bool,
}

/// Show question `index`. Returns false (and changes nothing) when out of range.
pub fn goto(state: &mut AttemptState, index: usize) -> bool {
    if index >= state.question_count() {
        return false;
    }
    state.current = index;
    true
}

pub fn next(state: &mut AttemptState) -> bool {
    let target = state.current + 1;
    goto(state, target)
}

pub fn prev(state: &mut AttemptState) -> bool {
    match state.current.checked_sub(1) {
        Some(target) => goto(state, target),
        None => false,
    }
}

/// Map a digit key to a question index (`'1'` is the first question)
pub fn digit_target(c: char, question_count: usize) -> Option<usize> {
    let n = c.to_digit(10)? as usize;
    (1..=question_count).contains(&n).then(|| n - 1)
}

pub fn is_visible(state: &AttemptState, index: usize) -> bool {
    index == state.current
}

/// Marks for every nav control, recomputed from scratch each call.
/// `answered` tracks what `collect_all` would score, not the incremental log.
pub fn nav_marks(state: &AttemptState, source: &dyn SelectionSource) -> Vec<NavMark> {
    (0..state.question_count())
        .map(|i| NavMark {
            active: i == state.current,
            answered: source.selected(i).is_some(),
        })
        .collect()
}
