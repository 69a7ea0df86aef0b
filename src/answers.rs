//! Answer store
//!
//! Answers are recorded incrementally as selection events arrive, but the
//! incremental log is not trusted at submission time: `collect_all` re-reads
//! the live selection surface and overwrites every slot.

use crate::state::AttemptState;

/// Live selection state owned by the front end (one radio group per question)
pub trait SelectionSource {
    /// Currently selected option for `question`, `None` when nothing is checked
    fn selected(&self, question: usize) -> Option<usize>;
}

/// In-memory radio groups
#[derive(Debug, Clone, Default)]
pub struct Selections {
    checked: Vec<Option<usize>>,
}

impl Selections {
    pub fn new(question_count: usize) -> Self {
        Self {
            checked: vec![None; question_count],
        }
    }

    pub fn check(&mut self, question: usize, option: usize) {
        if let Some(slot) = self.checked.get_mut(question) {
            *slot = Some(option);
        }
    }

    pub fn clear(&mut self, question: usize) {
        if let Some(slot) = self.checked.get_mut(question) {
            *slot = None;
        }
    }
}

impl SelectionSource for Selections {
    fn selected(&self, question: usize) -> Option<usize> {
        self.checked.get(question).copied().flatten()
    }
}

/// Last write wins. Option indices are trusted; out-of-range questions are dropped.
pub fn record_answer(state: &mut AttemptState, question: usize, option: usize) {
    if let Some(slot) = state.answers.get_mut(question) {
        *slot = Some(option);
    }
}

/// Authoritative snapshot of the selection surface
pub fn collect_all(state: &mut AttemptState, source: &dyn SelectionSource) {
    for (question, slot) in state.answers.iter_mut().enumerate() {
        *slot = source.selected(question);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_last_write_wins() {
        let mut state = AttemptState::new(5, 60);
        record_answer(&mut state, 1, 0);
        record_answer(&mut state, 1, 3);
        assert_eq!(state.answer(1), Some(3));
        record_answer(&mut state, 9, 0);
        assert_eq!(state.answers().len(), 5);
    }

    #[test]
    fn test_collect_reflects_live_selection() {
        let mut state = AttemptState::new(5, 60);
        let mut selections = Selections::new(5);

        selections.check(2, 1);
        record_answer(&mut state, 2, 1);
        collect_all(&mut state, &selections);
        assert_eq!(state.answer(2), Some(1));

        // cleared without an answer event
        selections.clear(2);
        assert_eq!(state.answer(2), Some(1));
        collect_all(&mut state, &selections);
        assert_eq!(state.answer(2), None);
    }

    #[test]
    fn test_collect_picks_up_unrecorded_selection() {
        let mut state = AttemptState::new(5, 60);
        let mut selections = Selections::new(5);
        selections.check(4, 2);
        collect_all(&mut state, &selections);
        assert_eq!(state.answers(), &[None, None, None, None, Some(2)]);
    }
}
