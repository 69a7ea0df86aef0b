//! Event dispatcher
//!
//! Every input the quiz reacts to is a `QuizEvent`. `Quiz::handle` is the
//! only transition function; it runs each event to completion before the
//! next one is looked at.

use crate::answers::{self, SelectionSource};
use crate::monitor::{self, Violation};
use crate::navigation::{self, NavMark};
use crate::questions::Question;
use crate::state::{AttemptState, AttemptStatus};
use crate::store::AttemptStore;
use crate::submission::{self, Report, TIME_IS_UP};
use crate::timer::{TickOutcome, Timer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    Navigate(usize),
    Next,
    Prev,
    Answer { question: usize, option: usize },
    Violation(Violation),
    TimerTick,
    Submit(String),
}

/// What a handled event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Ignored,
    Changed,
    Submitted,
}

pub struct Quiz<S: AttemptStore> {
    questions: &'static [Question],
    state: AttemptState,
    timer: Timer,
    store: S,
    report: Option<Report>,
}

impl<S: AttemptStore> Quiz<S> {
    pub fn new(questions: &'static [Question], duration_secs: u64, store: S) -> Self {
        Self {
            questions,
            state: AttemptState::new(questions.len(), duration_secs),
            timer: Timer::new(),
            store,
            report: None,
        }
    }

    /// Show the first question and start the countdown
    pub fn start(&mut self) {
        navigation::goto(&mut self.state, 0);
        self.timer.start();
        log::info!(
            "Quiz started: {} questions, {}s",
            self.questions.len(),
            self.state.remaining_secs()
        );
    }

    pub fn handle(&mut self, event: QuizEvent, source: &dyn SelectionSource) -> Transition {
        if self.state.is_submitted() {
            return Transition::Ignored;
        }

        match event {
            QuizEvent::Navigate(index) => changed(navigation::goto(&mut self.state, index)),
            QuizEvent::Next => changed(navigation::next(&mut self.state)),
            QuizEvent::Prev => changed(navigation::prev(&mut self.state)),
            QuizEvent::Answer { question, option } => {
                answers::record_answer(&mut self.state, question, option);
                Transition::Changed
            }
            QuizEvent::Violation(violation) => {
                if !monitor::mark_disqualified(&mut self.state, &violation) {
                    return Transition::Ignored;
                }
                self.submit(&violation.submit_reason(), source)
            }
            QuizEvent::TimerTick => match self.timer.tick(&mut self.state) {
                TickOutcome::Idle => Transition::Ignored,
                TickOutcome::Running { .. } => Transition::Changed,
                TickOutcome::Expired => self.submit(TIME_IS_UP, source),
            },
            QuizEvent::Submit(reason) => self.submit(&reason, source),
        }
    }

    fn submit(&mut self, reason: &str, source: &dyn SelectionSource) -> Transition {
        match submission::submit(
            &mut self.state,
            &mut self.timer,
            self.questions,
            source,
            &mut self.store,
            reason,
        ) {
            Some(report) => {
                self.report = Some(report);
                Transition::Submitted
            }
            None => Transition::Ignored,
        }
    }

    pub fn state(&self) -> &AttemptState {
        &self.state
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn current_question(&self) -> &'static Question {
        &self.questions[self.state.current()]
    }

    pub fn status(&self) -> AttemptStatus {
        self.state.status()
    }

    pub fn nav_marks(&self, source: &dyn SelectionSource) -> Vec<NavMark> {
        navigation::nav_marks(&self.state, source)
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn changed(moved: bool) -> Transition {
    if moved {
        Transition::Changed
    } else {
        Transition::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Selections;
    use crate::questions::QUESTIONS;
    use crate::store::{AttemptFlag, MemoryStore};

    fn quiz() -> (Quiz<MemoryStore>, Selections) {
        let mut quiz = Quiz::new(&QUESTIONS, 2400, MemoryStore::new());
        quiz.start();
        (quiz, Selections::new(QUESTIONS.len()))
    }

    #[test]
    fn test_navigation_events() {
        let (mut quiz, sel) = quiz();
        assert_eq!(quiz.handle(QuizEvent::Prev, &sel), Transition::Ignored);
        assert_eq!(quiz.handle(QuizEvent::Navigate(4), &sel), Transition::Changed);
        assert_eq!(quiz.handle(QuizEvent::Next, &sel), Transition::Ignored);
        assert_eq!(quiz.handle(QuizEvent::Navigate(7), &sel), Transition::Ignored);
        assert_eq!(quiz.state().current(), 4);
        assert_eq!(quiz.current_question().correct_text(), "Computer Vision");
    }

    #[test]
    fn test_answer_marks_nav() {
        let (mut quiz, mut sel) = quiz();
        sel.check(1, 2);
        quiz.handle(QuizEvent::Answer { question: 1, option: 2 }, &sel);
        let marks = quiz.nav_marks(&sel);
        assert!(marks[1].answered);
        assert!(!marks[0].answered);
        assert!(marks[0].active);
    }

    #[test]
    fn test_tick_updates_remaining() {
        let (mut quiz, sel) = quiz();
        assert_eq!(quiz.handle(QuizEvent::TimerTick, &sel), Transition::Changed);
        assert_eq!(quiz.state().remaining_secs(), 2399);
    }

    #[test]
    fn test_violation_after_submit_is_noop() {
        let (mut quiz, sel) = quiz();
        assert_eq!(
            quiz.handle(QuizEvent::Submit("User submitted".into()), &sel),
            Transition::Submitted
        );
        assert_eq!(
            quiz.handle(QuizEvent::Violation(Violation::FocusLost), &sel),
            Transition::Ignored
        );
        assert!(!quiz.state().is_disqualified());
        assert_eq!(quiz.status(), AttemptStatus::Completed);
        assert_eq!(quiz.store().flag(), Some(AttemptFlag::Completed));
    }

    #[test]
    fn test_events_after_submit_are_ignored() {
        let (mut quiz, sel) = quiz();
        quiz.handle(QuizEvent::Submit("User submitted".into()), &sel);
        assert_eq!(quiz.handle(QuizEvent::Navigate(2), &sel), Transition::Ignored);
        assert_eq!(quiz.handle(QuizEvent::TimerTick, &sel), Transition::Ignored);
        assert_eq!(quiz.state().current(), 0);
        assert_eq!(quiz.state().remaining_secs(), 2400);
    }
}
