//! Timed multiple-choice quiz with proctoring and a one-time attempt lock
//!
//! The whole attempt is one state machine driven by [`quiz::QuizEvent`]s.
//! The terminal front end (`tui`, `input`) and the binary only translate
//! terminal events, signals and clock ticks into those events.

pub mod answers;
pub mod config;
pub mod input;
pub mod logging;
pub mod monitor;
pub mod navigation;
pub mod questions;
pub mod quiz;
pub mod report;
pub mod state;
pub mod status_bar;
pub mod store;
pub mod submission;
pub mod timer;
pub mod tui;
