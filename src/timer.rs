//! Quiz countdown
//!
//! The countdown itself lives in `AttemptState::remaining_secs`; this type only
//! tracks whether ticks are still being accepted. The one-second cadence is
//! driven from outside (see the main loop), which keeps this unit clock-free.

use crate::state::AttemptState;

pub const DEFAULT_DURATION_SECS: u64 = 40 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer not running, tick dropped
    Idle,
    Running { remaining_secs: u64 },
    Expired,
}

#[derive(Debug, Default)]
pub struct Timer {
    running: bool,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Consume one second. Stops itself on reaching zero.
    pub fn tick(&mut self, state: &mut AttemptState) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        state.remaining_secs = state.remaining_secs.saturating_sub(1);
        if state.remaining_secs == 0 {
            self.running = false;
            TickOutcome::Expired
        } else {
            TickOutcome::Running {
                remaining_secs: state.remaining_secs,
            }
        }
    }
}

/// `MM:SS`, minutes are not wrapped into hours
pub fn format_time(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(2400), "40:00");
        assert_eq!(format_time(61), "01:01");
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(6000), "100:00");
    }

    #[test]
    fn test_tick_counts_down_and_expires() {
        let mut state = AttemptState::new(5, 3);
        let mut timer = Timer::new();
        assert_eq!(timer.tick(&mut state), TickOutcome::Idle);
        assert_eq!(state.remaining_secs(), 3);

        timer.start();
        assert_eq!(
            timer.tick(&mut state),
            TickOutcome::Running { remaining_secs: 2 }
        );
        assert_eq!(
            timer.tick(&mut state),
            TickOutcome::Running { remaining_secs: 1 }
        );
        assert_eq!(timer.tick(&mut state), TickOutcome::Expired);
        assert!(!timer.is_running());
        assert_eq!(timer.tick(&mut state), TickOutcome::Idle);
        assert_eq!(state.remaining_secs(), 0);
    }

    #[test]
    fn test_stopped_timer_ignores_ticks() {
        let mut state = AttemptState::new(5, 10);
        let mut timer = Timer::new();
        timer.start();
        timer.tick(&mut state);
        timer.stop();
        assert_eq!(timer.tick(&mut state), TickOutcome::Idle);
        assert_eq!(state.remaining_secs(), 9);
    }
}
