use crate::timer::DEFAULT_DURATION_SECS;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "quizlock.toml";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub proctoring: ProctoringConfig,
    #[serde(default)]
    pub log: LogConfig,
}

// ============================================================================
// Timer Config
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TimerConfig {
    /// Quiz duration in seconds
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
        }
    }
}

fn default_duration_secs() -> u64 {
    DEFAULT_DURATION_SECS
}

// ============================================================================
// Proctoring Config
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ProctoringConfig {
    /// Ask the terminal to report focus changes (needed for focus-loss detection)
    #[serde(default = "default_true")]
    pub focus_events: bool,

    /// Capture the mouse so right-click and drag-selection never reach the terminal
    #[serde(default = "default_true")]
    pub mouse_capture: bool,
}

impl Default for ProctoringConfig {
    fn default() -> Self {
        Self {
            focus_events: true,
            mouse_capture: true,
        }
    }
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Log Config
// ============================================================================

#[derive(Debug, Deserialize, Default)]
pub struct LogConfig {
    /// Log file; without one, records are held back while the terminal is in raw mode
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load from `path`, falling back to defaults when missing or malformed
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text).unwrap_or_else(|e| {
                eprintln!("Warning: ignoring {} ({})", path.display(), e);
                Config::default()
            }),
            Err(e) => {
                eprintln!("Warning: could not read {} ({})", path.display(), e);
                Config::default()
            }
        }
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.timer.duration_secs, 2400);
        assert!(config.proctoring.focus_events);
        assert!(config.proctoring.mouse_capture);
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse(
            r#"
            [timer]
            duration_secs = 90

            [proctoring]
            mouse_capture = false
            "#,
        )
        .unwrap();
        assert_eq!(config.timer.duration_secs, 90);
        assert!(!config.proctoring.mouse_capture);
        assert!(config.proctoring.focus_events);
    }

    #[test]
    fn test_attempt_location_not_configurable() {
        // an [attempt] table from an older file is ignored
        let config = Config::parse(
            r#"
            [attempt]
            path = "/tmp/fresh-slot.toml"
            "#,
        )
        .unwrap();
        assert_eq!(config.timer.duration_secs, DEFAULT_DURATION_SECS);
        assert_eq!(
            crate::store::FileStore::default_location().path(),
            Path::new(crate::store::ATTEMPT_PATH)
        );
    }

    #[test]
    fn test_empty_file() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.timer.duration_secs, DEFAULT_DURATION_SECS);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load(Path::new("/nonexistent/quizlock.toml"));
        assert_eq!(config.timer.duration_secs, DEFAULT_DURATION_SECS);
    }
}
