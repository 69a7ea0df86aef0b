//! One-time attempt flag
//!
//! A single slot that survives restarts. Written once at submission, read
//! once at startup by the lockout gate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const LOCKOUT_MESSAGE: &str =
    "You have already attempted this quiz. Please contact admin for reattempt.";
pub const LOCKOUT_BANNER: &str = "Quiz Already Attempted / Disqualified";

/// Fixed location of the attempt flag, relative to the working directory.
/// Not configurable; clearing it is an administrator action outside the quiz.
pub const ATTEMPT_PATH: &str = ".quizlock/attempt.toml";

/// Terminal value of an attempt. Absence of a record means "not attempted".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptFlag {
    Completed,
    Disqualified,
}

impl fmt::Display for AttemptFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptFlag::Completed => write!(f, "completed"),
            AttemptFlag::Disqualified => write!(f, "disqualified"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub status: AttemptFlag,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("attempt file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("attempt file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not encode attempt record: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Storage seam for the attempt flag
pub trait AttemptStore {
    fn load(&self) -> Result<Option<AttemptRecord>, StoreError>;

    fn record(&mut self, flag: AttemptFlag) -> Result<(), StoreError>;

    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Result of the startup gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Open,
    Locked(AttemptFlag),
}

/// Any existing record locks the quiz
pub fn check_gate(store: &dyn AttemptStore) -> Result<Gate, StoreError> {
    Ok(match store.load()? {
        Some(record) => Gate::Locked(record.status),
        None => Gate::Open,
    })
}

// ============================================================================
// File-backed store
// ============================================================================

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Self {
        Self::new(ATTEMPT_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl AttemptStore for FileStore {
    fn load(&self) -> Result<Option<AttemptRecord>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_err(e)),
        };
        toml::from_str(&text)
            .map(Some)
            .map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })
    }

    fn record(&mut self, flag: AttemptFlag) -> Result<(), StoreError> {
        let record = AttemptRecord {
            status: flag,
            recorded_at: Utc::now(),
        };
        let text = toml::to_string(&record)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }
        fs::write(&self.path, text).map_err(|e| self.io_err(e))
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_err(e)),
        }
    }
}

// ============================================================================
// In-memory store
// ============================================================================

#[derive(Debug, Default)]
pub struct MemoryStore {
    record: Option<AttemptRecord>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flag(flag: AttemptFlag) -> Self {
        Self {
            record: Some(AttemptRecord {
                status: flag,
                recorded_at: Utc::now(),
            }),
            writes: 0,
        }
    }

    pub fn flag(&self) -> Option<AttemptFlag> {
        self.record.as_ref().map(|r| r.status)
    }

    /// Number of `record` calls seen
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl AttemptStore for MemoryStore {
    fn load(&self) -> Result<Option<AttemptRecord>, StoreError> {
        Ok(self.record.clone())
    }

    fn record(&mut self, flag: AttemptFlag) -> Result<(), StoreError> {
        self.writes += 1;
        self.record = Some(AttemptRecord {
            status: flag,
            recorded_at: Utc::now(),
        });
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.record = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("quizlock-test-{}-{}", std::process::id(), name))
            .join("attempt.toml")
    }

    #[test]
    fn test_gate_open_without_record() {
        let store = MemoryStore::new();
        assert_eq!(check_gate(&store).unwrap(), Gate::Open);
    }

    #[test]
    fn test_gate_locked_by_any_flag() {
        for flag in [AttemptFlag::Completed, AttemptFlag::Disqualified] {
            let store = MemoryStore::with_flag(flag);
            assert_eq!(check_gate(&store).unwrap(), Gate::Locked(flag));
        }
    }

    #[test]
    fn test_file_store_round_trip_and_clear() {
        let path = temp_path("roundtrip");
        let mut store = FileStore::new(&path);
        assert!(store.load().unwrap().is_none());

        store.record(AttemptFlag::Disqualified).unwrap();
        let record = store.load().unwrap().unwrap();
        assert_eq!(record.status, AttemptFlag::Disqualified);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("status = \"disqualified\""));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_file_store_malformed() {
        let path = temp_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "status = \"maybe\"\n").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Malformed { .. })));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
