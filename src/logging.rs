//! Logger setup
//!
//! The quiz owns the terminal in raw mode, so log records never go straight
//! to stderr while it runs. They go to the configured file, or are held in
//! memory and written out once the terminal has been restored.

use crate::config::LogConfig;
use anyhow::Context;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct HeldWriter(Arc<Mutex<Vec<u8>>>);

impl Write for HeldWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut held) = self.0.lock() {
            held.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Handle to records held back during the session
pub struct LogHandle {
    held: Option<HeldWriter>,
}

impl LogHandle {
    /// Write held records to stderr. Call after the terminal is restored.
    pub fn flush_held(&self) {
        let _ = self.drain_into(&mut io::stderr());
    }

    /// Move held records into `out`, leaving the buffer empty
    fn drain_into(&self, out: &mut dyn Write) -> io::Result<()> {
        let Some(held) = &self.held else {
            return Ok(());
        };
        if let Ok(mut buf) = held.0.lock() {
            out.write_all(&buf)?;
            buf.clear();
        }
        Ok(())
    }
}

pub fn init(config: &LogConfig) -> anyhow::Result<LogHandle> {
    let (mut builder, handle) = configure(config)?;
    builder.try_init().context("initializing logger")?;
    Ok(handle)
}

fn configure(config: &LogConfig) -> anyhow::Result<(env_logger::Builder, LogHandle)> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    let handle = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            LogHandle { held: None }
        }
        None => {
            let held = HeldWriter::default();
            builder.target(env_logger::Target::Pipe(Box::new(held.clone())));
            LogHandle { held: Some(held) }
        }
    };

    Ok((builder, handle))
}
