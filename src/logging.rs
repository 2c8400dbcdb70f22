//! File logger for the interactive binary.
//!
//! The terminal is in raw mode on the alternate screen while playing, so log
//! lines go to a file instead. Nothing is installed unless a path is
//! configured, and then every `log` macro in the workspace ends up there.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

pub struct FileLogger {
    level: LevelFilter,
    started: Instant,
    out: Mutex<BufWriter<File>>,
}

impl FileLogger {
    /// Open (or create) `path` for appending.
    pub fn open(path: &Path, level: LevelFilter) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("can't open log file {}", path.display()))?;
        Ok(Self {
            level,
            started: Instant::now(),
            out: Mutex::new(BufWriter::new(file)),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.started.elapsed();
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        // Write errors are dropped.
        let _ = writeln!(
            out,
            "[{:>5}.{:03}] {:<5} {}: {}",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.flush();
        }
    }
}

/// Install a [`FileLogger`] writing to `path` as the global logger.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let logger = FileLogger::open(path, level)?;
    log::set_boxed_logger(Box::new(logger)).context("a logger is already installed")?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn writes_enabled_records_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dungeon.log");
        let logger = FileLogger::open(&path, LevelFilter::Info).unwrap();

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("dungeon")
                .args(format_args!("The door opens"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("dungeon")
                .args(format_args!("hidden"))
                .build(),
        );
        logger.flush();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("INFO  dungeon: The door opens"), "{}", text);
        assert!(!text.contains("hidden"));
    }

    #[test]
    fn open_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("dungeon.log");
        assert!(FileLogger::open(&path, LevelFilter::Info).is_err());
    }
}
