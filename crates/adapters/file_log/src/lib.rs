//! # wardsim-adapter-file-log
//!
//! File-backed implementation of [`EventLog`]: one UTF-8 text line per
//! event, appended to a single file. No header, no rotation, no size
//! bound. The file is opened and closed on every append, so each write is
//! independently durable once it returns.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use wardsim_domain::error::WardSimError;
use wardsim_domain::event::Event;
use wardsim_domain::log::EventLog;

pub mod error;

use error::LogFileError;

/// Append-only event log stored in a plain text file.
pub struct FileEventLog {
    path: PathBuf,
}

impl FileEventLog {
    /// Create a log writing to `path`. The file is created lazily on the
    /// first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this log appends to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl EventLog for FileEventLog {
    fn append(&self, event: &Event) -> Result<(), WardSimError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(LogFileError::Open)?;
        writeln!(file, "{event}").map_err(LogFileError::Write)?;
        Ok(())
    }
}
