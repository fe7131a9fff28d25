//! File-sink error type wrapping IO errors.

use wardsim_domain::error::WardSimError;

/// Errors originating from the file-backed event log.
#[derive(Debug, thiserror::Error)]
pub enum LogFileError {
    /// The log file could not be opened or created.
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),

    /// An append to the log file failed.
    #[error("failed to append to log file")]
    Write(#[source] std::io::Error),
}

impl From<LogFileError> for WardSimError {
    fn from(err: LogFileError) -> Self {
        Self::Log(Box::new(err))
    }
}
