//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`WardSimError`] via `#[from]` or an explicit `From` impl; adapter
//! crates box their errors into the [`Log`](WardSimError::Log) variant.

/// Top-level error for all wardsim operations.
#[derive(Debug, thiserror::Error)]
pub enum WardSimError {
    /// A negative duration was supplied to a time or usage operation.
    #[error("invalid duration")]
    InvalidDuration(#[from] InvalidDurationError),

    /// The event log sink could not be written.
    #[error("event log failure")]
    Log(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Raised when a caller supplies a negative duration.
///
/// Zero is accepted; the accumulators and the simulated clock only ever
/// move forward.
#[derive(Debug, thiserror::Error)]
#[error("duration must be non-negative, got {seconds} seconds")]
pub struct InvalidDurationError {
    pub seconds: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_negative_duration() {
        let err = InvalidDurationError { seconds: -3 };
        assert_eq!(err.to_string(), "duration must be non-negative, got -3 seconds");
    }

    #[test]
    fn should_convert_into_top_level_error() {
        let err: WardSimError = InvalidDurationError { seconds: -1 }.into();
        assert!(matches!(err, WardSimError::InvalidDuration(_)));
    }
}
