//! Error types for the trace transport
//!
//! Two layers: `TransportError` for construction-time failures, and
//! `FlushError` for classified per-flush delivery failures. Flush failures
//! are ordinary return values; nothing in the transport panics or unwinds
//! into the instrumented application.

use thiserror::Error;

use crate::contracts::AgentResponse;

/// Construction-time errors for the transport client
#[derive(Error, Debug)]
pub enum TransportError {
    /// Port input that does not coerce to a valid TCP port
    #[error("Invalid agent port: {0}")]
    InvalidPort(String),

    /// Underlying HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// Metrics registration error
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl TransportError {
    /// Create an invalid port error from the offending input
    pub fn invalid_port(value: impl std::fmt::Display) -> Self {
        TransportError::InvalidPort(value.to_string())
    }
}

/// Result type alias for transport construction
pub type Result<T> = std::result::Result<T, TransportError>;

/// A classified flush failure.
///
/// Categories are keyed on observable behavior rather than on any HTTP
/// library's error hierarchy. Reset-before-complete-response and
/// unparseable-status-line are adjacent categories; platforms may surface
/// the same misbehaving peer as either.
#[derive(Error, Debug)]
pub enum FlushError {
    /// The agent did not complete the exchange within the configured bound
    #[error("Flush timed out after {timeout_ms} ms: {detail}")]
    Timeout {
        /// Configured connect/read timeout in milliseconds
        timeout_ms: u64,
        /// Rendered source error detail
        detail: String,
    },

    /// Nothing is listening on the agent endpoint
    #[error("Agent connection refused: {0}")]
    ConnectionRefused(String),

    /// The agent closed the connection before completing its response
    #[error("Agent connection reset: {0}")]
    ConnectionReset(String),

    /// The agent sent bytes that do not parse as an HTTP response
    #[error("Malformed agent status line: {0}")]
    MalformedStatusLine(String),

    /// Residual transport I/O failure
    #[error("Transport I/O error: {0}")]
    Io(String),
}

impl FlushError {
    /// Stable label for this failure category, used in logs and metric labels
    pub fn kind(&self) -> &'static str {
        match self {
            FlushError::Timeout { .. } => "timeout",
            FlushError::ConnectionRefused(_) => "connection_refused",
            FlushError::ConnectionReset(_) => "connection_reset",
            FlushError::MalformedStatusLine(_) => "malformed_status_line",
            FlushError::Io(_) => "io",
        }
    }

    /// Whether the failure indicates the agent is not running at all
    pub fn is_agent_down(&self) -> bool {
        matches!(self, FlushError::ConnectionRefused(_))
    }
}

/// Outcome of a single flush attempt: a complete agent response, or a
/// classified failure. Exactly one flush produces exactly one outcome.
pub type FlushOutcome = std::result::Result<AgentResponse, FlushError>;
