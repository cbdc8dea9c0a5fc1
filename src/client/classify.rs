//! Flush failure classification
//!
//! Maps errors surfaced by the HTTP stack onto `FlushError` categories.
//! Classification is keyed on observable behavior, not on any library's
//! error hierarchy: the error source chain is walked for the protocol and
//! I/O signals that distinguish an unresponsive peer from a refused
//! connection, a reset, or an unparseable response.

use std::error::Error as StdError;
use std::io;

use crate::error::FlushError;

/// Classify a failed flush attempt.
///
/// Precedence: the overall deadline first, then protocol-level signals
/// (parse failure, incomplete message), then I/O error kinds, then the
/// residual I/O category.
pub(crate) fn classify(error: reqwest::Error, timeout_ms: u64) -> FlushError {
    if error.is_timeout() {
        return FlushError::Timeout {
            timeout_ms,
            detail: error.to_string(),
        };
    }

    if let Some(hyper_error) = find_source::<hyper::Error>(&error) {
        if hyper_error.is_parse() {
            return FlushError::MalformedStatusLine(error.to_string());
        }
        // Peer accepted the request but hung up before completing a response
        if hyper_error.is_incomplete_message() {
            return FlushError::ConnectionReset(error.to_string());
        }
    }

    if let Some(io_error) = find_source::<io::Error>(&error) {
        match io_error.kind() {
            io::ErrorKind::ConnectionRefused => {
                return FlushError::ConnectionRefused(error.to_string());
            }
            io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe => {
                return FlushError::ConnectionReset(error.to_string());
            }
            io::ErrorKind::TimedOut => {
                return FlushError::Timeout {
                    timeout_ms,
                    detail: error.to_string(),
                };
            }
            _ => {}
        }
    }

    FlushError::Io(error.to_string())
}

/// Walk the error source chain looking for a cause of type `T`.
fn find_source<'a, T: StdError + 'static>(
    error: &'a (dyn StdError + 'static),
) -> Option<&'a T> {
    let mut source = error.source();
    while let Some(cause) = source {
        if let Some(typed) = cause.downcast_ref::<T>() {
            return Some(typed);
        }
        source = cause.source();
    }
    None
}
