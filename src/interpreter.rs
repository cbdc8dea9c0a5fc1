//! Agent response interpretation
//!
//! Decodes the body of a completed flush defensively. The agent may answer
//! with a plain `OK` acknowledgement (older agents), a JSON document carrying
//! `rate_by_service` sampling feedback, or arbitrary bytes when something is
//! wrong on its side. Whatever arrives, interpretation never fails the
//! caller: undecodable bodies degrade to an empty result plus one
//! debug-level log line.

use serde_json::Value;

use crate::contracts::ParsedResponse;

/// Parse an agent response body into its optional JSON content.
///
/// Returns `ParsedResponse { json: Some(_) }` only for syntactically valid
/// JSON (surrounding whitespace tolerated). Plain acknowledgements, empty
/// bodies, non-UTF-8 bytes, and malformed JSON all yield `json: None`; each
/// such body is reported once at debug level and never as an error.
pub fn parse_response(body: &[u8]) -> ParsedResponse {
    let text = match std::str::from_utf8(body) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(
                body = %String::from_utf8_lossy(body),
                error = %err,
                "Unable to parse agent JSON response"
            );
            return ParsedResponse::empty();
        }
    };

    // Plain-text acknowledgement from an agent predating JSON feedback.
    // Delivery worked, but no sampling rates will arrive until the agent
    // is upgraded.
    if text.is_empty() || text.starts_with("OK") {
        tracing::debug!(
            "Cannot parse agent response, make sure the trace agent is up to date"
        );
        return ParsedResponse::empty();
    }

    match serde_json::from_str::<Value>(text) {
        Ok(json) => ParsedResponse::new(Some(json)),
        Err(err) => {
            tracing::debug!(
                body = %text,
                error = %err,
                "Unable to parse agent JSON response"
            );
            ParsedResponse::empty()
        }
    }
}
