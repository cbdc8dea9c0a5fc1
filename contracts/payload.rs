//! Trace payload contract
//!
//! Defines the `Payload` trait through which the transport client consumes
//! serialized trace data. The transport treats payload bytes as opaque: the
//! producer owns the serialization format and declares the metadata the
//! agent needs (content type, byte length, trace count).

/// Default MIME type for serialized trace payloads.
pub const DEFAULT_CONTENT_TYPE: &str = "application/msgpack";

/// A serialized batch of trace data ready for delivery in a single flush.
///
/// The transport borrows the payload for the duration of one flush call and
/// never interprets the body bytes.
pub trait Payload: Send + Sync {
    /// Serialized body bytes sent as the request body.
    fn body(&self) -> &[u8];

    /// Byte length advertised to the agent as `Content-Length`.
    fn declared_len(&self) -> usize;

    /// MIME type of the serialized body.
    fn content_type(&self) -> &str {
        DEFAULT_CONTENT_TYPE
    }

    /// Number of traces in the payload, when the producer tracks it.
    ///
    /// Sent to the agent as a count header so it can normalize sampling
    /// feedback; `None` omits the header.
    fn trace_count(&self) -> Option<usize> {
        None
    }
}

/// Payload backed by pre-serialized bytes.
///
/// The standard implementation used by callers that buffer and encode traces
/// upstream of the transport.
#[derive(Debug, Clone)]
pub struct TracePayload {
    body: Vec<u8>,
    content_type: String,
    trace_count: Option<usize>,
}

impl TracePayload {
    /// Create a payload from serialized bytes with the default content type
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            trace_count: None,
        }
    }

    /// Override the content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Declare the number of traces contained in the payload
    pub fn with_trace_count(mut self, count: usize) -> Self {
        self.trace_count = Some(count);
        self
    }

    /// Byte length of the serialized body
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Whether the payload carries no bytes
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Payload for TracePayload {
    fn body(&self) -> &[u8] {
        &self.body
    }

    fn declared_len(&self) -> usize {
        self.body.len()
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn trace_count(&self) -> Option<usize> {
        self.trace_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_payload_defaults() {
        let payload = TracePayload::new(b"\x90".to_vec());

        assert_eq!(payload.body(), b"\x90");
        assert_eq!(payload.declared_len(), 1);
        assert_eq!(payload.content_type(), DEFAULT_CONTENT_TYPE);
        assert_eq!(payload.trace_count(), None);
    }

    #[test]
    fn test_trace_payload_overrides() {
        let payload = TracePayload::new(b"[]".to_vec())
            .with_content_type("application/json")
            .with_trace_count(7);

        assert_eq!(payload.content_type(), "application/json");
        assert_eq!(payload.trace_count(), Some(7));
        assert_eq!(payload.declared_len(), 2);
    }

    #[test]
    fn test_empty_payload() {
        let payload = TracePayload::new(Vec::new());

        assert!(payload.is_empty());
        assert_eq!(payload.len(), 0);
        assert_eq!(payload.declared_len(), 0);
    }
}
