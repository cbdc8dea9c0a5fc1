//! Trace Transport Contract Definitions
//!
//! This module defines the contracts between the transport client and its
//! collaborators: the tracer producing serialized payloads upstream, and the
//! sampling feedback consumer downstream.
//!
//! # Architecture
//!
//! The transport sits between a buffering tracer and a local collection
//! agent:
//! - Receives serialized trace data via the `Payload` trait
//! - Delivers it to the agent and returns a complete `AgentResponse`
//! - The response body decodes into a `ParsedResponse` carrying optional
//!   `rate_by_service` sampling feedback
//!
//! # Design Principles
//!
//! - **Opaque payloads**: the transport never inspects trace bytes
//! - **Complete outcomes**: one flush produces exactly one outcome value
//! - **Defensive decoding**: malformed agent responses degrade, never fail

pub mod payload;
pub mod response;

// Re-export core types
pub use payload::{Payload, TracePayload, DEFAULT_CONTENT_TYPE};
pub use response::{
    AgentResponse, ParsedResponse, ServiceEnvKey, RATE_BY_SERVICE_KEY,
};
