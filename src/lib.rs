//! Trace Transport
//!
//! HTTP transport client that delivers buffered trace payloads from an
//! instrumented process to a local telemetry-collection agent and interprets
//! the agent's sampling feedback.
//!
//! ## Features
//!
//! - **Single-shot delivery**: one HTTP PUT per flush on a connection the
//!   flush owns, with a bounded connect/read timeout
//! - **Failures as values**: timeouts, refused or reset connections, and
//!   malformed responses come back as classified `FlushError` values, never
//!   as panics into the instrumented application
//! - **Defensive interpretation**: agent response bodies decode into
//!   optional JSON with `rate_by_service` sampling feedback; undecodable
//!   bodies degrade to a debug log line
//! - **Strict port coercion**: endpoint ports accept integers and numeric
//!   strings, rejecting everything else at construction
//! - **Telemetry**: optional Prometheus flush metrics
//! - **Contract-Driven**: payload and response schemas shared with the
//!   tracer and sampler collaborators
//!
//! ## Architecture
//!
//! The transport sits between a buffering tracer and the agent process:
//!
//! 1. **Contracts** (`contracts/`): The `Payload` trait consumed from the
//!    tracer, and the `AgentResponse`/`ParsedResponse` types handed back.
//!
//! 2. **Client** (`client/`): `TransportClient` delivering one payload per
//!    flush and classifying every failure.
//!
//! 3. **Interpreter** (`interpreter`): Defensive JSON decoding of agent
//!    response bodies.
//!
//! 4. **Config** (`config`): Endpoint, timeout, and environment layer.
//!
//! 5. **Metrics** (`metrics`): Optional Prometheus flush metrics.
//!
//! ## Example
//!
//! ```rust,no_run
//! use trace_transport::{parse_response, TracePayload, TransportClient};
//!
//! #[tokio::main]
//! async fn main() -> trace_transport::Result<()> {
//!     // Port accepts numeric strings as well as integers
//!     let client = TransportClient::new("localhost", "8126")?;
//!
//!     let payload = TracePayload::new(b"\x90".to_vec()).with_trace_count(1);
//!
//!     match client.flush(&payload).await {
//!         Ok(response) => {
//!             let parsed = parse_response(&response.body);
//!             if let Some(rates) = parsed.rate_by_service() {
//!                 println!("sampling feedback: {:?}", rates);
//!             }
//!         }
//!         Err(error) => {
//!             // A failed flush is an ordinary value, not a crash
//!             eprintln!("flush failed ({}): {}", error.kind(), error);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

// Core modules
pub mod client;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod metrics;

// Contracts module - located at ../contracts relative to src/
#[path = "../contracts/mod.rs"]
pub mod contracts;

// Re-export commonly used types
pub use client::{TransportClient, HEADER_RUNTIME_ID, HEADER_TRACE_COUNT};
pub use config::{
    Endpoint, PortSource, TransportConfig, TransportConfigBuilder,
    DEFAULT_AGENT_HOST, DEFAULT_AGENT_PORT, DEFAULT_TIMEOUT_MS, FLUSH_PATH,
};
pub use error::{FlushError, FlushOutcome, Result, TransportError};
pub use interpreter::parse_response;
pub use metrics::{FlushMetrics, FlushMetricsRegistry};

// Re-export contract types for external use
pub use contracts::{
    AgentResponse, ParsedResponse, Payload, ServiceEnvKey, TracePayload,
    DEFAULT_CONTENT_TYPE, RATE_BY_SERVICE_KEY,
};

/// Transport version (from Cargo.toml)
pub const TRANSPORT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent advertised to the agent on every flush
pub const TRANSPORT_USER_AGENT: &str = concat!("trace-transport/", env!("CARGO_PKG_VERSION"));
