//! Transport configuration
//!
//! Provides the tunable surface of the transport client: agent host, port,
//! and the per-flush connect/read timeout. Explicit construction is strict
//! (invalid port input is an error); the environment layer is forgiving and
//! falls back to defaults on unparsable values.

use std::time::Duration;

use crate::error::{Result, TransportError};

/// Default agent host.
pub const DEFAULT_AGENT_HOST: &str = "localhost";

/// Default agent trace-intake port.
pub const DEFAULT_AGENT_PORT: u16 = 8126;

/// Default connect/read timeout for one flush, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// Fixed agent ingestion path for trace payloads.
pub const FLUSH_PATH: &str = "/v0.4/traces";

/// Conversion into a TCP port for endpoint construction.
///
/// Accepts `u16` directly, wider integers, and numeric strings. Out-of-range
/// or non-numeric input yields `TransportError::InvalidPort`.
pub trait PortSource {
    /// Coerce this value into a port number
    fn into_port(self) -> Result<u16>;
}

impl PortSource for u16 {
    fn into_port(self) -> Result<u16> {
        Ok(self)
    }
}

impl PortSource for u32 {
    fn into_port(self) -> Result<u16> {
        u16::try_from(self).map_err(|_| TransportError::invalid_port(self))
    }
}

impl PortSource for u64 {
    fn into_port(self) -> Result<u16> {
        u16::try_from(self).map_err(|_| TransportError::invalid_port(self))
    }
}

impl PortSource for usize {
    fn into_port(self) -> Result<u16> {
        u16::try_from(self).map_err(|_| TransportError::invalid_port(self))
    }
}

impl PortSource for i32 {
    fn into_port(self) -> Result<u16> {
        u16::try_from(self).map_err(|_| TransportError::invalid_port(self))
    }
}

impl PortSource for i64 {
    fn into_port(self) -> Result<u16> {
        u16::try_from(self).map_err(|_| TransportError::invalid_port(self))
    }
}

impl PortSource for &str {
    fn into_port(self) -> Result<u16> {
        self.parse::<u16>()
            .map_err(|_| TransportError::invalid_port(self))
    }
}

impl PortSource for String {
    fn into_port(self) -> Result<u16> {
        self.as_str().into_port()
    }
}

/// The agent endpoint receiving trace payloads.
///
/// Immutable once constructed; port coercion happens here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    /// Create an endpoint, coercing the port input
    pub fn new(host: impl Into<String>, port: impl PortSource) -> Result<Self> {
        Ok(Self {
            host: host.into(),
            port: port.into_port()?,
        })
    }

    /// Agent host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Agent port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Full request URL for a path on this endpoint
    pub fn url(&self, path: &str) -> String {
        format!("http://{}:{}{}", self.host, self.port, path)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            host: DEFAULT_AGENT_HOST.to_string(),
            port: DEFAULT_AGENT_PORT,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Transport configuration
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Agent endpoint receiving trace payloads
    pub endpoint: Endpoint,

    /// Connect/read timeout for one flush, in milliseconds
    pub timeout_ms: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl TransportConfig {
    /// Create a configuration for an endpoint with the default timeout
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Create a new config builder
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::new()
    }

    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self {
            endpoint: Endpoint {
                host: std::env::var("TRACE_AGENT_HOST")
                    .unwrap_or_else(|_| DEFAULT_AGENT_HOST.to_string()),
                port: std::env::var("TRACE_AGENT_PORT")
                    .map(|v| v.parse().unwrap_or(DEFAULT_AGENT_PORT))
                    .unwrap_or(DEFAULT_AGENT_PORT),
            },
            timeout_ms: std::env::var("TRACE_AGENT_TIMEOUT_MS")
                .map(|v| v.parse().unwrap_or(DEFAULT_TIMEOUT_MS))
                .unwrap_or(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Per-flush timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Builder for TransportConfig
pub struct TransportConfigBuilder {
    config: TransportConfig,
}

impl TransportConfigBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        Self {
            config: TransportConfig::default(),
        }
    }

    /// Set the agent host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.endpoint.host = host.into();
        self
    }

    /// Set the agent port
    pub fn port(mut self, port: u16) -> Self {
        self.config.endpoint.port = port;
        self
    }

    /// Set the full agent endpoint
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.config.endpoint = endpoint;
        self
    }

    /// Set the per-flush timeout in milliseconds
    pub fn timeout_ms(mut self, timeout: u64) -> Self {
        self.config.timeout_ms = timeout;
        self
    }

    /// Build the configuration
    pub fn build(self) -> TransportConfig {
        self.config
    }
}

impl Default for TransportConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
