//! Agent response contract
//!
//! Defines the types carried back from a flush: the raw HTTP response from
//! the agent (`AgentResponse`), the defensively decoded JSON view of its body
//! (`ParsedResponse`), and the composite per-service sampling-rate key the
//! agent uses in its feedback (`ServiceEnvKey`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key under which the agent reports per-service sampling rates.
pub const RATE_BY_SERVICE_KEY: &str = "rate_by_service";

/// A complete HTTP response received from the agent.
///
/// Any complete response is a transport-level success, whatever its status
/// code; interpreting the status is the caller's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentResponse {
    /// HTTP status code returned by the agent
    pub status: u16,

    /// Raw response body bytes, read in full before the connection closed
    pub body: Vec<u8>,
}

impl AgentResponse {
    /// Create a response from a status code and body bytes
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the agent acknowledged the payload with a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Lossy UTF-8 rendering of the body, for logs and diagnostics
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Defensively decoded view of an agent response body.
///
/// `json` is `Some` only when the body was syntactically valid JSON; every
/// other body (plain acknowledgements, garbage, non-UTF-8 bytes) degrades to
/// `None` without ever failing the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse {
    /// Decoded JSON body, when the agent sent one
    pub json: Option<Value>,
}

impl ParsedResponse {
    /// Wrap an already-decoded JSON value
    pub fn new(json: Option<Value>) -> Self {
        Self { json }
    }

    /// A response with no decodable JSON body
    pub fn empty() -> Self {
        Self { json: None }
    }

    /// Per-service sampling rates reported by the agent.
    ///
    /// Returns the `rate_by_service` mapping from composite
    /// `service:<name>,env:<name>` keys to rates in [0, 1] when the decoded
    /// body carries one. Entries with non-numeric rates are skipped.
    pub fn rate_by_service(&self) -> Option<HashMap<String, f64>> {
        let rates = self.json.as_ref()?.get(RATE_BY_SERVICE_KEY)?.as_object()?;

        let mut map = HashMap::with_capacity(rates.len());
        for (key, value) in rates {
            if let Some(rate) = value.as_f64() {
                map.insert(key.clone(), rate);
            }
        }
        Some(map)
    }
}

/// A composite sampling-rate key identifying one service in one environment.
///
/// The agent keys its rate feedback as `service:<name>,env:<name>`; the
/// catch-all entry carrying the default rate has both parts empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceEnvKey {
    /// Service name, empty for the default-rate entry
    pub service: String,

    /// Deployment environment, empty for the default-rate entry
    pub env: String,
}

impl ServiceEnvKey {
    /// Create a key from service and environment names
    pub fn new(service: impl Into<String>, env: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            env: env.into(),
        }
    }

    /// Parse a composite `service:<name>,env:<name>` rate key.
    ///
    /// Returns `None` when the key does not follow the composite format.
    pub fn parse(key: &str) -> Option<Self> {
        let (service_part, env_part) = key.split_once(',')?;
        let service = service_part.strip_prefix("service:")?;
        let env = env_part.strip_prefix("env:")?;

        Some(Self {
            service: service.to_string(),
            env: env.to_string(),
        })
    }

    /// Whether this is the catch-all key carrying the default rate
    pub fn is_default(&self) -> bool {
        self.service.is_empty() && self.env.is_empty()
    }
}

impl std::fmt::Display for ServiceEnvKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "service:{},env:{}", self.service, self.env)
    }
}
