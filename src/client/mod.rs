//! Agent transport client
//!
//! Delivers serialized trace payloads to the local collection agent, one
//! HTTP PUT per flush on a connection the flush owns. Failures are
//! classified into `FlushError` values and handed back to the caller; a
//! telemetry failure can never unwind into the instrumented application.
//!
//! # Design
//!
//! Connection pooling is disabled on the underlying client, so the request
//! future owns its connection: completing or dropping that future on any
//! path closes the socket. Release is scoped, with no manual close calls on
//! scattered branches.

use std::time::Instant;

use reqwest::{header, redirect, Client};
use uuid::Uuid;

use crate::config::{Endpoint, PortSource, TransportConfig, FLUSH_PATH};
use crate::contracts::{AgentResponse, Payload};
use crate::error::{FlushOutcome, Result, TransportError};
use crate::metrics::FlushMetrics;

mod classify;

/// Header carrying the per-process runtime id.
pub const HEADER_RUNTIME_ID: &str = "X-Runtime-Id";

/// Header carrying the number of traces in the payload.
pub const HEADER_TRACE_COUNT: &str = "X-Trace-Count";

/// HTTP client for the trace agent
#[derive(Debug)]
pub struct TransportClient {
    http: Client,
    config: TransportConfig,
    runtime_id: Uuid,
    metrics: Option<FlushMetrics>,
}

impl TransportClient {
    /// Create a client for an agent at `host:port` with default settings.
    ///
    /// The port accepts `u16`, wider integers, and numeric strings; input
    /// that does not coerce to a port is a construction error.
    pub fn new(host: impl Into<String>, port: impl PortSource) -> Result<Self> {
        let endpoint = Endpoint::new(host, port)?;
        Self::with_config(TransportConfig::new(endpoint))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: TransportConfig) -> Result<Self> {
        // Pool size zero: every flush opens its own connection and drop
        // means close. The agent is local, so proxies are bypassed;
        // redirects are not followed.
        let http = Client::builder()
            .connect_timeout(config.timeout())
            .timeout(config.timeout())
            .pool_max_idle_per_host(0)
            .no_proxy()
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            config,
            runtime_id: Uuid::new_v4(),
            metrics: None,
        })
    }

    /// Attach metrics recorded on every flush outcome
    pub fn with_metrics(mut self, metrics: FlushMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// The agent endpoint this client delivers to
    pub fn endpoint(&self) -> &Endpoint {
        &self.config.endpoint
    }

    /// Configured per-flush timeout in milliseconds
    pub fn timeout_ms(&self) -> u64 {
        self.config.timeout_ms
    }

    /// Runtime id advertised to the agent on every flush
    pub fn runtime_id(&self) -> Uuid {
        self.runtime_id
    }

    /// Deliver one payload to the agent.
    ///
    /// Issues a single PUT to the agent ingestion path and awaits the full
    /// response within the configured timeout. Any complete response is a
    /// success, whatever its status code; network-level failures come back
    /// as classified `FlushError` values. One call, one connection, one
    /// outcome; nothing is retried and nothing panics.
    pub async fn flush(&self, payload: &dyn Payload) -> FlushOutcome {
        let started = Instant::now();
        let outcome = self.send(payload).await;
        let elapsed = started.elapsed();

        match &outcome {
            Ok(response) => {
                tracing::debug!(
                    endpoint = %self.config.endpoint,
                    status = response.status,
                    payload_bytes = payload.declared_len(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Flushed payload to agent"
                );
                if let Some(metrics) = &self.metrics {
                    metrics.record_success(elapsed, payload.declared_len());
                }
            }
            Err(error) => {
                tracing::debug!(
                    endpoint = %self.config.endpoint,
                    kind = error.kind(),
                    error = %error,
                    payload_bytes = payload.declared_len(),
                    "Failed to flush payload to agent"
                );
                if let Some(metrics) = &self.metrics {
                    metrics.record_failure(error.kind(), elapsed, payload.declared_len());
                }
            }
        }

        outcome
    }

    async fn send(&self, payload: &dyn Payload) -> FlushOutcome {
        let url = self.config.endpoint.url(FLUSH_PATH);

        let mut request = self
            .http
            .put(&url)
            .header(header::CONTENT_TYPE, payload.content_type())
            .header(header::CONTENT_LENGTH, payload.declared_len())
            .header(header::USER_AGENT, crate::TRANSPORT_USER_AGENT)
            .header(HEADER_RUNTIME_ID, self.runtime_id.to_string())
            .body(payload.body().to_vec());

        if let Some(count) = payload.trace_count() {
            request = request.header(HEADER_TRACE_COUNT, count);
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify::classify(e, self.config.timeout_ms))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| classify::classify(e, self.config.timeout_ms))?;

        Ok(AgentResponse::new(status, body.to_vec()))
    }
}
