//! Prometheus metrics for the trace transport
//!
//! Provides flush delivery metrics:
//! - `flush_attempts_total` (counter) - Flush attempts by outcome
//! - `flush_failures_total` (counter) - Classified failures by kind
//! - `flush_duration_seconds` (histogram) - Flush duration distribution
//! - `flush_payload_bytes` (histogram) - Payload size distribution
//! - `responses_unparsed_total` (counter) - Agent responses with no decodable JSON
//!
//! Metrics are optional: a client records them only when constructed with
//! `with_metrics`. No exposition server is embedded; the embedding
//! application scrapes or renders the registry itself.
//!
//! # Example
//!
//! ```rust,no_run
//! use trace_transport::metrics::FlushMetricsRegistry;
//!
//! let registry = FlushMetricsRegistry::new().unwrap();
//! let metrics = registry.metrics();
//!
//! metrics.record_success(std::time::Duration::from_millis(3), 1024);
//! metrics.record_failure("timeout", std::time::Duration::from_millis(2000), 1024);
//!
//! let text = registry.encode_text().unwrap();
//! assert!(text.contains("trace_transport_flush_attempts_total"));
//! ```

use std::sync::Arc;
use std::time::Duration;

use prometheus::{Counter, CounterVec, Histogram, HistogramOpts, Opts, Registry};

use crate::error::{Result, TransportError};

/// Flush metrics for Prometheus
#[derive(Debug, Clone)]
pub struct FlushMetrics {
    /// Total flush attempts (by outcome: success or failure)
    attempts_total: CounterVec,

    /// Total classified flush failures (by kind)
    failures_total: CounterVec,

    /// Flush duration in seconds
    duration_seconds: Histogram,

    /// Payload size per flush in bytes
    payload_bytes: Histogram,

    /// Agent responses whose body carried no decodable JSON
    responses_unparsed_total: Counter,
}

impl FlushMetrics {
    /// Create a new FlushMetrics instance and register with the provided registry
    pub fn new(registry: Arc<Registry>) -> Result<Self> {
        let attempts_total = CounterVec::new(
            Opts::new(
                "flush_attempts_total",
                "Total number of payload flush attempts",
            )
            .namespace("trace_transport"),
            &["outcome"],
        )?;

        let failures_total = CounterVec::new(
            Opts::new(
                "flush_failures_total",
                "Total number of classified flush failures",
            )
            .namespace("trace_transport"),
            &["kind"],
        )?;

        let duration_seconds = Histogram::with_opts(
            HistogramOpts::new("flush_duration_seconds", "Payload flush duration in seconds")
                .namespace("trace_transport")
                .buckets(vec![
                    0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
                ]),
        )?;

        let payload_bytes = Histogram::with_opts(
            HistogramOpts::new("flush_payload_bytes", "Payload size per flush in bytes")
                .namespace("trace_transport")
                .buckets(prometheus::exponential_buckets(64.0, 4.0, 10)?),
        )?;

        let responses_unparsed_total = Counter::new(
            "trace_transport_responses_unparsed_total",
            "Total number of agent responses with no decodable JSON body",
        )?;

        // Register all metrics
        registry.register(Box::new(attempts_total.clone()))?;
        registry.register(Box::new(failures_total.clone()))?;
        registry.register(Box::new(duration_seconds.clone()))?;
        registry.register(Box::new(payload_bytes.clone()))?;
        registry.register(Box::new(responses_unparsed_total.clone()))?;

        Ok(Self {
            attempts_total,
            failures_total,
            duration_seconds,
            payload_bytes,
            responses_unparsed_total,
        })
    }

    /// Record a successful flush
    pub fn record_success(&self, duration: Duration, payload_len: usize) {
        self.attempts_total.with_label_values(&["success"]).inc();
        self.duration_seconds.observe(duration.as_secs_f64());
        self.payload_bytes.observe(payload_len as f64);
    }

    /// Record a classified flush failure
    pub fn record_failure(&self, kind: &str, duration: Duration, payload_len: usize) {
        self.attempts_total.with_label_values(&["failure"]).inc();
        self.failures_total.with_label_values(&[kind]).inc();
        self.duration_seconds.observe(duration.as_secs_f64());
        self.payload_bytes.observe(payload_len as f64);
    }

    /// Record an agent response whose body carried no decodable JSON
    pub fn record_unparsed_response(&self) {
        self.responses_unparsed_total.inc();
    }
}

/// Registry for all transport metrics
pub struct FlushMetricsRegistry {
    registry: Arc<Registry>,
    metrics: FlushMetrics,
}

impl FlushMetricsRegistry {
    /// Create a new metrics registry
    pub fn new() -> Result<Self> {
        let registry = Arc::new(Registry::new());
        let metrics = FlushMetrics::new(Arc::clone(&registry))?;

        Ok(Self { registry, metrics })
    }

    /// Create with an existing Prometheus registry
    pub fn with_registry(registry: Arc<Registry>) -> Result<Self> {
        let metrics = FlushMetrics::new(Arc::clone(&registry))?;

        Ok(Self { registry, metrics })
    }

    /// Get the Prometheus registry
    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }

    /// Get flush metrics
    pub fn metrics(&self) -> &FlushMetrics {
        &self.metrics
    }

    /// Gather all metrics in Prometheus format
    pub fn gather(&self) -> Vec<prometheus::proto::MetricFamily> {
        self.registry.gather()
    }

    /// Encode metrics as text for scraping
    pub fn encode_text(&self) -> Result<String> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let metric_families = self.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| TransportError::Metrics(prometheus::Error::Msg(e.to_string())))?;
        String::from_utf8(buffer)
            .map_err(|e| TransportError::Metrics(prometheus::Error::Msg(e.to_string())))
    }
}

impl Default for FlushMetricsRegistry {
    fn default() -> Self {
        Self::new().expect("Failed to create flush metrics registry")
    }
}
