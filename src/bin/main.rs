//! Agent connectivity check entry point
//!
//! Performs one flush against a configured trace agent and reports the
//! classified outcome plus any sampling feedback.

use clap::Parser;
use colored::Colorize;
use trace_transport::{parse_response, TracePayload, TransportClient, TransportConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "agent-check")]
#[command(about = "Trace agent connectivity check - one flush, classified outcome")]
#[command(version)]
struct Cli {
    /// Agent host
    #[arg(long, default_value = "localhost", env = "TRACE_AGENT_HOST")]
    host: String,

    /// Agent port
    #[arg(short, long, default_value = "8126", env = "TRACE_AGENT_PORT")]
    port: u16,

    /// Flush timeout in milliseconds
    #[arg(long, default_value = "2000", env = "TRACE_AGENT_TIMEOUT_MS")]
    timeout_ms: u64,

    /// Deliver a serialized payload from this file instead of an empty payload
    #[arg(long)]
    payload: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let cli = Cli::parse();

    let config = TransportConfig::builder()
        .host(cli.host)
        .port(cli.port)
        .timeout_ms(cli.timeout_ms)
        .build();

    let body = match &cli.payload {
        Some(path) => std::fs::read(path)?,
        None => Vec::new(),
    };
    let payload = TracePayload::new(body);

    let client = TransportClient::with_config(config)?;

    tracing::info!(
        endpoint = %client.endpoint(),
        timeout_ms = client.timeout_ms(),
        "Checking trace agent"
    );

    match client.flush(&payload).await {
        Ok(response) => {
            let parsed = parse_response(&response.body);
            println!(
                "{}",
                serde_json::json!({
                    "endpoint": client.endpoint().to_string(),
                    "status": response.status,
                    "body": response.body_text(),
                    "rate_by_service": parsed.rate_by_service(),
                })
            );
            eprintln!(
                "{} agent responded with status {}",
                "OK".green().bold(),
                response.status
            );
        }
        Err(error) => {
            println!(
                "{}",
                serde_json::json!({
                    "endpoint": client.endpoint().to_string(),
                    "kind": error.kind(),
                    "error": error.to_string(),
                })
            );
            eprintln!("{} {}", "FAIL".red().bold(), error);
            std::process::exit(1);
        }
    }

    Ok(())
}
