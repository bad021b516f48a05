//! Tripflow server binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use tripflow::config::TripflowConfig;
use tripflow::events::LoggingEventSink;
use tripflow::model::GeminiClient;
use tripflow::observability::init_tracing;
use tripflow::pipeline::HolidayPipeline;
use tripflow::server::{self, AppState};

/// Serve the holiday itinerary pipeline over HTTP.
#[derive(Debug, Parser)]
#[command(name = "tripflow", version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "TRIPFLOW_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:3000.
    #[arg(short, long)]
    bind: Option<String>,

    /// Model identifier to call.
    #[arg(short, long)]
    model: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    log_json: bool,

    /// Log every pipeline event at debug level instead of info.
    #[arg(long)]
    debug_events: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => TripflowConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => TripflowConfig::default(),
    };
    let mut config = config
        .with_env_overrides()
        .with_overrides(cli.bind.clone(), cli.model.clone());
    config.server.log_json |= cli.log_json;

    init_tracing(config.server.log_json);
    info!("Tripflow v{} starting", env!("CARGO_PKG_VERSION"));

    let client = GeminiClient::from_config(&config.model).context("failed to build model client")?;
    info!(model = %client.model_name(), "Model client ready");

    let sink = if cli.debug_events {
        LoggingEventSink::debug()
    } else {
        LoggingEventSink::default()
    };
    let pipeline = HolidayPipeline::new(Arc::new(client)).with_event_sink(Arc::new(sink));

    server::serve(
        &config.server,
        AppState::new(pipeline),
        server::shutdown_signal(tokio::signal::ctrl_c()),
    )
    .await?;

    Ok(())
}
