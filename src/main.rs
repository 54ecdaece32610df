use std::io::stderr;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use sales_analysis::{AppConfig, AppServer};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    setup_logging(config.log_level);

    let server = AppServer::new(&config);
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;

    info!("Listening on http://{}", listener.local_addr()?);
    info!(
        top_n = config.top_n,
        chart_width = config.chart_width,
        chart_height = config.chart_height,
        max_upload_bytes = config.max_upload_bytes,
        "Sales analysis configured"
    );

    axum::serve(listener, server.router).await?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
