mod args;

use std::process::ExitCode;

use air_hue::{
    config::Config, http::ReqwestClient, hue::HueClient, pipeline, purpleair::PurpleAirClient,
};
use anyhow::{Context as _, Result};
use args::Args;
use clap::Parser as _;
use tokio::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(&args.config)?;

    let http = ReqwestClient::new(Duration::from_secs(args.timeout_secs))
        .context("failed to build HTTP client")?;

    let sensors = PurpleAirClient::new(http.clone(), &config.sensor_host)
        .with_context(|| format!("invalid sensor host: {}", config.sensor_host))?;
    let bridge = HueClient::new(http, &config.bridge_ip, &config.user_id)
        .with_context(|| format!("invalid bridge address: {}", config.bridge_ip))?;

    let outcome = pipeline::run(&config, &sensors, &bridge)
        .await
        .context("failed to update light from air quality")?;

    info!(
        pm25 = outcome.pm25,
        quality = %outcome.quality,
        hue = %outcome.hue,
        status = outcome.response.status,
        "light updated"
    );

    Ok(())
}
