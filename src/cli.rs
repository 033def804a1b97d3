use crate::{
    config::Config,
    gateways,
    presentation::{self, TerminalAlerts},
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use locator_application::prelude::LocationCoordinator;
use std::{path::PathBuf, time::Duration};
use tokio::time::MissedTickBehavior;

#[derive(Parser)]
#[command(name = "locator", version)]
#[command(about = "Locate this device and resolve its address", long_about = None)]
pub struct Cli {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Help the user to fix disabled location services or missing permissions
    #[arg(long)]
    pub open_settings: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Acquire the location once and resolve its address (default)
    Locate,

    /// Locate and refresh the location afterwards
    Refresh,

    /// Refresh the location periodically until interrupted
    Watch {
        #[arg(long, default_value = "60s", value_parser = parse_interval)]
        interval: Duration,
    },
}

fn parse_interval(s: &str) -> std::result::Result<Duration, String> {
    let interval = duration_str::parse(s).map_err(|err| err.to_string())?;
    if interval.is_zero() {
        return Err("The interval must not be zero".into());
    }
    Ok(interval)
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = Config::try_load_from_file_or_default(cli.config_file.as_ref())?;

    let (coordinator, bootstrap) = LocationCoordinator::start(
        gateways::position_gateway(cfg.positioning),
        gateways::geocoding_gateway(cfg.geocoding),
        TerminalAlerts::new(cli.open_settings),
        cfg.coordinator,
    );
    let renderer = tokio::spawn(presentation::render_changes(coordinator.subscribe()));
    bootstrap.await?;

    match cli.command.unwrap_or(Commands::Locate) {
        Commands::Locate => {}
        Commands::Refresh => {
            refresh(&coordinator).await;
        }
        Commands::Watch { interval } => {
            watch(&coordinator, interval).await?;
        }
    }

    // Closes the channel, the renderer prints the final state and stops
    drop(coordinator);
    renderer.await?;
    Ok(())
}

async fn refresh(coordinator: &LocationCoordinator) {
    if coordinator.refresh().await.is_err() {
        return;
    }
    let snapshot = coordinator.snapshot();
    if !snapshot.address().is_empty() && !snapshot.is_address_stale() {
        log::debug!("The address is up to date");
        return;
    }
    if let Err(err) = coordinator.resolve_address().await {
        log::debug!("Refreshing the address failed: {err}");
    }
}

async fn watch(coordinator: &LocationCoordinator, period: Duration) -> Result<()> {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately
    interval.tick().await;

    loop {
        tokio::select! {
            _ = interval.tick() => refresh(coordinator).await,
            res = tokio::signal::ctrl_c() => {
                res?;
                log::info!("Stop watching");
                return Ok(());
            }
        }
    }
}
