use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use tracker_engine::{run_once, ReqwestFetcher, TrackerConfig, DEFAULT_PAGE_URL};
use tracker_logging::{tracker_error, tracker_info, tracker_warn};

use super::cli::Cli;
use super::logging;
use super::settings::SettingsFile;

pub fn run_app() -> ExitCode {
    let cli = Cli::parse();
    logging::initialize(cli.log_destination(), cli.log_level());

    match run(cli, Utc::now()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracker_error!("Run failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Resolves configuration once, then drives a single tracking run on a
/// current-thread runtime.
fn run(cli: Cli, started_at: DateTime<Utc>) -> Result<()> {
    let mut config = TrackerConfig::resolve(cli.page_url, cli.output, started_at);
    if let Some(path) = cli.config.as_deref() {
        SettingsFile::load(path)?.apply(&mut config);
    }
    if config.page_url == DEFAULT_PAGE_URL {
        tracker_warn!("No page URL given; {} is only a placeholder", DEFAULT_PAGE_URL);
    }
    tracker_info!(
        "Tracking {} into {}",
        config.page_url,
        config.output_path.display()
    );

    let fetcher = ReqwestFetcher::new(config.fetch.clone());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(run_once(&config, &fetcher, started_at))?;
    Ok(())
}
