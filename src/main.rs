//! Cat card - two captioned cat pictures composed side by side.

mod adapters;
mod cassette;
mod cli;
mod compose;
mod config;
mod context;
mod error;
mod output;
mod params;
mod pipeline;
mod ports;

use std::io::IsTerminal;
use std::path::Path;
use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::CardError;
use crate::output::output_path;
use crate::pipeline::run_pipeline;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!("{e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "cat_card=debug" } else { "cat_card=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}

async fn run(cli: Cli) -> Result<(), CardError> {
    let params = cli.card_params().map_err(CardError::InvalidArgument)?;

    let config_path = config::discover_config_path(cli.config.as_deref());
    tracing::debug!(path = %config_path.display(), "loading config");
    let config = Config::load(&config_path).map_err(CardError::Config)?;

    // Create context based on mode (live / recording / replaying)
    let replay_path = std::env::var("CATCARD_REPLAY").ok();
    let is_recording = std::env::var("CATCARD_REC").is_ok_and(|v| v == "true" || v == "1");

    let (ctx, recording_session) = if let Some(ref cassette_path) = replay_path {
        tracing::debug!(cassette = %cassette_path, "replaying");
        (ServiceContext::replaying(Path::new(cassette_path))?, None)
    } else if is_recording {
        tracing::debug!("recording mode enabled");
        let (ctx, session) = ServiceContext::recording(&config)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(&config)?, None)
    };

    let out = output_path(&std::env::current_dir()?);
    let result = run_pipeline(ctx.fetcher.as_ref(), &params, &out).await;

    // The recorder is shared with the fetcher; release it before finishing.
    drop(ctx);
    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => tracing::info!(path = %path.display(), "cassette saved"),
            Err(e) => tracing::warn!("failed to save cassette: {e}"),
        }
    }

    result.map(|_| ())
}
