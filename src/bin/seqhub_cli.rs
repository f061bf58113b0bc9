// ABOUTME: seqhub CLI - runs one contribution fetch to completion from the terminal
// ABOUTME: Takes a "user@token" credential, prints the normalized window or the persisted JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Usage:
//! ```bash
//! # Fetch the authenticated viewer's calendar
//! seqhub-cli ghp_yourtoken
//!
//! # Fetch a named user's calendar
//! seqhub-cli octocat@ghp_yourtoken
//!
//! # Credential from the environment, persisted document on stdout
//! SEQHUB_AUTH=ghp_yourtoken seqhub-cli --json
//! ```

use anyhow::{bail, Result};
use clap::Parser;
use seqhub::credential::Credential;
use seqhub::logging::{init_logging, LoggingConfig};
use seqhub::models::FetchStatus;
use seqhub::providers::github::GithubProvider;
use seqhub::worker::WorkerHandle;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seqhub-cli",
    about = "Fetch and normalize a GitHub contribution calendar",
    long_about = "Performs one authenticated contribution fetch and prints the normalized 360-day window. The credential is \"username@token\" or a bare token for the authenticated viewer."
)]
struct Cli {
    /// Credential as "username@token" or a bare token
    /// (falls back to the SEQHUB_AUTH environment variable)
    credential: Option<String>,

    /// Print the persisted JSON document instead of a summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LoggingConfig::from_env())?;

    let Some(credential) = cli.credential.or_else(|| env::var("SEQHUB_AUTH").ok()) else {
        bail!("no credential given: pass it as an argument or set SEQHUB_AUTH");
    };
    info!(
        credential = %Credential::parse(&credential).masked(),
        "starting one-shot fetch"
    );

    let handle = WorkerHandle::spawn(Arc::new(GithubProvider::new()));
    handle.submit_credential(&credential);

    while handle.current_status() == FetchStatus::InProgress {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    let status = handle.current_status();
    let state = handle.current_state();
    let last_error = handle.last_error();
    handle.shutdown().await;

    match status {
        FetchStatus::Success => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&state.to_json())?);
            } else {
                let peak = state.contributions.iter().copied().fold(0.0_f32, f32::max);
                let active = state.contributions.iter().filter(|&&v| v > 0.0).count();
                println!("start date: {}", state.start_date);
                println!(
                    "window: {} days, {active} active, peak intensity {peak:.1}",
                    state.contributions.len()
                );
            }
            Ok(())
        }
        FetchStatus::Idle => bail!("no token in credential, nothing fetched"),
        FetchStatus::Error => match last_error {
            Some(err) => bail!("fetch failed: {err}"),
            None => bail!("fetch failed"),
        },
        FetchStatus::InProgress => unreachable!("loop exits only on a terminal status"),
    }
}
