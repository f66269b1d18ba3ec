//! lockrelay command-line client.
//!
//! Reads and sets the lock request held by a lockrelay server, and can poll
//! it the way the lock bridge does.

use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lockrelay_cli::client::StatusClient;
use lockrelay_cli::parse_status_arg;
use lockrelay_core::StatusLabel;

/// Read and set the lockrelay request status.
#[derive(Parser)]
#[command(name = "lockrelay", about = "Read and set the lockrelay request status")]
struct Cli {
    /// Base URL of the lockrelay server.
    #[arg(
        long,
        global = true,
        env = "LOCKRELAY_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the current request.
    Get {
        /// Print the `/get-status` body verbatim.
        #[arg(long)]
        raw: bool,
    },

    /// Request lock, unlock or none (also accepts 0, 1, 2).
    Set {
        #[arg(value_parser = parse_status_arg)]
        status: StatusLabel,
    },

    /// Clear the request back to none.
    Reset,

    /// Poll the request and print each change.
    Watch {
        /// Seconds between polls.
        #[arg(short, long, default_value_t = 5)]
        interval: u64,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let client = StatusClient::new(&cli.url);

    let exit_code = match cli.command {
        Commands::Get { raw } => run_get(&client, raw).await,
        Commands::Set { status } => run_set(&client, status).await,
        Commands::Reset => run_reset(&client).await,
        Commands::Watch { interval } => {
            run_watch(&client, Duration::from_secs(interval.max(1))).await
        }
    };
    process::exit(exit_code);
}

/// Returns exit code: 0 = success, 1 = request or server error.
async fn run_get(client: &StatusClient, raw: bool) -> i32 {
    if raw {
        return match client.fetch_raw().await {
            Ok(body) => {
                println!("{}", body);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        };
    }

    match client.fetch().await {
        Ok(status) => {
            println!("{} ({})", status, status.index());
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

async fn run_set(client: &StatusClient, status: StatusLabel) -> i32 {
    match client.set(status).await {
        Ok(()) => {
            println!("Current Request Status: {}", status);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

async fn run_reset(client: &StatusClient) -> i32 {
    match client.reset().await {
        Ok(()) => {
            println!("Current Request Status: {}", StatusLabel::None);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Polls until interrupted. A failed poll is logged and treated as no change.
async fn run_watch(client: &StatusClient, period: Duration) -> i32 {
    let mut ticker = tokio::time::interval(period);
    let mut last = None;

    tracing::info!(url = %client.base_url(), period_secs = period.as_secs(), "watching status");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match client.poll_change(last).await {
                    Ok(Some(status)) => {
                        println!("{} ({})", status, status.index());
                        last = Some(status);
                    }
                    Ok(None) => {}
                    Err(e) => tracing::warn!(error = %e, "status fetch failed"),
                }
            }
            _ = tokio::signal::ctrl_c() => return 0,
        }
    }
}
