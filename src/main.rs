use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use draft_pulse::api::state::AppState;
use draft_pulse::calculate::{
    compute_cumulative_delta_from_last, compute_draft_bucket_shares, compute_margins,
    compute_player_share_breakdown, rank_top_transfers, DEFAULT_TOP_PLAYERS,
    DEFAULT_TOP_TRANSFERS_LIMIT,
};
use draft_pulse::config::AppConfig;
use draft_pulse::fetch::LeagueClient;
use draft_pulse::models::LeagueSnapshot;
use draft_pulse::parse_duration;

#[derive(Parser)]
#[command(name = "draft-pulse")]
#[command(about = "Fantasy draft league analytics service")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// Fetch a snapshot at startup instead of on first request
        #[arg(long)]
        warm: bool,
    },

    /// Fetch an upstream snapshot and print record counts
    Fetch {
        /// Run once and exit
        #[arg(long)]
        once: bool,

        /// Re-fetch continuously at interval
        #[arg(long)]
        watch: bool,

        /// Fetch interval (e.g., "6h", "30m")
        #[arg(long, default_value = "6h")]
        interval: String,
    },

    /// Compute derived series and print them as JSON
    Derive {
        /// Metrics to compute (comma-separated:
        /// margins, delta, shares, draft, transfers). Default: all
        #[arg(long)]
        run: Option<String>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

const ALL_METRICS: &[&str] = &["margins", "delta", "shares", "draft", "transfers"];

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting draft-pulse v{}", env!("CARGO_PKG_VERSION"));

    let config_path = PathBuf::from(&cli.config);
    let config = if config_path.exists() {
        AppConfig::from_file(&config_path)?
    } else {
        tracing::debug!("No config file at {:?}, using defaults", config_path);
        AppConfig::default()
    };

    match cli.command {
        Commands::Serve { host, port, warm } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;

            let state = AppState::new(config.clone())?;

            if warm {
                match state.client.fetch_all().await {
                    Ok(snapshot) => {
                        tracing::info!(records = snapshot.record_count(), "Snapshot warmed");
                        state.store_snapshot(snapshot).await;
                    }
                    Err(e) => {
                        tracing::warn!("Warm fetch failed, serving lazily: {}", e);
                    }
                }
            }

            let app = draft_pulse::api::build_router(state);
            let addr = format!("{}:{}", config.server.host, config.server.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Dashboard API: http://{}", addr);
            axum::serve(listener, app).await?;
        }

        Commands::Fetch {
            once,
            watch,
            interval: interval_str,
        } => {
            let client = LeagueClient::new(config.upstream.client_config()?)?;

            if once {
                let snapshot = client.fetch_all().await?;
                print_snapshot_summary(&snapshot);
            } else if watch {
                let interval =
                    parse_duration(&interval_str).unwrap_or(Duration::from_secs(6 * 3600));
                tracing::info!("Fetching every {:?}", interval);

                loop {
                    match client.fetch_all().await {
                        Ok(snapshot) => print_snapshot_summary(&snapshot),
                        Err(e) => tracing::error!("Fetch failed: {}", e),
                    }
                    tokio::time::sleep(interval).await;
                }
            } else {
                eprintln!("Specify --once or --watch");
            }
        }

        Commands::Derive { run, pretty } => {
            let client = LeagueClient::new(config.upstream.client_config()?)?;
            let snapshot = client.fetch_all().await?;

            let requested: Vec<&str> = match run.as_deref() {
                Some(list) => list.split(',').map(str::trim).collect(),
                None => ALL_METRICS.to_vec(),
            };

            let mut output = serde_json::Map::new();
            for metric in requested {
                let value = match metric {
                    "margins" => serde_json::to_value(compute_margins(&snapshot.standings))?,
                    "delta" => serde_json::to_value(compute_cumulative_delta_from_last(
                        &snapshot.consistency,
                    ))?,
                    "shares" => serde_json::to_value(compute_player_share_breakdown(
                        &snapshot.contributions,
                        DEFAULT_TOP_PLAYERS,
                    ))?,
                    "draft" => {
                        serde_json::to_value(compute_draft_bucket_shares(&snapshot.draft_analysis))?
                    }
                    "transfers" => serde_json::to_value(rank_top_transfers(
                        &snapshot.top_transfers,
                        DEFAULT_TOP_TRANSFERS_LIMIT,
                    ))?,
                    other => {
                        eprintln!(
                            "Unknown metric: {}. Use one of: {}",
                            other,
                            ALL_METRICS.join(", ")
                        );
                        continue;
                    }
                };
                output.insert(metric.to_string(), value);
            }

            let rendered = if pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };
            println!("{rendered}");
        }
    }

    Ok(())
}

fn print_snapshot_summary(snapshot: &LeagueSnapshot) {
    println!("\n=== Snapshot ===");
    println!("Managers:       {}", snapshot.standings.len());
    println!("Weekly rows:    {}", snapshot.consistency.len());
    println!("Contributions:  {}", snapshot.contributions.len());
    println!("Draft picks:    {}", snapshot.draft_analysis.len());
    println!("Top transfers:  {}", snapshot.top_transfers.len());
    println!("Total records:  {}", snapshot.record_count());
    println!("Fetched at:     {}", snapshot.fetched_at);
}
