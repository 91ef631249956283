use anyhow::{Context, Result};
use clap::Parser;
use runningbuddy::cli::{Args, Commands, RecommendRequest, run_recommend};
use runningbuddy::{RunningBuddyConfig, telemetry};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = RunningBuddyConfig::load_from_path(args.config.clone())
        .context("Failed to load configuration")?;
    if args.verbose {
        config.logging.level = "debug".to_string();
    }
    telemetry::init(&config.logging)?;

    match args.command {
        Commands::Recommend {
            temperature,
            wind,
            humidity,
            cold_preference,
            json,
        } => {
            let request = RecommendRequest {
                temperature,
                wind,
                humidity,
                cold_preference,
            };
            let report = run_recommend(&config, request).map_err(|e| {
                tracing::error!("{e}");
                anyhow::anyhow!(e.user_message())
            })?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.render_text());
            }
        }
        Commands::Config => {
            match &args.config {
                Some(path) => tracing::info!("Using config from: {}", path.display()),
                None => tracing::info!("Using default config location"),
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
