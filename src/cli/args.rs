//! Command-line argument parsing for RunningBuddy

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// RunningBuddy - what to wear for today's run
#[derive(Parser, Debug)]
#[command(name = "runningbuddy")]
#[command(version)]
#[command(about = "Weather-driven clothing recommendations for runners", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend an outfit for the given weather
    Recommend {
        /// Air temperature in Fahrenheit
        #[arg(short, long, allow_negative_numbers = true)]
        temperature: f64,

        /// Wind speed in mph
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        wind: f64,

        /// Relative humidity in percent
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        humidity: f64,

        /// Cold sensitivity, 0 (runs warm) to 5 (gets cold easily)
        #[arg(short = 'p', long, allow_negative_numbers = true)]
        cold_preference: Option<f64>,

        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display current configuration
    Config,
}
