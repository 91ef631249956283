//! CLI module for RunningBuddy
//!
//! Handles command-line argument parsing and command execution.

pub mod args;
pub mod commands;

pub use args::{Args, Commands};
pub use commands::{RecommendRequest, RecommendationReport, run_recommend};
