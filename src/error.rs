//! Error types for `RunningBuddy`
//!
//! The advisor itself cannot fail. Errors come from configuration and from
//! command-line input that cannot be turned into a weather observation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunningBuddyError {
    /// A configuration value is missing or out of range
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// An input value cannot be used for a recommendation
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl RunningBuddyError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Short message suitable for printing to the runner
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            RunningBuddyError::Config { message } => {
                format!("Configuration problem ({message}). Check your config file and RUNNINGBUDDY_* variables.")
            }
            RunningBuddyError::Validation { message } => {
                format!("Could not build a recommendation: {message}")
            }
        }
    }
}
