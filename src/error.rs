//! Error types for the Union fantasy league toolkit

use thiserror::Error;


pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid roster table: {message}")]
    InvalidRoster { message: String },

    #[error("Invalid snapshot {source_name}: {message}")]
    InvalidSnapshot {
        source_name: String,
        message: String,
    },

    #[error("Invalid week calendar: {message}")]
    InvalidCalendar { message: String },

    #[error("Invalid power weights: {message}")]
    InvalidWeights { message: String },

    #[error("Invalid league tier: {tier}")]
    InvalidTier { tier: String },

    #[error("Upstream platform returned no data")]
    NoData,
}
