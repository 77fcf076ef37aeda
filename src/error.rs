use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("GitHub API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error(
        "GitHub API rate limit reached{}.\n\
         Tip: Set the GITHUB_TOKEN environment variable to increase rate limits.\n\
         Example: export GITHUB_TOKEN=your_github_token",
        reset_hint(.reset_time)
    )]
    RateLimited { reset_time: Option<DateTime<Utc>> },

    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

fn reset_hint(reset_time: &Option<DateTime<Utc>>) -> String {
    match reset_time {
        Some(t) => format!(" (resets at {})", t.format("%Y-%m-%d %H:%M:%S UTC")),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
