use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{name} can't be null!")]
    NullArgument { name: &'static str },

    #[error("{name} {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("{date} has no valid local time in {timezone}")]
    NonexistentLocalTime { date: NaiveDate, timezone: String },

    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
