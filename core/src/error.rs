use std::num::ParseFloatError;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Invalid RGB triple '{input}': expected three comma-separated channels, got {count}")]
    ChannelCount { input: String, count: usize },

    #[error("Invalid channel value '{token}': {source}")]
    InvalidChannel {
        token: String,
        source: ParseFloatError,
    },
}

/// Result type of the core library
pub type Result<T> = core::result::Result<T, Error>;
