//! Application-level errors

use std::io;
use thiserror::Error;

/// Application errors add context to failures raised while running the chain.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("output failed: {context}: {source}")]
    Output {
        context: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
