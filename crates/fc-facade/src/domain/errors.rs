//! # Domain Errors
//!
//! The facade and both subsystems are infallible. The only failure in the
//! system is the client's output sink refusing the result.

use thiserror::Error;

/// Client error types.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Writing the facade output failed.
    #[error("Failed to write facade output: {0}")]
    Output(#[from] std::io::Error),
}
