//! Error types for escaper operations.

use thiserror::Error;

/// Errors that can occur while configuring an escaper or normalizing input.
///
/// Note that "nothing to escape" is not an error: the context escapers signal
/// it with `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing capability: {0} is not available")]
    MissingCapability(&'static str),

    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),
}

pub type Result<T> = std::result::Result<T, Error>;
