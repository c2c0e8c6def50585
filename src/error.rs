use thiserror::Error;

use crate::host::HostVersion;

#[derive(Debug, Error, PartialEq)]
pub enum SlideshowError {
    /// A widget was asked to bind to something it cannot own.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("host version {found} is below the required {required}")]
    MissingDependency {
        found: HostVersion,
        required: HostVersion,
    },

    #[error("unknown direction '{0}', expected 'horizontal' or 'vertical'")]
    InvalidDirection(String),

    #[error("invalid delay '{0}', expected a positive number of milliseconds")]
    InvalidDelay(String),
}

pub type Result<T> = std::result::Result<T, SlideshowError>;
