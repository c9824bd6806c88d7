//! Error types for the carematch library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`CarematchError`] enum. Absence of a match is never an error: resolvers and
//! matchers report it as an empty collection.
//!
//! # Examples
//!
//! ```
//! use carematch::error::{CarematchError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CarematchError::invalid_argument("location is required"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for carematch operations.
#[derive(Error, Debug)]
pub enum CarematchError {
    /// I/O errors (reading tables, config files, stdin/stdout)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, spacing correction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Dataset loading and record construction errors
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with CarematchError.
pub type Result<T> = std::result::Result<T, CarematchError>;

impl CarematchError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        CarematchError::Analysis(msg.into())
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        CarematchError::Dataset(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        CarematchError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        CarematchError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
