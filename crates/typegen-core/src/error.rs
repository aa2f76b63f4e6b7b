//! Error types for typegen.
//!
//! One error hierarchy is shared by the inventory loader, the compiler and
//! the CLI. Fetch and decode failures carry the location they concern.
//!
//! # Examples
//!
//! ```
//! use typegen_core::{Error, Result};
//!
//! fn check_window(value: usize) -> Result<()> {
//!     if value == 0 {
//!         return Err(Error::ConfigError {
//!             message: "max_concurrent_requests must be at least 1".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_window(0).unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for typegen.
#[derive(Error, Debug)]
pub enum Error {
    /// Retrieving part of the schema inventory failed.
    ///
    /// Raised for network failures, non-success HTTP statuses and unreadable
    /// inventory files. Fatal: no declarations are emitted for a run that
    /// hits this error.
    #[error("failed to fetch schema from {location}")]
    FetchFailed {
        /// URL or path that could not be retrieved
        location: String,
        /// Underlying error cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A schema document was retrieved but is not valid inventory JSON.
    #[error("invalid schema document at {location}")]
    InvalidSchema {
        /// URL or path of the offending document
        location: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Local filesystem operation failed.
    #[error("I/O error on {}", path.display())]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    ///
    /// Raised when configuration is invalid, missing required fields,
    /// or cannot be parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument error.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Flattened fields form a cycle between declarations.
    ///
    /// `chain` lists the declaration names along the cycle, starting and
    /// ending with the same name.
    #[error("flattened fields form a cycle: {}", chain.join(" -> "))]
    FlattenCycle {
        /// Declaration names along the cycle
        chain: Vec<String>,
    },

    /// Rendering the output module failed.
    #[error("Render error: {message}")]
    RenderError {
        /// Description of the rendering failure
        message: String,
    },
}

impl Error {
    /// Returns `true` if this error came from retrieving or decoding the inventory.
    ///
    /// # Examples
    ///
    /// ```
    /// use typegen_core::Error;
    ///
    /// let err = Error::FetchFailed {
    ///     location: "https://example.com/index.json".to_string(),
    ///     source: "connection refused".into(),
    /// };
    /// assert!(err.is_fetch_error());
    /// ```
    #[must_use]
    pub const fn is_fetch_error(&self) -> bool {
        matches!(self, Self::FetchFailed { .. } | Self::InvalidSchema { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a flatten cycle error.
    #[must_use]
    pub const fn is_flatten_cycle(&self) -> bool {
        matches!(self, Self::FlattenCycle { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Result type alias for typegen operations.
pub type Result<T> = std::result::Result<T, Error>;
