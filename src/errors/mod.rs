//! Centralized error handling for the playlist catalog
//!
//! # Error Categories
//!
//! - **Source Errors**: playlist retrieval over HTTP or from the filesystem
//! - **Validation Errors**: caller input such as unknown profile names
//! - **Configuration Errors**: unreadable or malformed configuration files
//!
//! Malformed playlist content is never an error. The engine drops what it
//! cannot use and returns a smaller catalog.
//!
//! # Usage
//!
//! ```rust
//! use m3u_catalog::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Err(AppError::validation("empty source"))
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Source Results
pub type SourceResult<T> = Result<T, SourceError>;
