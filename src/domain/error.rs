//! Error types for the facet menu.
//!
//! This module defines the centralized error type [`MenuError`] and a type alias
//! [`Result`] used throughout the crate. Rendering and item selection never fail;
//! errors only surface while building props, parsing configuration, or loading
//! themes and item payloads.

use thiserror::Error;

/// The main error type for facet menu operations.
///
/// # Examples
///
/// ```
/// use facet_menu::MenuError;
///
/// fn check_limits(min: usize, max: usize) -> Result<(), MenuError> {
///     if max < min {
///         return Err(MenuError::InvalidProps(format!("limit_max {max} < limit_min {min}")));
///     }
///     Ok(())
/// }
///
/// assert!(check_limits(10, 5).is_err());
/// ```
#[derive(Debug, Error)]
pub enum MenuError {
    /// Menu properties violate a value-level rule.
    ///
    /// Raised when props are constructed, never at click time.
    #[error("Invalid menu props: {0}")]
    InvalidProps(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An item payload could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for facet menu operations.
pub type Result<T> = std::result::Result<T, MenuError>;
