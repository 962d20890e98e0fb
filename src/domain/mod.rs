//! Domain layer for the facet menu.
//!
//! Holds the refinement item record handed to the menu by its host and the
//! crate-wide error type. Nothing in here knows about rendering or the plugin
//! runtime.
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: The [`RefinementItem`] record

pub mod error;
pub mod item;

pub use error::{MenuError, Result};
pub use item::RefinementItem;
