//! Infrastructure layer for filesystem and environment interactions.
//!
//! The plugin runs inside the Zellij sandbox, where the host filesystem is
//! mounted under `/host`.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
