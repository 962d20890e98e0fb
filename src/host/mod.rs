//! Reference search-state host.
//!
//! The menu never owns refinement data. This module provides the layer that
//! does: an in-memory facet store that answers the menu's callbacks, runs
//! in-list searches, and builds the props for each cycle.

pub mod facet;

pub use facet::{FacetState, FacetValue};
