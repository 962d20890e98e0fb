//! Refinement item record.
//!
//! A [`RefinementItem`] is one candidate value of the facet, as computed by the
//! search-state layer. The menu treats it as read-only.

use serde::{Deserialize, Serialize};

/// One candidate value of a facet.
///
/// Deserializes from the host's item payloads:
///
/// ```
/// use facet_menu::RefinementItem;
///
/// let item: RefinementItem = serde_json::from_str(
///     r#"{"label":"Red","value":"red","count":5,"isRefined":false}"#,
/// ).unwrap();
/// assert_eq!(item.value, "red");
/// assert!(item.highlight.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinementItem {
    /// Human-readable facet value.
    pub label: String,

    /// Canonical facet value used for refinement and URL generation.
    pub value: String,

    /// Number of matching records.
    pub count: u64,

    /// Whether this value is the active refinement.
    pub is_refined: bool,

    /// Character ranges of `label` matched by an in-list search.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive. Empty
    /// for items that did not come from a search.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlight: Vec<(usize, usize)>,
}

impl RefinementItem {
    /// Creates an item whose label equals its value.
    #[must_use]
    pub fn new(value: impl Into<String>, count: u64) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            count,
            is_refined: false,
            highlight: Vec::new(),
        }
    }

    /// Sets a display label distinct from the value.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Marks the item as the active refinement.
    #[must_use]
    pub const fn refined(mut self, is_refined: bool) -> Self {
        self.is_refined = is_refined;
        self
    }

    /// Attaches search highlight ranges.
    #[must_use]
    pub fn with_highlight(mut self, ranges: Vec<(usize, usize)>) -> Self {
        self.highlight = ranges;
        self
    }
}
