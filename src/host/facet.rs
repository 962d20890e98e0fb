//! In-memory facet refinement state.

use crate::domain::{MenuError, RefinementItem, Result};
use crate::menu::{ListConfig, MenuProps, RefinementTarget};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};

/// One facet value with its record count, as loaded from a payload.
///
/// Payloads are JSON arrays of `{"value": "...", "count": n}` objects; `label`
/// is optional and defaults to the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    pub value: String,
    pub count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FacetValue {
    fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

impl From<(String, u64)> for FacetValue {
    fn from((value, count): (String, u64)) -> Self {
        Self { value, count, label: None }
    }
}

/// Results of the last in-list search.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SearchResults {
    query: String,
    items: Vec<RefinementItem>,
}

/// Refinement state of one facet, held by the host.
///
/// Re-refining the active value clears the refinement: a menu click on the
/// selected entry toggles it off, and `create_url` for that entry already
/// points at the cleared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetState {
    attribute: String,
    values: Vec<FacetValue>,
    active: Option<String>,
    search: Option<SearchResults>,
}

impl FacetState {
    /// Creates the state for `attribute` with `(value, count)` pairs.
    pub fn new(attribute: impl Into<String>, values: Vec<(String, u64)>) -> Self {
        Self::from_values(attribute, values.into_iter().map(FacetValue::from).collect())
    }

    pub fn from_values(attribute: impl Into<String>, values: Vec<FacetValue>) -> Self {
        Self {
            attribute: attribute.into(),
            values,
            active: None,
            search: None,
        }
    }

    /// Parses a JSON payload of [`FacetValue`]s.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Json`] when the payload is not an array of facet
    /// values and [`MenuError::InvalidProps`] when a value is empty.
    pub fn parse_values(json: &str) -> Result<Vec<FacetValue>> {
        let values: Vec<FacetValue> = serde_json::from_str(json)?;
        if let Some(position) = values.iter().position(|v| v.value.is_empty()) {
            return Err(MenuError::InvalidProps(format!(
                "facet value at position {position} is empty"
            )));
        }
        Ok(values)
    }

    /// Replaces the facet values, keeping the active refinement and re-running
    /// any pending in-list search against the new values.
    pub fn set_values(&mut self, values: Vec<FacetValue>) {
        tracing::debug!(
            attribute = %self.attribute,
            value_count = values.len(),
            "facet values replaced"
        );
        self.values = values;
        if let Some(query) = self.search.take().map(|s| s.query) {
            self.search_for_items(&query);
        }
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// The active refinement, if any.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether the current items come from an in-list search.
    #[must_use]
    pub const fn is_from_search(&self) -> bool {
        self.search.is_some()
    }

    /// Whether the facet has any value to refine on.
    #[must_use]
    pub fn can_refine(&self) -> bool {
        !self.values.is_empty()
    }

    /// Items for the current cycle: search results while searching, otherwise
    /// every value by count descending, then label.
    #[must_use]
    pub fn items(&self) -> Vec<RefinementItem> {
        if let Some(search) = &self.search {
            return search.items.clone();
        }

        let mut values: Vec<&FacetValue> = self.values.iter().collect();
        values.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label().cmp(b.label())));
        values.into_iter().map(|value| self.to_item(value, Vec::new())).collect()
    }

    /// Builds menu props for this cycle from a template carrying pagination,
    /// search box and translation settings.
    ///
    /// # Errors
    ///
    /// Propagates [`MenuProps::new`] validation failures.
    pub fn props(&self, template: &ListConfig) -> Result<MenuProps> {
        let list = ListConfig {
            items: self.items(),
            is_from_search: self.is_from_search(),
            can_refine: self.can_refine(),
            ..template.clone()
        };
        MenuProps::new(list)
    }

    fn to_item(&self, value: &FacetValue, highlight: Vec<(usize, usize)>) -> RefinementItem {
        RefinementItem {
            label: value.label().to_string(),
            value: value.value.clone(),
            count: value.count,
            is_refined: self.active.as_deref() == Some(value.value.as_str()),
            highlight,
        }
    }

    fn next_refinement(&self, value: &str) -> Option<String> {
        if self.active.as_deref() == Some(value) || value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

impl RefinementTarget for FacetState {
    fn refine(&mut self, value: &str) {
        let next = self.next_refinement(value);
        tracing::debug!(
            attribute = %self.attribute,
            previous = ?self.active,
            next = ?next,
            "facet refined"
        );
        self.active = next;
        self.search = None;
    }

    fn search_for_items(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.search = None;
            return;
        }

        let _span = tracing::debug_span!(
            "search_for_items",
            attribute = %self.attribute,
            query_len = query.len()
        )
        .entered();

        let matcher = SkimMatcherV2::default();
        let mut matches: Vec<(i64, &FacetValue, Vec<usize>)> = self
            .values
            .iter()
            .filter_map(|value| {
                matcher
                    .fuzzy_indices(value.label(), query)
                    .map(|(score, indices)| (score, value, indices))
            })
            .collect();
        matches.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.count.cmp(&a.1.count)));

        let items: Vec<RefinementItem> = matches
            .into_iter()
            .map(|(_, value, indices)| self.to_item(value, coalesce_indices(&indices)))
            .collect();

        tracing::debug!(matched = items.len(), "in-list search completed");
        self.search = Some(SearchResults {
            query: query.to_string(),
            items,
        });
    }

    fn create_url(&self, value: &str) -> String {
        match self.next_refinement(value) {
            Some(next) => format!(
                "?menu[{}]={}",
                urlencoding::encode(&self.attribute),
                urlencoding::encode(&next)
            ),
            None => "?".to_string(),
        }
    }
}

/// Collapses sorted match indices into `(start, end)` runs, end exclusive.
fn coalesce_indices(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some(last) if last.1 == idx => last.1 = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> FacetState {
        FacetState::new(
            "color",
            vec![
                ("blue".to_string(), 2),
                ("red".to_string(), 5),
                ("green".to_string(), 2),
            ],
        )
    }

    fn values(items: &[RefinementItem]) -> Vec<&str> {
        items.iter().map(|i| i.value.as_str()).collect()
    }

    #[test]
    fn test_items_sorted_by_count_then_label() {
        assert_eq!(values(&colors().items()), vec!["red", "blue", "green"]);
    }

    #[test]
    fn test_refine_marks_single_item() {
        let mut facet = colors();
        facet.refine("blue");
        let refined: Vec<_> = facet.items().into_iter().filter(|i| i.is_refined).collect();
        assert_eq!(values(&refined), vec!["blue"]);

        facet.refine("red");
        assert_eq!(facet.active(), Some("red"));
    }

    #[test]
    fn test_refine_active_value_toggles_off() {
        let mut facet = colors();
        facet.refine("blue");
        facet.refine("blue");
        assert_eq!(facet.active(), None);
    }

    #[test]
    fn test_create_url_encodes_and_toggles() {
        let mut facet = FacetState::new("brand name", vec![("A&B".to_string(), 1)]);
        assert_eq!(facet.create_url("A&B"), "?menu[brand%20name]=A%26B");

        facet.refine("A&B");
        assert_eq!(facet.create_url("A&B"), "?");
    }

    #[test]
    fn test_search_sets_highlight_and_from_search() {
        let mut facet = colors();
        facet.search_for_items("re");

        assert!(facet.is_from_search());
        let items = facet.items();
        assert!(values(&items).contains(&"red"));
        let red = items.iter().find(|i| i.value == "red").unwrap();
        assert_eq!(red.highlight, vec![(0, 2)]);
    }

    #[test]
    fn test_blank_search_returns_to_base_listing() {
        let mut facet = colors();
        facet.search_for_items("gr");
        facet.search_for_items("   ");
        assert!(!facet.is_from_search());
        assert_eq!(facet.items().len(), 3);
    }

    #[test]
    fn test_refine_ends_search() {
        let mut facet = colors();
        facet.search_for_items("gr");
        facet.refine("green");
        assert!(!facet.is_from_search());
    }

    #[test]
    fn test_props_report_capability() {
        let template = ListConfig::new(Vec::new(), false).with_search_box(true);
        let props = colors().props(&template).unwrap();
        assert!(props.list.can_refine);
        assert!(props.list.with_search_box);
        assert_eq!(props.list.items.len(), 3);

        let empty = FacetState::new("color", vec![]).props(&template).unwrap();
        assert!(!empty.list.can_refine);
    }

    #[test]
    fn test_parse_values_payload() {
        let values =
            FacetState::parse_values(r#"[{"value":"red","count":5,"label":"Red"}]"#).unwrap();
        assert_eq!(values[0].label(), "Red");
        assert!(FacetState::parse_values("{}").is_err());
    }

    #[test]
    fn test_parse_values_rejects_empty_value() {
        let err = FacetState::parse_values(r#"[{"value":"green","count":4},{"value":"","count":1}]"#)
            .unwrap_err();
        assert!(matches!(err, MenuError::InvalidProps(_)));
    }

    #[test]
    fn test_coalesce_indices() {
        assert_eq!(coalesce_indices(&[0, 1, 2, 5, 7, 8]), vec![(0, 3), (5, 6), (7, 9)]);
        assert!(coalesce_indices(&[]).is_empty());
    }
}
