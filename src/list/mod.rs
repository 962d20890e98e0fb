//! Generic selectable-list collaborator.
//!
//! The list owns everything the menu deliberately does not decide: how many
//! items are visible, the show more / show less toggle, and the in-list search
//! box with its transient query. It renders items through a caller-supplied
//! `render_item` and dispatches clicks through an [`ItemSelector`].
//!
//! # Modules
//!
//! - [`highlight`]: Highlight collaborator used for labels of searched items

pub mod highlight;

pub use highlight::{Highlighter, RangeHighlighter};

use crate::domain::RefinementItem;
use crate::menu::{ClassNames, ListConfig, RefinementTarget, TranslationKey};
use crate::ui::viewmodel::{ItemView, ListView, SearchBoxView, ShowMoreView};

/// Transient list state: the in-list query and the toggle position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    /// Text typed into the search box.
    pub query: String,

    /// Whether the list is extended to `limit_max`.
    pub extended: bool,
}

impl ListState {
    /// Clears the in-list query.
    pub fn reset_query(&mut self) {
        if !self.query.is_empty() {
            tracing::trace!(query = %self.query, "resetting in-list query");
        }
        self.query.clear();
    }

    /// Flips between show more and show less.
    pub fn toggle_extended(&mut self) {
        self.extended = !self.extended;
    }
}

/// Receives item clicks from the list.
///
/// `reset_query` clears the list's transient query; the selector decides when to
/// call it. Implemented for matching closures.
pub trait ItemSelector {
    fn select_item(&mut self, item: &RefinementItem, reset_query: &mut dyn FnMut());
}

impl<F> ItemSelector for F
where
    F: FnMut(&RefinementItem, &mut dyn FnMut()),
{
    fn select_item(&mut self, item: &RefinementItem, reset_query: &mut dyn FnMut()) {
        self(item, reset_query);
    }
}

/// Stateless list renderer; state lives in [`ListState`].
#[derive(Debug, Clone, Copy)]
pub struct List {
    cx: ClassNames,
}

impl List {
    /// Creates a list whose class names are scoped to the owning widget.
    #[must_use]
    pub const fn new(cx: ClassNames) -> Self {
        Self { cx }
    }

    /// Number of items currently visible for `config` and `state`.
    #[must_use]
    pub fn visible_count(config: &ListConfig, state: &ListState) -> usize {
        let limit = if config.show_more && state.extended {
            config.limit_max
        } else {
            config.limit_min
        };
        limit.min(config.items.len())
    }

    /// Whether the show-more toggle is offered.
    #[must_use]
    pub fn has_show_more(config: &ListConfig) -> bool {
        config.show_more && config.items.len() > config.limit_min
    }

    /// Renders the visible items through `render_item`.
    pub fn render<F>(&self, config: &ListConfig, state: &ListState, render_item: F) -> ListView
    where
        F: Fn(&RefinementItem) -> ItemView,
    {
        let visible = Self::visible_count(config, state);
        let t = &config.translations;

        let items: Vec<ItemView> = config.items[..visible].iter().map(render_item).collect();

        let search_box = config.with_search_box.then(|| SearchBoxView {
            query: state.query.clone(),
            placeholder: t.text(TranslationKey::Placeholder, false),
            submit_title: t.text(TranslationKey::SubmitTitle, false),
            reset_title: t.text(TranslationKey::ResetTitle, false),
            submit: t.translate(TranslationKey::Submit, false).map(str::to_string),
            reset: t.translate(TranslationKey::Reset, false).map(str::to_string),
        });

        let show_more = Self::has_show_more(config).then(|| ShowMoreView {
            label: t.text(TranslationKey::ShowMore, state.extended),
            extended: state.extended,
        });

        let no_results = (config.is_from_search && config.items.is_empty())
            .then(|| t.text(TranslationKey::NoResults, false));

        tracing::trace!(
            total = config.items.len(),
            visible,
            extended = state.extended,
            "list rendered"
        );

        ListView {
            class_name: self
                .cx
                .with_modifiers("list", &[("noRefinement", !config.can_refine)]),
            can_refine: config.can_refine,
            search_box,
            items,
            show_more,
            no_results,
        }
    }

    /// Dispatches a click on the visible item at `index`.
    ///
    /// Returns the clicked item, or `None` when `index` is not visible.
    pub fn select<'c>(
        config: &'c ListConfig,
        state: &mut ListState,
        index: usize,
        selector: &mut dyn ItemSelector,
    ) -> Option<&'c RefinementItem> {
        if index >= Self::visible_count(config, state) {
            tracing::debug!(index, "click outside visible items ignored");
            return None;
        }
        let item = config.items.get(index)?;
        selector.select_item(item, &mut || state.reset_query());
        Some(item)
    }

    /// Updates the query and forwards it to the host.
    pub fn type_query(state: &mut ListState, query: &str, target: &mut dyn RefinementTarget) {
        state.query = query.to_string();
        target.search_for_items(query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::LabelView;

    fn config(count: usize) -> ListConfig {
        let items = (0..count)
            .map(|i| RefinementItem::new(format!("v{i}"), 1))
            .collect();
        ListConfig::new(items, count > 0)
    }

    fn plain(item: &RefinementItem) -> ItemView {
        ItemView {
            class_name: String::new(),
            link_class_name: String::new(),
            href: String::new(),
            value: item.value.clone(),
            label_class_name: String::new(),
            label: LabelView::Plain(item.label.clone()),
            count_class_name: String::new(),
            count: item.count,
            is_refined: item.is_refined,
        }
    }

    fn list() -> List {
        List::new(ClassNames::new("Menu"))
    }

    #[test]
    fn test_collapsed_shows_limit_min() {
        let config = config(30).with_show_more(5, 12);
        let view = list().render(&config, &ListState::default(), plain);
        assert_eq!(view.items.len(), 5);
        assert_eq!(view.show_more.unwrap().label, "Show more");
    }

    #[test]
    fn test_extended_shows_limit_max() {
        let config = config(30).with_show_more(5, 12);
        let state = ListState { extended: true, ..ListState::default() };
        let view = list().render(&config, &state, plain);
        assert_eq!(view.items.len(), 12);
        assert_eq!(view.show_more.unwrap().label, "Show less");
    }

    #[test]
    fn test_extended_ignored_without_show_more() {
        let config = config(30).with_limit(4);
        let state = ListState { extended: true, ..ListState::default() };
        let view = list().render(&config, &state, plain);
        assert_eq!(view.items.len(), 4);
        assert!(view.show_more.is_none());
    }

    #[test]
    fn test_no_toggle_when_everything_fits() {
        let config = config(3).with_show_more(5, 12);
        let view = list().render(&config, &ListState::default(), plain);
        assert_eq!(view.items.len(), 3);
        assert!(view.show_more.is_none());
    }

    #[test]
    fn test_search_box_and_no_results() {
        let config = config(0).with_search_box(true).from_search(true);
        let state = ListState { query: "zz".to_string(), extended: false };
        let view = list().render(&config, &state, plain);

        let search_box = view.search_box.unwrap();
        assert_eq!(search_box.query, "zz");
        assert_eq!(search_box.placeholder, "Search here…");
        assert_eq!(search_box.submit, None);
        assert_eq!(view.no_results.as_deref(), Some("No results"));
        assert_eq!(view.class_name, "ais-Menu__list ais-Menu__list--noRefinement");
    }

    #[test]
    fn test_select_resets_query_through_selector() {
        let config = config(3);
        let mut state = ListState { query: "v".to_string(), extended: false };
        let mut seen = Vec::new();

        let mut selector = |item: &RefinementItem, reset_query: &mut dyn FnMut()| {
            reset_query();
            seen.push(item.value.clone());
        };
        let clicked = List::select(&config, &mut state, 1, &mut selector);

        assert_eq!(clicked.map(|i| i.value.as_str()), Some("v1"));
        assert!(state.query.is_empty());
        assert_eq!(seen, vec!["v1".to_string()]);
    }

    #[test]
    fn test_select_hidden_item_is_ignored() {
        let config = config(30).with_show_more(2, 4);
        let mut state = ListState::default();
        let mut calls = 0;
        let mut selector = |_: &RefinementItem, _: &mut dyn FnMut()| calls += 1;

        assert!(List::select(&config, &mut state, 3, &mut selector).is_none());
        assert_eq!(calls, 0);
    }
}
