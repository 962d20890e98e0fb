//! Event handling and state transitions.
//!
//! 1. The plugin runtime maps raw input to an [`Event`]
//! 2. [`handle_event`] mutates [`AppState`] and drives the menu
//! 3. The returned flag says whether to re-render; the actions are side
//!    effects for the runtime
//!
//! ```
//! use facet_menu::app::{handle_event, Action, AppState, Chrome, Event};
//! use facet_menu::host::FacetState;
//! use facet_menu::menu::ListConfig;
//! use facet_menu::Theme;
//!
//! let facet = FacetState::new("color", vec![("red".into(), 5)]);
//! let mut state = AppState::new(
//!     facet,
//!     ListConfig::new(Vec::new(), false),
//!     Chrome::default(),
//!     Theme::default(),
//! )?;
//!
//! let (_, actions) = handle_event(&mut state, &Event::Select)?;
//! assert!(matches!(&actions[..], [Action::Refined { value, .. }] if value == "red"));
//! # Ok::<(), facet_menu::MenuError>(())
//! ```

use super::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::Result;
use crate::host::FacetState;
use crate::list::List;
use crate::menu::RefinementTarget;

/// Events produced by user input or the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down (wraps).
    KeyDown,
    /// Moves the cursor up (wraps).
    KeyUp,
    /// Activates the entry under the cursor: an item or the show-more toggle.
    Select,
    /// Focuses the in-list search box.
    SearchMode,
    /// Leaves search, clearing the query.
    ExitSearch,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last query character.
    Backspace,
    /// Flips show more / show less.
    ToggleShowMore,
    /// New facet values arrived as a JSON payload.
    ItemsLoaded {
        /// JSON array of facet values.
        payload: String,
    },
    /// Hides the plugin.
    CloseFocus,
}

/// Processes one event.
///
/// # Returns
///
/// `(should_render, actions)`.
///
/// # Errors
///
/// Fails when an `ItemsLoaded` payload cannot be decoded or when rebuilt props
/// do not validate. State is left as it was before the failing step.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Select => select(state),
        Event::SearchMode => {
            if !state.template.with_search_box {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            state.input_mode = InputMode::Normal;
            state.list_state.reset_query();
            state.facet.search_for_items("");
            state.refresh()?;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut query = state.list_state.query.clone();
            query.push(*c);
            search(state, &query)
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut query = state.list_state.query.clone();
            if query.pop().is_none() {
                return Ok((false, vec![]));
            }
            search(state, &query)
        }
        Event::ToggleShowMore => {
            if !List::has_show_more(&state.props().list_config()) {
                return Ok((false, vec![]));
            }
            state.list_state.toggle_extended();
            state.clamp_selection();
            tracing::debug!(extended = state.list_state.extended, "show more toggled");
            Ok((true, vec![]))
        }
        Event::ItemsLoaded { payload } => {
            let values = FacetState::parse_values(payload)?;
            state.replace_values(values)?;
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

fn select(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if state.show_more_selected() {
        return handle_event(state, &Event::ToggleShowMore);
    }

    let index = state.selected_index;
    let Some(url) = state
        .props()
        .list_config()
        .items
        .get(index)
        .map(|item| state.facet.create_url(&item.value))
    else {
        tracing::debug!(index, "nothing to select");
        return Ok((false, vec![]));
    };

    let props = state.props().clone();
    let Some(value) = state
        .menu
        .click(&props, &mut state.list_state, index, &mut state.facet)
    else {
        return Ok((false, vec![]));
    };

    state.input_mode = InputMode::Normal;
    state.refresh()?;
    Ok((true, vec![Action::Refined { value, url }]))
}

fn search(state: &mut AppState, query: &str) -> Result<(bool, Vec<Action>)> {
    state
        .menu
        .search(&mut state.list_state, query, &mut state.facet);
    state.selected_index = 0;
    state.refresh()?;
    Ok((true, vec![]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Chrome;
    use crate::menu::ListConfig;
    use crate::Theme;

    fn colors(template: ListConfig) -> AppState {
        let facet = FacetState::new(
            "color",
            vec![("red".to_string(), 5), ("blue".to_string(), 2), ("green".to_string(), 1)],
        );
        AppState::new(facet, template, Chrome::default(), Theme::default()).unwrap()
    }

    #[test]
    fn test_select_refines_item_under_cursor() {
        let mut state = colors(ListConfig::new(Vec::new(), false));
        handle_event(&mut state, &Event::KeyDown).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Select).unwrap();

        assert!(render);
        assert_eq!(
            actions,
            vec![Action::Refined {
                value: "blue".to_string(),
                url: "?menu[color]=blue".to_string()
            }]
        );
        assert_eq!(state.facet.active(), Some("blue"));
        assert!(state.compute_viewmodel().menu.list.items[1].is_refined);
    }

    #[test]
    fn test_reselect_toggles_off() {
        let mut state = colors(ListConfig::new(Vec::new(), false));
        handle_event(&mut state, &Event::Select).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();

        assert_eq!(
            actions,
            vec![Action::Refined { value: "red".to_string(), url: "?".to_string() }]
        );
        assert_eq!(state.facet.active(), None);
    }

    #[test]
    fn test_search_then_select_resets_query() {
        let mut state = colors(ListConfig::new(Vec::new(), false).with_search_box(true));
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('g')).unwrap();
        handle_event(&mut state, &Event::Char('r')).unwrap();

        let vm = state.compute_viewmodel();
        assert!(state.props().list.is_from_search);
        assert_eq!(vm.menu.list.search_box.unwrap().query, "gr");
        assert_eq!(vm.menu.list.items[0].value, "green");

        handle_event(&mut state, &Event::Select).unwrap();

        assert!(state.list_state.query.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(!state.props().list.is_from_search);
        assert_eq!(state.facet.active(), Some("green"));
    }

    #[test]
    fn test_search_ignored_without_search_box() {
        let mut state = colors(ListConfig::new(Vec::new(), false));
        let (render, _) = handle_event(&mut state, &Event::SearchMode).unwrap();
        assert!(!render);
        let (render, _) = handle_event(&mut state, &Event::Char('r')).unwrap();
        assert!(!render);
    }

    #[test]
    fn test_backspace_and_exit_search() {
        let mut state = colors(ListConfig::new(Vec::new(), false).with_search_box(true));
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('b')).unwrap();
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(state.list_state.query.is_empty());
        assert!(!state.props().list.is_from_search);

        handle_event(&mut state, &Event::Char('b')).unwrap();
        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.compute_viewmodel().menu.list.items.len(), 3);
    }

    #[test]
    fn test_toggle_show_more_from_cursor() {
        let mut state = colors(ListConfig::new(Vec::new(), false).with_show_more(1, 3));
        assert_eq!(state.visible_count(), 1);

        handle_event(&mut state, &Event::KeyDown).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();

        assert!(actions.is_empty());
        assert!(state.list_state.extended);
        assert_eq!(state.visible_count(), 3);
        assert_eq!(
            state.compute_viewmodel().menu.list.show_more.unwrap().label,
            "Show less"
        );
    }

    #[test]
    fn test_items_loaded_updates_capability() {
        let facet = FacetState::new("color", vec![]);
        let mut state =
            AppState::new(facet, ListConfig::new(Vec::new(), false), Chrome::default(), Theme::default())
                .unwrap();
        assert!(!state.can_refine());

        let payload = r#"[{"value":"red","count":3}]"#.to_string();
        handle_event(&mut state, &Event::ItemsLoaded { payload }).unwrap();
        assert!(state.can_refine());

        let bad = Event::ItemsLoaded { payload: "not json".to_string() };
        assert!(handle_event(&mut state, &bad).is_err());
        assert!(state.can_refine());
    }

    #[test]
    fn test_rejected_items_leave_facet_and_view_in_sync() {
        let facet = FacetState::new("color", vec![("red".to_string(), 5), ("blue".to_string(), 2)]);
        let mut state =
            AppState::new(facet, ListConfig::new(Vec::new(), false), Chrome::default(), Theme::default())
                .unwrap();

        let payload = r#"[{"value":"","count":1},{"value":"green","count":4}]"#.to_string();
        assert!(handle_event(&mut state, &Event::ItemsLoaded { payload }).is_err());

        let facet_values: Vec<_> = state.facet.items().into_iter().map(|i| i.value).collect();
        assert_eq!(facet_values, vec!["red", "blue"]);

        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();
        assert_eq!(
            actions,
            vec![Action::Refined { value: "red".to_string(), url: "?menu[color]=red".to_string() }]
        );
        assert_eq!(state.facet.active(), Some("red"));

        let refined: Vec<_> = state
            .compute_viewmodel()
            .menu
            .list
            .items
            .iter()
            .map(|i| (i.value.clone(), i.is_refined))
            .collect();
        assert_eq!(
            refined,
            vec![("red".to_string(), true), ("blue".to_string(), false)]
        );
    }

    #[test]
    fn test_close_focus() {
        let mut state = colors(ListConfig::new(Vec::new(), false));
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
