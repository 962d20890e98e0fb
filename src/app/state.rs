//! Application state and view model computation.
//!
//! [`AppState`] plays the coordinator role around the menu: it owns the host's
//! facet state and the list's transient state, re-supplies props each cycle,
//! and listens on the menu's capability channel to decide whether to show the
//! list or an empty state.

use super::modes::InputMode;
use crate::domain::Result;
use crate::host::{FacetState, FacetValue};
use crate::list::{List, ListState};
use crate::menu::{ListConfig, Menu, MenuProps};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, UIViewModel};
use std::cell::Cell;
use std::rc::Rc;

/// Widget chrome supplied by configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chrome {
    pub header: Option<String>,
    pub footer: Option<String>,
}

/// Central application state.
#[derive(Debug)]
pub struct AppState {
    /// Refinement state of the facet (the menu's host).
    pub facet: FacetState,

    /// The menu widget.
    pub menu: Menu,

    /// In-list query and show-more position.
    pub list_state: ListState,

    /// Pagination, search box and translation settings; items are filled in
    /// from `facet` every cycle.
    pub template: ListConfig,

    pub chrome: Chrome,

    /// Cursor position. One past the last visible item is the show-more
    /// toggle, when present.
    pub selected_index: usize,

    pub input_mode: InputMode,

    pub theme: Theme,

    /// Last value pushed through the menu's capability channel.
    can_refine: Rc<Cell<bool>>,

    /// Props of the current cycle.
    props: MenuProps,
}

impl AppState {
    /// Builds the state and mounts the menu.
    ///
    /// # Errors
    ///
    /// Fails when the template's limits do not validate.
    pub fn new(facet: FacetState, template: ListConfig, chrome: Chrome, theme: Theme) -> Result<Self> {
        let props = Self::build_props(&facet, &template, &chrome)?;

        let can_refine = Rc::new(Cell::new(false));
        let sink = Rc::clone(&can_refine);
        let mut menu = Menu::with_channel(Box::new(move |value: bool| sink.set(value)));
        menu.mount(&props);

        Ok(Self {
            facet,
            menu,
            list_state: ListState::default(),
            template,
            chrome,
            selected_index: 0,
            input_mode: InputMode::Normal,
            theme,
            can_refine,
            props,
        })
    }

    fn build_props(facet: &FacetState, template: &ListConfig, chrome: &Chrome) -> Result<MenuProps> {
        let mut props = facet.props(template)?;
        props.header.clone_from(&chrome.header);
        props.footer.clone_from(&chrome.footer);
        Ok(props)
    }

    /// Props of the current cycle.
    #[must_use]
    pub const fn props(&self) -> &MenuProps {
        &self.props
    }

    /// Whether the menu last reported refinable values.
    #[must_use]
    pub fn can_refine(&self) -> bool {
        self.can_refine.get()
    }

    /// Re-supplies props after the facet or list state changed.
    ///
    /// # Errors
    ///
    /// Propagates props validation failures.
    pub fn refresh(&mut self) -> Result<()> {
        self.props = Self::build_props(&self.facet, &self.template, &self.chrome)?;
        self.menu.update(&self.props);
        self.clamp_selection();
        Ok(())
    }

    /// Swaps in new facet values.
    ///
    /// The values are applied to a copy of the facet first; nothing changes
    /// unless the resulting props validate.
    ///
    /// # Errors
    ///
    /// Propagates props validation failures.
    pub fn replace_values(&mut self, values: Vec<FacetValue>) -> Result<()> {
        let mut facet = self.facet.clone();
        facet.set_values(values);
        let props = Self::build_props(&facet, &self.template, &self.chrome)?;

        self.facet = facet;
        self.props = props;
        self.menu.update(&self.props);
        self.clamp_selection();
        Ok(())
    }

    /// Number of visible items.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        List::visible_count(&self.props.list_config(), &self.list_state)
    }

    fn has_toggle(&self) -> bool {
        List::has_show_more(&self.props.list_config())
    }

    fn cursor_positions(&self) -> usize {
        self.visible_count() + usize::from(self.has_toggle())
    }

    /// Whether the cursor sits on the show-more toggle.
    #[must_use]
    pub fn show_more_selected(&self) -> bool {
        self.has_toggle() && self.selected_index == self.visible_count()
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let positions = self.cursor_positions();
        if positions == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % positions;
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let positions = self.cursor_positions();
        if positions == 0 {
            return;
        }
        self.selected_index = self.selected_index.checked_sub(1).unwrap_or(positions - 1);
    }

    /// Keeps the cursor inside the current positions.
    pub fn clamp_selection(&mut self) {
        let positions = self.cursor_positions();
        self.selected_index = self.selected_index.min(positions.saturating_sub(1));
    }

    /// Computes the screen view model for this cycle.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let menu = self.menu.render(&self.props, &self.list_state, &self.facet);

        let empty_state = (!self.can_refine()).then(|| EmptyState {
            message: format!("No values for \"{}\"", self.facet.attribute()),
            subtitle: "Nothing to refine yet".to_string(),
        });

        UIViewModel {
            menu,
            selected_index: self.selected_index,
            show_more_selected: self.show_more_selected(),
            search_focused: self.input_mode == InputMode::Search,
            keybindings: self.keybindings(),
            empty_state,
        }
    }

    fn keybindings(&self) -> String {
        match self.input_mode {
            InputMode::Search => "ESC: clear search  Enter: select  Ctrl+n/p: navigate  Type to filter".to_string(),
            InputMode::Normal => {
                let mut hints = vec!["j/k: navigate", "Enter: select"];
                if self.template.with_search_box {
                    hints.push("/: search");
                }
                if self.template.show_more {
                    hints.push("m: more/less");
                }
                hints.push("q: quit");
                hints.join("  ")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(values: Vec<(&str, u64)>, template: ListConfig) -> AppState {
        let facet = FacetState::new(
            "color",
            values.into_iter().map(|(v, c)| (v.to_string(), c)).collect(),
        );
        AppState::new(facet, template, Chrome::default(), Theme::default()).unwrap()
    }

    fn many(count: u64) -> Vec<(&'static str, u64)> {
        ["a", "b", "c", "d", "e", "f"].into_iter().zip((1..=count).rev()).collect()
    }

    #[test]
    fn test_mount_reports_capability() {
        let s = state(vec![("red", 5)], ListConfig::new(Vec::new(), false));
        assert!(s.can_refine());
        assert!(s.compute_viewmodel().empty_state.is_none());

        let empty = state(vec![], ListConfig::new(Vec::new(), false));
        assert!(!empty.can_refine());
        assert!(empty.compute_viewmodel().empty_state.is_some());
    }

    #[test]
    fn test_cursor_includes_toggle() {
        let template = ListConfig::new(Vec::new(), false).with_show_more(2, 4);
        let mut s = state(many(6), template);

        assert_eq!(s.visible_count(), 2);
        s.move_selection_down();
        s.move_selection_down();
        assert!(s.show_more_selected());
        s.move_selection_down();
        assert_eq!(s.selected_index, 0);
        s.move_selection_up();
        assert!(s.show_more_selected());
    }

    #[test]
    fn test_invalid_template_rejected() {
        let facet = FacetState::new("color", vec![]);
        let template = ListConfig::new(Vec::new(), false).with_show_more(5, 1);
        assert!(AppState::new(facet, template, Chrome::default(), Theme::default()).is_err());
    }

    #[test]
    fn test_replace_values_keeps_state_on_invalid_values() {
        let mut s = state(vec![("red", 5), ("blue", 2)], ListConfig::new(Vec::new(), false));
        let values = vec![
            FacetValue::from(("green".to_string(), 4)),
            FacetValue::from((String::new(), 1)),
        ];

        assert!(s.replace_values(values).is_err());

        let facet_values: Vec<_> = s.facet.items().into_iter().map(|i| i.value).collect();
        let props_values: Vec<_> = s.props().list.items.iter().map(|i| i.value.clone()).collect();
        assert_eq!(facet_values, vec!["red", "blue"]);
        assert_eq!(props_values, facet_values);
    }

    #[test]
    fn test_chrome_reaches_view() {
        let facet = FacetState::new("color", vec![("red".to_string(), 1)]);
        let chrome = Chrome {
            header: Some("Colors".to_string()),
            footer: Some("powered by facets".to_string()),
        };
        let s = AppState::new(facet, ListConfig::new(Vec::new(), false), chrome, Theme::default())
            .unwrap();

        let vm = s.compute_viewmodel();
        assert_eq!(vm.menu.header.unwrap().title, "Colors");
        assert_eq!(vm.menu.footer.unwrap().text, "powered by facets");
    }
}
