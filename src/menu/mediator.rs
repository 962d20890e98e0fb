//! The menu widget: refinement mediation and capability reporting.

use super::capability::{CapabilityChannel, CapabilityReporter, CapabilityState};
use super::class_names::ClassNames;
use super::item::render_item;
use super::props::MenuProps;
use super::target::RefinementTarget;
use crate::domain::RefinementItem;
use crate::list::{Highlighter, List, ListState, RangeHighlighter};
use crate::ui::viewmodel::{FooterInfo, HeaderInfo, MenuView};
use std::fmt;

const WIDGET_CLASS_NAME: &str = "Menu";

/// Single-facet menu.
///
/// Holds no refinement data: items and the active value arrive through
/// [`MenuProps`] on every cycle, and clicks go straight to the host's
/// [`RefinementTarget`]. The only state is the capability reporter.
///
/// # Lifecycle
///
/// ```text
/// mount(props) ─→ render(props) ─→ click(...) ─→ host refines
///                      ↑                              │
///                 update(props) ←─────────────────────┘
/// ```
///
/// # Example
///
/// ```
/// use facet_menu::host::FacetState;
/// use facet_menu::list::ListState;
/// use facet_menu::menu::{ListConfig, Menu};
///
/// let mut host = FacetState::new("color", vec![("red".into(), 5), ("blue".into(), 2)]);
/// let mut list_state = ListState::default();
/// let mut menu = Menu::new();
///
/// let props = host.props(&ListConfig::new(Vec::new(), false)).unwrap();
/// menu.mount(&props);
///
/// let view = menu.render(&props, &list_state, &host);
/// assert_eq!(view.list.items.len(), 2);
///
/// menu.click(&props, &mut list_state, 1, &mut host);
/// assert_eq!(host.active(), Some("blue"));
/// ```
pub struct Menu {
    cx: ClassNames,
    list: List,
    highlighter: Box<dyn Highlighter>,
    capability: CapabilityReporter,
}

impl Menu {
    /// Creates a standalone menu with no capability channel.
    #[must_use]
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Creates a menu that reports `can_refine` into `channel`.
    #[must_use]
    pub fn with_channel(channel: Box<dyn CapabilityChannel>) -> Self {
        Self::build(Some(channel))
    }

    fn build(channel: Option<Box<dyn CapabilityChannel>>) -> Self {
        let cx = ClassNames::new(WIDGET_CLASS_NAME);
        Self {
            cx,
            list: List::new(cx),
            highlighter: Box::new(RangeHighlighter),
            capability: CapabilityReporter::new(channel),
        }
    }

    /// Replaces the highlight collaborator.
    #[must_use]
    pub fn with_highlighter(mut self, highlighter: Box<dyn Highlighter>) -> Self {
        self.highlighter = highlighter;
        self
    }

    /// Reports the initial `can_refine` value.
    pub fn mount(&mut self, props: &MenuProps) {
        tracing::debug!(can_refine = props.list.can_refine, "menu mounted");
        self.capability.report(props.list.can_refine);
    }

    /// Reports `can_refine` after a property update.
    pub fn update(&mut self, props: &MenuProps) {
        self.capability.report(props.list.can_refine);
    }

    /// Current capability state, `None` before [`Menu::mount`].
    #[must_use]
    pub const fn capability(&self) -> Option<CapabilityState> {
        self.capability.state()
    }

    /// Renders the widget for the current cycle.
    ///
    /// The list decides which items are visible; every visible item is rendered
    /// through [`render_item`] with links built by `target`.
    pub fn render(
        &self,
        props: &MenuProps,
        list_state: &ListState,
        target: &dyn RefinementTarget,
    ) -> MenuView {
        let config = props.list_config();
        let _span = tracing::debug_span!(
            "menu_render",
            items = config.items.len(),
            is_from_search = config.is_from_search,
            can_refine = config.can_refine
        )
        .entered();

        let list = self.list.render(&config, list_state, |item| {
            render_item(
                self.cx,
                item,
                config.is_from_search,
                target,
                self.highlighter.as_ref(),
            )
        });

        MenuView {
            class_name: self.cx.root(),
            header: props.header.clone().map(|title| HeaderInfo { title }),
            list,
            footer: props.footer.clone().map(|text| FooterInfo { text }),
        }
    }

    /// Applies a selection: resets the in-list query, then refines.
    ///
    /// The reset always runs first, so the next render never filters against
    /// the previous query with a new active value. Exactly one `refine` call is
    /// made per selection, whether or not the item is already refined.
    pub fn select_item(
        &self,
        item: &RefinementItem,
        reset_query: &mut dyn FnMut(),
        target: &mut dyn RefinementTarget,
    ) {
        tracing::debug!(
            value = %item.value,
            was_refined = item.is_refined,
            "menu item selected"
        );
        reset_query();
        target.refine(&item.value);
    }

    /// Dispatches a click on the visible item at `index` through the list.
    ///
    /// Returns the refined value, or `None` when nothing is visible there.
    pub fn click(
        &self,
        props: &MenuProps,
        list_state: &mut ListState,
        index: usize,
        target: &mut dyn RefinementTarget,
    ) -> Option<String> {
        let config = props.list_config();
        let mut selector = |item: &RefinementItem, reset_query: &mut dyn FnMut()| {
            self.select_item(item, reset_query, target);
        };
        List::select(&config, list_state, index, &mut selector).map(|item| item.value.clone())
    }

    /// Forwards in-list search input through the list collaborator.
    pub fn search(&self, list_state: &mut ListState, query: &str, target: &mut dyn RefinementTarget) {
        tracing::trace!(query = %query, "in-list search");
        List::type_query(list_state, query, target);
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("cx", &self.cx)
            .field("capability", &self.capability)
            .finish_non_exhaustive()
    }
}
