//! View model types representing renderable menu state.
//!
//! Views are immutable, display-ready data computed by the menu and the list
//! collaborator. They carry no callbacks: a click is dispatched back through
//! [`Menu::click`](crate::menu::Menu::click) using the item's position, and the
//! `href` on every [`ItemView`] is a valid target even before that happens.
//!
//! # Architecture
//!
//! ```text
//! MenuProps → Menu::render → MenuView ─┐
//!                                       ├→ UIViewModel → ui::render → ANSI
//! AppState (cursor, mode) ──────────────┘
//! ```

/// Complete screen view model for the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// The rendered menu widget.
    pub menu: MenuView,

    /// Cursor position within `menu.list.items`.
    pub selected_index: usize,

    /// Whether the cursor sits on the show-more toggle instead of an item.
    pub show_more_selected: bool,

    /// Whether keystrokes currently go to the in-list search box.
    pub search_focused: bool,

    /// Keybinding help text.
    pub keybindings: String,

    /// Shown instead of the list when the facet has nothing to refine.
    pub empty_state: Option<EmptyState>,
}

/// The rendered menu widget: chrome plus the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    /// Root class name (`ais-Menu`).
    pub class_name: String,

    /// Optional header framing.
    pub header: Option<HeaderInfo>,

    /// The list collaborator's output.
    pub list: ListView,

    /// Optional footer framing.
    pub footer: Option<FooterInfo>,
}

/// Output of the generic list collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    /// Class names for the list container, including `--noRefinement` when
    /// nothing can be refined.
    pub class_name: String,

    /// Mirrors the `can_refine` prop.
    pub can_refine: bool,

    /// In-list search box, present when `with_search_box` is set.
    pub search_box: Option<SearchBoxView>,

    /// One view per visible item, in input order.
    pub items: Vec<ItemView>,

    /// Show more / show less toggle.
    pub show_more: Option<ShowMoreView>,

    /// Message shown when an in-list search matched nothing.
    pub no_results: Option<String>,
}

/// A single selectable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    /// Item class names, with `--selected` when refined.
    pub class_name: String,

    /// Link element class name.
    pub link_class_name: String,

    /// Shareable destination, `create_url(value)`.
    pub href: String,

    /// Facet value the click handler refines on.
    pub value: String,

    /// Label class name.
    pub label_class_name: String,

    /// Plain or highlighted label.
    pub label: LabelView,

    /// Count badge class name.
    pub count_class_name: String,

    /// Number of matching records.
    pub count: u64,

    /// Whether this entry is the active refinement.
    pub is_refined: bool,
}

/// Label content of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelView {
    /// Raw label string.
    Plain(String),

    /// Label split into highlighted and normal segments.
    Highlighted(Vec<Segment>),
}

impl LabelView {
    /// Returns the label text without highlight markup.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::Highlighted(segments) => segments.iter().map(|s| s.text.as_str()).collect(),
        }
    }
}

/// A run of label characters sharing the same highlight state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Segment text.
    pub text: String,

    /// Whether the segment matched the in-list query.
    pub highlighted: bool,
}

/// In-list search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBoxView {
    /// Current query text.
    pub query: String,

    /// Placeholder shown while the query is empty.
    pub placeholder: String,

    /// Tooltip of the submit control.
    pub submit_title: String,

    /// Tooltip of the reset control.
    pub reset_title: String,

    /// Optional submit label.
    pub submit: Option<String>,

    /// Optional reset label.
    pub reset: Option<String>,
}

/// Show more / show less toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowMoreView {
    /// Translated label for the current state.
    pub label: String,

    /// Whether the list is currently extended to `limit_max`.
    pub extended: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Footer text.
    pub text: String,
}

/// Empty state message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
