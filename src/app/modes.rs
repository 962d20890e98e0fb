//! Input mode state machine.
//!
//! - **Normal**: cursor navigation, selection, show-more toggling
//! - **Search**: keystrokes edit the in-list query

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// j/k navigate, Enter selects, `/` opens the search box, `m` toggles show more.
    #[default]
    Normal,

    /// Characters edit the in-list query; Esc leaves and clears it.
    Search,
}
