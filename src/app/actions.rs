//! Side effects produced by the event handler for the plugin runtime.

/// Commands executed by the plugin runtime after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// A menu entry was selected and the host refined on it.
    ///
    /// `url` is the entry's link target at the moment of the click, for the
    /// runtime to publish or log.
    Refined {
        /// Value passed to `refine`.
        value: String,
        /// Shareable URL of the selection.
        url: String,
    },
}
