//! Translation table forwarded to the list collaborator.
//!
//! The menu performs no lookup logic of its own: it owns the default strings
//! and hands the whole table to the list, which picks labels for the show-more
//! toggle, the search box, and the empty-result message.

/// Message keys understood by [`Translations::translate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationKey {
    /// Show-more toggle; depends on the extended state.
    ShowMore,
    /// Empty in-list search result.
    NoResults,
    /// Search box placeholder.
    Placeholder,
    /// Tooltip of the search reset control.
    ResetTitle,
    /// Tooltip of the search submit control.
    SubmitTitle,
    /// Label of the submit control (unset by default).
    Submit,
    /// Label of the reset control (unset by default).
    Reset,
}

/// Strings used by the menu's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translations {
    /// Toggle label while collapsed.
    pub show_more: String,
    /// Toggle label while extended.
    pub show_less: String,
    pub no_results: String,
    pub placeholder: String,
    pub reset_title: String,
    pub submit_title: String,
    pub submit: Option<String>,
    pub reset: Option<String>,
}

impl Default for Translations {
    fn default() -> Self {
        Self {
            show_more: "Show more".to_string(),
            show_less: "Show less".to_string(),
            no_results: "No results".to_string(),
            placeholder: "Search here…".to_string(),
            reset_title: "Clear the search query.".to_string(),
            submit_title: "Submit your search query.".to_string(),
            submit: None,
            reset: None,
        }
    }
}

impl Translations {
    /// Looks up `key`. `extended` only matters for [`TranslationKey::ShowMore`].
    ///
    /// ```
    /// use facet_menu::menu::{TranslationKey, Translations};
    ///
    /// let t = Translations::default();
    /// assert_eq!(t.translate(TranslationKey::ShowMore, true), Some("Show less"));
    /// assert_eq!(t.translate(TranslationKey::Submit, false), None);
    /// ```
    #[must_use]
    pub fn translate(&self, key: TranslationKey, extended: bool) -> Option<&str> {
        match key {
            TranslationKey::ShowMore if extended => Some(&self.show_less),
            TranslationKey::ShowMore => Some(&self.show_more),
            TranslationKey::NoResults => Some(&self.no_results),
            TranslationKey::Placeholder => Some(&self.placeholder),
            TranslationKey::ResetTitle => Some(&self.reset_title),
            TranslationKey::SubmitTitle => Some(&self.submit_title),
            TranslationKey::Submit => self.submit.as_deref(),
            TranslationKey::Reset => self.reset.as_deref(),
        }
    }

    /// Owned lookup, falling back to an empty string for unset keys.
    #[must_use]
    pub fn text(&self, key: TranslationKey, extended: bool) -> String {
        self.translate(key, extended).unwrap_or_default().to_string()
    }
}
