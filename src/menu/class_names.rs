//! Class name generation for widget elements.
//!
//! Every widget element gets a BEM-style class: `ais-<Widget>__<element>`, with
//! `ais-<Widget>__<element>--<modifier>` appended for each active modifier. The
//! root element is plain `ais-<Widget>`.

const PREFIX: &str = "ais";

/// Class name generator bound to one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassNames {
    widget: &'static str,
}

impl ClassNames {
    /// Creates a generator for `widget` (e.g. `"Menu"`).
    #[must_use]
    pub const fn new(widget: &'static str) -> Self {
        Self { widget }
    }

    /// Root class name of the widget.
    #[must_use]
    pub fn root(&self) -> String {
        format!("{PREFIX}-{}", self.widget)
    }

    /// Class name of an element without modifiers.
    #[must_use]
    pub fn element(&self, element: &str) -> String {
        format!("{PREFIX}-{}__{element}", self.widget)
    }

    /// Class names of an element followed by one class per enabled modifier.
    ///
    /// ```
    /// use facet_menu::menu::ClassNames;
    ///
    /// let cx = ClassNames::new("Menu");
    /// assert_eq!(
    ///     cx.with_modifiers("item", &[("selected", true), ("empty", false)]),
    ///     "ais-Menu__item ais-Menu__item--selected",
    /// );
    /// ```
    #[must_use]
    pub fn with_modifiers(&self, element: &str, modifiers: &[(&str, bool)]) -> String {
        let base = self.element(element);
        modifiers
            .iter()
            .filter(|(_, enabled)| *enabled)
            .fold(base.clone(), |mut acc, (modifier, _)| {
                acc.push(' ');
                acc.push_str(&base);
                acc.push_str("--");
                acc.push_str(modifier);
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_and_element() {
        let cx = ClassNames::new("Menu");
        assert_eq!(cx.root(), "ais-Menu");
        assert_eq!(cx.element("link"), "ais-Menu__link");
    }

    #[test]
    fn test_no_modifiers_enabled() {
        let cx = ClassNames::new("Menu");
        assert_eq!(cx.with_modifiers("list", &[("noRefinement", false)]), "ais-Menu__list");
    }
}
