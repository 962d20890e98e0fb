//! Callbacks the menu drives on its host.

/// Host-side refinement operations.
///
/// The search-state layer implements this; the menu only forwards calls. Errors
/// raised while applying a refinement belong to the host.
pub trait RefinementTarget {
    /// Applies `value` as the facet's refinement.
    fn refine(&mut self, value: &str);

    /// Runs an in-list search over the facet's candidate values.
    fn search_for_items(&mut self, query: &str);

    /// Builds a shareable URL that would apply `value`. Must be pure.
    fn create_url(&self, value: &str) -> String;
}
