//! Menu properties.
//!
//! [`ListConfig`] is the part of the configuration the menu hands to the list
//! collaborator as-is. [`MenuProps`] wraps it with the fields only the menu
//! itself reads (chrome and the item transform).

use super::translations::Translations;
use crate::domain::{MenuError, RefinementItem, Result};
use std::fmt;
use std::rc::Rc;

/// Items shown before "show more" is toggled.
pub const DEFAULT_LIMIT_MIN: usize = 10;

/// Items shown once "show more" is toggled.
pub const DEFAULT_LIMIT_MAX: usize = 20;

/// Host-supplied rewrite of the item list, applied before rendering.
pub type TransformItems = Rc<dyn Fn(Vec<RefinementItem>) -> Vec<RefinementItem>>;

/// Configuration shared between the menu and the list collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Candidate refinement values.
    pub items: Vec<RefinementItem>,

    /// Whether the list offers a show more / show less toggle.
    pub show_more: bool,

    /// Visible items while collapsed.
    pub limit_min: usize,

    /// Visible items while extended.
    pub limit_max: usize,

    /// `items` come from an in-list search rather than the base listing.
    pub is_from_search: bool,

    /// Whether the list renders a search box.
    pub with_search_box: bool,

    /// Whether the facet has any refinable value.
    pub can_refine: bool,

    pub translations: Translations,
}

impl ListConfig {
    /// Creates a config with default pagination, no search box and no toggle.
    #[must_use]
    pub fn new(items: Vec<RefinementItem>, can_refine: bool) -> Self {
        Self {
            items,
            show_more: false,
            limit_min: DEFAULT_LIMIT_MIN,
            limit_max: DEFAULT_LIMIT_MAX,
            is_from_search: false,
            with_search_box: false,
            can_refine,
            translations: Translations::default(),
        }
    }

    /// Enables the show-more toggle with the given bounds.
    #[must_use]
    pub const fn with_show_more(mut self, limit_min: usize, limit_max: usize) -> Self {
        self.show_more = true;
        self.limit_min = limit_min;
        self.limit_max = limit_max;
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit_min: usize) -> Self {
        self.limit_min = limit_min;
        self
    }

    #[must_use]
    pub const fn with_search_box(mut self, enabled: bool) -> Self {
        self.with_search_box = enabled;
        self
    }

    #[must_use]
    pub const fn from_search(mut self, is_from_search: bool) -> Self {
        self.is_from_search = is_from_search;
        self
    }

    #[must_use]
    pub fn with_translations(mut self, translations: Translations) -> Self {
        self.translations = translations;
        self
    }
}

/// Full property set of the menu widget.
///
/// Build it with [`MenuProps::new`], which validates the configuration so that
/// nothing malformed ever reaches item selection.
///
/// ```
/// use facet_menu::menu::{ListConfig, MenuProps};
/// use facet_menu::RefinementItem;
///
/// let list = ListConfig::new(vec![RefinementItem::new("red", 5)], true);
/// let props = MenuProps::new(list).unwrap().with_header("Colors");
/// assert_eq!(props.header.as_deref(), Some("Colors"));
///
/// let broken = ListConfig::new(vec![], false).with_show_more(5, 2);
/// assert!(MenuProps::new(broken).is_err());
/// ```
#[derive(Clone)]
pub struct MenuProps {
    pub list: ListConfig,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub transform_items: Option<TransformItems>,
}

impl MenuProps {
    /// Validates `list` and wraps it with empty chrome.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InvalidProps`] when a limit is zero, `limit_max` is
    /// below `limit_min`, or an item has an empty value.
    pub fn new(list: ListConfig) -> Result<Self> {
        let props = Self {
            list,
            header: None,
            footer: None,
            transform_items: None,
        };
        props.validate()?;
        Ok(props)
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    #[must_use]
    pub fn with_transform(mut self, transform: TransformItems) -> Self {
        self.transform_items = Some(transform);
        self
    }

    /// Checks value-level rules the type system cannot express.
    ///
    /// # Errors
    ///
    /// See [`MenuProps::new`].
    pub fn validate(&self) -> Result<()> {
        let list = &self.list;
        if list.limit_min == 0 {
            return Err(MenuError::InvalidProps("limit_min must be at least 1".to_string()));
        }
        if list.limit_max < list.limit_min {
            return Err(MenuError::InvalidProps(format!(
                "limit_max ({}) is below limit_min ({})",
                list.limit_max, list.limit_min
            )));
        }
        if let Some(position) = list.items.iter().position(|item| item.value.is_empty()) {
            return Err(MenuError::InvalidProps(format!(
                "item at position {position} has an empty value"
            )));
        }
        Ok(())
    }

    /// The configuration forwarded to the list, with `transform_items` applied.
    #[must_use]
    pub fn list_config(&self) -> ListConfig {
        let mut config = self.list.clone();
        if let Some(transform) = &self.transform_items {
            config.items = transform(config.items);
        }
        config
    }
}

impl fmt::Debug for MenuProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuProps")
            .field("list", &self.list)
            .field("header", &self.header)
            .field("footer", &self.footer)
            .field("transform_items", &self.transform_items.is_some())
            .finish()
    }
}
