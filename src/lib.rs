//! Facet menu: a single-facet refinement widget with a Zellij plugin front-end.
//!
//! The menu exposes one facet (say `color`) as a list of mutually exclusive
//! values with counts. It holds no refinement data of its own: the host hands
//! it items each cycle, the menu renders them through a generic list, and a
//! selection first clears the list's in-list query and then asks the host to
//! refine. Whether anything is refinable is reported upward on a capability
//! channel.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs, feature "plugin")     │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Events, actions,
//! │                                                     │    view models
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Menu (menu/)  │   │ List (list/)  │   │ Host (host/)  │
//! │ - mediation   │──→│ - pagination  │   │ - FacetState  │
//! │ - item views  │   │ - search box  │   │ - fuzzy search│
//! │ - capability  │   │ - highlight   │   │ - URLs        │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI (ui/), Domain (domain/), Infrastructure,        │
//! │  Observability (OpenTelemetry file export)          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`menu`]: The menu widget
//! - [`list`]: Generic list collaborator and highlighting
//! - [`host`]: In-memory facet refinement state
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Refinement item record and errors
//! - [`ui`]: Terminal rendering with theme support
//! - [`infrastructure`]: Sandbox paths
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/facet-menu.wasm" {
//!         attribute "color"
//!         values "red:5,blue:2,green:1"
//!         show_more "true"
//!         limit_min "5"
//!         limit_max "15"
//!         with_search_box "true"
//!         header "Colors"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! Values can also be pushed later as a `facet-menu-items` custom message
//! carrying a JSON array of `{"value": ..., "count": ...}` objects.
//!
//! # Example
//!
//! ```
//! use facet_menu::{handle_event, initialize, Action, Config, Event};
//! use std::collections::BTreeMap;
//!
//! let mut map = BTreeMap::new();
//! map.insert("attribute".to_string(), "color".to_string());
//! map.insert("values".to_string(), "red:5,blue:2".to_string());
//!
//! let mut state = initialize(&Config::from_zellij(&map))?;
//! handle_event(&mut state, &Event::KeyDown)?;
//! let (_, actions) = handle_event(&mut state, &Event::Select)?;
//!
//! assert_eq!(
//!     actions,
//!     vec![Action::Refined {
//!         value: "blue".to_string(),
//!         url: "?menu[color]=blue".to_string(),
//!     }]
//! );
//! # Ok::<(), facet_menu::MenuError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod host;
pub mod infrastructure;
pub mod list;
pub mod menu;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Chrome, Event, InputMode};
pub use domain::{MenuError, RefinementItem, Result};
pub use menu::Menu;
pub use ui::Theme;

use host::{FacetState, FacetValue};
use menu::{ListConfig, Translations, DEFAULT_LIMIT_MAX, DEFAULT_LIMIT_MIN};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Attribute used when the configuration names none.
pub const DEFAULT_ATTRIBUTE: &str = "category";

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Facet attribute the menu refines on.
    pub attribute: String,

    /// Initial facet values.
    pub values: Vec<FacetValue>,

    pub show_more: bool,
    pub limit_min: usize,
    pub limit_max: usize,
    pub with_search_box: bool,

    pub header: Option<String>,
    pub footer: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` maps to the sandbox's `/host`.
    pub theme_file: Option<String>,

    /// Tracing level: `trace`, `debug`, `info`, `warn` or `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Translation overrides.
    pub show_more_label: Option<String>,
    pub show_less_label: Option<String>,
    pub no_results: Option<String>,
    pub placeholder: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attribute: DEFAULT_ATTRIBUTE.to_string(),
            values: Vec::new(),
            show_more: false,
            limit_min: DEFAULT_LIMIT_MIN,
            limit_max: DEFAULT_LIMIT_MAX,
            with_search_box: false,
            header: None,
            footer: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            show_more_label: None,
            show_less_label: None,
            no_results: None,
            placeholder: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `values`: a JSON array of facet values, or `value:count` pairs
    ///   separated by commas; malformed entries are skipped
    /// - `show_more`, `with_search_box`: `true` / `false`
    /// - `limit_min`, `limit_max`: unsigned integers
    /// - everything else: copied as is
    ///
    /// Unparsable values fall back to their defaults.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use facet_menu::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("attribute".to_string(), "brand".to_string());
    /// map.insert("values".to_string(), "acme:3, globex:1".to_string());
    /// map.insert("limit_min".to_string(), "five".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.attribute, "brand");
    /// assert_eq!(config.values.len(), 2);
    /// assert_eq!(config.limit_min, 10);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        Self {
            attribute: text("attribute").unwrap_or(defaults.attribute),
            values: config
                .get("values")
                .map(|raw| parse_values(raw))
                .unwrap_or_default(),
            show_more: parse_or(config, "show_more", defaults.show_more),
            limit_min: parse_or(config, "limit_min", defaults.limit_min),
            limit_max: parse_or(config, "limit_max", defaults.limit_max),
            with_search_box: parse_or(config, "with_search_box", defaults.with_search_box),
            header: text("header"),
            footer: text("footer"),
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
            show_more_label: text("show_more_label"),
            show_less_label: text("show_less_label"),
            no_results: text("no_results"),
            placeholder: text("placeholder"),
        }
    }

    /// Pagination, search box and translation settings for the list.
    #[must_use]
    pub fn list_template(&self) -> ListConfig {
        let defaults = Translations::default();
        let translations = Translations {
            show_more: self.show_more_label.clone().unwrap_or(defaults.show_more),
            show_less: self.show_less_label.clone().unwrap_or(defaults.show_less),
            no_results: self.no_results.clone().unwrap_or(defaults.no_results),
            placeholder: self.placeholder.clone().unwrap_or(defaults.placeholder),
            ..defaults
        };

        ListConfig {
            show_more: self.show_more,
            limit_min: self.limit_min,
            limit_max: self.limit_max,
            ..ListConfig::new(Vec::new(), false)
        }
        .with_search_box(self.with_search_box)
        .with_translations(translations)
    }

    #[must_use]
    pub fn chrome(&self) -> Chrome {
        Chrome {
            header: self.header.clone(),
            footer: self.footer.clone(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                let path = infrastructure::expand_tilde(theme_file);
                Theme::from_file(&path).unwrap_or_else(|e| {
                    tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

fn parse_or<T: FromStr>(config: &BTreeMap<String, String>, key: &str, default: T) -> T {
    let Some(raw) = config.get(key) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::debug!(key, value = %raw, "invalid configuration value, using default");
        default
    })
}

fn parse_values(raw: &str) -> Vec<FacetValue> {
    let raw = raw.trim();
    if raw.starts_with('[') {
        return FacetState::parse_values(raw).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "invalid values payload in configuration");
            Vec::new()
        });
    }

    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let parsed = entry
                .rsplit_once(':')
                .and_then(|(value, count)| Some((value.trim(), count.trim().parse::<u64>().ok()?)))
                .filter(|(value, _)| !value.is_empty());
            if parsed.is_none() {
                tracing::debug!(entry, "skipping malformed facet value");
            }
            parsed.map(|(value, count)| FacetValue::from((value.to_string(), count)))
        })
        .collect()
}

/// Initializes the application from configuration.
///
/// Resolves the theme (file, then name, then default) and mounts the menu on a
/// facet built from `config.values`.
///
/// # Errors
///
/// Returns [`MenuError::InvalidProps`] when the configured limits do not
/// validate.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!(attribute = %config.attribute, "initializing facet menu");

    let facet = FacetState::from_values(config.attribute.clone(), config.values.clone());
    AppState::new(facet, config.list_template(), config.chrome(), config.theme())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config, Config::default());
        assert_eq!(config.attribute, DEFAULT_ATTRIBUTE);
    }

    #[test]
    fn test_parses_pairs_and_skips_malformed() {
        let config = Config::from_zellij(&map(&[("values", "red:5, blue:x, :3, green:1,")]));
        let values: Vec<_> = config.values.iter().map(|v| (v.value.as_str(), v.count)).collect();
        assert_eq!(values, vec![("red", 5), ("green", 1)]);
    }

    #[test]
    fn test_parses_json_values() {
        let config = Config::from_zellij(&map(&[(
            "values",
            r#"[{"value":"a b","count":2,"label":"A B"}]"#,
        )]));
        assert_eq!(config.values[0].label.as_deref(), Some("A B"));
    }

    #[test]
    fn test_json_values_with_empty_value_are_dropped() {
        let config = Config::from_zellij(&map(&[(
            "values",
            r#"[{"value":"","count":1},{"value":"green","count":4}]"#,
        )]));
        assert!(config.values.is_empty());
        assert!(initialize(&config).is_ok());
    }

    #[test]
    fn test_list_template() {
        let config = Config::from_zellij(&map(&[
            ("show_more", "true"),
            ("limit_min", "3"),
            ("limit_max", "6"),
            ("with_search_box", "yes"),
            ("show_more_label", "More colors"),
        ]));
        let template = config.list_template();

        assert!(template.show_more);
        assert_eq!((template.limit_min, template.limit_max), (3, 6));
        assert!(!template.with_search_box);
        assert_eq!(template.translations.show_more, "More colors");
        assert_eq!(template.translations.show_less, "Show less");
    }

    #[test]
    fn test_initialize_reports_capability() {
        let state = initialize(&Config::from_zellij(&map(&[("values", "red:1")]))).unwrap();
        assert!(state.can_refine());
        assert_eq!(state.facet.attribute(), DEFAULT_ATTRIBUTE);

        let empty = initialize(&Config::default()).unwrap();
        assert!(!empty.can_refine());
    }

    #[test]
    fn test_initialize_rejects_bad_limits() {
        let config = Config::from_zellij(&map(&[("limit_min", "0")]));
        assert!(matches!(initialize(&config), Err(MenuError::InvalidProps(_))));
    }

    #[test]
    fn test_theme_resolution() {
        let latte = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&latte).unwrap().theme.name, "catppuccin-latte");

        let unknown = Config {
            theme_name: Some("nope".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&unknown).unwrap().theme.name, "catppuccin-mocha");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut theme = Theme::default();
        theme.name = "from-file".to_string();
        write!(file, "{}", toml::to_string(&theme).unwrap()).unwrap();
        let from_file = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().to_string_lossy().to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&from_file).unwrap().theme.name, "from-file");
    }
}
