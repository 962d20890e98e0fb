//! Zellij plugin wrapper and entry point.
//!
//! A thin shim between the `facet_menu` library and the Zellij plugin system:
//! it maps Zellij events to library events, runs [`handle_event`], executes the
//! resulting actions, and renders.
//!
//! # Event Mapping
//!
//! - `Key` → navigation, selection, search and show-more events
//! - `CustomMessage("facet-menu-items", json)` → `Event::ItemsLoaded`
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//! - `Enter`: Select the entry under the cursor
//!
//! In normal mode:
//! - `j`/`Down`: Move down
//! - `k`/`Up`: Move up
//! - `/`: Focus the search box (when enabled)
//! - `m`: Show more / show less
//! - `q`/`Esc`: Close plugin
//!
//! In search mode:
//! - Any character: Edit the query
//! - `Backspace`: Delete the last character
//! - `Esc`: Clear the query and leave search

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use facet_menu::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Name of the custom message carrying facet values.
const ITEMS_MESSAGE: &str = "facet-menu-items";

/// Plugin state wrapper.
///
/// `app` stays empty until `load` succeeds; an unusable configuration leaves
/// the pane blank and logs why.
#[derive(Default)]
struct State {
    app: Option<facet_menu::AppState>,
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and state, subscribes to
    /// events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        facet_menu::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load", attribute = %config.attribute);
        let _guard = span.entered();

        self.app = Self::initialize_or_default(&config);
        tracing::debug!(value_count = config.values.len(), "app state initialized");

        subscribe(&[EventType::Key, EventType::CustomMessage]);
    }

    /// Translates a Zellij event and returns whether to re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let Some(app) = self.app.as_mut() else {
            return false;
        };

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(app.input_mode, key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message_event(&message, payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        let span = tracing::debug_span!("plugin_update_event", event = ?our_event);
        let _guard = span.entered();

        match handle_event(app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        if let Some(app) = &self.app {
            facet_menu::ui::render(app, rows, cols);
        }
    }
}

impl State {
    /// Falls back to default list settings when `config` does not validate.
    fn initialize_or_default(config: &Config) -> Option<facet_menu::AppState> {
        facet_menu::initialize(config)
            .or_else(|e| {
                tracing::warn!(error = %e, "invalid configuration, using default list settings");
                facet_menu::initialize(&Config {
                    attribute: config.attribute.clone(),
                    values: config.values.clone(),
                    ..Config::default()
                })
            })
            .map_err(|e| tracing::warn!(error = %e, "failed to initialize facet menu"))
            .ok()
    }

    /// Maps keyboard events to application events.
    fn map_key_event(mode: InputMode, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        let searching = mode == InputMode::Search;
        Some(match key.bare_key {
            BareKey::Enter => Event::Select,
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Esc if searching => Event::ExitSearch,
            BareKey::Esc => Event::CloseFocus,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if searching => Event::Char(c),
            BareKey::Char('j') => Event::KeyDown,
            BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('m') => Event::ToggleShowMore,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps custom messages carrying facet values.
    fn map_custom_message_event(message: &str, payload: String) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message == ITEMS_MESSAGE {
            Some(Event::ItemsLoaded { payload })
        } else {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            None
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Refined { value, url } => {
                tracing::info!(value = %value, url = %url, "refinement applied");
            }
        }
    }
}
