//! Composable UI component renderers.
//!
//! - [`header`]: Menu title
//! - [`footer`]: Widget footer and keybinding hints
//! - [`search`]: In-list search box
//! - [`list`]: Item rows and the show-more toggle
//! - [`empty`]: Message shown when the facet has nothing to refine
//!
//! [`render_screen`] lays them out:
//!
//! ```text
//! [Header]
//! [Border]
//! [Search box - 3 lines, optional]
//! [Item rows]
//! [Show more, optional]
//! [Blank padding]
//! [Widget footer, optional]
//! [Border]
//! [Keybindings]
//! ```

mod empty;
mod footer;
mod header;
mod list;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::render_list;
use search::render_search_box;

/// Title used when the host supplies no header.
const DEFAULT_TITLE: &str = "Menu";

fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders a full frame into a string.
#[must_use]
pub fn render_screen(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::new();
    let menu = &vm.menu;

    let fallback = HeaderInfo { title: DEFAULT_TITLE.to_string() };
    let mut row = render_header(&mut out, 1, menu.header.as_ref().unwrap_or(&fallback), theme, cols);
    row = render_border(&mut out, row, &theme.colors.border, cols);

    let keybindings_row = rows.max(4);
    let bottom_border_row = keybindings_row - 1;
    let list_limit = if menu.footer.is_some() { bottom_border_row - 1 } else { bottom_border_row };

    if let Some(empty) = &vm.empty_state {
        render_empty_state(&mut out, row + 1, empty, theme, cols);
    } else {
        if let Some(search) = &menu.list.search_box {
            row = render_search_box(&mut out, row, search, vm.search_focused, theme, cols);
        }
        let cursor = (!vm.show_more_selected).then_some(vm.selected_index);
        render_list(&mut out, row, list_limit, &menu.list, cursor, vm.show_more_selected, theme, cols);
    }

    if let Some(footer) = &menu.footer {
        render_footer(&mut out, list_limit, &footer.text, theme, cols);
    }
    render_border(&mut out, bottom_border_row, &theme.colors.border, cols);
    render_footer(&mut out, keybindings_row, &vm.keybindings, theme, cols);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::{EmptyState, FooterInfo, ListView, MenuView};

    fn viewmodel(footer: Option<&str>, empty_state: Option<EmptyState>) -> UIViewModel {
        UIViewModel {
            menu: MenuView {
                class_name: "ais-Menu".to_string(),
                header: None,
                list: ListView {
                    class_name: "ais-Menu__list".to_string(),
                    can_refine: empty_state.is_none(),
                    search_box: None,
                    items: Vec::new(),
                    show_more: None,
                    no_results: None,
                },
                footer: footer.map(|text| FooterInfo { text: text.to_string() }),
            },
            selected_index: 0,
            show_more_selected: false,
            search_focused: false,
            keybindings: "q: quit".to_string(),
            empty_state,
        }
    }

    #[test]
    fn test_screen_has_default_title_and_hints() {
        let out = render_screen(&viewmodel(Some("2 values"), None), &Theme::default(), 12, 30);
        assert!(out.contains(DEFAULT_TITLE));
        assert!(out.contains("2 values"));
        assert!(out.contains("q: quit"));
    }

    #[test]
    fn test_screen_shows_empty_state() {
        let empty = EmptyState {
            message: "No values".to_string(),
            subtitle: "Nothing to refine yet".to_string(),
        };
        let out = render_screen(&viewmodel(None, Some(empty)), &Theme::default(), 3, 30);
        assert!(out.contains("No values"));
    }
}
