//! In-list search box renderer.

use crate::ui::helpers::{pad, position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBoxView;

/// Horizontal margin around the box.
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders a three-line bordered box holding the query, or the placeholder
/// while the query is empty. Returns the next free row.
///
/// ```text
/// ┌──────────────────┐
/// │ / red▏           │
/// └──────────────────┘
/// ```
pub fn render_search_box(
    out: &mut String,
    row: usize,
    search: &SearchBoxView,
    focused: bool,
    theme: &Theme,
    cols: usize,
) -> usize {
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    let (text, style) = if search.query.is_empty() && !focused {
        (format!(" / {}", search.placeholder), Theme::fg(&theme.colors.text_dim))
    } else {
        let cursor = if focused { "▏" } else { "" };
        (format!(" / {}{cursor}", search.query), Theme::fg(&theme.colors.text_normal))
    };
    let text = truncate(&text, inner_width);

    position_cursor(out, row, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push('│');
    out.push_str(&style);
    out.push_str(&text);
    pad(out, inner_width.saturating_sub(width(&text)));
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    row + 3
}
