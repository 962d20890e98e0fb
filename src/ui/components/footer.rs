//! Footer component renderer.

use crate::ui::helpers::{pad, position_cursor, truncate, width};
use crate::ui::theme::Theme;

/// Renders dimmed, left-aligned `text` on `row`. Returns the next free row.
pub fn render_footer(out: &mut String, row: usize, text: &str, theme: &Theme, cols: usize) -> usize {
    let line = truncate(&format!(" {text}"), cols);

    position_cursor(out, row, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&line);
    pad(out, cols.saturating_sub(width(&line)));
    out.push_str(Theme::reset());
    row + 1
}
