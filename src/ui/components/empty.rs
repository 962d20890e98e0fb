//! Empty state component renderer.

use crate::ui::helpers::{pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centered two-line message starting at `row`.
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let lines = [
        (empty.message.as_str(), Theme::fg(&theme.colors.empty_state_fg)),
        (empty.subtitle.as_str(), format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))),
    ];

    for (offset, (text, style)) in lines.iter().enumerate() {
        let len = width(text);
        let padding = cols.saturating_sub(len) / 2;
        position_cursor(out, row + offset, 1);
        out.push_str(style);
        pad(out, padding);
        out.push_str(text);
        pad(out, cols.saturating_sub(padding + len));
        out.push_str(Theme::reset());
    }
    row + lines.len()
}
