//! Menu list renderer: item rows, the show-more toggle and the empty-result
//! message.

use crate::ui::helpers::{pad, position_cursor, render_segments, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ItemView, LabelView, ListView, Segment};

/// Renders every visible row of `list` starting at `row`, stopping before
/// `max_row`. Returns the next free row.
#[allow(clippy::too_many_arguments)]
pub fn render_list(
    out: &mut String,
    row: usize,
    max_row: usize,
    list: &ListView,
    cursor: Option<usize>,
    show_more_selected: bool,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;

    if let Some(message) = &list.no_results {
        position_cursor(out, current_row, 1);
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&format!("  {message}"));
        pad(out, cols.saturating_sub(width(message) + 2));
        out.push_str(Theme::reset());
        return current_row + 1;
    }

    for (index, item) in list.items.iter().enumerate() {
        if current_row >= max_row {
            return current_row;
        }
        current_row = render_item_row(out, current_row, item, cursor == Some(index), theme, cols);
    }

    if let Some(toggle) = list.show_more.as_ref().filter(|_| current_row < max_row) {
        position_cursor(out, current_row, 1);
        let restore = if show_more_selected {
            format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
        } else {
            Theme::fg(&theme.colors.text_dim)
        };
        let text = format!("  {} {}", if toggle.extended { "▴" } else { "▾" }, toggle.label);
        out.push_str(&restore);
        out.push_str(&text);
        pad(out, cols.saturating_sub(width(&text)));
        out.push_str(Theme::reset());
        current_row += 1;
    }

    current_row
}

/// Renders one item:
///
/// ```text
/// ● Blue                                 2
/// ○ Red                                  5
/// ```
///
/// The count is right-aligned; the label is truncated to leave room for it.
fn render_item_row(
    out: &mut String,
    row: usize,
    item: &ItemView,
    is_selected: bool,
    theme: &Theme,
    cols: usize,
) -> usize {
    let base = if is_selected {
        format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
    } else if item.is_refined {
        Theme::fg(&theme.colors.refined_fg)
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    let marker = if item.is_refined { "● " } else { "○ " };
    let count = item.count.to_string();
    let label_budget = cols.saturating_sub(width(marker) + width(&count) + 4);
    let segments = fit_label(&item.label, label_budget);
    let label_len: usize = segments.iter().map(|s| width(&s.text)).sum();

    position_cursor(out, row, 1);
    out.push_str(&base);
    out.push_str(&format!(" {marker}"));
    if item.is_refined {
        out.push_str(Theme::bold());
    }
    render_segments(out, &segments, theme, is_selected, &base);
    out.push_str(Theme::reset());
    out.push_str(&base);

    let used = 1 + width(marker) + label_len;
    pad(out, cols.saturating_sub(used + width(&count) + 1));
    if !is_selected {
        out.push_str(&Theme::fg(&theme.colors.count_fg));
    }
    out.push_str(&count);
    out.push(' ');
    out.push_str(Theme::reset());
    row + 1
}

/// Flattens a label into segments no wider than `budget` characters.
fn fit_label(label: &LabelView, budget: usize) -> Vec<Segment> {
    let segments = match label {
        LabelView::Plain(text) => vec![Segment { text: text.clone(), highlighted: false }],
        LabelView::Highlighted(segments) => segments.clone(),
    };
    if width(&label.text()) <= budget {
        return segments;
    }
    if budget == 0 {
        return Vec::new();
    }

    let mut remaining = budget.saturating_sub(1);
    let mut fitted = Vec::new();
    for segment in segments {
        if remaining == 0 {
            break;
        }
        let text: String = segment.text.chars().take(remaining).collect();
        remaining -= width(&text);
        fitted.push(Segment { text, highlighted: segment.highlighted });
    }
    fitted.push(Segment { text: "…".to_string(), highlighted: false });
    fitted
}
