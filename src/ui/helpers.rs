//! Shared rendering utilities.
//!
//! Components append ANSI-styled text to a `String` buffer rather than printing
//! directly, so a full frame is written to stdout in one go and components can
//! be tested on their output.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::Segment;

/// Appends a cursor move to `row`, `col` (both 1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Appends `count` spaces.
pub fn pad(out: &mut String, count: usize) {
    out.push_str(&" ".repeat(count));
}

/// Visible width of `text` in characters.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to `max` characters, ending with `…` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Appends label segments, styling highlighted runs.
///
/// On the cursor row, highlighted runs only switch to bold so the selection
/// background stays intact; `restore` is re-applied after each styled run.
pub fn render_segments(
    out: &mut String,
    segments: &[Segment],
    theme: &Theme,
    is_selected: bool,
    restore: &str,
) {
    for segment in segments {
        if !segment.highlighted {
            out.push_str(&segment.text);
            continue;
        }

        if is_selected {
            out.push_str(Theme::bold());
        } else {
            out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
            out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        }
        out.push_str(&segment.text);
        out.push_str(Theme::reset());
        out.push_str(restore);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long label", 6), "a lon…");
    }

    #[test]
    fn test_render_segments_keeps_text_order() {
        let segments = vec![
            Segment { text: "gr".to_string(), highlighted: true },
            Segment { text: "een".to_string(), highlighted: false },
        ];
        let mut out = String::new();
        render_segments(&mut out, &segments, &Theme::default(), false, "");

        let gr = out.find("gr").unwrap();
        let een = out.find("een").unwrap();
        assert!(gr < een);
        assert!(out.contains(Theme::reset()));
    }
}
