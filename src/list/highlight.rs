//! Highlight collaborator.
//!
//! Turns one attribute of a hit into a [`LabelView`], marking the character
//! ranges an in-list search matched. Ranges come from the hit record itself, so
//! highlighting needs no access to the query.

use crate::domain::RefinementItem;
use crate::ui::viewmodel::{LabelView, Segment};

/// Renders an attribute of a hit with match highlighting.
pub trait Highlighter {
    /// Renders `attribute` of `hit`.
    fn highlight(&self, attribute: &str, hit: &RefinementItem) -> LabelView;
}

/// Highlighter driven by the hit's `highlight` ranges.
///
/// Ranges apply to the `label` attribute. Other attributes render plain.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeHighlighter;

impl Highlighter for RangeHighlighter {
    fn highlight(&self, attribute: &str, hit: &RefinementItem) -> LabelView {
        match attribute {
            "label" => LabelView::Highlighted(split_segments(&hit.label, &hit.highlight)),
            "value" => LabelView::Plain(hit.value.clone()),
            other => {
                tracing::debug!(attribute = %other, "unknown highlight attribute, rendering label");
                LabelView::Plain(hit.label.clone())
            }
        }
    }
}

/// Splits `text` into alternating normal/highlighted segments.
///
/// Ranges are character indices with an exclusive end. They may be unsorted,
/// overlap, or run past the end of the text; out-of-range parts are dropped
/// and overlapping ranges merged.
///
/// ```
/// use facet_menu::list::highlight::split_segments;
///
/// let segments = split_segments("crimson", &[(0, 2), (4, 5)]);
/// let rendered: Vec<_> = segments.iter().map(|s| (s.text.as_str(), s.highlighted)).collect();
/// assert_eq!(
///     rendered,
///     vec![("cr", true), ("im", false), ("s", true), ("on", false)],
/// );
/// ```
#[must_use]
pub fn split_segments(text: &str, ranges: &[(usize, usize)]) -> Vec<Segment> {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut current_pos = 0;

    for (start, end) in normalize_ranges(ranges, chars.len()) {
        if start > current_pos {
            segments.push(Segment {
                text: chars[current_pos..start].iter().collect(),
                highlighted: false,
            });
        }
        segments.push(Segment {
            text: chars[start..end].iter().collect(),
            highlighted: true,
        });
        current_pos = end;
    }

    if current_pos < chars.len() || segments.is_empty() {
        segments.push(Segment {
            text: chars[current_pos..].iter().collect(),
            highlighted: false,
        });
    }

    segments
}

/// Sorts, clamps to `len`, drops empty ranges and merges overlapping or
/// adjacent ones.
fn normalize_ranges(ranges: &[(usize, usize)], len: usize) -> Vec<(usize, usize)> {
    let mut clamped: Vec<(usize, usize)> = ranges
        .iter()
        .map(|&(start, end)| (start.min(len), end.min(len)))
        .filter(|(start, end)| start < end)
        .collect();
    clamped.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(clamped.len());
    for (start, end) in clamped {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}
