//! Per-item view logic.

use super::class_names::ClassNames;
use super::target::RefinementTarget;
use crate::domain::RefinementItem;
use crate::list::Highlighter;
use crate::ui::viewmodel::{ItemView, LabelView};

/// Renders one refinement item as a selectable entry.
///
/// The label goes through `highlighter` when the items came from an in-list
/// search and is the raw `label` otherwise. The link target is always
/// `create_url(value)` and the count is rendered as-is.
pub fn render_item(
    cx: ClassNames,
    item: &RefinementItem,
    is_from_search: bool,
    target: &dyn RefinementTarget,
    highlighter: &dyn Highlighter,
) -> ItemView {
    let label = if is_from_search {
        highlighter.highlight("label", item)
    } else {
        LabelView::Plain(item.label.clone())
    };

    ItemView {
        class_name: cx.with_modifiers("item", &[("selected", item.is_refined)]),
        link_class_name: cx.element("itemLink"),
        href: target.create_url(&item.value),
        value: item.value.clone(),
        label_class_name: cx.element("itemLabel"),
        label,
        count_class_name: cx.element("itemCount"),
        count: item.count,
        is_refined: item.is_refined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::Segment;

    struct UrlOnly;

    impl RefinementTarget for UrlOnly {
        fn refine(&mut self, _value: &str) {}
        fn search_for_items(&mut self, _query: &str) {}
        fn create_url(&self, value: &str) -> String {
            format!("#{value}")
        }
    }

    struct Marker;

    impl Highlighter for Marker {
        fn highlight(&self, attribute: &str, hit: &RefinementItem) -> LabelView {
            LabelView::Highlighted(vec![Segment {
                text: format!("<{attribute}:{}>", hit.label),
                highlighted: true,
            }])
        }
    }

    const CX: ClassNames = ClassNames::new("Menu");

    #[test]
    fn test_plain_label_when_not_from_search() {
        let item = RefinementItem::new("red", 5).with_label("Red");
        let view = render_item(CX, &item, false, &UrlOnly, &Marker);
        assert_eq!(view.label, LabelView::Plain("Red".to_string()));
    }

    #[test]
    fn test_highlighter_used_when_from_search() {
        let item = RefinementItem::new("red", 5).with_label("Red");
        let view = render_item(CX, &item, true, &UrlOnly, &Marker);
        assert_eq!(view.label.text(), "<label:Red>");
    }

    #[test]
    fn test_link_count_and_classes() {
        let item = RefinementItem::new("blue", 2).with_label("Blue").refined(true);
        let view = render_item(CX, &item, false, &UrlOnly, &Marker);

        assert_eq!(view.href, "#blue");
        assert_eq!(view.count, 2);
        assert!(view.is_refined);
        assert_eq!(view.class_name, "ais-Menu__item ais-Menu__item--selected");
        assert_eq!(view.link_class_name, "ais-Menu__itemLink");
        assert_eq!(view.count_class_name, "ais-Menu__itemCount");
    }
}
