use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use crate::dom::{self, Listener};
use crate::error::PageResult;

/// Space kept above the target once scrolled. The nav is not fixed, so none.
const TOP_OFFSET: f64 = 0.0;

#[derive(Debug, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Not an in-page link, let the browser handle it.
    Navigate,
    /// A bare `#`: swallow the click and stay put.
    Stay,
    /// Smooth scroll to whatever `selector` matches.
    ScrollTo(&'a str),
}

pub fn classify(href: Option<&str>) -> AnchorAction<'_> {
    match href {
        Some("#") => AnchorAction::Stay,
        Some(href) if href.starts_with('#') => AnchorAction::ScrollTo(href),
        _ => AnchorAction::Navigate,
    }
}

/// Document position that puts an element's top edge at the top of the viewport.
pub fn scroll_top_for(rect_top: f64, page_offset: f64) -> f64 {
    rect_top + page_offset - TOP_OFFSET
}

fn scroll_to(window: &Window, target: &Element) {
    let top = scroll_top_for(target.get_bounding_client_rect().top(), dom::scroll_y(window));
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub struct AnchorScrollHandle {
    _clicks: Vec<Listener>,
}

pub fn install(window: &Window, document: &Document) -> PageResult<AnchorScrollHandle> {
    let mut clicks = Vec::new();

    for anchor in dom::query_all(document, r##"a[href^="#"]"##) {
        let window = window.clone();
        let document = document.clone();
        let link = anchor.clone();
        let listener = Listener::new(&anchor, "click", move |event| {
            let href = link.get_attribute("href");
            match classify(href.as_deref()) {
                AnchorAction::Navigate => {}
                AnchorAction::Stay => event.prevent_default(),
                AnchorAction::ScrollTo(selector) => {
                    event.prevent_default();
                    if let Some(target) = dom::query(&document, selector) {
                        scroll_to(&window, &target);
                    }
                }
            }
        })?;
        clicks.push(listener);
    }

    Ok(AnchorScrollHandle { _clicks: clicks })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_links() {
        assert_eq!(classify(Some("#")), AnchorAction::Stay);
        assert_eq!(classify(Some("#how-it-works")), AnchorAction::ScrollTo("#how-it-works"));
        assert_eq!(classify(Some("/pricing")), AnchorAction::Navigate);
        assert_eq!(classify(None), AnchorAction::Navigate);
    }

    #[test]
    fn target_top_lands_at_document_top() {
        assert_eq!(scroll_top_for(320.0, 1200.0), 1520.0);
        assert_eq!(scroll_top_for(-400.0, 1200.0), 800.0);
    }
}
