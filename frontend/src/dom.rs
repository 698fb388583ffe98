use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, DomRect, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::{PageError, PageResult};

pub fn window() -> PageResult<Window> {
    web_sys::window().ok_or(PageError::NoWindow)
}

/// First element matching `selector`. Invalid selectors count as missing.
pub fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn set_text(element: &HtmlElement, text: &str) {
    element.set_text_content(Some(text));
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Milliseconds on the page's monotonic clock.
pub fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(web_sys::js_sys::Date::now)
}

/// Viewport-relative box of an element, detached from the live `DomRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn of(element: &Element) -> Self {
        Self::from(&element.get_bounding_client_rect())
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Pointer position relative to the box's top-left corner.
    pub fn local(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }

    /// True when the whole box sits inside a `width` x `height` viewport.
    pub fn fits_within(&self, width: f64, height: f64) -> bool {
        self.top >= 0.0 && self.left >= 0.0 && self.bottom() <= height && self.right() <= width
    }
}

impl From<&DomRect> for Bounds {
    fn from(rect: &DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

pub fn viewport_size(window: &Window) -> (f64, f64) {
    let inner = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).filter(|v| *v > 0.0)
    };
    let root = window.document().and_then(|d| d.document_element());
    let width = inner(window.inner_width())
        .or_else(|| root.as_ref().map(|r| r.client_width() as f64))
        .unwrap_or(0.0);
    let height = inner(window.inner_height())
        .or_else(|| root.as_ref().map(|r| r.client_height() as f64))
        .unwrap_or(0.0);
    (width, height)
}

pub fn is_in_viewport(window: &Window, element: &Element) -> bool {
    let (width, height) = viewport_size(window);
    Bounds::of(element).fits_within(width, height)
}

/// An event listener that is removed again when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> PageResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
