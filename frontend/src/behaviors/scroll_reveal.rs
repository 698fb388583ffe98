use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::dom;
use crate::error::PageResult;

pub const REVEAL_SELECTOR: &str = ".fade-in-scroll";
pub const VISIBLE_CLASS: &str = "visible";
/// Share of an element that has to be on screen before it counts as seen.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// One element's reveal flag. Only ever goes from hidden to revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub fn of(element: &Element) -> Self {
        Self {
            revealed: element.class_list().contains(VISIBLE_CLASS),
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one intersection report in. True only for the report that
    /// flips the element to revealed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }
}

fn reveal(element: &Element, intersecting: bool, observer: &IntersectionObserver) {
    let mut state = RevealState::of(element);
    if state.observe(intersecting) {
        let _ = element.class_list().add_1(VISIBLE_CLASS);
        observer.unobserve(element);
    }
}

pub struct ScrollRevealHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ScrollRevealHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn install(window: &Window, document: &Document) -> PageResult<ScrollRevealHandle> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                reveal(&entry.target(), entry.is_intersecting(), &observer);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let elements = dom::query_all(document, REVEAL_SELECTOR);
    debug!("watching {} elements for reveal", elements.len());
    for element in &elements {
        observer.observe(element);
        // already fully on screen, no need to wait for the first report
        if dom::is_in_viewport(window, element) {
            reveal(element, true, &observer);
        }
    }

    Ok(ScrollRevealHandle {
        observer,
        _callback: callback,
    })
}
