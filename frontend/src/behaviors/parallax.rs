use web_sys::{Document, Window};

use crate::behaviors::debounce::Debouncer;
use crate::dom::{self, Listener};
use crate::error::PageResult;

pub const MOON_FACTOR: f64 = 0.3;

pub fn orb_factor(index: usize) -> f64 {
    if index == 0 {
        0.2
    } else {
        0.15
    }
}

pub fn translate_y(offset: f64) -> String {
    format!("translateY({}px)", offset)
}

/// Moon offset followed by one offset per orb, for a page scrolled to `scrolled`.
pub fn offsets(scrolled: f64, orbs: usize) -> (f64, Vec<f64>) {
    let moon = scrolled * MOON_FACTOR;
    let orbs = (0..orbs).map(|i| scrolled * orb_factor(i)).collect();
    (moon, orbs)
}

pub fn apply(document: &Document, scrolled: f64) {
    let moon = dom::query(document, ".moon");
    let orbs = dom::query_all(document, ".glow-orb");
    let (moon_offset, orb_offsets) = offsets(scrolled, orbs.len());

    if let Some(moon) = moon {
        dom::set_style(&moon, "transform", &translate_y(moon_offset));
    }
    for (orb, offset) in orbs.iter().zip(orb_offsets) {
        dom::set_style(orb, "transform", &translate_y(offset));
    }
}

pub struct ParallaxHandle {
    _scroll: Listener,
}

pub fn install(window: &Window, document: &Document, debounce_ms: u32) -> PageResult<ParallaxHandle> {
    let debouncer = {
        let document = document.clone();
        Debouncer::new(window.clone(), debounce_ms, move |scrolled: f64| apply(&document, scrolled))
    };

    let scroll_source = window.clone();
    let scroll = Listener::new(window, "scroll", move |_| {
        debouncer.call(dom::scroll_y(&scroll_source));
    })?;

    Ok(ParallaxHandle { _scroll: scroll })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn first_orb_moves_faster_than_the_rest() {
        let (moon, orbs) = offsets(200.0, 4);
        assert!(close(moon, 60.0));
        assert_eq!(orbs.len(), 4);
        assert!(close(orbs[0], 40.0));
        assert!(orbs[1..].iter().all(|o| close(*o, 30.0)));
    }

    #[test]
    fn top_of_page_is_neutral() {
        let (moon, orbs) = offsets(0.0, 2);
        assert_eq!(translate_y(moon), "translateY(0px)");
        assert!(orbs.iter().all(|o| *o == 0.0));
    }

    #[test]
    fn no_orbs_still_moves_the_moon() {
        let (moon, orbs) = offsets(1000.0, 0);
        assert!(close(moon, 300.0));
        assert!(orbs.is_empty());
    }

    #[test]
    fn fractional_offsets_are_kept() {
        assert_eq!(translate_y(37.5), "translateY(37.5px)");
    }
}
