use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::dom::{self, Bounds, Listener};
use crate::error::PageResult;

/// Pixels of pointer offset per degree of tilt.
const TILT_SENSITIVITY: f64 = 20.0;
const TILT_LIFT_PX: f64 = 8.0;

pub const NEUTRAL_TILT: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

/// `--mouse-x` / `--mouse-y` values for the glow under the pointer.
pub fn glow_position(bounds: &Bounds, client_x: f64, client_y: f64) -> (String, String) {
    let (x, y) = bounds.local(client_x, client_y);
    (format!("{}px", x), format!("{}px", y))
}

/// `(rotateX, rotateY)` in degrees. Pointer below centre tips the top edge
/// away; pointer right of centre turns the card towards it.
pub fn tilt_angles(bounds: &Bounds, client_x: f64, client_y: f64) -> (f64, f64) {
    let (x, y) = bounds.local(client_x, client_y);
    let center_x = bounds.width / 2.0;
    let center_y = bounds.height / 2.0;
    ((y - center_y) / TILT_SENSITIVITY, (center_x - x) / TILT_SENSITIVITY)
}

pub fn tilt_transform(bounds: &Bounds, client_x: f64, client_y: f64) -> String {
    let (rotate_x, rotate_y) = tilt_angles(bounds, client_x, client_y);
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-{}px)",
        rotate_x, rotate_y, TILT_LIFT_PX
    )
}

fn pointer(event: &web_sys::Event) -> Option<(f64, f64)> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some((event.client_x() as f64, event.client_y() as f64))
}

pub struct PointerEffectsHandle {
    _listeners: Vec<Listener>,
}

fn glow(button: HtmlElement) -> PageResult<Listener> {
    let target = button.clone();
    Listener::new(&target, "mousemove", move |event| {
        let Some((client_x, client_y)) = pointer(&event) else {
            return;
        };
        let (x, y) = glow_position(&Bounds::of(&button), client_x, client_y);
        dom::set_style(&button, "--mouse-x", &x);
        dom::set_style(&button, "--mouse-y", &y);
    })
}

fn tilt(card: HtmlElement) -> PageResult<[Listener; 2]> {
    let moving = {
        let card = card.clone();
        let target = card.clone();
        Listener::new(&target, "mousemove", move |event| {
            if let Some((client_x, client_y)) = pointer(&event) {
                dom::set_style(&card, "transform", &tilt_transform(&Bounds::of(&card), client_x, client_y));
            }
        })?
    };
    let leaving = {
        let target = card.clone();
        Listener::new(&target, "mouseleave", move |_| {
            dom::set_style(&card, "transform", NEUTRAL_TILT);
        })?
    };
    Ok([moving, leaving])
}

pub fn install(document: &Document) -> PageResult<PointerEffectsHandle> {
    let mut listeners = Vec::new();

    if let Some(button) = dom::query(document, ".btn-primary") {
        listeners.push(glow(button)?);
    }
    for card in dom::query_all(document, ".problem-card, .traffic-card") {
        listeners.extend(tilt(card)?);
    }

    Ok(PointerEffectsHandle { _listeners: listeners })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Bounds {
        Bounds { left: 100.0, top: 50.0, width: 300.0, height: 200.0 }
    }

    #[test]
    fn glow_follows_pointer_inside_the_button() {
        let bounds = Bounds { left: 20.0, top: 600.0, width: 180.0, height: 48.0 };
        assert_eq!(glow_position(&bounds, 65.0, 612.5), ("45px".to_string(), "12.5px".to_string()));
    }

    #[test]
    fn centre_of_card_is_flat() {
        assert_eq!(tilt_angles(&card(), 250.0, 150.0), (0.0, 0.0));
        assert_eq!(
            tilt_transform(&card(), 250.0, 150.0),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) translateY(-8px)"
        );
    }

    #[test]
    fn corners_tilt_by_offset_over_twenty() {
        // top-left corner: 150px left of centre, 100px above
        assert_eq!(tilt_angles(&card(), 100.0, 50.0), (-5.0, 7.5));
        // bottom-right corner
        assert_eq!(tilt_angles(&card(), 400.0, 250.0), (5.0, -7.5));
    }

    #[test]
    fn neutral_tilt_resets_rotation_and_lift() {
        assert!(NEUTRAL_TILT.contains("rotateX(0)"));
        assert!(NEUTRAL_TILT.contains("rotateY(0)"));
        assert!(NEUTRAL_TILT.ends_with("translateY(0)"));
    }
}
