use chrono::{Local, Timelike};
use gloo_timers::callback::Interval;
use log::debug;
use web_sys::Document;

use crate::dom;

/// 23:30, the nightly opening time.
const OPENS_AT: u32 = 23 * 60 + 30;
/// 02:00, the last minute orders are taken.
const CLOSES_AT: u32 = 2 * 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    Open,
    Closed,
}

/// How a status is drawn on the indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presentation {
    pub background: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
}

impl OrderStatus {
    /// Status at `minutes` past local midnight.
    pub fn at_minutes(minutes: u32) -> Self {
        if minutes >= OPENS_AT || minutes <= CLOSES_AT {
            OrderStatus::Open
        } else {
            OrderStatus::Closed
        }
    }

    pub fn at<T: Timelike>(time: &T) -> Self {
        Self::at_minutes(time.hour() * 60 + time.minute())
    }

    pub fn now() -> Self {
        Self::at(&Local::now())
    }

    pub fn presentation(self) -> Presentation {
        match self {
            OrderStatus::Open => Presentation {
                background: "rgba(34, 197, 94, 0.1)",
                border: "rgba(34, 197, 94, 0.3)",
                accent: "#22c55e",
                text: "🟢 Orders OPEN now!",
            },
            OrderStatus::Closed => Presentation {
                background: "rgba(239, 68, 68, 0.1)",
                border: "rgba(239, 68, 68, 0.3)",
                accent: "#ef4444",
                text: "🔴 Orders open: 11:30 PM – 2:00 AM",
            },
        }
    }
}

/// Writes `status` onto the indicator. Returns false when any of its parts
/// is missing from the page, in which case nothing is touched.
pub fn render(document: &Document, status: OrderStatus) -> bool {
    let (Some(indicator), Some(dot), Some(text)) = (
        dom::query(document, ".status-indicator"),
        dom::query(document, ".status-dot"),
        dom::query(document, ".status-text"),
    ) else {
        return false;
    };

    let look = status.presentation();
    dom::set_style(&indicator, "background", look.background);
    dom::set_style(&indicator, "border-color", look.border);
    dom::set_style(&dot, "background", look.accent);
    dom::set_style(&text, "color", look.accent);
    dom::set_text(&text, look.text);
    true
}

/// Keeps the indicator in step with the clock until dropped.
pub struct OrderStatusHandle {
    _refresh: Interval,
}

pub fn install(document: &Document, refresh_ms: u32) -> OrderStatusHandle {
    if !render(document, OrderStatus::now()) {
        debug!("order status indicator not on page, skipping updates");
    }

    let document = document.clone();
    let refresh = Interval::new(refresh_ms, move || {
        render(&document, OrderStatus::now());
    });

    OrderStatusHandle { _refresh: refresh }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    #[test]
    fn open_window_wraps_midnight() {
        for minutes in (1410..1440).chain(0..=120) {
            assert_eq!(OrderStatus::at_minutes(minutes), OrderStatus::Open, "minute {minutes}");
        }
        for minutes in 121..1410 {
            assert_eq!(OrderStatus::at_minutes(minutes), OrderStatus::Closed, "minute {minutes}");
        }
    }

    #[test]
    fn boundaries_from_wall_clock() {
        let at = |h, m| OrderStatus::at(&NaiveTime::from_hms_opt(h, m, 0).unwrap());
        assert_eq!(at(23, 29), OrderStatus::Closed);
        assert_eq!(at(23, 30), OrderStatus::Open);
        assert_eq!(at(0, 0), OrderStatus::Open);
        assert_eq!(at(2, 0), OrderStatus::Open);
        assert_eq!(at(2, 1), OrderStatus::Closed);
        assert_eq!(at(14, 0), OrderStatus::Closed);
    }

    #[test]
    fn seconds_do_not_move_the_boundary() {
        let time = NaiveTime::from_hms_opt(2, 0, 59).unwrap();
        assert_eq!(OrderStatus::at(&time), OrderStatus::Open);
    }

    #[test]
    fn presentations_are_fixed() {
        let open = OrderStatus::Open.presentation();
        assert_eq!(open.accent, "#22c55e");
        assert_eq!(open.text, "🟢 Orders OPEN now!");

        let closed = OrderStatus::Closed.presentation();
        assert_eq!(closed.accent, "#ef4444");
        assert_eq!(closed.text, "🔴 Orders open: 11:30 PM – 2:00 AM");
    }
}
