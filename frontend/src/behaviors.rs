pub mod activity_feed;
pub mod anchor_scroll;
pub mod debounce;
pub mod order_status;
pub mod parallax;
pub mod pointer_effects;
pub mod scroll_reveal;
pub mod traffic;

use log::{info, warn};

use crate::config::TimingConfig;
use crate::dom;
use crate::error::{PageError, PageResult};

/// Everything attached to the landing page. Dropping it detaches all of it.
pub struct PageBehaviors {
    _reveal: Option<scroll_reveal::ScrollRevealHandle>,
    _anchors: Option<anchor_scroll::AnchorScrollHandle>,
    _order_status: order_status::OrderStatusHandle,
    _traffic: traffic::TrafficHandle,
    _activity: activity_feed::ActivityFeedHandle,
    _pointer: Option<pointer_effects::PointerEffectsHandle>,
    _parallax: Option<parallax::ParallaxHandle>,
}

/// One behaviour failing to attach is logged and leaves the rest running.
fn attached<T>(name: &str, result: PageResult<T>) -> Option<T> {
    match result {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("{} not attached: {}", name, e);
            None
        }
    }
}

impl PageBehaviors {
    pub fn install(timing: &TimingConfig) -> PageResult<Self> {
        let window = dom::window()?;
        let document = window.document().ok_or(PageError::NoDocument)?;

        let behaviors = Self {
            _reveal: attached("scroll reveal", scroll_reveal::install(&window, &document)),
            _anchors: attached("anchor scroll", anchor_scroll::install(&window, &document)),
            _order_status: order_status::install(&document, timing.order_status_refresh_ms),
            _traffic: traffic::install(&document, timing),
            _activity: activity_feed::install(&document, timing),
            _pointer: attached("pointer effects", pointer_effects::install(&document)),
            _parallax: attached(
                "parallax",
                parallax::install(&window, &document, timing.parallax_debounce_ms),
            ),
        };

        info!("page behaviours attached");
        Ok(behaviors)
    }
}

/// The styled greeting printed to the browser console on load.
pub fn console_banner(total_deliveries: u32) {
    gloo_console::log!(
        "%c🌙 Cravin ",
        "background: linear-gradient(135deg, #ff6b35 0%, #ff8c42 100%); color: white; padding: 10px 20px; border-radius: 8px; font-size: 16px; font-weight: bold;"
    );
    gloo_console::log!(
        "%cLate-night snacks for hostel students | Live and operating",
        "color: #a3a3a3; font-size: 12px;"
    );
    gloo_console::log!(
        format!("%c{} deliveries and counting 🚀", total_deliveries),
        "color: #ff6b35; font-size: 14px; font-weight: bold;"
    );
}
