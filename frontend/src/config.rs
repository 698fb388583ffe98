use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Every delay and period the page behaviours run on, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingConfig {
    pub order_status_refresh_ms: u32,
    pub counter_start_delay_ms: u32,
    pub counter_tick_ms: u32,
    pub traffic_update_ms: u32,
    pub feed_seed_delay_ms: u32,
    pub feed_schedule_delay_ms: u32,
    pub feed_min_gap_ms: u32,
    pub feed_max_gap_ms: u32,
    pub parallax_debounce_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            order_status_refresh_ms: 60_000,
            counter_start_delay_ms: 500,
            counter_tick_ms: 16,
            traffic_update_ms: 10_000,
            feed_seed_delay_ms: 1_000,
            feed_schedule_delay_ms: 10_000,
            feed_min_gap_ms: 8_000,
            feed_max_gap_ms: 15_000,
            parallax_debounce_ms: 10,
        }
    }
}
