use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement};

use crate::config::TimingConfig;
use crate::dom;
use crate::random::{EntropySource, RandomSource};

const MIN_ACTIVE_USERS: u32 = 1;
const MAX_ACTIVE_USERS: u32 = 8;
const MIN_AVG_TIME: f64 = 15.0;
const MAX_AVG_TIME: f64 = 22.0;

/// The fabricated live numbers shown in the traffic cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrafficRecord {
    pub active_users: u32,
    pub today_orders: u32,
    pub total_deliveries: u32,
    /// Minutes. Kept fractional, shown floored.
    pub avg_time: f64,
}

impl Default for TrafficRecord {
    fn default() -> Self {
        Self {
            active_users: 3,
            today_orders: 12,
            total_deliveries: 247,
            avg_time: 18.0,
        }
    }
}

impl TrafficRecord {
    /// One perturbation step. Consumes exactly three draws: user walk,
    /// order bump, delivery-time drift.
    pub fn perturb(&mut self, rng: &mut impl RandomSource) {
        let users = if rng.next_f64() > 0.5 {
            self.active_users + 1
        } else {
            self.active_users.saturating_sub(1)
        };
        self.active_users = users.clamp(MIN_ACTIVE_USERS, MAX_ACTIVE_USERS);

        if rng.next_f64() > 0.7 {
            self.today_orders += 1;
            self.total_deliveries += 1;
        }

        let drift = (rng.next_f64() - 0.5) * 2.0;
        self.avg_time = (self.avg_time + drift).clamp(MIN_AVG_TIME, MAX_AVG_TIME);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Counter {
    ActiveUsers,
    TodayOrders,
    TotalDeliveries,
    AvgTime,
}

impl Counter {
    pub const ALL: [Counter; 4] = [
        Counter::ActiveUsers,
        Counter::TodayOrders,
        Counter::TotalDeliveries,
        Counter::AvgTime,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            Counter::ActiveUsers => "activeUsers",
            Counter::TodayOrders => "todayOrders",
            Counter::TotalDeliveries => "totalDeliveries",
            Counter::AvgTime => "avgTime",
        }
    }

    /// How long the rise-from-zero animation takes on load.
    pub fn rise_ms(self) -> u32 {
        match self {
            Counter::ActiveUsers | Counter::AvgTime => 1000,
            Counter::TodayOrders => 1200,
            Counter::TotalDeliveries => 1500,
        }
    }

    pub fn value(self, record: &TrafficRecord) -> f64 {
        match self {
            Counter::ActiveUsers => record.active_users as f64,
            Counter::TodayOrders => record.today_orders as f64,
            Counter::TotalDeliveries => record.total_deliveries as f64,
            Counter::AvgTime => record.avg_time,
        }
    }

    pub fn display(self, record: &TrafficRecord) -> String {
        whole(self.value(record)).to_string()
    }
}

fn whole(value: f64) -> u64 {
    value.floor().max(0.0) as u64
}

/// Values a counter shows while rising from zero, one per tick.
///
/// The tick that reaches the target shows exactly `floor(target)` and ends
/// the sequence.
#[derive(Clone, Debug)]
pub struct CounterSteps {
    target: f64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterSteps {
    pub fn new(target: f64, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = duration_ms as f64 / tick_ms.max(1) as f64;
        Self {
            target,
            increment: target / ticks,
            current: 0.0,
            finished: false,
        }
    }
}

impl Iterator for CounterSteps {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        // A NaN or non-positive step would never get there.
        if self.current >= self.target || !(self.increment > 0.0) {
            self.finished = true;
            Some(whole(self.target))
        } else {
            Some(whole(self.current))
        }
    }
}

pub struct TrafficSimulator<R> {
    record: TrafficRecord,
    rng: R,
}

impl<R: RandomSource> TrafficSimulator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            record: TrafficRecord::default(),
            rng,
        }
    }

    pub fn record(&self) -> &TrafficRecord {
        &self.record
    }

    pub fn update_traffic_data(&mut self) -> TrafficRecord {
        self.record.perturb(&mut self.rng);
        self.record
    }
}

/// Writes every counter at once. Counters missing from the page are skipped.
pub fn render(document: &Document, record: &TrafficRecord) {
    for counter in Counter::ALL {
        if let Some(element) = dom::by_id(document, counter.element_id()) {
            dom::set_text(&element, &counter.display(record));
        }
    }
}

/// Drives `element` through `steps`, one value per tick, then lets its
/// timer go. Stops early once `alive` is cleared.
pub fn animate_counter(element: HtmlElement, steps: CounterSteps, tick_ms: u32, alive: Rc<Cell<bool>>) {
    spawn_local(async move {
        for value in steps {
            TimeoutFuture::new(tick_ms).await;
            if !alive.get() {
                return;
            }
            dom::set_text(&element, &value.to_string());
        }
    });
}

pub struct TrafficHandle {
    _rise: Timeout,
    _updates: Interval,
    alive: Rc<Cell<bool>>,
}

impl Drop for TrafficHandle {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

pub fn install(document: &Document, timing: &TimingConfig) -> TrafficHandle {
    let simulator = Rc::new(RefCell::new(TrafficSimulator::new(EntropySource::new())));
    let alive = Rc::new(Cell::new(true));

    let rise = {
        let document = document.clone();
        let simulator = simulator.clone();
        let alive = alive.clone();
        let tick_ms = timing.counter_tick_ms;
        Timeout::new(timing.counter_start_delay_ms, move || {
            let record = *simulator.borrow().record();
            for counter in Counter::ALL {
                match dom::by_id(&document, counter.element_id()) {
                    Some(element) => {
                        let steps = CounterSteps::new(counter.value(&record), counter.rise_ms(), tick_ms);
                        animate_counter(element, steps, tick_ms, alive.clone());
                    }
                    None => debug!("counter #{} not on page", counter.element_id()),
                }
            }
        })
    };

    let updates = {
        let document = document.clone();
        Interval::new(timing.traffic_update_ms, move || {
            let record = simulator.borrow_mut().update_traffic_data();
            render(&document, &record);
        })
    };

    TrafficHandle {
        _rise: rise,
        _updates: updates,
        alive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::{CyclingDraws, ScriptedDraws};

    #[test]
    fn seeded_record_matches_launch_numbers() {
        let sim = TrafficSimulator::new(ScriptedDraws::new(&[]));
        assert_eq!(
            *sim.record(),
            TrafficRecord { active_users: 3, today_orders: 12, total_deliveries: 247, avg_time: 18.0 }
        );
    }

    #[test]
    fn update_with_high_draws_bumps_users_and_orders() {
        let mut sim = TrafficSimulator::new(ScriptedDraws::new(&[0.9, 0.9, 0.5]));
        let record = sim.update_traffic_data();
        assert_eq!(record.active_users, 4);
        assert_eq!(record.today_orders, 13);
        assert_eq!(record.total_deliveries, 248);
        assert_eq!(record.avg_time, 18.0);
    }

    #[test]
    fn low_order_draw_leaves_orders_alone() {
        let mut rng = ScriptedDraws::new(&[0.1, 0.7, 0.0]);
        let mut record = TrafficRecord::default();
        record.perturb(&mut rng);
        assert_eq!(record.active_users, 2);
        assert_eq!(record.today_orders, 12);
        assert_eq!(record.total_deliveries, 247);
        assert_eq!(record.avg_time, 17.0);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn active_users_and_avg_time_stay_clamped() {
        let mut up = TrafficSimulator::new(CyclingDraws::new(&[0.99, 0.0, 0.99]));
        let mut down = TrafficSimulator::new(CyclingDraws::new(&[0.0, 0.0, 0.0]));
        let mut mixed = TrafficSimulator::new(EntropySource::new());
        for _ in 0..200 {
            for record in [
                up.update_traffic_data(),
                down.update_traffic_data(),
                mixed.update_traffic_data(),
            ] {
                assert!((1..=8).contains(&record.active_users));
                assert!((15.0..=22.0).contains(&record.avg_time));
            }
        }
        assert_eq!(up.record().active_users, 8);
        assert_eq!(up.record().avg_time, 22.0);
        assert_eq!(down.record().active_users, 1);
        assert_eq!(down.record().avg_time, 15.0);
    }

    #[test]
    fn avg_time_is_floored_for_display() {
        let record = TrafficRecord { avg_time: 19.97, ..TrafficRecord::default() };
        assert_eq!(Counter::AvgTime.display(&record), "19");
        assert_eq!(Counter::TotalDeliveries.display(&record), "247");
    }

    #[test]
    fn counter_rises_and_lands_on_floor_of_target() {
        let values: Vec<u64> = CounterSteps::new(247.0, 1500, 16).collect();
        assert_eq!(values.first(), Some(&2));
        assert_eq!(values.last(), Some(&247));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        // 1500ms of 16ms ticks
        assert!((93..=95).contains(&values.len()), "{} ticks", values.len());
    }

    #[test]
    fn counter_always_ends_on_floor_of_target() {
        for (target, duration) in [(3.0, 1000), (18.7, 1000), (0.0, 1000), (5.0, 0), (1e6, 16), (0.4, 5000)] {
            let last = CounterSteps::new(target, duration, 16).last();
            assert_eq!(last, Some(target.floor() as u64), "target {target} over {duration}ms");
        }
    }

    #[test]
    fn counter_is_exhausted_after_finishing() {
        let mut steps = CounterSteps::new(3.0, 16, 16);
        assert_eq!(steps.next(), Some(3));
        assert_eq!(steps.next(), None);
        assert_eq!(steps.next(), None);
    }
}
