use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::config::TimingConfig;
use crate::dom;
use crate::random::{self, EntropySource, RandomSource};

pub const HOSTELS: [&str; 6] = ["Block A", "Block B", "Block C", "Block D", "North Wing", "South Wing"];

pub const ITEMS: [&str; 10] = [
    "Maggi",
    "Chips",
    "Cookies",
    "Cold Drink",
    "Sandwich",
    "Biscuits",
    "Energy Drink",
    "Chocolate",
    "Instant Noodles",
    "Snack Combo",
];

pub const AVATARS: [&str; 6] = ["🧑", "👨", "👩", "🧑‍🎓", "👨‍🎓", "👩‍🎓"];

/// Visible entries kept in the feed.
pub const FEED_CAPACITY: usize = 6;
const SEED_ENTRIES: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityEntry {
    pub avatar: &'static str,
    pub message_html: String,
    pub time_label: String,
}

fn message(template: usize, hostel: &str, item: &str) -> String {
    match template {
        0 => format!("Someone from <strong>{hostel}</strong> just ordered {item}"),
        1 => format!("<strong>{hostel}</strong> ordered {item}"),
        2 => format!("New order: {item} to <strong>{hostel}</strong>"),
        _ => format!("{item} being delivered to <strong>{hostel}</strong>"),
    }
}

fn minutes_ago(rng: &mut impl RandomSource, span: usize) -> String {
    format!("{} min ago", random::index(rng, span) + 1)
}

/// A made-up order, drawn as hostel, item, avatar, template, minutes.
pub fn generate_activity(rng: &mut impl RandomSource) -> ActivityEntry {
    let hostel = random::pick(rng, &HOSTELS);
    let item = random::pick(rng, &ITEMS);
    let avatar = *random::pick(rng, &AVATARS);
    let template = random::index(rng, 4);

    ActivityEntry {
        avatar,
        message_html: message(template, hostel, item),
        time_label: minutes_ago(rng, 5),
    }
}

/// Entries for the initial fill, relabelled across the last quarter hour.
pub fn seed_activities(rng: &mut impl RandomSource) -> Vec<ActivityEntry> {
    (0..SEED_ENTRIES)
        .map(|_| {
            let mut entry = generate_activity(rng);
            entry.time_label = minutes_ago(rng, 15);
            entry
        })
        .collect()
}

/// Gap before the next scheduled entry, in `[min_ms, max_ms)`.
pub fn next_gap_ms(rng: &mut impl RandomSource, timing: &TimingConfig) -> u32 {
    random::between(rng, timing.feed_min_gap_ms as f64, timing.feed_max_gap_ms as f64) as u32
}

/// Newest-first list with a fixed number of visible slots.
pub trait FeedList {
    type Item;

    fn prepend(&mut self, item: Self::Item);
    fn len(&self) -> usize;
    fn drop_last(&mut self);
}

/// Puts `item` on top, then trims the tail back to `capacity`.
pub fn push_bounded<F: FeedList>(feed: &mut F, item: F::Item, capacity: usize) {
    feed.prepend(item);
    while feed.len() > capacity {
        feed.drop_last();
    }
}

/// The `#activityFeed` container.
pub struct DomFeed {
    document: Document,
    container: Element,
}

impl FeedList for DomFeed {
    type Item = ActivityEntry;

    fn prepend(&mut self, entry: ActivityEntry) {
        let Some(node) = self.render(&entry) else {
            return;
        };
        let _ = self.container.insert_before(&node, self.container.first_child().as_ref());
    }

    fn len(&self) -> usize {
        self.container.child_element_count() as usize
    }

    fn drop_last(&mut self) {
        if let Some(last) = self.container.last_element_child() {
            last.remove();
        }
    }
}

impl DomFeed {
    pub fn find(document: &Document) -> Option<Self> {
        let container = dom::by_id(document, "activityFeed")?;
        Some(Self {
            document: document.clone(),
            container: container.into(),
        })
    }

    fn render(&self, entry: &ActivityEntry) -> Option<Element> {
        let node = self.document.create_element("div").ok()?;
        node.set_class_name("activity-item");
        node.set_inner_html(&format!(
            r#"<div class="activity-avatar">{}</div><div class="activity-content"><div class="activity-text">{}</div><div class="activity-time">{}</div></div>"#,
            entry.avatar, entry.message_html, entry.time_label
        ));
        Some(node)
    }
}

pub fn add_activity_to_feed(document: &Document, entry: ActivityEntry) {
    if let Some(mut feed) = DomFeed::find(document) {
        push_bounded(&mut feed, entry, FEED_CAPACITY);
    }
}

pub struct ActivityFeedHandle {
    _seed: Timeout,
    _schedule: Timeout,
    alive: Rc<Cell<bool>>,
}

impl Drop for ActivityFeedHandle {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

/// Fills the feed shortly after load, then keeps adding entries at
/// jittered intervals until the handle is dropped.
pub fn install(document: &Document, timing: &TimingConfig) -> ActivityFeedHandle {
    if DomFeed::find(document).is_none() {
        debug!("#activityFeed not on page, entries will be dropped");
    }

    let rng = Rc::new(RefCell::new(EntropySource::new()));
    let alive = Rc::new(Cell::new(true));

    let seed = {
        let document = document.clone();
        let rng = rng.clone();
        Timeout::new(timing.feed_seed_delay_ms, move || {
            for entry in seed_activities(&mut *rng.borrow_mut()) {
                add_activity_to_feed(&document, entry);
            }
        })
    };

    let schedule = {
        let document = document.clone();
        let alive = alive.clone();
        let timing = *timing;
        Timeout::new(timing.feed_schedule_delay_ms, move || {
            spawn_local(run_schedule(document, rng, timing, alive));
        })
    };

    ActivityFeedHandle {
        _seed: seed,
        _schedule: schedule,
        alive,
    }
}

/// Self-rearming: each round waits a fresh random gap, adds one entry,
/// then goes again.
async fn run_schedule(
    document: Document,
    rng: Rc<RefCell<EntropySource>>,
    timing: TimingConfig,
    alive: Rc<Cell<bool>>,
) {
    while alive.get() {
        let gap = next_gap_ms(&mut *rng.borrow_mut(), &timing);
        TimeoutFuture::new(gap).await;
        if !alive.get() {
            break;
        }
        let entry = generate_activity(&mut *rng.borrow_mut());
        add_activity_to_feed(&document, entry);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::random::testing::{CyclingDraws, ScriptedDraws};

    impl FeedList for VecDeque<u32> {
        type Item = u32;

        fn prepend(&mut self, item: u32) {
            self.push_front(item);
        }

        fn len(&self) -> usize {
            VecDeque::len(self)
        }

        fn drop_last(&mut self) {
            self.pop_back();
        }
    }

    #[test]
    fn first_choices_fill_the_first_template() {
        // minutes draw of 0.7 over 5 slots lands on index 3
        let mut rng = ScriptedDraws::new(&[0.0, 0.0, 0.0, 0.0, 0.7]);
        let entry = generate_activity(&mut rng);
        assert_eq!(entry.avatar, "🧑");
        assert_eq!(entry.message_html, "Someone from <strong>Block A</strong> just ordered Maggi");
        assert_eq!(entry.time_label, "4 min ago");
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn every_template_mentions_hostel_and_item() {
        for template in 0..4 {
            let text = message(template, "North Wing", "Snack Combo");
            assert!(text.contains("<strong>North Wing</strong>"), "{text}");
            assert!(text.contains("Snack Combo"), "{text}");
        }
        assert_eq!(message(3, "Block C", "Chips"), "Chips being delivered to <strong>Block C</strong>");
    }

    #[test]
    fn generated_labels_stay_within_five_minutes() {
        let mut rng = EntropySource::new();
        for _ in 0..500 {
            let entry = generate_activity(&mut rng);
            let minutes: u32 = entry.time_label.trim_end_matches(" min ago").parse().unwrap();
            assert!((1..=5).contains(&minutes));
            assert!(AVATARS.contains(&entry.avatar));
        }
    }

    #[test]
    fn seed_entries_are_relabelled_across_fifteen_minutes() {
        // five draws per entry, then one for the new label
        let mut rng = CyclingDraws::new(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.999]);
        let seeded = seed_activities(&mut rng);
        assert_eq!(seeded.len(), 4);
        assert!(seeded.iter().all(|e| e.time_label == "15 min ago"));
    }

    #[test]
    fn gaps_are_between_eight_and_fifteen_seconds() {
        let timing = TimingConfig::default();
        let mut rng = ScriptedDraws::new(&[0.0, 0.5, 0.999_999]);
        assert_eq!(next_gap_ms(&mut rng, &timing), 8000);
        assert_eq!(next_gap_ms(&mut rng, &timing), 11500);
        assert_eq!(next_gap_ms(&mut rng, &timing), 14999);
    }

    #[test]
    fn feed_is_capped_and_newest_first() {
        let mut feed = VecDeque::new();
        for n in 1..=20u32 {
            push_bounded(&mut feed, n, FEED_CAPACITY);
            assert!(feed.len() <= FEED_CAPACITY);
            assert_eq!(feed.front(), Some(&n));
        }
        assert_eq!(feed.into_iter().collect::<Vec<_>>(), vec![20, 19, 18, 17, 16, 15]);
    }

    #[test]
    fn seeding_shows_entries_in_reverse_generation_order() {
        let mut feed = VecDeque::new();
        for n in 1..=4u32 {
            push_bounded(&mut feed, n, FEED_CAPACITY);
        }
        assert_eq!(feed.into_iter().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
    }
}
