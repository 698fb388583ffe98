use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Window;

use crate::dom;

#[derive(Debug, PartialEq)]
pub enum Settled<T> {
    /// Input has been quiet for the full wait; run with this value.
    Ready(T),
    /// Still inside the quiet period, check again after this many ms.
    Wait(u32),
    Idle,
}

/// Trailing-edge debounce over a caller-supplied clock.
///
/// Every `push` replaces the pending value and restarts the quiet period,
/// so a burst collapses into the last value seen.
#[derive(Debug)]
pub struct Debounce<T> {
    wait_ms: f64,
    pending: Option<(f64, T)>,
}

impl<T> Debounce<T> {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms: wait_ms as f64,
            pending: None,
        }
    }

    pub fn push(&mut self, now_ms: f64, value: T) {
        self.pending = Some((now_ms + self.wait_ms, value));
    }

    pub fn poll(&mut self, now_ms: f64) -> Settled<T> {
        match self.pending.take() {
            None => Settled::Idle,
            Some((due, value)) if now_ms >= due => Settled::Ready(value),
            Some((due, value)) => {
                let rest = (due - now_ms).ceil().max(1.0) as u32;
                self.pending = Some((due, value));
                Settled::Wait(rest)
            }
        }
    }
}

struct Inner<T> {
    wait_ms: u32,
    state: RefCell<Debounce<T>>,
    timer: RefCell<Option<Timeout>>,
    window: Window,
    action: Box<dyn Fn(T)>,
}

/// `Debounce` driven by browser timers: `call` as often as events arrive,
/// `action` runs once input settles.
pub struct Debouncer<T: 'static>(Rc<Inner<T>>);

impl<T: 'static> Debouncer<T> {
    pub fn new<F>(window: Window, wait_ms: u32, action: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Self(Rc::new(Inner {
            wait_ms,
            state: RefCell::new(Debounce::new(wait_ms)),
            timer: RefCell::new(None),
            window,
            action: Box::new(action),
        }))
    }

    pub fn call(&self, value: T) {
        let now = dom::now_ms(&self.0.window);
        self.0.state.borrow_mut().push(now, value);
        Self::arm(&self.0, self.0.wait_ms);
    }

    fn arm(inner: &Rc<Inner<T>>, delay_ms: u32) {
        let pending = Rc::clone(inner);
        let timeout = Timeout::new(delay_ms, move || {
            let settled = pending.state.borrow_mut().poll(dom::now_ms(&pending.window));
            match settled {
                Settled::Ready(value) => (pending.action)(value),
                Settled::Wait(rest) => Self::arm(&pending, rest),
                Settled::Idle => {}
            }
        });
        // replacing the handle cancels whatever was armed before
        inner.timer.borrow_mut().replace(timeout);
    }
}

impl<T: 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        // the armed timeout holds a clone of `Inner`
        self.0.timer.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_collapses_to_last_value() {
        let mut debounce = Debounce::new(10);
        for (t, y) in [(0.0, 100.0), (1.0, 220.0), (2.0, 310.0), (3.0, 480.0), (4.0, 512.0)] {
            debounce.push(t, y);
        }

        let mut runs = Vec::new();
        for t in 5..60 {
            if let Settled::Ready(y) = debounce.poll(t as f64) {
                runs.push((t, y));
            }
        }
        assert_eq!(runs, vec![(14, 512.0)]);
    }

    #[test]
    fn waits_out_the_remaining_quiet_period() {
        let mut debounce = Debounce::new(10);
        debounce.push(0.0, 'a');
        debounce.push(4.0, 'b');
        assert_eq!(debounce.poll(10.0), Settled::Wait(4));
        assert_eq!(debounce.poll(13.5), Settled::Wait(1));
        assert_eq!(debounce.poll(14.0), Settled::Ready('b'));
        assert_eq!(debounce.poll(15.0), Settled::Idle);
    }

    #[test]
    fn separate_bursts_each_run_once() {
        let mut debounce = Debounce::new(10);
        debounce.push(0.0, 1);
        assert_eq!(debounce.poll(10.0), Settled::Ready(1));
        debounce.push(50.0, 2);
        debounce.push(52.0, 3);
        assert_eq!(debounce.poll(62.0), Settled::Ready(3));
        assert_eq!(debounce.poll(100.0), Settled::Idle);
    }

    #[test]
    fn idle_without_input() {
        let mut debounce: Debounce<f64> = Debounce::new(10);
        assert_eq!(debounce.poll(0.0), Settled::Idle);
    }
}
