//! Browser Scheduler
//!
//! `Scheduler` on top of `setTimeout`/`setInterval` via gloo-timers.
//! Handles are forgotten: timers live as long as the page.

use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};
use recycle_core::{Scheduler, MAX_TIMER_MS};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// Browsers fire longer delays immediately, so clamp to `i32::MAX`
fn millis(duration: Duration) -> u32 {
    duration.as_millis().min(u128::from(MAX_TIMER_MS)) as u32
}

impl Scheduler for BrowserScheduler {
    fn once(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        Timeout::new(millis(delay), task).forget();
    }

    fn every(&self, interval: Duration, task: Box<dyn FnMut()>) {
        Interval::new(millis(interval), task).forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_clamps_to_timer_limit() {
        assert_eq!(millis(Duration::from_millis(300)), 300);
        assert_eq!(millis(Duration::from_millis(99_999_999_999)), i32::MAX as u32);
    }
}
