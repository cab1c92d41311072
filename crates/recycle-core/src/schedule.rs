//! Scheduling
//!
//! Deferred and recurring callbacks. The browser implementation lives in the
//! UI crate; [`ManualScheduler`] runs tasks on a virtual timeline.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Delay between expanding a card and centering it
pub const CENTER_DELAY: Duration = Duration::from_millis(300);

/// How often the daily reset check runs
pub const RESET_CHECK_INTERVAL: Duration = Duration::from_secs(60);

/// Registers callbacks on the event loop. Nothing here is ever cancelled.
pub trait Scheduler {
    /// Run `task` once after `delay`
    fn once(&self, delay: Duration, task: Box<dyn FnOnce()>);

    /// Run `task` every `interval`, first run one interval from now
    fn every(&self, interval: Duration, task: Box<dyn FnMut()>);
}

/// Run `tick` now, then on every `interval`
pub fn start_daily_reset<S, F>(scheduler: &S, interval: Duration, mut tick: F)
where
    S: Scheduler + ?Sized,
    F: FnMut() + 'static,
{
    tick();
    scheduler.every(interval, Box::new(tick));
}

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeat(Duration, Box<dyn FnMut()>),
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct Timeline {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl Timeline {
    fn push(&mut self, due: Duration, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending { due, seq, task });
    }

    /// Remove the earliest task due at or before `limit`
    fn take_due(&mut self, limit: Duration) -> Option<Pending> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= limit)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        Some(self.pending.swap_remove(index))
    }
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`]
///
/// Clones share one timeline. Tasks may schedule further tasks while running.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    timeline: Rc<RefCell<Timeline>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.timeline.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.timeline.borrow().pending.len()
    }

    /// Move virtual time forward, running every task that falls due in order
    pub fn advance(&self, by: Duration) {
        let target = self.timeline.borrow().now + by;
        loop {
            let next = self.timeline.borrow_mut().take_due(target);
            let Some(Pending { due, task, .. }) = next else { break };
            self.timeline.borrow_mut().now = due;
            match task {
                Task::Once(run) => run(),
                Task::Repeat(interval, mut run) => {
                    run();
                    // zero intervals would never let time move past `due`
                    let step = interval.max(Duration::from_millis(1));
                    self.timeline.borrow_mut().push(due + step, Task::Repeat(interval, run));
                }
            }
        }
        self.timeline.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn once(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let mut timeline = self.timeline.borrow_mut();
        let due = timeline.now + delay;
        timeline.push(due, Task::Once(task));
    }

    fn every(&self, interval: Duration, task: Box<dyn FnMut()>) {
        let mut timeline = self.timeline.borrow_mut();
        let due = timeline.now + interval.max(Duration::from_millis(1));
        timeline.push(due, Task::Repeat(interval, task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_once_fires_after_delay() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        scheduler.once(CENTER_DELAY, Box::new(move || flag.set(true)));

        scheduler.advance(Duration::from_millis(299));
        assert!(!fired.get());
        scheduler.advance(Duration::from_millis(1));
        assert!(fired.get());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_every_repeats() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        scheduler.every(RESET_CHECK_INTERVAL, Box::new(move || counter.set(counter.get() + 1)));

        scheduler.advance(Duration::from_secs(59));
        assert_eq!(count.get(), 0);
        scheduler.advance(Duration::from_secs(121));
        assert_eq!(count.get(), 3);
        assert_eq!(scheduler.now(), Duration::from_secs(180));
    }

    #[test]
    fn test_start_daily_reset_ticks_immediately() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        start_daily_reset(&scheduler, RESET_CHECK_INTERVAL, move || counter.set(counter.get() + 1));

        assert_eq!(count.get(), 1);
        scheduler.advance(RESET_CHECK_INTERVAL);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_task_can_schedule_more_work() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let inner_scheduler = scheduler.clone();
        let inner_fired = fired.clone();
        scheduler.once(
            Duration::from_millis(10),
            Box::new(move || {
                let flag = inner_fired.clone();
                inner_scheduler.once(Duration::from_millis(10), Box::new(move || flag.set(flag.get() + 1)));
            }),
        );

        scheduler.advance(Duration::from_millis(25));
        assert_eq!(fired.get(), 1);
    }
}
