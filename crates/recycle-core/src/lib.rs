//! Recycle Cards Core
//!
//! Card state, persistence and daily reset rules for the recycle cards widget.
//! Nothing in this crate touches the browser: storage, time and timers are
//! injected through the traits in [`repository`], [`clock`] and [`schedule`].

pub mod domain;
pub mod repository;
pub mod clock;
pub mod schedule;
pub mod board;
pub mod controller;
pub mod geometry;
pub mod config;

pub use domain::{Card, DayStamp, DomainError, DomainResult, MemberId, StatusLabels};
pub use repository::{KeyValueStore, MemoryStore, StatusRecord, StatusRepository};
pub use clock::{Clock, FixedClock, SystemClock};
pub use schedule::{start_daily_reset, ManualScheduler, Scheduler, CENTER_DELAY, RESET_CHECK_INTERVAL};
pub use board::{CardBoard, Toggle};
pub use controller::CardController;
pub use geometry::ScrollGeometry;
pub use config::{CardConfig, MemberEntry, MAX_TIMER_MS};
