//! Domain Layer
//!
//! Contains the card entity and the small value types around it.
//! This layer has NO browser dependencies.

mod entity;
mod member;
mod day;
mod card;

pub use entity::{DomainError, DomainResult};
pub use member::MemberId;
pub use day::DayStamp;
pub use card::{Card, StatusLabels};
