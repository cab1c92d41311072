//! Repository Layer
//!
//! Key-value persistence and the key schema for card status records.

mod traits;
mod memory;
mod status_repo;

pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use status_repo::{StatusRecord, StatusRepository, LAST_RESET_KEY};
