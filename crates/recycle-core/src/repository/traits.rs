//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for the flat string key-value store.
//! Implementations can use `localStorage`, in-memory maps, etc.

use crate::domain::DomainResult;

/// Flat string-to-string store, shaped like `window.localStorage`
///
/// Methods take `&self`: browser storage is shared, interior-mutable state.
pub trait KeyValueStore {
    /// Read a value, `None` when the key was never written
    fn get_item(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        (**self).set_item(key, value)
    }
}
