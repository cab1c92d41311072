//! In-Memory Store
//!
//! `KeyValueStore` backed by a shared map. Clones share the same entries,
//! the same way every handle to `localStorage` sees the same data.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::traits::KeyValueStore;
use crate::domain::DomainResult;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-filled with entries
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        store.entries.borrow_mut().extend(
            entries.into_iter().map(|(k, v)| (k.into(), v.into())),
        );
        store
    }

    /// Read a value without going through the trait's `Result`
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        handle.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap(), Some("v".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_key_reads_none() {
        let store = MemoryStore::with_entries([("a", "1")]);
        assert_eq!(store.get_item("b").unwrap(), None);
        assert_eq!(store.peek("a").as_deref(), Some("1"));
    }
}
