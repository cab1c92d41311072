//! Status Repository
//!
//! Maps card status onto the flat key schema:
//! `recycleStatus-{member}`, `recycleDate-{member}` and `lastResetDate`.

use super::traits::KeyValueStore;
use crate::domain::{DayStamp, DomainResult, MemberId};

pub const STATUS_KEY_PREFIX: &str = "recycleStatus-";
pub const DATE_KEY_PREFIX: &str = "recycleDate-";
pub const LAST_RESET_KEY: &str = "lastResetDate";

/// What storage remembers about one member
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusRecord {
    /// Anything other than the literal `"true"` reads as false
    pub completed: bool,
    pub day: Option<DayStamp>,
}

pub struct StatusRepository<S> {
    store: S,
}

impl<S: KeyValueStore> StatusRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn status_key(member: &MemberId) -> String {
        format!("{STATUS_KEY_PREFIX}{member}")
    }

    pub fn date_key(member: &MemberId) -> String {
        format!("{DATE_KEY_PREFIX}{member}")
    }

    pub fn load(&self, member: &MemberId) -> DomainResult<StatusRecord> {
        let completed = self
            .store
            .get_item(&Self::status_key(member))?
            .is_some_and(|raw| raw == "true");
        let day = self
            .store
            .get_item(&Self::date_key(member))?
            .map(DayStamp::from_stored);
        Ok(StatusRecord { completed, day })
    }

    /// Write status and day for one member
    pub fn save(&self, member: &MemberId, completed: bool, day: &DayStamp) -> DomainResult<()> {
        let status = if completed { "true" } else { "false" };
        self.store.set_item(&Self::status_key(member), status)?;
        self.store.set_item(&Self::date_key(member), day.as_str())?;
        Ok(())
    }

    pub fn last_reset_day(&self) -> DomainResult<Option<DayStamp>> {
        Ok(self.store.get_item(LAST_RESET_KEY)?.map(DayStamp::from_stored))
    }

    pub fn set_last_reset_day(&self, day: &DayStamp) -> DomainResult<()> {
        self.store.set_item(LAST_RESET_KEY, day.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;

    #[test]
    fn test_save_writes_both_keys() {
        let store = MemoryStore::new();
        let repo = StatusRepository::new(store.clone());
        let member = MemberId::new("m1");
        repo.save(&member, true, &DayStamp::from_stored("1/2/2024")).unwrap();

        assert_eq!(store.peek("recycleStatus-m1").as_deref(), Some("true"));
        assert_eq!(store.peek("recycleDate-m1").as_deref(), Some("1/2/2024"));
    }

    #[test]
    fn test_load_missing_member() {
        let repo = StatusRepository::new(MemoryStore::new());
        let record = repo.load(&MemberId::new("ghost")).unwrap();
        assert_eq!(record, StatusRecord::default());
    }

    #[test]
    fn test_non_true_status_reads_false() {
        let store = MemoryStore::with_entries([
            ("recycleStatus-m1", "TRUE"),
            ("recycleDate-m1", "1/2/2024"),
        ]);
        let repo = StatusRepository::new(store);
        let record = repo.load(&MemberId::new("m1")).unwrap();
        assert!(!record.completed);
        assert_eq!(record.day, Some(DayStamp::from_stored("1/2/2024")));
    }

    #[test]
    fn test_last_reset_roundtrip() {
        let repo = StatusRepository::new(MemoryStore::new());
        assert_eq!(repo.last_reset_day().unwrap(), None);
        let day = DayStamp::from_stored("3/4/2024");
        repo.set_last_reset_day(&day).unwrap();
        assert_eq!(repo.last_reset_day().unwrap(), Some(day));
    }
}
