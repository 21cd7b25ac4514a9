// String key/value persistence and the visitor counter built on it
use crate::error::StorageError;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`.
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// Reads the stored count (absent or unreadable counts as 0), adds one,
/// writes it back and returns the new value.
pub fn record_visit(store: &impl KeyValueStore, key: &str) -> Result<u64, StorageError> {
    let previous = store
        .get(key)?
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(0);
    let count = previous.saturating_add(1);
    store.set(key, &count.to_string())?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.items.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    const KEY: &str = "visitorCount";

    #[test]
    fn first_visit_stores_one() {
        let store = MemoryStore::default();
        assert_eq!(record_visit(&store, KEY).unwrap(), 1);
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn increments_existing_value() {
        let store = MemoryStore::default();
        store.set(KEY, "5").unwrap();
        assert_eq!(record_visit(&store, KEY).unwrap(), 6);
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("6"));
    }

    #[test]
    fn garbage_restarts_from_zero() {
        let store = MemoryStore::default();
        store.set(KEY, "NaN").unwrap();
        assert_eq!(record_visit(&store, KEY).unwrap(), 1);
    }

    #[test]
    fn never_decreases_across_loads() {
        let store = MemoryStore::default();
        let counts: Vec<u64> = (0..4).map(|_| record_visit(&store, KEY).unwrap()).collect();
        assert_eq!(counts, vec![1, 2, 3, 4]);
    }

    struct ReadOnly;
    impl KeyValueStore for ReadOnly {
        fn get(&self, _: &str) -> Result<Option<String>, StorageError> {
            Ok(Some("3".into()))
        }
        fn set(&self, _: &str, _: &str) -> Result<(), StorageError> {
            Err(StorageError::Access("QuotaExceededError".into()))
        }
    }

    #[test]
    fn write_failure_propagates() {
        assert!(matches!(record_visit(&ReadOnly, KEY), Err(StorageError::Access(_))));
    }
}
