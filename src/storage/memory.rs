use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::StorageError;

use super::Storage;

/// Process-local storage. Contents are lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RwLock<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of every written slot, sorted.
    pub fn slots(&self) -> Vec<String> {
        match self.slots.read() {
            Ok(slots) => slots.keys().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().keys().cloned().collect(),
        }
    }
}

fn poisoned() -> StorageError {
    StorageError::Backend("memory storage lock poisoned".to_string())
}

impl Storage for MemoryStorage {
    fn get(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.read().map_err(|_| poisoned())?;
        Ok(slots.get(slot).cloned())
    }

    fn set(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.write().map_err(|_| poisoned())?;
        slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.write().map_err(|_| poisoned())?;
        slots.remove(slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slot_is_none() {
        let storage = MemoryStorage::new();
        assert!(storage.get("materiales").unwrap().is_none());
    }

    #[test]
    fn test_set_replaces_and_remove_clears() {
        let storage = MemoryStorage::new();
        storage.set("tecnicos", "[]").unwrap();
        storage.set("tecnicos", "[{\"id\":1}]").unwrap();
        assert_eq!(storage.get("tecnicos").unwrap().as_deref(), Some("[{\"id\":1}]"));

        storage.remove("tecnicos").unwrap();
        storage.remove("tecnicos").unwrap();
        assert!(storage.get("tecnicos").unwrap().is_none());
        assert!(storage.slots().is_empty());
    }
}
