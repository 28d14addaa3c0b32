use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableTableMetadata, TableDefinition};

use crate::error::StorageError;

use super::Storage;

const SLOTS: TableDefinition<&str, &str> = TableDefinition::new("slots");

fn backend<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Backend(e.to_string())
}

/// RedbStorage keeps every slot in a single redb database file. Each `set`
/// is its own write transaction.
pub struct RedbStorage {
    db: Arc<Database>,
}

impl RedbStorage {
    /// Open or create a redb database at the given path.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                slot: parent.display().to_string(),
                source,
            })?;
        }
        let db = Database::create(path).map_err(backend)?;

        // Ensure the table exists so read transactions never miss it.
        let write_txn = db.begin_write().map_err(backend)?;
        {
            let _table = write_txn.open_table(SLOTS).map_err(backend)?;
        }
        write_txn.commit().map_err(backend)?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Number of slots currently stored.
    pub fn len(&self) -> Result<u64, StorageError> {
        let read_txn = self.db.begin_read().map_err(backend)?;
        let table = read_txn.open_table(SLOTS).map_err(backend)?;
        table.len().map_err(backend)
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}

impl Storage for RedbStorage {
    fn get(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let read_txn = self.db.begin_read().map_err(backend)?;
        let table = read_txn.open_table(SLOTS).map_err(backend)?;

        match table.get(slot) {
            Ok(Some(val)) => Ok(Some(val.value().to_string())),
            Ok(None) => Ok(None),
            Err(e) => Err(backend(e)),
        }
    }

    fn set(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        let write_txn = self.db.begin_write().map_err(backend)?;
        {
            let mut table = write_txn.open_table(SLOTS).map_err(backend)?;
            table.insert(slot, value).map_err(backend)?;
        }
        write_txn.commit().map_err(backend)?;
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<(), StorageError> {
        let write_txn = self.db.begin_write().map_err(backend)?;
        {
            let mut table = write_txn.open_table(SLOTS).map_err(backend)?;
            table.remove(slot).map_err(backend)?;
        }
        write_txn.commit().map_err(backend)?;
        Ok(())
    }
}
