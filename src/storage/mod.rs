//! Key-value slot storage backing the record store
//!
//! Every table lives in one named slot holding its serialized collection.
//! Two more slots hold the bootstrap flag and the current user. Backends
//! only move opaque strings around; the record store owns the format.

pub mod file;
pub mod memory;
pub mod redb;

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::StorageError;

pub use self::file::FileStorage;
pub use self::memory::MemoryStorage;
pub use self::redb::RedbStorage;

/// Slot holding `"true"` once the seed data has been written
pub const INITIALIZED_SLOT: &str = "inventario_initialized";

/// Slot holding the serialized user of the current session
pub const CURRENT_USER_SLOT: &str = "currentUser";

/// Named-slot storage interface.
///
/// Implementations must be safe to share across threads; the record store
/// serializes read-modify-write cycles itself.
#[cfg_attr(test, mockall::automock)]
pub trait Storage: Send + Sync {
    /// Get the blob stored in a slot, `None` if the slot was never written.
    fn get(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Replace the blob stored in a slot.
    fn set(&self, slot: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a slot. Removing a missing slot is not an error.
    fn remove(&self, slot: &str) -> Result<(), StorageError>;
}

/// Open the backend selected in configuration
pub fn open(config: &StorageConfig) -> Result<Arc<dyn Storage>, StorageError> {
    let storage: Arc<dyn Storage> = match config.backend {
        StorageBackend::Memory => Arc::new(MemoryStorage::new()),
        StorageBackend::File => Arc::new(FileStorage::open(&config.data_dir)?),
        StorageBackend::Redb => Arc::new(RedbStorage::open(&config.redb_path)?),
    };
    tracing::debug!("Opened {:?} storage backend", config.backend);
    Ok(storage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_memory_backend() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            ..Default::default()
        };
        let storage = open(&config).unwrap();
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_open_file_backend_creates_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: tmp.path().join("nested").join("data"),
            ..Default::default()
        };
        let storage = open(&config).unwrap();
        storage.set("materiales", "[]").unwrap();
        assert!(tmp.path().join("nested/data/materiales.json").is_file());
    }
}
