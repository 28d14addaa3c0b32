//! Record store over named storage slots
//!
//! Each table is read and written as a whole: a JSON array of objects, each
//! carrying an integer `id` unique within the table. Identifiers are
//! assigned here as `max(id) + 1` (or 1 on an empty table) and are never
//! reused for gaps.
//!
//! A table blob that does not have that shape is reported as
//! [`AppError::CorruptTable`] from every operation that reads it. Nothing is
//! silently discarded.

pub mod collection;
pub mod seed;
pub mod session;
pub mod snapshot;

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    models::{RawRecord, Table},
    storage::{Storage, INITIALIZED_SLOT},
};

pub use collection::Collection;

const TABLE_COUNT: usize = Table::ALL.len();

/// Untyped, table-oriented record store
#[derive(Clone)]
pub struct Repository {
    storage: Arc<dyn Storage>,
    /// One lock per table, held across each load-modify-save cycle
    locks: Arc<[Mutex<()>; TABLE_COUNT]>,
}

impl Repository {
    /// Create a new repository over the given storage backend
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            locks: Arc::new(std::array::from_fn(|_| Mutex::new(()))),
        }
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Seed every table on first use.
    ///
    /// Returns `true` when the seed was written, `false` when the store was
    /// already initialized (nothing is touched in that case).
    pub fn initialize(&self) -> AppResult<bool> {
        let initialized = self
            .storage
            .get(INITIALIZED_SLOT)?
            .is_some_and(|flag| !flag.is_empty());
        if initialized {
            debug!("Store already initialized");
            return Ok(false);
        }

        self.write_seed()?;
        self.storage.set(INITIALIZED_SLOT, "true")?;
        info!("Store initialized with seed data");
        Ok(true)
    }

    /// Overwrite every table with the seed data. The initialization flag and
    /// the session slot are left alone.
    pub fn reset_all(&self) -> AppResult<()> {
        self.write_seed()?;
        info!("All tables reset to seed data");
        Ok(())
    }

    fn write_seed(&self) -> AppResult<()> {
        for table in Table::ALL {
            let _guard = self.lock(table);
            self.store(table, &seed::records(table))?;
        }
        Ok(())
    }

    /// Full contents of a table; empty if it was never written.
    pub fn get_table(&self, table: Table) -> AppResult<Vec<RawRecord>> {
        let _guard = self.lock(table);
        self.load(table)
    }

    /// Replace the full contents of a table.
    pub fn save_table(&self, table: Table, records: Vec<RawRecord>) -> AppResult<()> {
        let values = records.into_iter().map(Value::Object).collect();
        let records = check_records(values).map_err(|reason| {
            AppError::Validation(format!("{}: {}", table, reason))
        })?;
        let _guard = self.lock(table);
        self.store(table, &records)
    }

    /// Append a record, assigning it the next id. Any `id` in `record` is
    /// replaced. Returns the stored record.
    pub fn add(&self, table: Table, mut record: RawRecord) -> AppResult<RawRecord> {
        self.modify(table, |records| {
            let id = next_id(table, records)?;
            record.insert("id".to_string(), Value::from(id));
            records.push(record.clone());
            debug!("Added {} {}", table, id);
            Ok((record, true))
        })
    }

    /// Shallow-merge `fields` over the record with the given id. `id` itself
    /// is never overwritten. Returns `false` when no such record exists.
    pub fn update(&self, table: Table, id: i64, fields: RawRecord) -> AppResult<bool> {
        self.modify(table, |records| {
            let Some(record) = records.iter_mut().find(|r| record_id(r) == Some(id)) else {
                return Ok((false, false));
            };
            merge(record, fields);
            debug!("Updated {} {}", table, id);
            Ok((true, true))
        })
    }

    /// Delete the record with the given id. Returns whether one was removed.
    pub fn remove(&self, table: Table, id: i64) -> AppResult<bool> {
        self.modify(table, |records| {
            let before = records.len();
            records.retain(|r| record_id(r) != Some(id));
            let removed = records.len() != before;
            if removed {
                debug!("Removed {} {}", table, id);
            }
            Ok((removed, removed))
        })
    }

    /// Run `f` over the table contents under the table lock. The table is
    /// persisted only when `f` reports it as changed.
    pub(crate) fn modify<R>(
        &self,
        table: Table,
        f: impl FnOnce(&mut Vec<RawRecord>) -> AppResult<(R, bool)>,
    ) -> AppResult<R> {
        let _guard = self.lock(table);
        let mut records = self.load(table)?;
        let (result, changed) = f(&mut records)?;
        if changed {
            self.store(table, &records)?;
        }
        Ok(result)
    }

    // The guarded value is `()`, so a poisoned lock carries no broken state.
    fn lock(&self, table: Table) -> MutexGuard<'_, ()> {
        self.locks[table.index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self, table: Table) -> AppResult<Vec<RawRecord>> {
        let Some(blob) = self.storage.get(table.as_str())? else {
            return Ok(Vec::new());
        };
        let values: Vec<Value> =
            serde_json::from_str(&blob).map_err(|e| AppError::corrupt(table.as_str(), e))?;
        check_records(values).map_err(|reason| AppError::corrupt(table.as_str(), reason))
    }

    fn store(&self, table: Table, records: &[RawRecord]) -> AppResult<()> {
        let blob = serde_json::to_string(records)?;
        self.storage.set(table.as_str(), &blob)?;
        Ok(())
    }
}

/// The integer id of a stored record
pub(crate) fn record_id(record: &RawRecord) -> Option<i64> {
    record.get("id").and_then(Value::as_i64)
}

/// Next id for a table: one past the highest id present, or 1
pub(crate) fn next_id(table: Table, records: &[RawRecord]) -> AppResult<i64> {
    match records.iter().filter_map(record_id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            AppError::Validation(format!("{}: no id left after {}", table, max))
        }),
    }
}

/// Shallow merge of `fields` into `record`, leaving `id` untouched
pub(crate) fn merge(record: &mut RawRecord, fields: RawRecord) {
    for (key, value) in fields {
        if key == "id" {
            continue;
        }
        record.insert(key, value);
    }
}

/// Check that every value is an object with an integer id, ids unique.
pub(crate) fn check_records(values: Vec<Value>) -> Result<Vec<RawRecord>, String> {
    let mut seen = HashSet::with_capacity(values.len());
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let Value::Object(record) = value else {
                return Err(format!("entry {} is not an object", i));
            };
            let id = record_id(&record)
                .ok_or_else(|| format!("entry {} has no integer id", i))?;
            if !seen.insert(id) {
                return Err(format!("duplicate id {}", id));
            }
            Ok(record)
        })
        .collect()
}
