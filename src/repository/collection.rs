//! Typed access to one table

use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;
use validator::Validate;

use super::{merge, next_id, record_id, Repository};
use crate::{
    error::{AppError, AppResult},
    models::{RawRecord, Record},
};

/// Typed view of the table `T::TABLE`.
///
/// Writes are checked at the boundary: the payload is validated, and the
/// record that would be stored must deserialize as `T`, otherwise nothing
/// is written.
pub struct Collection<T: Record> {
    repository: Repository,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self::new(self.repository.clone())
    }
}

impl<T: Record> Collection<T> {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            _record: PhantomData,
        }
    }

    /// All records, in stored order
    pub fn list(&self) -> AppResult<Vec<T>> {
        self.repository
            .get_table(T::TABLE)?
            .into_iter()
            .map(|r| self.decode(r))
            .collect()
    }

    pub fn get(&self, id: i64) -> AppResult<Option<T>> {
        self.repository
            .get_table(T::TABLE)?
            .into_iter()
            .find(|r| record_id(r) == Some(id))
            .map(|r| self.decode(r))
            .transpose()
    }

    /// Like [`get`](Self::get), with a missing record as an error
    pub fn find(&self, id: i64) -> AppResult<T> {
        self.get(id)?
            .ok_or_else(|| AppError::NotFound(format!("{} {} not found", T::TABLE, id)))
    }

    /// Insert a record built from `data`; the store assigns its id.
    pub fn create(&self, data: &T::Create) -> AppResult<T> {
        data.validate()?;
        let mut fields = to_fields(data)?;
        self.repository.modify(T::TABLE, |records| {
            fields.insert("id".to_string(), Value::from(next_id(T::TABLE, records)?));
            let created = self.check(&fields)?;
            // Stored in canonical form so defaulted fields are written out.
            records.push(to_fields(&created)?);
            Ok((created, true))
        })
    }

    /// Merge the fields set in `patch` into the record with the given id.
    /// Returns `false` when there is no such record.
    pub fn update(&self, id: i64, patch: &T::Update) -> AppResult<bool> {
        let fields = to_fields(patch)?;
        patch.validate()?;
        let updated = self.update_with(id, |_| Ok(fields))?;
        Ok(updated.is_some())
    }

    /// Compute a patch from the current record and merge it, all under the
    /// table lock. Returns the updated record, `None` when there is no
    /// record with that id. An error from `patch` aborts without writing.
    pub fn update_with(
        &self,
        id: i64,
        patch: impl FnOnce(&T) -> AppResult<RawRecord>,
    ) -> AppResult<Option<T>> {
        self.repository.modify(T::TABLE, |records| {
            let Some(record) = records.iter_mut().find(|r| record_id(r) == Some(id)) else {
                return Ok((None, false));
            };
            let current = self.decode(record.clone())?;
            let fields = patch(&current)?;

            let mut merged = record.clone();
            merge(&mut merged, fields);
            let updated = match self.check(&merged) {
                Ok(updated) => updated,
                Err(e) => {
                    warn!("Rejected update of {} {}: {}", T::TABLE, id, e);
                    return Err(e);
                }
            };
            *record = merged;
            Ok((Some(updated), true))
        })
    }

    pub fn delete(&self, id: i64) -> AppResult<bool> {
        self.repository.remove(T::TABLE, id)
    }

    fn decode(&self, record: RawRecord) -> AppResult<T> {
        serde_json::from_value(Value::Object(record))
            .map_err(|e| AppError::corrupt(T::TABLE.as_str(), e))
    }

    fn check(&self, record: &RawRecord) -> AppResult<T> {
        serde_json::from_value(Value::Object(record.clone()))
            .map_err(|e| AppError::Validation(format!("{}: {}", T::TABLE, e)))
    }
}

pub(crate) fn to_fields<P: Serialize>(payload: &P) -> AppResult<RawRecord> {
    match serde_json::to_value(payload)? {
        Value::Object(fields) => Ok(fields),
        other => Err(AppError::Internal(format!(
            "payload serialized to {} instead of an object",
            other
        ))),
    }
}
