//! Whole-store export and import

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{info, warn};

use super::{check_records, Repository};
use crate::{
    error::{AppError, AppResult},
    models::{ImportReport, RawRecord, Table, TableImport},
};

impl Repository {
    /// Pretty-printed JSON object holding every table, keyed by table name.
    pub fn export_all(&self) -> AppResult<String> {
        let mut tables: IndexMap<&'static str, Vec<RawRecord>> = IndexMap::new();
        for table in Table::ALL {
            tables.insert(table.as_str(), self.get_table(table)?);
        }
        Ok(serde_json::to_string_pretty(&tables)?)
    }

    /// Overwrite the tables named in a snapshot produced by [`export_all`].
    ///
    /// The whole snapshot is checked before anything is written: a snapshot
    /// that is not a JSON object, or a known table that is not an array of
    /// objects with unique integer ids, fails without touching the store.
    /// Keys that name no table are skipped and listed in the report.
    ///
    /// [`export_all`]: Repository::export_all
    pub fn import_all(&self, snapshot: &str) -> AppResult<ImportReport> {
        let parsed: IndexMap<String, Value> = serde_json::from_str(snapshot)?;

        let mut report = ImportReport::default();
        let mut pending = Vec::with_capacity(parsed.len());
        for (key, value) in parsed {
            let Ok(table) = key.parse::<Table>() else {
                warn!("Skipping unknown snapshot key {:?}", key);
                report.skipped.push(key);
                continue;
            };
            let Value::Array(values) = value else {
                return Err(AppError::Validation(format!("{} is not an array", table)));
            };
            let records = check_records(values)
                .map_err(|reason| AppError::Validation(format!("{}: {}", table, reason)))?;
            pending.push((table, records));
        }

        for (table, records) in pending {
            let count = records.len();
            self.save_table(table, records)?;
            report.imported.push(TableImport {
                table,
                records: count,
            });
        }

        info!(
            "Imported {} records into {} tables",
            report.total_records(),
            report.imported.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryStorage;

    fn seeded() -> Repository {
        let repo = Repository::new(Arc::new(MemoryStorage::new()));
        repo.initialize().unwrap();
        repo
    }

    #[test]
    fn test_export_then_import_roundtrip() {
        let repo = seeded();
        repo.remove(Table::Materiales, 2).unwrap();
        let exported = repo.export_all().unwrap();

        let other = Repository::new(Arc::new(MemoryStorage::new()));
        let report = other.import_all(&exported).unwrap();
        assert_eq!(report.imported.len(), Table::ALL.len());
        assert!(report.skipped.is_empty());

        for table in Table::ALL {
            assert_eq!(other.get_table(table).unwrap(), repo.get_table(table).unwrap());
        }
        assert_eq!(other.export_all().unwrap(), exported);
    }

    #[test]
    fn test_export_keeps_table_order() {
        let exported = seeded().export_all().unwrap();
        let parsed: IndexMap<String, Value> = serde_json::from_str(&exported).unwrap();
        let keys: Vec<_> = parsed.keys().map(String::as_str).collect();
        let expected: Vec<_> = Table::ALL.iter().map(Table::as_str).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_import_skips_unknown_keys() {
        let repo = seeded();
        let report = repo
            .import_all(r#"{"ubicaciones": [{"id": 1, "nombre": "Bodega", "tipo": "almacen"}], "currentUser": {}}"#)
            .unwrap();

        assert_eq!(
            report.imported,
            vec![TableImport {
                table: Table::Ubicaciones,
                records: 1
            }]
        );
        assert_eq!(report.skipped, vec!["currentUser".to_string()]);
        assert_eq!(repo.get_table(Table::Ubicaciones).unwrap().len(), 1);
        assert_eq!(repo.get_table(Table::Materiales).unwrap().len(), 4);
    }

    #[test]
    fn test_malformed_snapshot_writes_nothing() {
        let repo = seeded();
        let before = repo.export_all().unwrap();

        assert!(matches!(
            repo.import_all("not json"),
            Err(AppError::Serialization(_))
        ));
        assert!(matches!(
            repo.import_all(r#"{"materiales": [], "herramientas": [{"nombre": "x"}]}"#),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            repo.import_all(r#"{"tecnicos": {"id": 1}}"#),
            Err(AppError::Validation(_))
        ));

        assert_eq!(repo.export_all().unwrap(), before);
    }
}
