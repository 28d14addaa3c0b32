//! Backup service: seeding, snapshot export/import and reset

use crate::{error::AppResult, models::ImportReport, repository::Repository};

#[derive(Clone)]
pub struct BackupService {
    repository: Repository,
}

impl BackupService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Seed the store on first use; `false` when it was already initialized
    pub fn initialize(&self) -> AppResult<bool> {
        self.repository.initialize()
    }

    /// Pretty-printed JSON snapshot of every table
    pub fn export(&self) -> AppResult<String> {
        self.repository.export_all()
    }

    /// Overwrite the tables present in `snapshot`
    pub fn import(&self, snapshot: &str) -> AppResult<ImportReport> {
        self.repository.import_all(snapshot)
    }

    /// Restore every table to the seed data
    pub fn reset(&self) -> AppResult<()> {
        self.repository.reset_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Table;
    use crate::services::{
        materiales::MaterialesService,
        test_support::{empty_repository, seeded_repository},
    };

    #[test]
    fn test_export_import_into_fresh_store() {
        let source = BackupService::new(seeded_repository());
        let snapshot = source.export().unwrap();

        let target_repository = empty_repository();
        let target = BackupService::new(target_repository.clone());
        let report = target.import(&snapshot).unwrap();

        assert_eq!(report.imported.len(), Table::ALL.len());
        assert!(report.skipped.is_empty());
        assert_eq!(target.export().unwrap(), snapshot);
        assert_eq!(target_repository.get_table(Table::Ubicaciones).unwrap().len(), 6);
    }

    #[test]
    fn test_reset_discards_changes() {
        let repository = seeded_repository();
        let backup = BackupService::new(repository.clone());
        let materials = MaterialesService::new(repository);
        let pristine = backup.export().unwrap();

        materials.delete(1).unwrap();
        assert_ne!(backup.export().unwrap(), pristine);

        backup.reset().unwrap();
        assert_eq!(backup.export().unwrap(), pristine);
        assert!(!backup.initialize().unwrap());
    }
}
