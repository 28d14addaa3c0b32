//! Snapshot import report

use serde::{Deserialize, Serialize};

use super::Table;

/// One table overwritten by an import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableImport {
    pub table: Table,
    pub records: usize,
}

/// What an import wrote and what it ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    pub imported: Vec<TableImport>,
    /// Snapshot keys that do not name a known table
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

impl ImportReport {
    pub fn total_records(&self) -> usize {
        self.imported.iter().map(|t| t.records).sum()
    }
}
