//! Data models for Inventario Telecom

pub mod asignacion;
pub mod enums;
pub mod herramienta;
pub mod import_report;
pub mod material;
pub mod movimiento;
pub mod proveedor;
pub mod proyecto;
pub mod tecnico;
pub mod ubicacion;
pub mod usuario;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use validator::Validate;

// Re-export commonly used types
pub use asignacion::{
    Asignacion, AsignacionQuery, CreateAsignacion, ReturnAsignacion, UpdateAsignacion,
};
pub use enums::{
    AsignadoATipo, EstadoAsignacion, EstadoHerramienta, EstadoProyecto, TipoItem,
    TipoMovimiento, TipoUbicacion,
};
pub use herramienta::{CreateHerramienta, Herramienta, HerramientaQuery, UpdateHerramienta};
pub use import_report::{ImportReport, TableImport};
pub use material::{CreateMaterial, Material, MaterialQuery, UpdateMaterial};
pub use movimiento::{CreateMovimiento, Movimiento, MovimientoQuery};
pub use proveedor::{CreateProveedor, Proveedor, ProveedorQuery, UpdateProveedor};
pub use proyecto::{CreateProyecto, Proyecto, ProyectoQuery, UpdateProyecto};
pub use tecnico::{CreateTecnico, Tecnico, TecnicoQuery, UpdateTecnico};
pub use ubicacion::{CreateUbicacion, Ubicacion, UbicacionQuery, UpdateUbicacion};
pub use usuario::{CreateUsuario, UpdateUsuario, Usuario};

/// A loosely typed stored record: field name to JSON value, including `id`.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Named tables, one storage slot each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Materiales,
    Herramientas,
    Ubicaciones,
    Tecnicos,
    Proveedores,
    Proyectos,
    Movimientos,
    Asignaciones,
    Usuarios,
}

impl Table {
    /// Every table, in export order
    pub const ALL: [Table; 9] = [
        Table::Materiales,
        Table::Herramientas,
        Table::Ubicaciones,
        Table::Tecnicos,
        Table::Proveedores,
        Table::Proyectos,
        Table::Movimientos,
        Table::Asignaciones,
        Table::Usuarios,
    ];

    /// Slot name of the table
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Materiales => "materiales",
            Table::Herramientas => "herramientas",
            Table::Ubicaciones => "ubicaciones",
            Table::Tecnicos => "tecnicos",
            Table::Proveedores => "proveedores",
            Table::Proyectos => "proyectos",
            Table::Movimientos => "movimientos",
            Table::Asignaciones => "asignaciones",
            Table::Usuarios => "usuarios",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::str::FromStr for Table {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown table '{}'", s))
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A typed row of one table.
///
/// `Create` is the payload accepted on insertion (no `id`), `Update` the
/// partial field set merged over an existing row. Both serialize to the
/// stored field names; `Update` must skip fields it does not touch.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    const TABLE: Table;

    type Create: Serialize + Validate;
    type Update: Serialize + Validate;

    fn id(&self) -> i64;
}

/// Case-insensitive substring match used by the table queries.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True when no search term is set or any field matches it.
pub(crate) fn search_matches(search: Option<&str>, fields: &[&str]) -> bool {
    match search {
        None | Some("") => true,
        Some(term) => fields.iter().any(|f| contains_ci(f, term)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names_roundtrip() {
        for table in Table::ALL {
            assert_eq!(table.as_str().parse::<Table>().unwrap(), table);
        }
        assert!("bodegas".parse::<Table>().is_err());
    }

    #[test]
    fn test_table_display_honors_width() {
        assert_eq!(format!("{:<14}|", Table::Tecnicos), "tecnicos      |");
        assert_eq!(format!("{:>8}", Table::Usuarios), "usuarios");
    }

    #[test]
    fn test_table_index_matches_order() {
        for (i, table) in Table::ALL.iter().enumerate() {
            assert_eq!(table.index(), i);
        }
    }

    #[test]
    fn test_search_matches() {
        assert!(search_matches(None, &["Cable"]));
        assert!(search_matches(Some(""), &["Cable"]));
        assert!(search_matches(Some("cable"), &["Conector", "CABLE UTP"]));
        assert!(!search_matches(Some("fibra"), &["Cable UTP"]));
    }
}
