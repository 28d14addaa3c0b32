//! Tecnico (technician) model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{search_matches, Record, Table};

/// Technician record
///
/// The two counters are plain fields edited by hand; they are not derived
/// from the assignments table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tecnico {
    pub id: i64,
    pub nombre_completo: String,
    pub cargo: String,
    /// Phone number
    pub contacto: String,
    pub email: String,
    #[serde(default)]
    pub herramientas_asignadas: i64,
    #[serde(default)]
    pub materiales_asignados: i64,
}

/// Create technician request. Counters start at zero.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTecnico {
    #[validate(length(min = 1, message = "nombre_completo is required"))]
    pub nombre_completo: String,
    #[validate(length(min = 1, message = "cargo is required"))]
    pub cargo: String,
    #[serde(default)]
    pub contacto: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTecnico {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub nombre_completo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub cargo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub herramientas_asignadas: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materiales_asignados: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TecnicoQuery {
    /// Matches nombre_completo or cargo
    pub search: Option<String>,
}

impl TecnicoQuery {
    pub fn matches(&self, t: &Tecnico) -> bool {
        search_matches(self.search.as_deref(), &[t.nombre_completo.as_str(), t.cargo.as_str()])
    }
}

impl Record for Tecnico {
    const TABLE: Table = Table::Tecnicos;
    type Create = CreateTecnico;
    type Update = UpdateTecnico;

    fn id(&self) -> i64 {
        self.id
    }
}
