//! Proyecto (installation project) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{enums::EstadoProyecto, search_matches, Record, Table};

/// Project record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proyecto {
    pub id: i64,
    pub nombre: String,
    pub cliente: String,
    /// Site address, free text
    pub ubicacion: String,
    pub fecha_inicio: NaiveDate,
    #[serde(default)]
    pub fecha_fin: Option<NaiveDate>,
    pub estado: EstadoProyecto,
    /// Completion percentage (0-100)
    #[serde(default)]
    pub progreso: i64,
}

/// Create project request. Progress starts at zero.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProyecto {
    #[validate(length(min = 1, message = "nombre is required"))]
    pub nombre: String,
    #[validate(length(min = 1, message = "cliente is required"))]
    pub cliente: String,
    #[serde(default)]
    pub ubicacion: String,
    pub fecha_inicio: NaiveDate,
    #[serde(default)]
    pub fecha_fin: Option<NaiveDate>,
    #[serde(default)]
    pub estado: EstadoProyecto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProyecto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub cliente: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ubicacion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<NaiveDate>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub fecha_fin: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoProyecto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 100))]
    pub progreso: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProyectoQuery {
    /// Matches nombre or cliente
    pub search: Option<String>,
    pub estado: Option<EstadoProyecto>,
}

impl ProyectoQuery {
    pub fn matches(&self, p: &Proyecto) -> bool {
        search_matches(self.search.as_deref(), &[p.nombre.as_str(), p.cliente.as_str()])
            && self.estado.map_or(true, |e| p.estado == e)
    }
}

impl Record for Proyecto {
    const TABLE: Table = Table::Proyectos;
    type Create = CreateProyecto;
    type Update = UpdateProyecto;

    fn id(&self) -> i64 {
        self.id
    }
}
