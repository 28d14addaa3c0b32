//! Asignacion (tool/material loan) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{
    enums::{AsignadoATipo, EstadoAsignacion, TipoItem},
    search_matches, Record, Table,
};

/// Assignment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asignacion {
    pub id: i64,
    pub tipo_item: TipoItem,
    /// Display name of the item handed out
    pub item: String,
    pub asignado_a_tipo: AsignadoATipo,
    /// Display name of the technician or project holding the item
    pub asignado_a: String,
    pub fecha_asignacion: NaiveDate,
    #[serde(default)]
    pub fecha_devolucion: Option<NaiveDate>,
    #[serde(default)]
    pub estado: EstadoAsignacion,
    #[serde(default)]
    pub observaciones: String,
}

impl Asignacion {
    pub fn is_active(&self) -> bool {
        self.estado == EstadoAsignacion::Activa
    }
}

/// Create assignment request. New assignments are always active.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAsignacion {
    #[serde(default)]
    pub tipo_item: TipoItem,
    #[validate(length(min = 1, message = "item is required"))]
    pub item: String,
    #[serde(default)]
    pub asignado_a_tipo: AsignadoATipo,
    #[validate(length(min = 1, message = "asignado_a is required"))]
    pub asignado_a: String,
    pub fecha_asignacion: NaiveDate,
    #[serde(default)]
    pub observaciones: String,
}

/// Fields written by the return workflow
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateAsignacion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoAsignacion>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub fecha_devolucion: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

/// Return request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnAsignacion {
    pub fecha_devolucion: NaiveDate,
    #[serde(default)]
    pub observaciones: String,
}

/// Assignment list filter; `estado: None` lists all
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AsignacionQuery {
    /// Matches item or asignado_a
    pub search: Option<String>,
    pub estado: Option<EstadoAsignacion>,
}

impl AsignacionQuery {
    pub fn matches(&self, a: &Asignacion) -> bool {
        search_matches(self.search.as_deref(), &[a.item.as_str(), a.asignado_a.as_str()])
            && self.estado.map_or(true, |e| a.estado == e)
    }
}

impl Record for Asignacion {
    const TABLE: Table = Table::Asignaciones;
    type Create = CreateAsignacion;
    type Update = UpdateAsignacion;

    fn id(&self) -> i64 {
        self.id
    }
}
