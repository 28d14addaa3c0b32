//! Movimiento (stock movement) model
//!
//! Movements are an append-only log: there is no update payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{
    enums::{TipoItem, TipoMovimiento},
    search_matches, Record, Table,
};

/// Movement record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movimiento {
    pub id: i64,
    pub tipo: TipoMovimiento,
    pub fecha: NaiveDate,
    pub tipo_item: TipoItem,
    /// Display name of the material or tool moved
    pub item: String,
    pub cantidad: i64,
    pub origen: String,
    pub destino: String,
    #[serde(default)]
    pub observaciones: String,
}

/// Create movement request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMovimiento {
    #[serde(default)]
    pub tipo: TipoMovimiento,
    pub fecha: NaiveDate,
    #[serde(default)]
    pub tipo_item: TipoItem,
    #[validate(length(min = 1, message = "item is required"))]
    pub item: String,
    pub cantidad: i64,
    #[validate(length(min = 1, message = "origen is required"))]
    pub origen: String,
    #[validate(length(min = 1, message = "destino is required"))]
    pub destino: String,
    #[serde(default)]
    pub observaciones: String,
}

/// Movements never change once written.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NoUpdate {}

impl Validate for NoUpdate {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        Ok(())
    }
}

/// Movement list filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovimientoQuery {
    /// Matches item, origen or destino
    pub search: Option<String>,
    pub tipo: Option<TipoMovimiento>,
    /// Exact date
    pub fecha: Option<NaiveDate>,
}

impl MovimientoQuery {
    pub fn matches(&self, m: &Movimiento) -> bool {
        search_matches(self.search.as_deref(), &[m.item.as_str(), m.origen.as_str(), m.destino.as_str()])
            && self.tipo.map_or(true, |t| m.tipo == t)
            && self.fecha.map_or(true, |f| m.fecha == f)
    }
}

impl Record for Movimiento {
    const TABLE: Table = Table::Movimientos;
    type Create = CreateMovimiento;
    type Update = NoUpdate;

    fn id(&self) -> i64 {
        self.id
    }
}
