//! Ubicacion (location) model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{enums::TipoUbicacion, search_matches, Record, Table};

/// Location record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ubicacion {
    pub id: i64,
    pub nombre: String,
    pub tipo: TipoUbicacion,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUbicacion {
    #[validate(length(min = 1, message = "nombre is required"))]
    pub nombre: String,
    #[serde(default)]
    pub tipo: TipoUbicacion,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUbicacion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<TipoUbicacion>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UbicacionQuery {
    pub search: Option<String>,
    pub tipo: Option<TipoUbicacion>,
}

impl UbicacionQuery {
    pub fn matches(&self, u: &Ubicacion) -> bool {
        search_matches(self.search.as_deref(), &[u.nombre.as_str()])
            && self.tipo.map_or(true, |t| u.tipo == t)
    }
}

impl Record for Ubicacion {
    const TABLE: Table = Table::Ubicaciones;
    type Create = CreateUbicacion;
    type Update = UpdateUbicacion;

    fn id(&self) -> i64 {
        self.id
    }
}
