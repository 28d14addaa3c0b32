//! Material (consumable stock) model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{search_matches, Record, Table};

/// Material record
///
/// `ubicacion` and `proveedor` hold the display name of a location and a
/// supplier. They are not checked against those tables and may dangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    pub categoria: String,
    /// Unit of measure (metros, unidades, ...)
    pub unidad_medida: String,
    pub stock_actual: i64,
    pub stock_minimo: i64,
    pub ubicacion: String,
    pub proveedor: String,
}

impl Material {
    /// Stock is below the configured minimum
    pub fn is_low_stock(&self) -> bool {
        self.stock_actual < self.stock_minimo
    }
}

/// Create material request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMaterial {
    #[validate(length(min = 1, message = "nombre is required"))]
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    #[validate(length(min = 1, message = "categoria is required"))]
    pub categoria: String,
    #[validate(length(min = 1, message = "unidad_medida is required"))]
    pub unidad_medida: String,
    pub stock_actual: i64,
    pub stock_minimo: i64,
    #[serde(default)]
    pub ubicacion: String,
    #[serde(default)]
    pub proveedor: String,
}

/// Update material request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateMaterial {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub categoria: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub unidad_medida: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_actual: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_minimo: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ubicacion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proveedor: Option<String>,
}

/// Material list filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaterialQuery {
    /// Matches nombre or categoria
    pub search: Option<String>,
}

impl MaterialQuery {
    pub fn matches(&self, m: &Material) -> bool {
        search_matches(self.search.as_deref(), &[m.nombre.as_str(), m.categoria.as_str()])
    }
}

impl Record for Material {
    const TABLE: Table = Table::Materiales;
    type Create = CreateMaterial;
    type Update = UpdateMaterial;

    fn id(&self) -> i64 {
        self.id
    }
}
