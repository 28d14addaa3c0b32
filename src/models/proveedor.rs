//! Proveedor (supplier) model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{contains_ci, Record, Table};

/// Supplier record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proveedor {
    pub id: i64,
    pub nombre: String,
    /// Contact person
    pub contacto: String,
    pub telefono: String,
    pub correo: String,
    pub direccion: String,
    /// Hand-maintained counter
    #[serde(default)]
    pub materiales_suministrados: i64,
}

/// Create supplier request. The supplied-materials counter starts at zero.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProveedor {
    #[validate(length(min = 1, message = "nombre is required"))]
    pub nombre: String,
    #[serde(default)]
    pub contacto: String,
    #[validate(length(min = 1, message = "telefono is required"))]
    pub telefono: String,
    #[serde(default)]
    pub correo: String,
    #[serde(default)]
    pub direccion: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProveedor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub telefono: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materiales_suministrados: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProveedorQuery {
    /// Matches nombre (any case) or telefono (verbatim)
    pub search: Option<String>,
}

impl ProveedorQuery {
    pub fn matches(&self, p: &Proveedor) -> bool {
        match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => contains_ci(&p.nombre, term) || p.telefono.contains(term),
        }
    }
}

impl Record for Proveedor {
    const TABLE: Table = Table::Proveedores;
    type Create = CreateProveedor;
    type Update = UpdateProveedor;

    fn id(&self) -> i64 {
        self.id
    }
}
