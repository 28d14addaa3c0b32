//! Usuario (application user) model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Record, Table};

/// User record. The password is stored as entered.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub usuario: String,
    pub password: String,
    pub nombre: String,
    pub rol: String,
}

impl std::fmt::Debug for Usuario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Usuario")
            .field("id", &self.id)
            .field("usuario", &self.usuario)
            .field("nombre", &self.nombre)
            .field("rol", &self.rol)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUsuario {
    #[validate(length(min = 1, message = "usuario is required"))]
    pub usuario: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    #[serde(default)]
    pub nombre: String,
    #[validate(length(min = 1, message = "rol is required"))]
    pub rol: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUsuario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub usuario: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub rol: Option<String>,
}

impl Record for Usuario {
    const TABLE: Table = Table::Usuarios;
    type Create = CreateUsuario;
    type Update = UpdateUsuario;

    fn id(&self) -> i64 {
        self.id
    }
}
