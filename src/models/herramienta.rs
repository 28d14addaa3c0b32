//! Herramienta (tool) model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{enums::EstadoHerramienta, search_matches, Record, Table};

/// Tool record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Herramienta {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    /// Internal inventory code. Unique by convention only.
    pub codigo_interno: String,
    pub estado: EstadoHerramienta,
    #[serde(default)]
    pub ubicacion: String,
    /// Name of the technician holding the tool
    #[serde(default)]
    pub asignada_a: Option<String>,
}

/// Create tool request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateHerramienta {
    #[validate(length(min = 1, message = "nombre is required"))]
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    #[validate(length(min = 1, message = "codigo_interno is required"))]
    pub codigo_interno: String,
    #[serde(default)]
    pub estado: EstadoHerramienta,
    #[serde(default)]
    pub ubicacion: String,
    #[serde(default)]
    pub asignada_a: Option<String>,
}

impl CreateHerramienta {
    /// Trim text fields; a blank holder means the tool is unassigned.
    pub fn normalized(self) -> Self {
        Self {
            nombre: self.nombre.trim().to_string(),
            descripcion: self.descripcion.trim().to_string(),
            codigo_interno: self.codigo_interno.trim().to_string(),
            estado: self.estado,
            ubicacion: self.ubicacion.trim().to_string(),
            asignada_a: self
                .asignada_a
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
        }
    }
}

/// Update tool request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateHerramienta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub codigo_interno: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoHerramienta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ubicacion: Option<String>,
    /// `Some(None)` releases the tool
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub asignada_a: Option<Option<String>>,
}

impl UpdateHerramienta {
    /// Same rules as [`CreateHerramienta::normalized`] for the fields set.
    pub fn normalized(self) -> Self {
        let trim = |s: Option<String>| s.map(|s| s.trim().to_string());
        Self {
            nombre: trim(self.nombre),
            descripcion: trim(self.descripcion),
            codigo_interno: trim(self.codigo_interno),
            estado: self.estado,
            ubicacion: trim(self.ubicacion),
            asignada_a: self.asignada_a.map(|holder| {
                holder
                    .map(|a| a.trim().to_string())
                    .filter(|a| !a.is_empty())
            }),
        }
    }
}

/// Tool list filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HerramientaQuery {
    /// Matches nombre or codigo_interno
    pub search: Option<String>,
    pub estado: Option<EstadoHerramienta>,
}

impl HerramientaQuery {
    pub fn matches(&self, h: &Herramienta) -> bool {
        search_matches(self.search.as_deref(), &[h.nombre.as_str(), h.codigo_interno.as_str()])
            && self.estado.map_or(true, |e| h.estado == e)
    }
}

impl Record for Herramienta {
    const TABLE: Table = Table::Herramientas;
    type Create = CreateHerramienta;
    type Update = UpdateHerramienta;

    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_blank_holder_is_none() {
        let tool = CreateHerramienta {
            nombre: "  Taladro ".into(),
            descripcion: String::new(),
            codigo_interno: " H-1".into(),
            estado: EstadoHerramienta::Operativa,
            ubicacion: "Taller ".into(),
            asignada_a: Some("   ".into()),
        }
        .normalized();

        assert_eq!(tool.nombre, "Taladro");
        assert_eq!(tool.codigo_interno, "H-1");
        assert_eq!(tool.ubicacion, "Taller");
        assert_eq!(tool.asignada_a, None);
    }

    #[test]
    fn test_update_release_serializes_null() {
        let patch = UpdateHerramienta {
            asignada_a: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "asignada_a": null }));

        let untouched = serde_json::to_value(UpdateHerramienta::default()).unwrap();
        assert_eq!(untouched, serde_json::json!({}));
    }
}
