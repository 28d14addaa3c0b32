//! Tools service

use crate::{
    error::AppResult,
    models::{CreateHerramienta, Herramienta, HerramientaQuery, UpdateHerramienta},
    repository::{Collection, Repository},
};

#[derive(Clone)]
pub struct HerramientasService {
    collection: Collection<Herramienta>,
}

impl HerramientasService {
    pub fn new(repository: Repository) -> Self {
        Self {
            collection: Collection::new(repository),
        }
    }

    pub fn list(&self, query: &HerramientaQuery) -> AppResult<Vec<Herramienta>> {
        let mut tools = self.collection.list()?;
        tools.retain(|h| query.matches(h));
        Ok(tools)
    }

    pub fn get(&self, id: i64) -> AppResult<Herramienta> {
        self.collection.find(id)
    }

    /// Create a tool. Text fields are trimmed and a blank holder is stored
    /// as unassigned.
    pub fn create(&self, data: &CreateHerramienta) -> AppResult<Herramienta> {
        self.collection.create(&data.clone().normalized())
    }

    /// Update a tool, normalizing the fields set as [`create`](Self::create) does
    pub fn update(&self, id: i64, data: &UpdateHerramienta) -> AppResult<bool> {
        self.collection.update(id, &data.clone().normalized())
    }

    pub fn delete(&self, id: i64) -> AppResult<bool> {
        self.collection.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::EstadoHerramienta;
    use crate::services::test_support::{empty_repository, seeded_repository};

    #[test]
    fn test_create_trims_and_clears_blank_holder() {
        let service = HerramientasService::new(empty_repository());
        let created = service
            .create(&CreateHerramienta {
                nombre: "  Fusionadora ".into(),
                descripcion: String::new(),
                codigo_interno: " HERR-010".into(),
                estado: EstadoHerramienta::Operativa,
                ubicacion: "Vehículo 2 ".into(),
                asignada_a: Some("   ".into()),
            })
            .unwrap();

        assert_eq!(created.nombre, "Fusionadora");
        assert_eq!(created.codigo_interno, "HERR-010");
        assert_eq!(created.ubicacion, "Vehículo 2");
        assert_eq!(created.asignada_a, None);
    }

    #[test]
    fn test_blank_name_after_trim_is_rejected() {
        let service = HerramientasService::new(empty_repository());
        let err = service
            .create(&CreateHerramienta {
                nombre: "   ".into(),
                descripcion: String::new(),
                codigo_interno: "HERR-011".into(),
                estado: EstadoHerramienta::Perdida,
                ubicacion: String::new(),
                asignada_a: None,
            })
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_update_trims_and_releases_blank_holder() {
        let service = HerramientasService::new(seeded_repository());
        // Seed tool 2 is held by Juan Pérez.
        let patch = UpdateHerramienta {
            nombre: Some("  Escalera Extensible  ".into()),
            asignada_a: Some(Some("   ".into())),
            ..Default::default()
        };
        assert!(service.update(2, &patch).unwrap());

        let updated = service.get(2).unwrap();
        assert_eq!(updated.nombre, "Escalera Extensible");
        assert_eq!(updated.asignada_a, None);
        assert_eq!(updated.codigo_interno, "HERR-002");

        let blank_name = UpdateHerramienta {
            nombre: Some("   ".into()),
            ..Default::default()
        };
        assert!(matches!(service.update(2, &blank_name), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_filter_by_estado_and_code() {
        let service = HerramientasService::new(seeded_repository());

        let en_reparacion = service
            .list(&HerramientaQuery {
                estado: Some(EstadoHerramienta::EnReparacion),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(en_reparacion.len(), 1);
        assert_eq!(en_reparacion[0].nombre, "Multímetro Digital");

        let by_code = service
            .list(&HerramientaQuery {
                search: Some("herr-004".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].nombre, "Ponchadora RJ45");
    }
}
