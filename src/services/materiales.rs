//! Materials (consumable stock) service

use crate::{
    error::AppResult,
    models::{CreateMaterial, Material, MaterialQuery, UpdateMaterial},
    repository::{Collection, Repository},
};

#[derive(Clone)]
pub struct MaterialesService {
    collection: Collection<Material>,
}

impl MaterialesService {
    pub fn new(repository: Repository) -> Self {
        Self {
            collection: Collection::new(repository),
        }
    }

    /// List materials matching the query, in stored order
    pub fn list(&self, query: &MaterialQuery) -> AppResult<Vec<Material>> {
        let mut materials = self.collection.list()?;
        materials.retain(|m| query.matches(m));
        Ok(materials)
    }

    pub fn get(&self, id: i64) -> AppResult<Material> {
        self.collection.find(id)
    }

    pub fn create(&self, data: &CreateMaterial) -> AppResult<Material> {
        self.collection.create(data)
    }

    /// Returns `false` when the material does not exist
    pub fn update(&self, id: i64, data: &UpdateMaterial) -> AppResult<bool> {
        self.collection.update(id, data)
    }

    pub fn delete(&self, id: i64) -> AppResult<bool> {
        self.collection.delete(id)
    }

    /// Materials whose stock is below their minimum
    pub fn low_stock(&self) -> AppResult<Vec<Material>> {
        let mut materials = self.collection.list()?;
        materials.retain(Material::is_low_stock);
        Ok(materials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::test_support::{empty_repository, seeded_repository};

    fn switch() -> CreateMaterial {
        CreateMaterial {
            nombre: "Switch 48 puertos".into(),
            descripcion: String::new(),
            categoria: "Equipos".into(),
            unidad_medida: "unidades".into(),
            stock_actual: 2,
            stock_minimo: 4,
            ubicacion: "Almacén Principal".into(),
            proveedor: "RedEquip".into(),
        }
    }

    #[test]
    fn test_low_stock_on_seed() {
        let service = MaterialesService::new(seeded_repository());
        let names: Vec<String> = service.low_stock().unwrap().into_iter().map(|m| m.nombre).collect();
        assert_eq!(names, vec!["Cable UTP Cat6", "Conectores RJ45"]);
    }

    #[test]
    fn test_search_by_name_or_category() {
        let service = MaterialesService::new(seeded_repository());
        let query = MaterialQuery {
            search: Some("CABLE".into()),
        };
        assert_eq!(service.list(&query).unwrap().len(), 2);
        assert_eq!(service.list(&MaterialQuery::default()).unwrap().len(), 4);
    }

    #[test]
    fn test_crud() {
        let service = MaterialesService::new(empty_repository());
        let created = service.create(&switch()).unwrap();
        assert_eq!(created.id, 1);
        assert!(created.is_low_stock());

        let patch = UpdateMaterial {
            stock_actual: Some(10),
            ..Default::default()
        };
        assert!(service.update(created.id, &patch).unwrap());
        assert!(service.low_stock().unwrap().is_empty());

        assert!(service.delete(created.id).unwrap());
        assert!(matches!(service.get(created.id), Err(AppError::NotFound(_))));
    }
}
