//! Suppliers service

use crate::{
    error::AppResult,
    models::{CreateProveedor, Proveedor, ProveedorQuery, UpdateProveedor},
    repository::{Collection, Repository},
};

#[derive(Clone)]
pub struct ProveedoresService {
    collection: Collection<Proveedor>,
}

impl ProveedoresService {
    pub fn new(repository: Repository) -> Self {
        Self {
            collection: Collection::new(repository),
        }
    }

    pub fn list(&self, query: &ProveedorQuery) -> AppResult<Vec<Proveedor>> {
        let mut suppliers = self.collection.list()?;
        suppliers.retain(|p| query.matches(p));
        Ok(suppliers)
    }

    pub fn get(&self, id: i64) -> AppResult<Proveedor> {
        self.collection.find(id)
    }

    pub fn create(&self, data: &CreateProveedor) -> AppResult<Proveedor> {
        self.collection.create(data)
    }

    pub fn update(&self, id: i64, data: &UpdateProveedor) -> AppResult<bool> {
        self.collection.update(id, data)
    }

    pub fn delete(&self, id: i64) -> AppResult<bool> {
        self.collection.delete(id)
    }
}
