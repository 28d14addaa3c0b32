//! Projects service

use crate::{
    error::AppResult,
    models::{CreateProyecto, Proyecto, ProyectoQuery, UpdateProyecto},
    repository::{Collection, Repository},
};

#[derive(Clone)]
pub struct ProyectosService {
    collection: Collection<Proyecto>,
}

impl ProyectosService {
    pub fn new(repository: Repository) -> Self {
        Self {
            collection: Collection::new(repository),
        }
    }

    pub fn list(&self, query: &ProyectoQuery) -> AppResult<Vec<Proyecto>> {
        let mut projects = self.collection.list()?;
        projects.retain(|p| query.matches(p));
        Ok(projects)
    }

    pub fn get(&self, id: i64) -> AppResult<Proyecto> {
        self.collection.find(id)
    }

    pub fn create(&self, data: &CreateProyecto) -> AppResult<Proyecto> {
        self.collection.create(data)
    }

    pub fn update(&self, id: i64, data: &UpdateProyecto) -> AppResult<bool> {
        self.collection.update(id, data)
    }

    pub fn delete(&self, id: i64) -> AppResult<bool> {
        self.collection.delete(id)
    }
}
