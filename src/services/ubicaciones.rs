//! Locations service

use crate::{
    error::AppResult,
    models::{CreateUbicacion, Ubicacion, UbicacionQuery, UpdateUbicacion},
    repository::{Collection, Repository},
};

#[derive(Clone)]
pub struct UbicacionesService {
    collection: Collection<Ubicacion>,
}

impl UbicacionesService {
    pub fn new(repository: Repository) -> Self {
        Self {
            collection: Collection::new(repository),
        }
    }

    pub fn list(&self, query: &UbicacionQuery) -> AppResult<Vec<Ubicacion>> {
        let mut locations = self.collection.list()?;
        locations.retain(|u| query.matches(u));
        Ok(locations)
    }

    pub fn get(&self, id: i64) -> AppResult<Ubicacion> {
        self.collection.find(id)
    }

    pub fn create(&self, data: &CreateUbicacion) -> AppResult<Ubicacion> {
        self.collection.create(data)
    }

    pub fn update(&self, id: i64, data: &UpdateUbicacion) -> AppResult<bool> {
        self.collection.update(id, data)
    }

    pub fn delete(&self, id: i64) -> AppResult<bool> {
        self.collection.delete(id)
    }
}
