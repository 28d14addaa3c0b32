//! Technicians service

use crate::{
    error::AppResult,
    models::{CreateTecnico, Tecnico, TecnicoQuery, UpdateTecnico},
    repository::{Collection, Repository},
};

#[derive(Clone)]
pub struct TecnicosService {
    collection: Collection<Tecnico>,
}

impl TecnicosService {
    pub fn new(repository: Repository) -> Self {
        Self {
            collection: Collection::new(repository),
        }
    }

    pub fn list(&self, query: &TecnicoQuery) -> AppResult<Vec<Tecnico>> {
        let mut technicians = self.collection.list()?;
        technicians.retain(|t| query.matches(t));
        Ok(technicians)
    }

    pub fn get(&self, id: i64) -> AppResult<Tecnico> {
        self.collection.find(id)
    }

    pub fn create(&self, data: &CreateTecnico) -> AppResult<Tecnico> {
        self.collection.create(data)
    }

    pub fn update(&self, id: i64, data: &UpdateTecnico) -> AppResult<bool> {
        self.collection.update(id, data)
    }

    pub fn delete(&self, id: i64) -> AppResult<bool> {
        self.collection.delete(id)
    }
}
