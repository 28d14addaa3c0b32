//! Application users service

use crate::{
    error::AppResult,
    models::{CreateUsuario, UpdateUsuario, Usuario},
    repository::{Collection, Repository},
};

#[derive(Clone)]
pub struct UsuariosService {
    collection: Collection<Usuario>,
}

impl UsuariosService {
    pub fn new(repository: Repository) -> Self {
        Self {
            collection: Collection::new(repository),
        }
    }

    pub fn list(&self) -> AppResult<Vec<Usuario>> {
        self.collection.list()
    }

    pub fn get(&self, id: i64) -> AppResult<Usuario> {
        self.collection.find(id)
    }

    pub fn create(&self, data: &CreateUsuario) -> AppResult<Usuario> {
        self.collection.create(data)
    }

    pub fn update(&self, id: i64, data: &UpdateUsuario) -> AppResult<bool> {
        self.collection.update(id, data)
    }

    pub fn delete(&self, id: i64) -> AppResult<bool> {
        self.collection.delete(id)
    }
}
