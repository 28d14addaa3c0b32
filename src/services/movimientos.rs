//! Stock movements service (append-only log)

use tracing::info;

use crate::{
    error::AppResult,
    models::{CreateMovimiento, Movimiento, MovimientoQuery},
    repository::{Collection, Repository},
};

#[derive(Clone)]
pub struct MovimientosService {
    collection: Collection<Movimiento>,
}

impl MovimientosService {
    pub fn new(repository: Repository) -> Self {
        Self {
            collection: Collection::new(repository),
        }
    }

    pub fn list(&self, query: &MovimientoQuery) -> AppResult<Vec<Movimiento>> {
        let mut movements = self.collection.list()?;
        movements.retain(|m| query.matches(m));
        Ok(movements)
    }

    pub fn get(&self, id: i64) -> AppResult<Movimiento> {
        self.collection.find(id)
    }

    /// Record a movement. Stock levels are not adjusted.
    pub fn create(&self, data: &CreateMovimiento) -> AppResult<Movimiento> {
        let movement = self.collection.create(data)?;
        info!(
            "Recorded {} of {} x{} ({} -> {})",
            movement.tipo.as_str(),
            movement.item,
            movement.cantidad,
            movement.origen,
            movement.destino
        );
        Ok(movement)
    }
}
