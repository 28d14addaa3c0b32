//! Assignments service: hand-outs of tools and materials, and their return

use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{
        Asignacion, AsignacionQuery, CreateAsignacion, EstadoAsignacion, ReturnAsignacion,
        UpdateAsignacion,
    },
    repository::{collection::to_fields, Collection, Repository},
};

#[derive(Clone)]
pub struct AsignacionesService {
    collection: Collection<Asignacion>,
}

impl AsignacionesService {
    pub fn new(repository: Repository) -> Self {
        Self {
            collection: Collection::new(repository),
        }
    }

    pub fn list(&self, query: &AsignacionQuery) -> AppResult<Vec<Asignacion>> {
        let mut assignments = self.collection.list()?;
        assignments.retain(|a| query.matches(a));
        Ok(assignments)
    }

    pub fn get(&self, id: i64) -> AppResult<Asignacion> {
        self.collection.find(id)
    }

    /// Create an assignment. It starts active with no return date.
    pub fn create(&self, data: &CreateAsignacion) -> AppResult<Asignacion> {
        let assignment = self.collection.create(data)?;
        info!(
            "Assigned {} to {} {}",
            assignment.item,
            assignment.asignado_a_tipo.as_str(),
            assignment.asignado_a
        );
        Ok(assignment)
    }

    /// Mark an active assignment as returned.
    ///
    /// The return note is appended to the existing observations as
    /// `"<previous> | Devolución: <note>"`. Returning an assignment twice is
    /// a business rule violation.
    pub fn return_item(&self, id: i64, data: &ReturnAsignacion) -> AppResult<Asignacion> {
        let returned = self.collection.update_with(id, |current| {
            if !current.is_active() {
                return Err(AppError::BusinessRule(format!(
                    "asignacion {} was already returned",
                    id
                )));
            }
            let patch = UpdateAsignacion {
                estado: Some(EstadoAsignacion::Devuelta),
                fecha_devolucion: Some(Some(data.fecha_devolucion)),
                observaciones: Some(format!(
                    "{} | Devolución: {}",
                    current.observaciones, data.observaciones
                )),
            };
            to_fields(&patch)
        })?;

        let returned =
            returned.ok_or_else(|| AppError::NotFound(format!("asignacion {} not found", id)))?;
        info!("Returned {} from {}", returned.item, returned.asignado_a);
        Ok(returned)
    }
}
