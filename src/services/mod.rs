//! Business logic services

pub mod asignaciones;
pub mod backup;
pub mod dashboard;
pub mod herramientas;
pub mod materiales;
pub mod movimientos;
pub mod proveedores;
pub mod proyectos;
pub mod reports;
pub mod session;
pub mod tecnicos;
pub mod ubicaciones;
pub mod usuarios;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub materiales: materiales::MaterialesService,
    pub herramientas: herramientas::HerramientasService,
    pub ubicaciones: ubicaciones::UbicacionesService,
    pub tecnicos: tecnicos::TecnicosService,
    pub proveedores: proveedores::ProveedoresService,
    pub proyectos: proyectos::ProyectosService,
    pub movimientos: movimientos::MovimientosService,
    pub asignaciones: asignaciones::AsignacionesService,
    pub usuarios: usuarios::UsuariosService,
    pub dashboard: dashboard::DashboardService,
    pub reports: reports::ReportService,
    pub backup: backup::BackupService,
    pub session: session::SessionService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            materiales: materiales::MaterialesService::new(repository.clone()),
            herramientas: herramientas::HerramientasService::new(repository.clone()),
            ubicaciones: ubicaciones::UbicacionesService::new(repository.clone()),
            tecnicos: tecnicos::TecnicosService::new(repository.clone()),
            proveedores: proveedores::ProveedoresService::new(repository.clone()),
            proyectos: proyectos::ProyectosService::new(repository.clone()),
            movimientos: movimientos::MovimientosService::new(repository.clone()),
            asignaciones: asignaciones::AsignacionesService::new(repository.clone()),
            usuarios: usuarios::UsuariosService::new(repository.clone()),
            dashboard: dashboard::DashboardService::new(repository.clone()),
            reports: reports::ReportService::new(repository.clone()),
            backup: backup::BackupService::new(repository.clone()),
            session: session::SessionService::new(repository),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::{repository::Repository, storage::MemoryStorage};

    /// Repository over an empty in-memory store
    pub fn empty_repository() -> Repository {
        Repository::new(Arc::new(MemoryStorage::new()))
    }

    /// Repository over an in-memory store holding the seed data
    pub fn seeded_repository() -> Repository {
        let repository = empty_repository();
        repository.initialize().unwrap();
        repository
    }
}
