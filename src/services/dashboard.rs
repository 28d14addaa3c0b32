//! Dashboard summary

use serde::Serialize;

use crate::{
    error::AppResult,
    models::{Herramienta, Material, Movimiento, Tecnico},
    repository::{Collection, Repository},
};

/// Number of movements shown on the dashboard
const LATEST_MOVEMENTS: usize = 5;

/// Dashboard figures
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_materiales: usize,
    pub total_herramientas: usize,
    pub total_tecnicos: usize,
    /// Materials below their minimum stock
    pub stock_bajo: Vec<Material>,
    /// First movements in stored order
    pub ultimos_movimientos: Vec<Movimiento>,
}

impl DashboardSummary {
    pub fn stock_bajo_count(&self) -> usize {
        self.stock_bajo.len()
    }
}

#[derive(Clone)]
pub struct DashboardService {
    materiales: Collection<Material>,
    herramientas: Collection<Herramienta>,
    tecnicos: Collection<Tecnico>,
    movimientos: Collection<Movimiento>,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self {
            materiales: Collection::new(repository.clone()),
            herramientas: Collection::new(repository.clone()),
            tecnicos: Collection::new(repository.clone()),
            movimientos: Collection::new(repository),
        }
    }

    pub fn summary(&self) -> AppResult<DashboardSummary> {
        let materiales = self.materiales.list()?;
        let total_materiales = materiales.len();
        let stock_bajo = materiales.into_iter().filter(Material::is_low_stock).collect();

        let mut ultimos_movimientos = self.movimientos.list()?;
        ultimos_movimientos.truncate(LATEST_MOVEMENTS);

        Ok(DashboardSummary {
            total_materiales,
            total_herramientas: self.herramientas.list()?.len(),
            total_tecnicos: self.tecnicos.list()?.len(),
            stock_bajo,
            ultimos_movimientos,
        })
    }
}
