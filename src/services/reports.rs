//! Tabular reports
//!
//! A [`Report`] is a titled table of display strings with the same columns
//! and labels the printed inventory reports use. Rendering is left to a
//! [`ReportSink`].

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, Utc};
use serde::Serialize;
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{Asignacion, Herramienta, Material, Movimiento, Proyecto, Record, Table, Tecnico},
    repository::{Collection, Repository},
};

/// A generated report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub table: Table,
    pub title: String,
    pub generated_on: NaiveDate,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Report {
    fn new(table: Table, title: &str, generated_on: NaiveDate, headers: &[&str]) -> Self {
        Self {
            table,
            title: title.to_string(),
            generated_on,
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }
}

/// Destination for generated reports
pub trait ReportSink {
    fn emit(&self, report: &Report) -> AppResult<()>;
}

/// Writes each report as `<table>_<unix millis>.json` in a directory
pub struct JsonFileReportSink {
    output_dir: PathBuf,
}

impl JsonFileReportSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl ReportSink for JsonFileReportSink {
    fn emit(&self, report: &Report) -> AppResult<()> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join(format!(
            "{}_{}.json",
            report.table,
            Utc::now().timestamp_millis()
        ));
        let contents = serde_json::to_string_pretty(report)?;
        fs::write(&path, contents)?;

        info!("Wrote {} ({} rows) to {}", report.title, report.rows.len(), path.display());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Report builders
// ---------------------------------------------------------------------------

pub fn materiales_report(materiales: &[Material], generated_on: NaiveDate) -> Report {
    let mut report = Report::new(
        Table::Materiales,
        "Reporte de Materiales",
        generated_on,
        &["Material", "Categoría", "Stock Actual", "Stock Mínimo", "Ubicación", "Estado"],
    );
    report.rows = materiales
        .iter()
        .map(|m| {
            vec![
                m.nombre.clone(),
                m.categoria.clone(),
                format!("{} {}", m.stock_actual, m.unidad_medida),
                format!("{} {}", m.stock_minimo, m.unidad_medida),
                m.ubicacion.clone(),
                if m.is_low_stock() { "BAJO" } else { "OK" }.to_string(),
            ]
        })
        .collect();
    report
}

pub fn herramientas_report(herramientas: &[Herramienta], generated_on: NaiveDate) -> Report {
    let mut report = Report::new(
        Table::Herramientas,
        "Reporte de Herramientas",
        generated_on,
        &["Código", "Herramienta", "Estado", "Ubicación", "Asignada a"],
    );
    report.rows = herramientas
        .iter()
        .map(|h| {
            vec![
                h.codigo_interno.clone(),
                h.nombre.clone(),
                h.estado.label().to_string(),
                h.ubicacion.clone(),
                h.asignada_a.clone().unwrap_or_else(|| "Disponible".to_string()),
            ]
        })
        .collect();
    report
}

pub fn movimientos_report(movimientos: &[Movimiento], generated_on: NaiveDate) -> Report {
    let mut report = Report::new(
        Table::Movimientos,
        "Reporte de Movimientos de Inventario",
        generated_on,
        &["Fecha", "Tipo", "Tipo Item", "Item", "Cantidad", "Origen", "Destino"],
    );
    report.rows = movimientos
        .iter()
        .map(|m| {
            vec![
                m.fecha.to_string(),
                m.tipo.label().to_string(),
                m.tipo_item.label().to_string(),
                m.item.clone(),
                m.cantidad.to_string(),
                m.origen.clone(),
                m.destino.clone(),
            ]
        })
        .collect();
    report
}

pub fn asignaciones_report(asignaciones: &[Asignacion], generated_on: NaiveDate) -> Report {
    let mut report = Report::new(
        Table::Asignaciones,
        "Reporte de Asignaciones",
        generated_on,
        &[
            "Item",
            "Tipo",
            "Asignado a",
            "Tipo Asign.",
            "F. Asignación",
            "F. Devolución",
            "Estado",
        ],
    );
    report.rows = asignaciones
        .iter()
        .map(|a| {
            vec![
                a.item.clone(),
                a.tipo_item.label().to_string(),
                a.asignado_a.clone(),
                a.asignado_a_tipo.label().to_string(),
                a.fecha_asignacion.to_string(),
                a.fecha_devolucion
                    .map_or_else(|| "-".to_string(), |d| d.to_string()),
                a.estado.label().to_string(),
            ]
        })
        .collect();
    report
}

pub fn tecnicos_report(tecnicos: &[Tecnico], generated_on: NaiveDate) -> Report {
    let mut report = Report::new(
        Table::Tecnicos,
        "Reporte de Técnicos",
        generated_on,
        &["Nombre", "Cargo", "Contacto", "Email"],
    );
    report.rows = tecnicos
        .iter()
        .map(|t| {
            vec![
                t.nombre_completo.clone(),
                t.cargo.clone(),
                t.contacto.clone(),
                t.email.clone(),
            ]
        })
        .collect();
    report
}

pub fn proyectos_report(proyectos: &[Proyecto], generated_on: NaiveDate) -> Report {
    let mut report = Report::new(
        Table::Proyectos,
        "Reporte de Proyectos",
        generated_on,
        &["Proyecto", "Cliente", "Ubicación", "F. Inicio", "F. Fin", "Estado"],
    );
    report.rows = proyectos
        .iter()
        .map(|p| {
            vec![
                p.nombre.clone(),
                p.cliente.clone(),
                p.ubicacion.clone(),
                p.fecha_inicio.to_string(),
                p.fecha_fin
                    .map_or_else(|| "En curso".to_string(), |d| d.to_string()),
                p.estado.label().to_string(),
            ]
        })
        .collect();
    report
}

// ---------------------------------------------------------------------------
// ReportService
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct ReportService {
    repository: Repository,
}

impl ReportService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Build the report of `table` over its full contents, dated today
    pub fn build(&self, table: Table) -> AppResult<Report> {
        let today = Local::now().date_naive();
        let report = match table {
            Table::Materiales => materiales_report(&self.list::<Material>()?, today),
            Table::Herramientas => herramientas_report(&self.list::<Herramienta>()?, today),
            Table::Movimientos => movimientos_report(&self.list::<Movimiento>()?, today),
            Table::Asignaciones => asignaciones_report(&self.list::<Asignacion>()?, today),
            Table::Tecnicos => tecnicos_report(&self.list::<Tecnico>()?, today),
            Table::Proyectos => proyectos_report(&self.list::<Proyecto>()?, today),
            Table::Ubicaciones | Table::Proveedores | Table::Usuarios => {
                return Err(AppError::Validation(format!("no report for table {}", table)));
            }
        };
        Ok(report)
    }

    /// Build the report of `table` and hand it to `sink`
    pub fn emit(&self, table: Table, sink: &dyn ReportSink) -> AppResult<Report> {
        let report = self.build(table)?;
        sink.emit(&report)?;
        Ok(report)
    }

    fn list<T: Record>(&self) -> AppResult<Vec<T>> {
        Collection::<T>::new(self.repository.clone()).list()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::services::test_support::seeded_repository;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 21).unwrap()
    }

    #[derive(Default)]
    struct RecordingSink {
        emitted: RefCell<Vec<Report>>,
    }

    impl ReportSink for RecordingSink {
        fn emit(&self, report: &Report) -> AppResult<()> {
            self.emitted.borrow_mut().push(report.clone());
            Ok(())
        }
    }

    #[test]
    fn test_materiales_status_column() {
        let materiales = Collection::<Material>::new(seeded_repository()).list().unwrap();
        let report = materiales_report(&materiales, date());

        assert_eq!(report.headers.len(), 6);
        assert_eq!(
            report.rows[0],
            vec!["Cable UTP Cat6", "Cables", "15 metros", "50 metros", "Almacén Principal", "BAJO"]
        );
        assert_eq!(report.rows[3][5], "OK");
    }

    #[test]
    fn test_unassigned_tool_shows_disponible() {
        let tools = Collection::<Herramienta>::new(seeded_repository()).list().unwrap();
        let report = herramientas_report(&tools, date());
        assert_eq!(report.rows[0][4], "Disponible");
        assert_eq!(report.rows[1][4], "Juan Pérez");
        assert_eq!(report.rows[2][2], "En Reparación");
    }

    #[test]
    fn test_asignaciones_and_proyectos_placeholders() {
        let repository = seeded_repository();
        let asignaciones = Collection::<Asignacion>::new(repository.clone()).list().unwrap();
        let report = asignaciones_report(&asignaciones, date());
        assert_eq!(report.rows[0][5], "-");
        assert_eq!(report.rows[0][3], "Técnico");
        assert_eq!(report.rows[2][5], "2025-10-18");
        assert_eq!(report.rows[2][6], "Devuelta");

        let mut proyectos = Collection::<Proyecto>::new(repository).list().unwrap();
        proyectos[0].fecha_fin = None;
        let report = proyectos_report(&proyectos, date());
        assert_eq!(report.rows[0][4], "En curso");
        assert_eq!(report.rows[0][5], "En Curso");
        assert_eq!(report.rows[2][5], "Finalizado");
    }

    #[test]
    fn test_emit_through_sink() {
        let service = ReportService::new(seeded_repository());
        let sink = RecordingSink::default();

        let report = service.emit(Table::Movimientos, &sink).unwrap();
        assert_eq!(report.rows.len(), 4);
        assert_eq!(report.rows[2][1], "Devolución");
        assert_eq!(sink.emitted.borrow().as_slice(), &[report]);
    }

    #[test]
    fn test_no_report_for_locations() {
        let service = ReportService::new(seeded_repository());
        assert!(matches!(service.build(Table::Ubicaciones), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_json_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonFileReportSink::new(dir.path().join("reports"));
        let service = ReportService::new(seeded_repository());
        service.emit(Table::Tecnicos, &sink).unwrap();

        let files: Vec<_> = fs::read_dir(sink.output_dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(files.len(), 1);
        assert!(files[0].starts_with("tecnicos_") && files[0].ends_with(".json"));

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(sink.output_dir().join(&files[0])).unwrap())
                .unwrap();
        assert_eq!(written["title"], "Reporte de Técnicos");
        assert_eq!(written["rows"].as_array().unwrap().len(), 4);
    }
}
