//! Record store integration tests over the on-disk backends

use std::sync::Arc;

use serde_json::{json, Value};

use inventario_telecom::{
    config::{AppConfig, StorageBackend, StorageConfig},
    models::{EstadoAsignacion, RawRecord, ReturnAsignacion, Table},
    repository::Repository,
    storage::{FileStorage, RedbStorage, Storage},
    AppError, AppState,
};

fn record(value: Value) -> RawRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {}", other),
    }
}

fn file_repository(dir: &std::path::Path) -> Repository {
    Repository::new(Arc::new(FileStorage::open(dir).unwrap()))
}

#[test]
fn test_add_assigns_increasing_ids() {
    let dir = tempfile::tempdir().unwrap();
    let repo = file_repository(dir.path());

    let first = repo
        .add(
            Table::Herramientas,
            record(json!({"nombre": "Taladro", "codigo_interno": "H-1", "estado": "operativa"})),
        )
        .unwrap();
    let second = repo
        .add(
            Table::Herramientas,
            record(json!({"nombre": "Escalera", "codigo_interno": "H-2", "estado": "operativa"})),
        )
        .unwrap();

    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], 2);

    let table = repo.get_table(Table::Herramientas).unwrap();
    assert_eq!(table, vec![first, second]);
}

#[test]
fn test_ids_are_not_gap_filled() {
    let dir = tempfile::tempdir().unwrap();
    let repo = file_repository(dir.path());
    repo.save_table(
        Table::Materiales,
        vec![
            record(json!({"id": 1, "nombre": "Cable"})),
            record(json!({"id": 3, "nombre": "Conector"})),
        ],
    )
    .unwrap();

    let added = repo
        .add(Table::Materiales, record(json!({"nombre": "Switch"})))
        .unwrap();
    assert_eq!(added["id"], 4);
}

#[test]
fn test_update_and_remove_semantics() {
    let dir = tempfile::tempdir().unwrap();
    let repo = file_repository(dir.path());
    repo.initialize().unwrap();
    let before = repo.get_table(Table::Asignaciones).unwrap();

    assert!(!repo
        .update(Table::Asignaciones, 99, record(json!({"estado": "devuelta"})))
        .unwrap());
    assert_eq!(repo.get_table(Table::Asignaciones).unwrap(), before);

    // Seed assignment 4 is active with no return date.
    assert!(repo
        .update(
            Table::Asignaciones,
            4,
            record(json!({"estado": "devuelta", "fecha_devolucion": "2025-10-18", "id": 40})),
        )
        .unwrap());
    let after = repo.get_table(Table::Asignaciones).unwrap();
    let old = &before[3];
    let new = &after[3];
    assert_eq!(new["id"], 4);
    assert_eq!(new["estado"], "devuelta");
    assert_eq!(new["fecha_devolucion"], "2025-10-18");
    for key in ["item", "tipo_item", "asignado_a", "asignado_a_tipo", "fecha_asignacion", "observaciones"] {
        assert_eq!(new[key], old[key], "{} changed", key);
    }

    assert!(!repo.remove(Table::Asignaciones, 99).unwrap());
    assert_eq!(repo.get_table(Table::Asignaciones).unwrap().len(), 4);
    assert!(repo.remove(Table::Asignaciones, 2).unwrap());
    let ids: Vec<Value> = repo
        .get_table(Table::Asignaciones)
        .unwrap()
        .iter()
        .map(|r| r["id"].clone())
        .collect();
    assert_eq!(ids, vec![json!(1), json!(3), json!(4)]);
}

#[test]
fn test_initialize_is_idempotent_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    {
        let repo = file_repository(dir.path());
        assert!(repo.initialize().unwrap());
        repo.remove(Table::Materiales, 1).unwrap();
    }

    let repo = file_repository(dir.path());
    let snapshot = repo.export_all().unwrap();
    assert!(!repo.initialize().unwrap());
    assert_eq!(repo.export_all().unwrap(), snapshot);
    assert_eq!(repo.get_table(Table::Materiales).unwrap().len(), 3);
}

#[test]
fn test_snapshot_round_trip_between_backends() {
    let dir = tempfile::tempdir().unwrap();
    let file_repo = file_repository(&dir.path().join("json"));
    file_repo.initialize().unwrap();
    let snapshot = file_repo.export_all().unwrap();

    let redb_repo = Repository::new(Arc::new(
        RedbStorage::open(&dir.path().join("inventario.redb")).unwrap(),
    ));
    let report = redb_repo.import_all(&snapshot).unwrap();
    assert_eq!(report.total_records(), 35);
    assert_eq!(redb_repo.export_all().unwrap(), snapshot);

    file_repo.import_all(&file_repo.export_all().unwrap()).unwrap();
    assert_eq!(file_repo.export_all().unwrap(), snapshot);
}

#[test]
fn test_redb_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventario.redb");
    {
        let repo = Repository::new(Arc::new(RedbStorage::open(&path).unwrap()));
        repo.initialize().unwrap();
        repo.add(Table::Ubicaciones, record(json!({"nombre": "Bodega Norte", "tipo": "almacen"})))
            .unwrap();
    }

    let repo = Repository::new(Arc::new(RedbStorage::open(&path).unwrap()));
    assert!(!repo.initialize().unwrap());
    let ubicaciones = repo.get_table(Table::Ubicaciones).unwrap();
    assert_eq!(ubicaciones.len(), 7);
    assert_eq!(ubicaciones[6]["id"], 7);
}

#[test]
fn test_corrupt_file_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::open(dir.path()).unwrap());
    storage.set("proveedores", "{not json").unwrap();
    let repo = Repository::new(storage);

    assert!(matches!(
        repo.get_table(Table::Proveedores),
        Err(AppError::CorruptTable { .. })
    ));
    assert!(matches!(
        repo.add(Table::Proveedores, record(json!({"nombre": "X"}))),
        Err(AppError::CorruptTable { .. })
    ));
    assert!(matches!(repo.export_all(), Err(AppError::CorruptTable { .. })));
}

#[test]
fn test_app_state_services_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        storage: StorageConfig {
            backend: StorageBackend::File,
            data_dir: dir.path().join("data"),
            ..Default::default()
        },
        ..Default::default()
    };
    let state = AppState::open(config).unwrap();
    let services = &state.services;
    assert!(services.backup.initialize().unwrap());

    let returned = services
        .asignaciones
        .return_item(
            2,
            &ReturnAsignacion {
                fecha_devolucion: chrono::NaiveDate::from_ymd_opt(2025, 10, 25).unwrap(),
                observaciones: "Sobrante devuelto".into(),
            },
        )
        .unwrap();
    assert_eq!(returned.estado, EstadoAsignacion::Devuelta);

    let summary = services.dashboard.summary().unwrap();
    assert_eq!(summary.total_materiales, 4);
    assert_eq!(summary.stock_bajo_count(), 2);

    let admin = services.usuarios.get(1).unwrap();
    services.session.set_current_user(&admin).unwrap();

    // A second handle over the same directory sees the session and the return.
    let reopened = AppState::open((*state.config).clone()).unwrap();
    assert_eq!(reopened.services.session.current_user().unwrap(), Some(admin));
    assert!(!reopened.services.asignaciones.get(2).unwrap().is_active());
}
