//! Inventario Telecom command line

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventario_telecom::{
    config::AppConfig, models::Table, services::reports::JsonFileReportSink, AppState,
};

#[derive(Parser)]
#[command(name = "inventario", about = "Telecom inventory record store", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the store if it has never been initialized
    Init,
    /// Write a JSON snapshot of every table
    Export {
        #[arg(short, long, help = "Output file; stdout when omitted")]
        output: Option<PathBuf>,
    },
    /// Overwrite tables from a JSON snapshot
    Import {
        #[arg(help = "Snapshot file")]
        file: PathBuf,
    },
    /// Restore every table to the seed data
    Reset,
    /// Print the dashboard summary
    Summary,
    /// Generate the report of a table
    Report {
        #[arg(help = "materiales, herramientas, movimientos, asignaciones, tecnicos or proyectos")]
        table: Table,
    },
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config);

    let state = AppState::open(config).context("failed to open storage")?;
    let services = &state.services;

    match cli.command {
        Commands::Init => {
            if services.backup.initialize()? {
                println!("Store initialized with seed data");
            } else {
                println!("Store was already initialized");
            }
        }
        Commands::Export { output } => {
            let snapshot = services.backup.export()?;
            match output {
                Some(path) => fs::write(&path, snapshot)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => println!("{}", snapshot),
            }
        }
        Commands::Import { file } => {
            let snapshot = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let report = services.backup.import(&snapshot)?;
            for table in &report.imported {
                println!("{:<14} {} records", table.table, table.records);
            }
            for key in &report.skipped {
                println!("skipped unknown key '{}'", key);
            }
        }
        Commands::Reset => {
            services.backup.reset()?;
            println!("All tables reset to seed data");
        }
        Commands::Summary => {
            let summary = services.dashboard.summary()?;
            println!("Materiales:   {}", summary.total_materiales);
            println!("Herramientas: {}", summary.total_herramientas);
            println!("Técnicos:     {}", summary.total_tecnicos);
            println!("Stock bajo:   {}", summary.stock_bajo_count());
            for m in &summary.stock_bajo {
                println!(
                    "  {} ({} / {} {})",
                    m.nombre, m.stock_actual, m.stock_minimo, m.unidad_medida
                );
            }
            println!("Últimos movimientos:");
            for m in &summary.ultimos_movimientos {
                println!("  {} {} {} x{}", m.fecha, m.tipo, m.item, m.cantidad);
            }
        }
        Commands::Report { table } => {
            let sink = JsonFileReportSink::new(&state.config.reports.output_dir);
            let report = services.reports.emit(table, &sink)?;
            println!("{}: {} rows", report.title, report.rows.len());
        }
    }

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("inventario_telecom={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
