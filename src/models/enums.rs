//! Shared domain enums (stored as snake_case strings)

use serde::{Deserialize, Serialize};

/// Implements `as_str`, `Display` (report label) and `FromStr` (stored name).
macro_rules! stored_enum {
    ($name:ident { $($variant:ident => $stored:literal, $label:literal),+ $(,)? }) => {
        impl $name {
            /// Stored (wire) name
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $stored,)+
                }
            }

            /// Human-readable label used in reports
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($stored => Ok($name::$variant),)+
                    other => Err(format!("invalid {} '{}'", stringify!($name), other)),
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// EstadoHerramienta
// ---------------------------------------------------------------------------

/// Tool condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoHerramienta {
    #[default]
    Operativa,
    EnReparacion,
    Perdida,
}

stored_enum!(EstadoHerramienta {
    Operativa => "operativa", "Operativa",
    EnReparacion => "en_reparacion", "En Reparación",
    Perdida => "perdida", "Perdida",
});

// ---------------------------------------------------------------------------
// TipoUbicacion
// ---------------------------------------------------------------------------

/// Kind of place where stock or tools can sit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoUbicacion {
    #[default]
    Almacen,
    Vehiculo,
    Obra,
    Oficina,
}

stored_enum!(TipoUbicacion {
    Almacen => "almacen", "Almacén",
    Vehiculo => "vehiculo", "Vehículo",
    Obra => "obra", "Obra",
    Oficina => "oficina", "Oficina",
});

// ---------------------------------------------------------------------------
// EstadoProyecto
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoProyecto {
    #[default]
    Activo,
    EnCurso,
    Finalizado,
}

stored_enum!(EstadoProyecto {
    Activo => "activo", "Activo",
    EnCurso => "en_curso", "En Curso",
    Finalizado => "finalizado", "Finalizado",
});

// ---------------------------------------------------------------------------
// TipoMovimiento
// ---------------------------------------------------------------------------

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoMovimiento {
    #[default]
    Entrada,
    Salida,
    Devolucion,
}

stored_enum!(TipoMovimiento {
    Entrada => "entrada", "Entrada",
    Salida => "salida", "Salida",
    Devolucion => "devolucion", "Devolución",
});

// ---------------------------------------------------------------------------
// TipoItem
// ---------------------------------------------------------------------------

/// Whether a movement or assignment concerns stock or a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoItem {
    #[default]
    Material,
    Herramienta,
}

stored_enum!(TipoItem {
    Material => "material", "Material",
    Herramienta => "herramienta", "Herramienta",
});

// ---------------------------------------------------------------------------
// AsignadoATipo
// ---------------------------------------------------------------------------

/// Holder kind of an assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AsignadoATipo {
    #[default]
    Tecnico,
    Proyecto,
}

stored_enum!(AsignadoATipo {
    Tecnico => "tecnico", "Técnico",
    Proyecto => "proyecto", "Proyecto",
});

// ---------------------------------------------------------------------------
// EstadoAsignacion
// ---------------------------------------------------------------------------

/// Assignment state; `Activa` moves to `Devuelta` once and never back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoAsignacion {
    #[default]
    Activa,
    Devuelta,
}

stored_enum!(EstadoAsignacion {
    Activa => "activa", "Activa",
    Devuelta => "devuelta", "Devuelta",
});
