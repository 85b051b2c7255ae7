use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Estrategia de concurrencia con la que se ejecuta una reparación.
/// La interpretación de cada caso es responsabilidad del motor de ejecución.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepairParallelism {
    /// Todos los nodos de un rango de tokens reparan a la vez.
    Parallel,
    /// Un nodo a la vez por rango de tokens.
    Sequential,
    /// Un nodo a la vez por data center.
    DcParallel,
}

impl RepairParallelism {
    pub const ALL: [RepairParallelism; 3] = [
        RepairParallelism::Parallel,
        RepairParallelism::Sequential,
        RepairParallelism::DcParallel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RepairParallelism::Parallel => "PARALLEL",
            RepairParallelism::Sequential => "SEQUENTIAL",
            RepairParallelism::DcParallel => "DC_PARALLEL",
        }
    }
}

impl fmt::Display for RepairParallelism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("modo de paralelismo desconocido: {0:?} (esperado PARALLEL, SEQUENTIAL o DC_PARALLEL)")]
pub struct ParseParallelismError(pub String);

impl FromStr for RepairParallelism {
    type Err = ParseParallelismError;

    // Acepta "dc_parallel", "DC-PARALLEL", etc.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        RepairParallelism::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| ParseParallelismError(s.to_string()))
    }
}
