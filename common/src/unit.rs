use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    hash::{Hash, Hasher},
};

use crate::parallelism::RepairParallelism;
use crate::validation::{self, ValidationError};

/// Identificador asignado por la capa de persistencia (no por este crate).
pub type RepairUnitId = i64;

/// Identidad de configuración de una reparación: cluster, keyspace,
/// column families, cantidad de segmentos y paralelismo.
///
/// Es inmutable. Para obtener una variante se usa [`RepairUnit::derive`],
/// que devuelve un [`Builder`] independiente con los valores actuales.
///
/// La igualdad (y el hash) se define sólo por `id`: dos unidades con el mismo
/// id son el mismo registro. Para comparar la configuración completa está
/// [`RepairUnit::same_configuration`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairUnit {
    id: RepairUnitId,
    cluster_name: String,
    keyspace_name: String,
    column_families: BTreeSet<String>,
    segment_count: i32,
    repair_parallelism: RepairParallelism,
}

impl RepairUnit {
    pub fn id(&self) -> RepairUnitId {
        self.id
    }

    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    pub fn keyspace_name(&self) -> &str {
        &self.keyspace_name
    }

    pub fn column_families(&self) -> &BTreeSet<String> {
        &self.column_families
    }

    pub fn segment_count(&self) -> i32 {
        self.segment_count
    }

    pub fn repair_parallelism(&self) -> RepairParallelism {
        self.repair_parallelism
    }

    /// Nuevo builder con una copia de la configuración (sin el id).
    /// Modificar el builder no afecta a `self`.
    pub fn derive(&self) -> Builder {
        Builder::from_unit(self)
    }

    /// Compara todos los campos salvo el id.
    pub fn same_configuration(&self, other: &RepairUnit) -> bool {
        self.cluster_name == other.cluster_name
            && self.keyspace_name == other.keyspace_name
            && self.column_families == other.column_families
            && self.segment_count == other.segment_count
            && self.repair_parallelism == other.repair_parallelism
    }
}

impl PartialEq for RepairUnit {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RepairUnit {}

impl Hash for RepairUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Acumula los valores de una [`RepairUnit`] antes de publicarla con un id.
///
/// `build` no consume el builder: se puede finalizar varias veces con ids
/// distintos para obtener unidades con la misma configuración.
#[derive(Debug, Clone)]
pub struct Builder {
    cluster_name: String,
    keyspace_name: String,
    column_families: BTreeSet<String>,
    segment_count: i32,
    repair_parallelism: RepairParallelism,
}

impl Builder {
    /// Construcción completa, sin valores por defecto ni validación.
    pub fn new<C, K, I, S>(
        cluster_name: C,
        keyspace_name: K,
        column_families: I,
        segment_count: i32,
        repair_parallelism: RepairParallelism,
    ) -> Self
    where
        C: Into<String>,
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cluster_name: cluster_name.into(),
            keyspace_name: keyspace_name.into(),
            column_families: column_families.into_iter().map(Into::into).collect(),
            segment_count,
            repair_parallelism,
        }
    }

    // Sólo accesible vía RepairUnit::derive.
    fn from_unit(original: &RepairUnit) -> Self {
        Self {
            cluster_name: original.cluster_name.clone(),
            keyspace_name: original.keyspace_name.clone(),
            column_families: original.column_families.clone(),
            segment_count: original.segment_count,
            repair_parallelism: original.repair_parallelism,
        }
    }

    pub fn segment_count(&mut self, segment_count: i32) -> &mut Self {
        self.segment_count = segment_count;
        self
    }

    pub fn repair_parallelism(&mut self, repair_parallelism: RepairParallelism) -> &mut Self {
        self.repair_parallelism = repair_parallelism;
        self
    }

    pub fn staged_cluster_name(&self) -> &str {
        &self.cluster_name
    }

    pub fn staged_keyspace_name(&self) -> &str {
        &self.keyspace_name
    }

    pub fn staged_column_families(&self) -> &BTreeSet<String> {
        &self.column_families
    }

    pub fn staged_segment_count(&self) -> i32 {
        self.segment_count
    }

    pub fn staged_repair_parallelism(&self) -> RepairParallelism {
        self.repair_parallelism
    }

    /// Publica los valores actuales bajo `id`. Copia todo, así que cambios
    /// posteriores al builder no llegan a la unidad devuelta.
    pub fn build(&self, id: RepairUnitId) -> RepairUnit {
        RepairUnit {
            id,
            cluster_name: self.cluster_name.clone(),
            keyspace_name: self.keyspace_name.clone(),
            column_families: self.column_families.clone(),
            segment_count: self.segment_count,
            repair_parallelism: self.repair_parallelism,
        }
    }

    /// Igual que [`Builder::build`] pero rechaza configuraciones inválidas
    /// (ver [`crate::validation`]).
    pub fn try_build(&self, id: RepairUnitId) -> Result<RepairUnit, ValidationError> {
        let unit = self.build(id);
        if let Err(e) = validation::validate(&unit) {
            tracing::debug!("repair unit {} rechazada: {}", id, e);
            return Err(e);
        }
        Ok(unit)
    }
}
