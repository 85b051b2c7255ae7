//! Validación opcional de una [`RepairUnit`].
//!
//! El core acepta cualquier valor; estas reglas sólo se aplican si quien llama
//! las pide (vía [`validate`], [`violations`] o `Builder::try_build`).
//! Un conjunto vacío de column families no se considera error.

use thiserror::Error;

use crate::unit::RepairUnit;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("cluster_name vacío")]
    EmptyClusterName,

    #[error("keyspace_name vacío")]
    EmptyKeyspaceName,

    #[error("column family en blanco: {0:?}")]
    BlankColumnFamily(String),

    #[error("segment_count debe ser positivo (recibido {0})")]
    NonPositiveSegmentCount(i32),
}

/// Todas las violaciones, en orden: cluster, keyspace, column families, segmentos.
pub fn violations(unit: &RepairUnit) -> Vec<ValidationError> {
    let mut out = Vec::new();

    if unit.cluster_name().trim().is_empty() {
        out.push(ValidationError::EmptyClusterName);
    }
    if unit.keyspace_name().trim().is_empty() {
        out.push(ValidationError::EmptyKeyspaceName);
    }
    for cf in unit.column_families() {
        if cf.trim().is_empty() {
            out.push(ValidationError::BlankColumnFamily(cf.clone()));
        }
    }
    if unit.segment_count() <= 0 {
        out.push(ValidationError::NonPositiveSegmentCount(unit.segment_count()));
    }

    out
}

/// Devuelve la primera violación encontrada.
pub fn validate(unit: &RepairUnit) -> Result<(), ValidationError> {
    match violations(unit).into_iter().next() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Builder, RepairParallelism};

    #[test]
    fn unidad_correcta_no_tiene_violaciones() {
        let u = Builder::new("c", "ks", ["t1"], 16, RepairParallelism::Parallel).build(1);
        assert!(violations(&u).is_empty());
        assert_eq!(validate(&u), Ok(()));
    }

    #[test]
    fn column_families_vacias_son_validas() {
        let u = Builder::new("c", "ks", Vec::<String>::new(), 16, RepairParallelism::Parallel)
            .build(1);
        assert_eq!(validate(&u), Ok(()));
    }

    #[test]
    fn reporta_todas_las_violaciones_en_orden() {
        let u = Builder::new(" ", "", ["ok", "  "], -1, RepairParallelism::Sequential).build(1);

        assert_eq!(
            violations(&u),
            vec![
                ValidationError::EmptyClusterName,
                ValidationError::EmptyKeyspaceName,
                ValidationError::BlankColumnFamily("  ".to_string()),
                ValidationError::NonPositiveSegmentCount(-1),
            ]
        );
        assert_eq!(validate(&u), Err(ValidationError::EmptyClusterName));
    }

    #[test]
    fn mensaje_de_error_incluye_el_valor() {
        let err = ValidationError::NonPositiveSegmentCount(0);
        assert_eq!(err.to_string(), "segment_count debe ser positivo (recibido 0)");
    }
}
