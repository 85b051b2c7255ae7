pub mod parallelism;
pub mod unit;
pub mod validation;

pub use parallelism::{ParseParallelismError, RepairParallelism};
pub use unit::{Builder, RepairUnit, RepairUnitId};
pub use validation::ValidationError;
