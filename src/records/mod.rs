//! Typed rows of the instance lists and solver result files.

pub mod instance_key;
pub mod instance_record;
pub mod solver_record;

pub use instance_key::InstanceKey;
pub use instance_record::{nodes_from_instance_name, InstanceRecord};
pub use solver_record::{SolverRecord, SOLVER_COLUMN_NAMES, SOLVER_RECORD_COLUMNS};
