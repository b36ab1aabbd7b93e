pub use crate::analysis::{DerivedRow, MetricsSettings, NodeGroupSummary, DEFAULT_TIME_LIMIT};
pub use crate::api::enums::{Algorithm, BatchLayout, PlotFormat};
pub use crate::config::{BatchConfig, ConfigError, EvaluationConfig, ResultSources};
pub use crate::output::{its_per_second_row, mean_wall_time_row, render_table};
pub use crate::records::{InstanceRecord, SolverRecord};
pub use crate::report::{run_batch, BatchReport, ReportError};
