//! Relational and statistical processing of a benchmark batch
//!
//! The pipeline is linear:
//! - [`merge`]: left join of the instance list against both solvers' rows
//! - [`metrics`]: per-row classification, corrections and speedups
//! - [`aggregate`]: per node count summaries built on [`stats`]

pub mod aggregate;
pub mod merge;
pub mod metrics;
pub mod stats;

pub use aggregate::{
    group_by_nodes, summarize_by_nodes, summarize_group, AlgorithmSummary, NodeGroupSummary,
};
pub use merge::{merge, Merged, MergeStats, MergedRow};
pub use metrics::{
    derive_row, derive_rows, AlgorithmMetrics, DerivedRow, MetricsSettings, DEFAULT_TIME_LIMIT,
};
pub use stats::{arithmetic_mean, geometric_mean};
