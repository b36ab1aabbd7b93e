//! # MO-MST Results
//! Evaluation of multi-objective minimum spanning tree benchmark results.
//!
//! Two solvers, IG-MDA (a Prim-style labelling search) and BN, are run over
//! batches of graph instances. This crate joins their result logs against the
//! instance lists, derives comparative metrics, aggregates them by instance
//! size and writes LaTeX table rows and scatter plots.
//!
//! ```no_run
//! use mo_mst_results::prelude::*;
//! use std::path::Path;
//!
//! let config = EvaluationConfig::load(Path::new("batches.json")).unwrap();
//! for batch in &config.batches {
//!     let report = run_batch(batch).unwrap();
//!     for row in &report.latex_rows {
//!         println!("{}", row);
//!     }
//! }
//! ```

/// Public High Level API
pub mod api {
    pub mod enums;
}

/// Typed rows of the input files.
pub mod records;

/// Loading of instance lists and solver result files.
pub mod parsing;

/// Joining, per-row metrics and per-size aggregation.
pub mod analysis;

/// LaTeX rows, plots, text tables and CSV export.
pub mod output;

/// Batch settings, from JSON files or built in code.
pub mod config;

/// Evaluation of a whole batch.
pub mod report;

/// Commonly used items, for glob import.
pub mod prelude;
