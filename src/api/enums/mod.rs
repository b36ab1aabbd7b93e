/// Identifies the solver that produced a result row.
pub mod algorithm;
/// Describes how a batch identifies and sizes its instances.
pub mod batch_layout;
/// Selects the file format of rendered plots.
pub mod plot_format;

/// Prelude
pub use algorithm::*;
pub use batch_layout::*;
pub use plot_format::*;
