//! Everything a batch writes: LaTeX rows, plots, text tables and the merged CSV.

pub mod export;
pub mod latex;
pub mod plots;
pub mod tables;

pub use export::{merged_columns, save_merged_csv, write_merged_csv, ExportError};
pub use latex::{its_per_second_row, mean_wall_time_row, render_table, table_row, table_rows};
pub use plots::{create_group_plot, PlotError};
pub use tables::{format_merged_table, format_summary_table};
