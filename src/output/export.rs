//! CSV export of the merged table
//!
//! Every row carries the instance columns, all solver columns of both solvers
//! (suffixed `_PRIM` / `_BN`, as reported), then the derived metrics.

use crate::analysis::{AlgorithmMetrics, DerivedRow};
use crate::api::enums::Algorithm;
use crate::records::{SOLVER_COLUMN_NAMES, SOLVER_RECORD_COLUMNS};
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while exporting the merged table
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, ExportError>;

const INSTANCE_COLUMNS: [&str; 4] = ["GRAPH_TYPE", "GROUP", "INSTANCE", "NODES"];

/// Derived columns written per solver.
const METRIC_COLUMNS: [&str; 3] = ["SOLVED", "CHARGED_WALL_TIME", "ITS_PER_SECOND"];

const ROW_COLUMNS: [&str; 2] = ["SPEEDUP", "EQUIVALENT"];

/// Column names of the merged table, in order.
pub fn merged_columns() -> Vec<String> {
    let mut columns: Vec<String> = INSTANCE_COLUMNS.iter().map(|c| c.to_string()).collect();
    for algorithm in [Algorithm::Prim, Algorithm::Bn] {
        columns.extend(
            SOLVER_COLUMN_NAMES
                .iter()
                .map(|name| format!("{}_{}", name, algorithm.suffix())),
        );
    }
    for algorithm in [Algorithm::Prim, Algorithm::Bn] {
        columns.extend(
            METRIC_COLUMNS
                .iter()
                .map(|name| format!("{}_{}", name, algorithm.suffix())),
        );
    }
    columns.extend(ROW_COLUMNS.iter().map(|c| c.to_string()));
    columns
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn metric_fields(metrics: &AlgorithmMetrics) -> [String; 3] {
    [
        metrics.solved.to_string(),
        metrics.wall_time.to_string(),
        cell(metrics.its_per_second),
    ]
}

/// Cells of one merged row, matching [`merged_columns`].
pub fn merged_fields(row: &DerivedRow) -> Vec<String> {
    let instance = &row.merged.instance;
    let mut fields = vec![
        instance.graph_type.clone(),
        instance.group.clone(),
        instance.instance.clone(),
        cell(row.nodes),
    ];

    for algorithm in [Algorithm::Prim, Algorithm::Bn] {
        match row.merged.result(algorithm) {
            Some(result) => fields.extend(result.to_fields()),
            None => fields.extend(vec![String::new(); SOLVER_RECORD_COLUMNS]),
        }
    }
    for algorithm in [Algorithm::Prim, Algorithm::Bn] {
        fields.extend(metric_fields(row.metrics(algorithm)));
    }

    fields.push(cell(row.speedup));
    fields.push(row.equivalent.to_string());
    fields
}

/// Writes the merged rows as a `;` separated table.
/// The header line is written even when there are no rows.
pub fn write_merged_csv<W: Write>(rows: &[DerivedRow], destination: W) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(destination);

    writer.write_record(merged_columns())?;
    for row in rows {
        writer.write_record(merged_fields(row))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the merged rows to the file at `path`, see [`write_merged_csv`].
pub fn save_merged_csv(rows: &[DerivedRow], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_merged_csv(rows, std::io::BufWriter::new(file))
}
