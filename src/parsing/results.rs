//! Solver result parsing
//!
//! Each solved run appends one line of [`SOLVER_RECORD_COLUMNS`] columns to the
//! solver's log. Batches are usually split into one file per solver, but the
//! raw combined log can be loaded and split with [`split_combined_results`].

use super::table_reader::{line_of, open_table, read_records};
use super::{ParsingError, Result};
use crate::api::enums::Algorithm;
use crate::records::{SolverRecord, SOLVER_RECORD_COLUMNS};
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Solver rows of a batch, separated by algorithm.
#[derive(Debug, Clone, Default)]
pub struct ResultsByAlgorithm {
    pub prim: Vec<SolverRecord>,
    pub bn: Vec<SolverRecord>,
}

impl ResultsByAlgorithm {
    /// Rows of the given algorithm.
    pub fn of(&self, algorithm: Algorithm) -> &[SolverRecord] {
        match algorithm {
            Algorithm::Prim => &self.prim,
            Algorithm::Bn => &self.bn,
        }
    }
}

/// Loads a solver result file.
///
/// # Arguments
/// * `path` - Path to the result file (optionally `.zst` compressed)
///
/// # Returns
/// * `Ok(Vec<SolverRecord>)` - Rows in file order
/// * `Err(ParsingError)` - If the file could not be read or a row is malformed
pub fn load_results(path: &Path) -> Result<Vec<SolverRecord>> {
    parse_results(open_table(path)?, path)
}

/// Parses solver results from any reader. `origin` is only used in error messages.
pub fn parse_results<R: Read>(source: R, origin: &Path) -> Result<Vec<SolverRecord>> {
    let records = read_records(source, origin)?;

    let mut results = Vec::with_capacity(records.len());
    for record in &records {
        let line = line_of(record);
        if record.len() != SOLVER_RECORD_COLUMNS {
            return Err(ParsingError::InvalidRecord {
                path: origin.to_path_buf(),
                line,
                message: format!(
                    "expected {} columns, found {}",
                    SOLVER_RECORD_COLUMNS,
                    record.len()
                ),
            });
        }

        let row: SolverRecord =
            record
                .deserialize(None)
                .map_err(|e| ParsingError::InvalidRecord {
                    path: origin.to_path_buf(),
                    line,
                    message: e.to_string(),
                })?;
        results.push(row);
    }

    Ok(results)
}

/// Splits a combined solver log into per-algorithm rows.
/// Rows of solvers this tool does not evaluate are skipped with a warning.
pub fn split_combined_results(records: Vec<SolverRecord>) -> ResultsByAlgorithm {
    let mut split = ResultsByAlgorithm::default();
    let mut skipped = 0usize;

    for record in records {
        match record.algorithm() {
            Some(Algorithm::Prim) => split.prim.push(record),
            Some(Algorithm::Bn) => split.bn.push(record),
            None => {
                warn!(algo = %record.algo, instance = %record.instance, "skipping row of unknown solver");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, "combined log contained rows of unknown solvers");
    }
    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const PRIM_LINE: &str = "IG-MDA;4DIM;GRID;GRID;corr;100.1.gr;100;180;12;30;0.010000;1.500000;1.480000;42;900;1500;7;120;300;node17;Mon Jan  8 10:12:44 2024\n\n";
    const BN_LINE: &str = "MultiBN;4DIM;GRID;GRID;corr;100.1.gr;100;180;12;30;0.010000;3.000000;2.990000;42;0;1400;7;0;280;node17;Mon Jan  8 10:13:02 2024\n";

    fn parse(data: &str) -> Result<Vec<SolverRecord>> {
        parse_results(Cursor::new(data), Path::new("results.csv"))
    }

    #[test]
    fn parses_solver_lines() {
        let rows = parse(&format!("{PRIM_LINE}{BN_LINE}")).unwrap();
        assert_eq!(rows.len(), 2);

        let prim = &rows[0];
        assert_eq!(prim.algorithm(), Some(Algorithm::Prim));
        assert_eq!(prim.objectives(), Some(4));
        assert_eq!(prim.instance, "100.1.gr");
        assert_eq!(prim.nodes, Some(100));
        assert_eq!(prim.wall_time, Some(1.5));
        assert_eq!(prim.solutions, Some(42));
        assert_eq!(prim.transition_nodes, Some(120));
        assert_eq!(prim.host, "node17");
        assert_eq!(prim.date, "Mon Jan  8 10:12:44 2024");

        assert_eq!(rows[1].extractions, Some(0));
    }

    #[test]
    fn empty_numeric_cells_are_missing() {
        let line = "MultiBN;4DIM;GRID;GRID;corr;100.1.gr;100;180;;;;;;;;;;;;node17;\n";
        let rows = parse(line).unwrap();
        assert_eq!(rows[0].wall_time, None);
        assert_eq!(rows[0].solutions, None);
        assert_eq!(rows[0].blue_edges, None);
    }

    #[test]
    fn rejects_short_rows() {
        let err = parse(&format!("{BN_LINE}IG-MDA;4DIM;GRID\n")).unwrap_err();
        match err {
            ParsingError::InvalidRecord { line, message, .. } => {
                assert_eq!(line, 2);
                assert!(message.contains("expected 21"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_numeric_cells() {
        let line = PRIM_LINE.replace(";42;", ";many;");
        let err = parse(&line).unwrap_err();
        assert!(matches!(err, ParsingError::InvalidRecord { line: 1, .. }));
    }

    #[test]
    fn splits_combined_log() {
        let other = PRIM_LINE.replace("IG-MDA", "NAMOA");
        let rows = parse(&format!("{PRIM_LINE}{BN_LINE}{other}{BN_LINE}")).unwrap();
        let split = split_combined_results(rows);
        assert_eq!(split.prim.len(), 1);
        assert_eq!(split.bn.len(), 2);
        assert_eq!(split.of(Algorithm::Bn).len(), 2);
    }
}
