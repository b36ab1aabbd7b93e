use crate::api::enums::Algorithm;
use serde::Deserialize;

/// Number of `;` separated columns the solver writes per run.
pub const SOLVER_RECORD_COLUMNS: usize = 21;

/// Names of the solver columns, in file order.
pub const SOLVER_COLUMN_NAMES: [&str; SOLVER_RECORD_COLUMNS] = [
    "ALGO",
    "DIMENSION",
    "INST_TYPE",
    "GRAPH_TYPE",
    "GROUP",
    "INSTANCE",
    "NODES",
    "EDGES",
    "BLUE_EDGES",
    "RED_EDGES",
    "PREP_TIME",
    "WALL_TIME",
    "CPU_TIME",
    "SOLUTIONS",
    "EXTRACTIONS",
    "INSERTIONS",
    "NQP_IT",
    "TRANSITION_NODES_COUNT",
    "TRANSITION_ARCS_COUNT",
    "HOST",
    "DATE",
];

/// One line of a solver result file.
///
/// Field order matches the column order written by the solver binary, which is
/// what lets the CSV reader deserialize headerless rows directly into this struct.
/// Numeric columns are optional; an empty cell loads as [`None`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SolverRecord {
    /// Solver tag (`IG-MDA` or `MultiBN`).
    pub algo: String,
    /// Number of objectives, written as e.g. `4DIM`.
    pub dimension: String,
    /// Instance generator (e.g. `SANTOS`, `GRID`).
    pub inst_type: String,
    /// First identity column. Graph family for grids, generator directory for Santos.
    pub graph_type: String,
    /// Second identity column. Instance group for grids, generator sub-directory for Santos.
    pub group: String,
    /// File name of the instance.
    pub instance: String,
    pub nodes: Option<u32>,
    pub edges: Option<u64>,
    /// Edges that are part of every efficient tree after preprocessing.
    pub blue_edges: Option<u64>,
    /// Edges that are part of no efficient tree after preprocessing.
    pub red_edges: Option<u64>,
    /// Preprocessing time in seconds.
    pub prep_time: Option<f64>,
    /// Search wall time in seconds.
    pub wall_time: Option<f64>,
    /// Search CPU time in seconds.
    pub cpu_time: Option<f64>,
    /// Number of efficient spanning trees found.
    pub solutions: Option<u64>,
    /// Labels extracted from the priority queue.
    pub extractions: Option<u64>,
    /// Labels inserted into the priority queue.
    pub insertions: Option<u64>,
    /// Iterations of the next-queue-tree loop.
    pub nqp_iterations: Option<u64>,
    /// Nodes of the transition graph between spanning trees.
    pub transition_nodes: Option<u64>,
    /// Arcs of the transition graph between spanning trees.
    pub transition_arcs: Option<u64>,
    /// Machine the run was executed on.
    pub host: String,
    /// Completion time as written by `ctime`.
    pub date: String,
}

impl SolverRecord {
    /// The solver that produced this row, if it is one this tool evaluates.
    pub fn algorithm(&self) -> Option<Algorithm> {
        Algorithm::from_tag(&self.algo)
    }

    /// Cells of this row in file order, matching [`SOLVER_COLUMN_NAMES`].
    /// Missing numbers become empty cells.
    pub fn to_fields(&self) -> [String; SOLVER_RECORD_COLUMNS] {
        fn cell<T: ToString>(value: Option<T>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }

        [
            self.algo.clone(),
            self.dimension.clone(),
            self.inst_type.clone(),
            self.graph_type.clone(),
            self.group.clone(),
            self.instance.clone(),
            cell(self.nodes),
            cell(self.edges),
            cell(self.blue_edges),
            cell(self.red_edges),
            cell(self.prep_time),
            cell(self.wall_time),
            cell(self.cpu_time),
            cell(self.solutions),
            cell(self.extractions),
            cell(self.insertions),
            cell(self.nqp_iterations),
            cell(self.transition_nodes),
            cell(self.transition_arcs),
            self.host.clone(),
            self.date.clone(),
        ]
    }

    /// Number of objectives, parsed from the `<d>DIM` column.
    pub fn objectives(&self) -> Option<u32> {
        let dimension = self.dimension.trim();
        dimension
            .strip_suffix("DIM")
            .unwrap_or(dimension)
            .parse()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("4DIM", Some(4))]
    #[case("3DIM", Some(3))]
    #[case("2", Some(2))]
    #[case("DIM", None)]
    #[case("", None)]
    fn parses_objective_count(#[case] dimension: &str, #[case] expected: Option<u32>) {
        let record = SolverRecord {
            dimension: dimension.to_string(),
            ..Default::default()
        };
        assert_eq!(record.objectives(), expected);
    }

    #[test]
    fn resolves_algorithm() {
        let record = SolverRecord {
            algo: "MultiBN".to_string(),
            ..Default::default()
        };
        assert_eq!(record.algorithm(), Some(Algorithm::Bn));
    }

    #[test]
    fn renders_fields_in_file_order() {
        let record = SolverRecord {
            algo: "IG-MDA".to_string(),
            instance: "100.1.gr".to_string(),
            wall_time: Some(1.5),
            transition_arcs: Some(300),
            date: "Mon Jan  8 10:12:44 2024".to_string(),
            ..Default::default()
        };
        let fields = record.to_fields();

        assert_eq!(fields[0], "IG-MDA");
        assert_eq!(fields[5], "100.1.gr");
        assert_eq!(fields[6], "");
        assert_eq!(fields[11], "1.5");
        assert_eq!(fields[18], "300");
        assert_eq!(fields[20], "Mon Jan  8 10:12:44 2024");
        assert_eq!(SOLVER_COLUMN_NAMES[11], "WALL_TIME");
        assert_eq!(SOLVER_COLUMN_NAMES[18], "TRANSITION_ARCS_COUNT");
    }
}
