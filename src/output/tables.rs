//! Plain text tables of the merged rows and node group summaries
//!
//! Tables are formatted with the [`tabled`] crate; they are written next to
//! the LaTeX output so a batch can be inspected without compiling anything.

use super::latex::format_value;
use crate::analysis::{DerivedRow, NodeGroupSummary};
use crate::api::enums::Algorithm;
use tabled::{Table, Tabled};

/// One instance of the merged table.
#[derive(Debug, Clone, Tabled)]
pub struct MergedTableEntry {
    #[tabled(rename = "Instance")]
    pub instance: String,
    #[tabled(rename = "Nodes")]
    pub nodes: String,
    #[tabled(rename = "Trees IG-MDA")]
    pub prim_solutions: String,
    #[tabled(rename = "Trees BN")]
    pub bn_solutions: String,
    #[tabled(rename = "Time IG-MDA [s]")]
    pub prim_wall_time: String,
    #[tabled(rename = "Time BN [s]")]
    pub bn_wall_time: String,
    #[tabled(rename = "Speedup")]
    pub speedup: String,
    #[tabled(rename = "Equivalent")]
    pub equivalent: bool,
}

impl MergedTableEntry {
    /// Creates the table entry of a derived row.
    pub fn new(row: &DerivedRow) -> Self {
        let solutions = |algorithm: Algorithm| {
            let metrics = row.metrics(algorithm);
            match (metrics.solutions, metrics.solved) {
                (Some(count), true) => count.to_string(),
                (Some(count), false) => format!("{} (timeout)", count),
                (None, _) => "-".to_string(),
            }
        };
        let qualified_name = if row.merged.instance.group.is_empty() {
            row.merged.instance.instance.clone()
        } else {
            format!(
                "{}/{}",
                row.merged.instance.group, row.merged.instance.instance
            )
        };

        Self {
            instance: qualified_name,
            nodes: row.nodes.map_or_else(|| "-".to_string(), |n| n.to_string()),
            prim_solutions: solutions(Algorithm::Prim),
            bn_solutions: solutions(Algorithm::Bn),
            prim_wall_time: format_value(Some(row.prim.wall_time), 4),
            bn_wall_time: format_value(Some(row.bn.wall_time), 4),
            speedup: format_value(row.speedup, 2),
            equivalent: row.equivalent,
        }
    }
}

/// One node group of the summary table.
#[derive(Debug, Clone, Tabled)]
pub struct GroupTableEntry {
    #[tabled(rename = "Nodes")]
    pub nodes: u32,
    #[tabled(rename = "Instances")]
    pub instances: usize,
    #[tabled(rename = "Solved IG-MDA")]
    pub prim_solved: usize,
    #[tabled(rename = "Solved BN")]
    pub bn_solved: usize,
    #[tabled(rename = "Equivalent")]
    pub equivalent: usize,
    #[tabled(rename = "Its/s IG-MDA")]
    pub prim_its_per_second: String,
    #[tabled(rename = "Its/s BN")]
    pub bn_its_per_second: String,
    #[tabled(rename = "Speedup (all)")]
    pub speedup: String,
    #[tabled(rename = "Speedup (common)")]
    pub common_speedup: String,
}

impl GroupTableEntry {
    /// Creates the table entry of a node group.
    pub fn new(summary: &NodeGroupSummary) -> Self {
        Self {
            nodes: summary.nodes,
            instances: summary.instances,
            prim_solved: summary.prim.solved,
            bn_solved: summary.bn.solved,
            equivalent: summary.equivalent,
            prim_its_per_second: format_value(summary.prim.its_per_second, 2),
            bn_its_per_second: format_value(summary.bn.its_per_second, 2),
            speedup: format_value(summary.speedup, 2),
            common_speedup: format_value(summary.common_speedup, 2),
        }
    }
}

/// Formats the merged rows as an ASCII table.
///
/// # Arguments
/// * `rows` - The derived rows of a batch
/// * `title` - Optional title for the table
pub fn format_merged_table(rows: &[DerivedRow], title: Option<&str>) -> String {
    let entries: Vec<MergedTableEntry> = rows.iter().map(MergedTableEntry::new).collect();
    format_table(&entries, title)
}

/// Formats the node group summaries as an ASCII table.
pub fn format_summary_table(summaries: &[NodeGroupSummary], title: Option<&str>) -> String {
    let entries: Vec<GroupTableEntry> = summaries.iter().map(GroupTableEntry::new).collect();
    format_table(&entries, title)
}

fn format_table<T: Tabled>(entries: &[T], title: Option<&str>) -> String {
    if entries.is_empty() {
        return "No data available".to_string();
    }

    let table = Table::new(entries).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{derive_row, AlgorithmSummary, MergedRow, MetricsSettings};
    use crate::api::enums::BatchLayout;
    use crate::records::{InstanceRecord, SolverRecord};

    fn derived() -> DerivedRow {
        let result = |solutions, wall_time| SolverRecord {
            solutions: Some(solutions),
            wall_time: Some(wall_time),
            ..Default::default()
        };
        let merged = MergedRow {
            instance: InstanceRecord::grid("GRID", "corr", "100.1.gr"),
            prim: Some(result(7, 0.25)),
            bn: Some(result(7, 9000.0)),
        };
        derive_row(
            BatchLayout::Grid,
            merged,
            &MetricsSettings::for_layout(BatchLayout::Grid),
        )
    }

    #[test]
    fn merged_entry_marks_timeouts() {
        let entry = MergedTableEntry::new(&derived());
        assert_eq!(entry.instance, "corr/100.1.gr");
        assert_eq!(entry.nodes, "100");
        assert_eq!(entry.prim_solutions, "7");
        assert_eq!(entry.bn_solutions, "7 (timeout)");
        assert_eq!(entry.bn_wall_time, "7200.0000");
        assert_eq!(entry.speedup, "28800.00");
        assert!(entry.equivalent);
    }

    #[test]
    fn formats_merged_table_with_title() {
        let table = format_merged_table(&[derived()], Some("Merged"));
        assert!(table.starts_with("Merged\n======\n"));
        assert!(table.contains("Trees IG-MDA"));
        assert!(table.contains("corr/100.1.gr"));
    }

    #[test]
    fn formats_summary_table() {
        let summary = NodeGroupSummary {
            nodes: 400,
            instances: 5,
            prim: AlgorithmSummary {
                solved: 5,
                its_per_second: Some(1234.5),
                ..Default::default()
            },
            ..Default::default()
        };
        let table = format_summary_table(&[summary], None);
        assert!(table.contains("Solved IG-MDA"));
        assert!(table.contains("1234.50"));
        assert!(table.contains("400"));
    }

    #[test]
    fn empty_tables_say_so() {
        assert_eq!(format_merged_table(&[], Some("Merged")), "No data available");
    }
}
