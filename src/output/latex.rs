//! LaTeX table generation
//!
//! Each node group becomes one `tabular` row. The santos and grid batches are
//! reported with different columns:
//!
//! - santos: `n & #inst & |Y_N| & [BN, IG-MDA: TN & Ext & Time] & Speedup`
//! - grid: `n & #inst & [BN, IG-MDA: Solved & |Y_N| & TN & Ext & Time] & Speedup`
//!
//! Counts and ratios use two decimals, times four. Aggregates that are
//! undefined (e.g. no solved instance) are rendered as `--`.

use crate::analysis::NodeGroupSummary;
use crate::api::enums::{Algorithm, BatchLayout};
use core::fmt::Write;

/// Placeholder for aggregates that have no value.
pub const MISSING_VALUE: &str = "--";

/// Formats an aggregate with a fixed number of decimals.
pub fn format_value(value: Option<f64>, decimals: usize) -> String {
    match value {
        None => MISSING_VALUE.to_string(),
        Some(v) if v.is_nan() => MISSING_VALUE.to_string(),
        Some(v) if v == f64::INFINITY => "$\\infty$".to_string(),
        Some(v) => format!("{:.*}", decimals, v),
    }
}

/// Table row of a santos batch.
pub fn santos_row(summary: &NodeGroupSummary) -> String {
    let mut line = format!(
        "{} & {} & {} & ",
        summary.nodes,
        summary.instances,
        format_value(summary.prim_solutions, 2)
    );

    for algorithm in Algorithm::TABLE_ORDER {
        let aggregates = summary.of(algorithm);
        let _ = write!(
            line,
            "{} & {} & {} & ",
            format_value(aggregates.transition_nodes, 2),
            format_value(aggregates.extractions, 2),
            format_value(aggregates.wall_time, 4)
        );
    }

    let _ = write!(line, "{} \\\\", format_value(summary.speedup, 2));
    line
}

/// Table row of a grid batch.
///
/// The speedup column only covers instances solved by both solvers.
pub fn grid_row(summary: &NodeGroupSummary) -> String {
    let mut line = format!("{} & {} & ", summary.nodes, summary.instances);

    for algorithm in Algorithm::TABLE_ORDER {
        let aggregates = summary.of(algorithm);
        let _ = write!(
            line,
            "{} & {} & {} & {} & {} & ",
            aggregates.solved,
            format_value(aggregates.solutions, 2),
            format_value(aggregates.transition_nodes, 2),
            format_value(aggregates.extractions, 2),
            format_value(aggregates.wall_time, 4)
        );
    }

    let _ = write!(line, "{} \\\\", format_value(summary.common_speedup, 2));
    line
}

/// Table row of a node group in the given layout.
pub fn table_row(layout: BatchLayout, summary: &NodeGroupSummary) -> String {
    match layout {
        BatchLayout::Santos => santos_row(summary),
        BatchLayout::Grid => grid_row(summary),
    }
}

/// Table rows of every node group, in the order given.
pub fn table_rows(layout: BatchLayout, summaries: &[NodeGroupSummary]) -> Vec<String> {
    summaries
        .iter()
        .map(|summary| table_row(layout, summary))
        .collect()
}

/// Renders a complete `tabular` (booktabs) around the rows of every node group.
pub fn render_table(layout: BatchLayout, summaries: &[NodeGroupSummary]) -> String {
    let per_algorithm: &[&str] = match layout {
        BatchLayout::Santos => &["TN", "Ext.", "Time [s]"],
        BatchLayout::Grid => &["Solved", "$|\\mathcal{Y}_N|$", "TN", "Ext.", "Time [s]"],
    };
    let leading: &[&str] = match layout {
        BatchLayout::Santos => &["$n$", "Inst.", "$|\\mathcal{Y}_N|$"],
        BatchLayout::Grid => &["$n$", "Inst."],
    };

    let width = per_algorithm.len();
    let columns = leading.len() + 2 * width + 1;

    let mut table = String::new();
    let _ = writeln!(table, "\\begin{{tabular}}{{{}}}", "r".repeat(columns));
    table.push_str("\\toprule\n");

    // Algorithm group headers
    table.push_str(&"& ".repeat(leading.len()));
    for algorithm in Algorithm::TABLE_ORDER {
        let _ = write!(
            table,
            "\\multicolumn{{{}}}{{c}}{{{}}} & ",
            width,
            algorithm.label()
        );
    }
    table.push_str("\\\\\n");
    for index in 0..Algorithm::TABLE_ORDER.len() {
        let first = leading.len() + index * width + 1;
        let _ = write!(table, "\\cmidrule(lr){{{}-{}}}", first, first + width - 1);
    }
    table.push('\n');

    // Column headers
    let mut headers: Vec<&str> = leading.to_vec();
    for _ in Algorithm::TABLE_ORDER {
        headers.extend_from_slice(per_algorithm);
    }
    headers.push("Speedup");
    let _ = writeln!(table, "{} \\\\", headers.join(" & "));
    table.push_str("\\midrule\n");

    for summary in summaries {
        table.push_str(&table_row(layout, summary));
        table.push('\n');
    }

    table.push_str("\\bottomrule\n\\end{tabular}\n");
    table
}

/// Row of arithmetic mean wall times, one `& <mean>` cell per node group.
pub fn mean_wall_time_row(summaries: &[NodeGroupSummary], algorithm: Algorithm) -> String {
    summaries.iter().fold(String::new(), |mut line, summary| {
        let _ = write!(line, "& {} ", format_value(summary.of(algorithm).mean_wall_time, 4));
        line
    })
}

/// Row of geometric mean iteration rates (extractions per second), one `& <rate>` cell per node group.
pub fn its_per_second_row(summaries: &[NodeGroupSummary], algorithm: Algorithm) -> String {
    summaries.iter().fold(String::new(), |mut line, summary| {
        let _ = write!(line, "& {} ", format_value(summary.of(algorithm).its_per_second, 2));
        line
    })
}
