//! Aggregation of derived rows by instance size
//!
//! Rows are grouped by node count and each group is condensed into a
//! [`NodeGroupSummary`], the data behind one LaTeX table row and one plot.

use super::metrics::DerivedRow;
use super::stats::{arithmetic_mean, geometric_mean};
use crate::api::enums::Algorithm;
use std::collections::BTreeMap;
use tracing::warn;

/// Aggregates of one solver over one node group.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AlgorithmSummary {
    /// Number of instances the solver solved.
    pub solved: usize,
    /// Geometric mean of the efficient tree count over solved instances.
    pub solutions: Option<f64>,
    /// Geometric mean of the transition graph size over solved instances.
    pub transition_nodes: Option<f64>,
    /// Geometric mean of the extraction count over solved instances.
    pub extractions: Option<f64>,
    /// Geometric mean of the wall time over all instances (unsolved ones at the time limit).
    pub wall_time: Option<f64>,
    /// Arithmetic mean of the wall time over all instances.
    pub mean_wall_time: Option<f64>,
    /// Geometric mean of the extractions per second over instances that report extractions.
    pub its_per_second: Option<f64>,
}

/// Aggregates of all instances sharing a node count.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeGroupSummary {
    pub nodes: u32,
    /// Number of instances in the group.
    pub instances: usize,
    pub prim: AlgorithmSummary,
    pub bn: AlgorithmSummary,
    /// Geometric mean of the PRIM tree count over every instance PRIM reported.
    pub prim_solutions: Option<f64>,
    /// Geometric mean speedup over all instances.
    pub speedup: Option<f64>,
    /// Number of instances solved by both solvers.
    pub solved_by_both: usize,
    /// Geometric mean speedup over the instances solved by both solvers.
    pub common_speedup: Option<f64>,
    /// Instances where both solvers reported identical tree counts.
    pub equivalent: usize,
}

impl NodeGroupSummary {
    /// Aggregates of the given solver.
    pub fn of(&self, algorithm: Algorithm) -> &AlgorithmSummary {
        match algorithm {
            Algorithm::Prim => &self.prim,
            Algorithm::Bn => &self.bn,
        }
    }
}

/// Groups rows by node count, in ascending order.
/// Rows whose node count is unknown cannot be placed and are dropped with a warning.
pub fn group_by_nodes(rows: &[DerivedRow]) -> BTreeMap<u32, Vec<&DerivedRow>> {
    let mut groups: BTreeMap<u32, Vec<&DerivedRow>> = BTreeMap::new();
    let mut dropped = 0usize;

    for row in rows {
        match row.nodes {
            Some(nodes) => groups.entry(nodes).or_default().push(row),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(
            dropped,
            "instances without a known node count were left out of the aggregation"
        );
    }
    groups
}

/// Summarizes one solver over a group of rows.
pub fn summarize_algorithm(rows: &[&DerivedRow], algorithm: Algorithm) -> AlgorithmSummary {
    let metrics = || rows.iter().map(move |row| row.metrics(algorithm));
    let solved = || metrics().filter(|m| m.solved);

    AlgorithmSummary {
        solved: solved().count(),
        solutions: geometric_mean(solved().map(|m| m.solutions.map(|v| v as f64))),
        transition_nodes: geometric_mean(solved().map(|m| m.transition_nodes.map(|v| v as f64))),
        extractions: geometric_mean(solved().map(|m| m.extractions.map(|v| v as f64))),
        wall_time: geometric_mean(metrics().map(|m| Some(m.wall_time))),
        mean_wall_time: arithmetic_mean(metrics().map(|m| Some(m.wall_time))),
        its_per_second: geometric_mean(metrics().map(|m| m.its_per_second)),
    }
}

/// Summarizes a group of rows sharing the node count `nodes`.
pub fn summarize_group(nodes: u32, rows: &[&DerivedRow]) -> NodeGroupSummary {
    let common = || rows.iter().filter(|row| row.solved_by_both());

    NodeGroupSummary {
        nodes,
        instances: rows.len(),
        prim: summarize_algorithm(rows, Algorithm::Prim),
        bn: summarize_algorithm(rows, Algorithm::Bn),
        prim_solutions: geometric_mean(rows.iter().map(|row| row.prim.solutions.map(|v| v as f64))),
        speedup: geometric_mean(rows.iter().map(|row| row.speedup)),
        solved_by_both: common().count(),
        common_speedup: geometric_mean(common().map(|row| row.speedup)),
        equivalent: rows.iter().filter(|row| row.equivalent).count(),
    }
}

/// Groups rows by node count and summarizes every group, in ascending node count.
pub fn summarize_by_nodes(rows: &[DerivedRow]) -> Vec<NodeGroupSummary> {
    group_by_nodes(rows)
        .iter()
        .map(|(&nodes, group)| summarize_group(nodes, group))
        .collect()
}
