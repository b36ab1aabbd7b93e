//! Per-row comparative metrics
//!
//! Turns merged rows into [`DerivedRow`]s: each solver's run is classified as
//! solved or unsolved, unsolved runs are charged the time limit, and the
//! speedup of PRIM over BN is computed.

use super::merge::MergedRow;
use crate::api::enums::{Algorithm, BatchLayout};
use crate::records::SolverRecord;

/// Time limit of the benchmark runs, in seconds.
pub const DEFAULT_TIME_LIMIT: f64 = 7200.0;

/// Wall time substituted for runs that reported zero seconds, when corrections are on.
pub const MIN_WALL_TIME: f64 = 0.000001;

/// Controls how rows are classified and corrected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSettings {
    /// Runs slower than this (in seconds) count as unsolved.
    pub time_limit: f64,

    /// Applies the data corrections:
    /// - zero extraction and transition node counts become 1 (every search extracts at least one label)
    /// - zero wall times become [`MIN_WALL_TIME`]
    /// - infinite or zero speedups become 1
    pub corrections: bool,
}

impl MetricsSettings {
    /// Settings for a batch of the given layout, with the default time limit.
    pub fn for_layout(layout: BatchLayout) -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            corrections: layout.corrects_by_default(),
        }
    }
}

/// Metrics of one solver on one instance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AlgorithmMetrics {
    /// The solver reported solutions within the time limit.
    pub solved: bool,
    pub solutions: Option<u64>,
    pub extractions: Option<u64>,
    pub transition_nodes: Option<u64>,
    /// Wall time in seconds. Unsolved runs are charged the time limit.
    pub wall_time: f64,
    /// Extractions per second of the reported wall time.
    pub its_per_second: Option<f64>,
}

impl AlgorithmMetrics {
    /// Classifies a solver's run on one instance, `None` meaning the solver wrote no row.
    pub fn from_result(result: Option<&SolverRecord>, settings: &MetricsSettings) -> Self {
        let Some(result) = result else {
            return Self {
                wall_time: settings.time_limit,
                ..Default::default()
            };
        };

        let solved = is_solved(result.solutions, result.wall_time, settings.time_limit);
        let wall_time = match result.wall_time {
            Some(time) if solved && settings.corrections && time == 0.0 => MIN_WALL_TIME,
            Some(time) if solved => time,
            _ => settings.time_limit,
        };

        let at_least_one = |count: Option<u64>| match count {
            Some(0) if settings.corrections => Some(1),
            other => other,
        };
        let extractions = at_least_one(result.extractions);
        let transition_nodes = at_least_one(result.transition_nodes);

        // Rates use the reported time, also for runs past the limit.
        let reported_time = match result.wall_time {
            Some(time) if settings.corrections && time == 0.0 => Some(MIN_WALL_TIME),
            other => other,
        };
        let its_per_second = extractions
            .zip(reported_time)
            .map(|(count, time)| count as f64 / time)
            .filter(|rate| !rate.is_nan());

        Self {
            solved,
            solutions: result.solutions,
            extractions,
            transition_nodes,
            wall_time,
            its_per_second,
        }
    }
}

/// A run counts as solved if it reported its solutions within the time limit.
pub fn is_solved(solutions: Option<u64>, wall_time: Option<f64>, time_limit: f64) -> bool {
    match (solutions, wall_time) {
        (Some(_), Some(time)) => !time.is_nan() && time <= time_limit,
        _ => false,
    }
}

/// A merged row with its derived metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedRow {
    pub merged: MergedRow,
    /// Node count the row is grouped under, see [`MergedRow::nodes`].
    pub nodes: Option<u32>,
    pub prim: AlgorithmMetrics,
    pub bn: AlgorithmMetrics,
    /// BN wall time divided by PRIM wall time. Above 1 means PRIM was faster.
    pub speedup: Option<f64>,
    /// Both solvers reported the same number of trees, within the time limit or not.
    pub equivalent: bool,
}

impl DerivedRow {
    /// Metrics of the given solver.
    pub fn metrics(&self, algorithm: Algorithm) -> &AlgorithmMetrics {
        match algorithm {
            Algorithm::Prim => &self.prim,
            Algorithm::Bn => &self.bn,
        }
    }

    /// Both solvers solved the instance.
    pub fn solved_by_both(&self) -> bool {
        self.prim.solved && self.bn.solved
    }
}

/// Derives the metrics of a single merged row.
pub fn derive_row(layout: BatchLayout, merged: MergedRow, settings: &MetricsSettings) -> DerivedRow {
    let prim = AlgorithmMetrics::from_result(merged.prim.as_ref(), settings);
    let bn = AlgorithmMetrics::from_result(merged.bn.as_ref(), settings);

    let speedup = speedup(bn.wall_time, prim.wall_time, settings.corrections);
    let equivalent = prim.solutions.is_some() && prim.solutions == bn.solutions;

    DerivedRow {
        nodes: merged.nodes(layout),
        merged,
        prim,
        bn,
        speedup,
        equivalent,
    }
}

/// Derives the metrics of every merged row, preserving order.
pub fn derive_rows(
    layout: BatchLayout,
    rows: Vec<MergedRow>,
    settings: &MetricsSettings,
) -> Vec<DerivedRow> {
    rows.into_iter()
        .map(|row| derive_row(layout, row, settings))
        .collect()
}

/// Ratio of the BN wall time over the PRIM wall time.
///
/// With corrections on, an infinite or zero ratio means one of the times was
/// zero; both algorithms are then considered equally fast.
pub fn speedup(bn_wall_time: f64, prim_wall_time: f64, corrections: bool) -> Option<f64> {
    let ratio = bn_wall_time / prim_wall_time;
    if ratio.is_nan() {
        return None;
    }
    if corrections && (ratio.is_infinite() || ratio == 0.0) {
        return Some(1.0);
    }
    Some(ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::InstanceRecord;
    use rstest::rstest;

    fn result(solutions: Option<u64>, wall_time: Option<f64>) -> SolverRecord {
        SolverRecord {
            nodes: Some(100),
            solutions,
            wall_time,
            extractions: Some(50),
            transition_nodes: Some(10),
            ..Default::default()
        }
    }

    fn corrected() -> MetricsSettings {
        MetricsSettings {
            time_limit: DEFAULT_TIME_LIMIT,
            corrections: true,
        }
    }

    #[rstest]
    #[case(Some(3), Some(1.0), true)]
    #[case(Some(3), Some(7200.0), true)]
    #[case(Some(3), Some(7200.5), false)]
    #[case(None, Some(1.0), false)]
    #[case(Some(3), None, false)]
    #[case(Some(3), Some(f64::NAN), false)]
    fn classifies_solvability(
        #[case] solutions: Option<u64>,
        #[case] wall_time: Option<f64>,
        #[case] expected: bool,
    ) {
        assert_eq!(is_solved(solutions, wall_time, DEFAULT_TIME_LIMIT), expected);
    }

    #[test]
    fn missing_result_is_charged_the_time_limit() {
        let metrics = AlgorithmMetrics::from_result(None, &corrected());
        assert!(!metrics.solved);
        assert_eq!(metrics.wall_time, DEFAULT_TIME_LIMIT);
        assert_eq!(metrics.solutions, None);
        assert_eq!(metrics.its_per_second, None);
    }

    #[test]
    fn timed_out_result_is_charged_the_time_limit() {
        let row = result(Some(5), Some(9000.0));
        let metrics = AlgorithmMetrics::from_result(Some(&row), &corrected());
        assert!(!metrics.solved);
        assert_eq!(metrics.wall_time, DEFAULT_TIME_LIMIT);
    }

    #[test]
    fn corrections_replace_zero_counts_and_times() {
        let mut row = result(Some(1), Some(0.0));
        row.extractions = Some(0);
        row.transition_nodes = Some(0);

        let metrics = AlgorithmMetrics::from_result(Some(&row), &corrected());
        assert_eq!(metrics.extractions, Some(1));
        assert_eq!(metrics.transition_nodes, Some(1));
        assert_eq!(metrics.wall_time, MIN_WALL_TIME);
        assert_eq!(metrics.its_per_second, Some(1.0 / MIN_WALL_TIME));

        let settings = MetricsSettings {
            corrections: false,
            ..corrected()
        };
        let raw = AlgorithmMetrics::from_result(Some(&row), &settings);
        assert_eq!(raw.extractions, Some(0));
        assert_eq!(raw.wall_time, 0.0);
        assert_eq!(raw.its_per_second, None);
    }

    #[test]
    fn computes_iteration_rate() {
        let row = result(Some(4), Some(2.0));
        let metrics = AlgorithmMetrics::from_result(Some(&row), &corrected());
        assert_eq!(metrics.its_per_second, Some(25.0));
    }

    #[rstest]
    #[case(4.0, 2.0, true, Some(2.0))]
    #[case(1.0, 0.0, true, Some(1.0))]
    #[case(0.0, 1.0, true, Some(1.0))]
    #[case(1.0, 0.0, false, Some(f64::INFINITY))]
    #[case(0.0, 1.0, false, Some(0.0))]
    #[case(0.0, 0.0, false, None)]
    fn computes_speedup(
        #[case] bn: f64,
        #[case] prim: f64,
        #[case] corrections: bool,
        #[case] expected: Option<f64>,
    ) {
        assert_eq!(speedup(bn, prim, corrections), expected);
    }

    #[test]
    fn derives_row() {
        let merged = MergedRow {
            instance: InstanceRecord::grid("GRID", "corr", "100.1.gr"),
            prim: Some(result(Some(12), Some(0.5))),
            bn: Some(result(Some(12), Some(2.0))),
        };
        let row = derive_row(BatchLayout::Grid, merged, &corrected());

        assert_eq!(row.nodes, Some(100));
        assert!(row.solved_by_both());
        assert!(row.equivalent);
        assert_eq!(row.speedup, Some(4.0));
        assert_eq!(row.metrics(Algorithm::Bn).wall_time, 2.0);
    }

    #[test]
    fn timed_out_run_uses_reported_time_for_rate() {
        let row = result(Some(5), Some(10000.0));
        let metrics = AlgorithmMetrics::from_result(Some(&row), &corrected());
        assert!(!metrics.solved);
        assert_eq!(metrics.wall_time, DEFAULT_TIME_LIMIT);
        assert_eq!(metrics.its_per_second, Some(0.005));
    }

    #[test]
    fn timed_out_run_with_same_tree_count_is_equivalent() {
        let merged = MergedRow {
            instance: InstanceRecord::grid("GRID", "corr", "100.1.gr"),
            prim: Some(result(Some(5), Some(1.0))),
            bn: Some(result(Some(5), Some(9000.0))),
        };
        let row = derive_row(BatchLayout::Grid, merged, &corrected());

        assert!(row.prim.solved);
        assert!(!row.bn.solved);
        assert!(row.equivalent);
        assert!(!row.solved_by_both());
    }

    #[test]
    fn missing_side_is_not_equivalent() {
        let merged = MergedRow {
            instance: InstanceRecord::grid("GRID", "corr", "100.1.gr"),
            prim: Some(result(Some(12), Some(3600.0))),
            bn: None,
        };
        let row = derive_row(BatchLayout::Grid, merged, &corrected());

        assert!(!row.equivalent);
        assert!(!row.solved_by_both());
        assert_eq!(row.speedup, Some(2.0));
    }
}
