//! Left join of an instance list against the results of both solvers
//!
//! The instance list drives the join: every instance yields exactly one
//! [`MergedRow`], in list order, whether or not a solver produced a row for it.
//! This is what later lets unsolved instances be counted and timed out.

use crate::api::enums::{Algorithm, BatchLayout};
use crate::parsing::ResultsByAlgorithm;
use crate::records::{InstanceKey, InstanceRecord, SolverRecord};
use hashbrown::{HashMap, HashSet};
use tracing::{debug, warn};

/// An instance together with the rows both solvers produced for it.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRow {
    pub instance: InstanceRecord,
    pub prim: Option<SolverRecord>,
    pub bn: Option<SolverRecord>,
}

impl MergedRow {
    /// Row the given solver produced for this instance.
    pub fn result(&self, algorithm: Algorithm) -> Option<&SolverRecord> {
        match algorithm {
            Algorithm::Prim => self.prim.as_ref(),
            Algorithm::Bn => self.bn.as_ref(),
        }
    }

    /// Node count this row is grouped under.
    ///
    /// Grid instances encode it in their name. Santos instances only learn it
    /// from the solver output; the PRIM row is preferred and the BN row is used
    /// when PRIM has no row for the instance.
    pub fn nodes(&self, layout: BatchLayout) -> Option<u32> {
        match layout {
            BatchLayout::Grid => self.instance.nodes,
            BatchLayout::Santos => self
                .prim
                .as_ref()
                .and_then(|row| row.nodes)
                .or_else(|| self.bn.as_ref().and_then(|row| row.nodes)),
        }
    }
}

/// Bookkeeping of a join, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Result rows dropped because an earlier row had the same key.
    pub duplicates: usize,
    /// Result rows whose key matches no instance of the list.
    pub unmatched: usize,
}

/// Output of [`merge`].
#[derive(Debug, Clone, Default)]
pub struct Merged {
    pub rows: Vec<MergedRow>,
    pub stats: MergeStats,
}

/// Left joins `instances` against both solvers' results on the layout's key.
///
/// If a solver wrote more than one row for the same key, the first row is
/// used and the others are reported as duplicates.
pub fn merge(
    layout: BatchLayout,
    instances: Vec<InstanceRecord>,
    results: ResultsByAlgorithm,
) -> Merged {
    let mut stats = MergeStats::default();
    let instance_keys: HashSet<InstanceKey> = instances
        .iter()
        .map(|instance| InstanceKey::of_instance(layout, instance))
        .collect();

    let prim = index_results(layout, Algorithm::Prim, results.prim, &mut stats);
    let bn = index_results(layout, Algorithm::Bn, results.bn, &mut stats);

    for (algorithm, index) in [(Algorithm::Prim, &prim), (Algorithm::Bn, &bn)] {
        let unmatched = index
            .keys()
            .filter(|key| !instance_keys.contains(*key))
            .inspect(|key| {
                debug!(%algorithm, instance = %key.instance, "result row matches no listed instance")
            })
            .count();
        stats.unmatched += unmatched;
    }

    let rows = instances
        .into_iter()
        .map(|instance| {
            let key = InstanceKey::of_instance(layout, &instance);
            MergedRow {
                prim: prim.get(&key).cloned(),
                bn: bn.get(&key).cloned(),
                instance,
            }
        })
        .collect();

    if stats.unmatched > 0 {
        warn!(
            unmatched = stats.unmatched,
            "result rows without a matching instance were ignored"
        );
    }

    Merged { rows, stats }
}

fn index_results(
    layout: BatchLayout,
    algorithm: Algorithm,
    results: Vec<SolverRecord>,
    stats: &mut MergeStats,
) -> HashMap<InstanceKey, SolverRecord> {
    let mut index: HashMap<InstanceKey, SolverRecord> = HashMap::with_capacity(results.len());
    for row in results {
        let key = InstanceKey::of_result(layout, &row);
        if index.contains_key(&key) {
            warn!(%algorithm, instance = %row.instance, "duplicate result row, keeping the first one");
            stats.duplicates += 1;
            continue;
        }
        index.insert(key, row);
    }
    index
}
