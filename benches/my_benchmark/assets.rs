use mo_mst_results::parsing::ResultsByAlgorithm;
use mo_mst_results::records::{InstanceRecord, SolverRecord};

const NODE_COUNTS: [u32; 6] = [100, 200, 400, 800, 1600, 2500];

/// Instance list of a synthetic grid batch with `per_group` instances per node count.
pub fn grid_instances(per_group: usize) -> Vec<InstanceRecord> {
    NODE_COUNTS
        .iter()
        .flat_map(|&nodes| {
            (0..per_group).map(move |index| {
                InstanceRecord::grid("GRID", "corr", format!("{}.{}.gr", nodes, index))
            })
        })
        .collect()
}

/// Results of both solvers for `instances`. BN misses every third instance.
pub fn grid_results(instances: &[InstanceRecord]) -> ResultsByAlgorithm {
    let result = |instance: &InstanceRecord, algo: &str, wall_time: f64| SolverRecord {
        algo: algo.to_string(),
        dimension: "4DIM".to_string(),
        inst_type: "GRID".to_string(),
        graph_type: instance.graph_type.clone(),
        group: instance.group.clone(),
        instance: instance.instance.clone(),
        nodes: instance.nodes,
        solutions: instance.nodes.map(|n| u64::from(n) * 3),
        extractions: instance.nodes.map(|n| u64::from(n) * 40),
        transition_nodes: instance.nodes.map(|n| u64::from(n) * 2),
        wall_time: Some(wall_time),
        ..Default::default()
    };

    let mut results = ResultsByAlgorithm::default();
    for (index, instance) in instances.iter().enumerate() {
        let scale = f64::from(instance.nodes.unwrap_or(1)) / 100.0;
        results.prim.push(result(instance, "IG-MDA", scale));
        if index % 3 != 0 {
            results.bn.push(result(instance, "MultiBN", scale * 7.5));
        }
    }
    results
}
