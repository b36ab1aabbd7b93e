use criterion::{black_box, Criterion};
use mo_mst_results::analysis::{derive_rows, merge, summarize_by_nodes, MetricsSettings};
use mo_mst_results::api::enums::BatchLayout;

use crate::assets;

pub fn bench_merge(c: &mut Criterion) {
    let settings = MetricsSettings::for_layout(BatchLayout::Grid);

    for per_group in [10, 100, 1000] {
        let instances = assets::grid_instances(per_group);
        let results = assets::grid_results(&instances);

        let id = format!("merge_and_derive_{}", instances.len());
        c.bench_function(&id, |b| {
            b.iter(|| {
                let merged = merge(
                    BatchLayout::Grid,
                    black_box(instances.clone()),
                    black_box(results.clone()),
                );
                derive_rows(BatchLayout::Grid, merged.rows, &settings)
            })
        });
    }
}

pub fn bench_summarize(c: &mut Criterion) {
    let settings = MetricsSettings::for_layout(BatchLayout::Grid);

    for per_group in [10, 100, 1000] {
        let instances = assets::grid_instances(per_group);
        let results = assets::grid_results(&instances);
        let rows = derive_rows(
            BatchLayout::Grid,
            merge(BatchLayout::Grid, instances, results).rows,
            &settings,
        );

        let id = format!("summarize_by_nodes_{}", rows.len());
        c.bench_function(&id, |b| b.iter(|| summarize_by_nodes(black_box(&rows))));
    }
}
