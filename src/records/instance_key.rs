use super::{InstanceRecord, SolverRecord};
use crate::api::enums::BatchLayout;

/// Composite key joining an instance list against solver results.
///
/// Only the columns the layout joins on are populated; the others stay empty
/// so that two keys built for the same layout compare by exactly those columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct InstanceKey {
    pub graph_type: String,
    pub group: String,
    pub instance: String,
    pub nodes: Option<u32>,
}

impl InstanceKey {
    /// Builds the key of a line in the instance list.
    pub fn of_instance(layout: BatchLayout, record: &InstanceRecord) -> Self {
        match layout {
            BatchLayout::Santos => Self {
                instance: record.instance.clone(),
                ..Default::default()
            },
            BatchLayout::Grid => Self {
                graph_type: record.graph_type.clone(),
                group: record.group.clone(),
                instance: record.instance.clone(),
                nodes: record.nodes,
            },
        }
    }

    /// Builds the key of a solver result row.
    pub fn of_result(layout: BatchLayout, record: &SolverRecord) -> Self {
        match layout {
            BatchLayout::Santos => Self {
                instance: record.instance.clone(),
                ..Default::default()
            },
            BatchLayout::Grid => Self {
                graph_type: record.graph_type.clone(),
                group: record.group.clone(),
                instance: record.instance.clone(),
                nodes: record.nodes,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(graph_type: &str, group: &str, instance: &str, nodes: u32) -> SolverRecord {
        SolverRecord {
            graph_type: graph_type.to_string(),
            group: group.to_string(),
            instance: instance.to_string(),
            nodes: Some(nodes),
            ..Default::default()
        }
    }

    #[test]
    fn santos_keys_ignore_identity_columns() {
        let instance = InstanceRecord::named("s_10_1.txt");
        let row = result("DUMMY", "some/path", "s_10_1.txt", 10);
        assert_eq!(
            InstanceKey::of_instance(BatchLayout::Santos, &instance),
            InstanceKey::of_result(BatchLayout::Santos, &row)
        );
    }

    #[test]
    fn grid_keys_compare_all_columns() {
        let instance = InstanceRecord::grid("GRID", "corr", "100.1.gr");
        let matching = result("GRID", "corr", "100.1.gr", 100);
        let other_group = result("GRID", "anti", "100.1.gr", 100);
        let other_nodes = result("GRID", "corr", "100.1.gr", 101);

        let key = InstanceKey::of_instance(BatchLayout::Grid, &instance);
        assert_eq!(key, InstanceKey::of_result(BatchLayout::Grid, &matching));
        assert_ne!(key, InstanceKey::of_result(BatchLayout::Grid, &other_group));
        assert_ne!(key, InstanceKey::of_result(BatchLayout::Grid, &other_nodes));
    }
}
