/// One line of an instance list (`*.inst`).
///
/// Santos lists only carry the instance name, so `graph_type` and `group`
/// stay empty and `nodes` is only known once results are attached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstanceRecord {
    /// Graph family (e.g. `GRID`). Empty for Santos lists.
    pub graph_type: String,
    /// Generator group the instance belongs to. Empty for Santos lists.
    pub group: String,
    /// File name of the instance.
    pub instance: String,
    /// Node count encoded in the instance name, where the layout provides one.
    pub nodes: Option<u32>,
}

impl InstanceRecord {
    /// Creates a record for a Santos-style list, which only knows the instance name.
    pub fn named(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
            ..Default::default()
        }
    }

    /// Creates a record for a grid-style list.
    /// The node count is taken from the instance name, see [`nodes_from_instance_name`].
    pub fn grid(
        graph_type: impl Into<String>,
        group: impl Into<String>,
        instance: impl Into<String>,
    ) -> Self {
        let instance = instance.into();
        let nodes = nodes_from_instance_name(&instance);
        Self {
            graph_type: graph_type.into(),
            group: group.into(),
            instance,
            nodes,
        }
    }
}

/// Extracts the node count from a grid instance name.
///
/// Grid generators name their files `<nodes>.<seed>...`, e.g. `100.3.gr` or `2500.gr`.
pub fn nodes_from_instance_name(instance: &str) -> Option<u32> {
    let file_name = instance.rsplit(['/', '\\']).next().unwrap_or(instance);
    let prefix = file_name.split('.').next()?;
    prefix.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("100.3.gr", Some(100))]
    #[case("2500.gr", Some(2500))]
    #[case("49", Some(49))]
    #[case("grids/400.1.gr", Some(400))]
    #[case("grid-100.gr", None)]
    #[case(".gr", None)]
    #[case("", None)]
    fn extracts_node_count(#[case] name: &str, #[case] expected: Option<u32>) {
        assert_eq!(nodes_from_instance_name(name), expected);
    }

    #[test]
    fn grid_record_derives_nodes() {
        let record = InstanceRecord::grid("GRID", "corr", "225.7.gr");
        assert_eq!(record.nodes, Some(225));
        assert_eq!(record.group, "corr");
    }

    #[test]
    fn named_record_has_no_nodes() {
        let record = InstanceRecord::named("santos_50_1.txt");
        assert_eq!(record.nodes, None);
        assert!(record.graph_type.is_empty());
    }
}
