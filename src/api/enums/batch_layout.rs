use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Describes how a benchmark batch identifies its instances.
///
/// The solver writes two identity columns before the instance name. What they
/// mean, how instances are joined against results and where the node count of
/// an instance comes from all depend on which generator produced the batch.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchLayout {
    /// Santos et al. instances.
    ///
    /// - Instance list: `INSTANCE`
    /// - Join key: `INSTANCE`
    /// - Node count: `NODES` of the PRIM result row
    Santos,

    /// Correlated grid instances.
    ///
    /// - Instance list: `GRAPH_TYPE;GROUP;INSTANCE`
    /// - Join key: `GRAPH_TYPE, GROUP, INSTANCE, NODES`
    /// - Node count: integer prefix of the instance name (`100.3.gr` has 100 nodes)
    Grid,
}

impl BatchLayout {
    /// Number of `;` separated columns in an instance list of this layout.
    pub fn instance_columns(self) -> usize {
        match self {
            BatchLayout::Santos => 1,
            BatchLayout::Grid => 3,
        }
    }

    /// Whether data corrections are applied unless the batch says otherwise.
    pub fn corrects_by_default(self) -> bool {
        match self {
            BatchLayout::Santos => false,
            BatchLayout::Grid => true,
        }
    }
}

impl fmt::Display for BatchLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchLayout::Santos => f.write_str("santos"),
            BatchLayout::Grid => f.write_str("grid"),
        }
    }
}

impl FromStr for BatchLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "santos" => Ok(BatchLayout::Santos),
            "grid" => Ok(BatchLayout::Grid),
            other => Err(format!(
                "unknown batch layout '{}' (expected 'santos' or 'grid')",
                other
            )),
        }
    }
}
