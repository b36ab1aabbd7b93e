use core::fmt;

/// Identifies which of the two benchmarked solvers produced a result row.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Algorithm {
    /// Prim-style label setting search (written to result files as `IG-MDA`).
    Prim,

    /// Bazlamaçcı-Hindi style search (written to result files as `MultiBN`).
    Bn,
}

impl Algorithm {
    /// Both algorithms, in the order their columns appear in the LaTeX tables.
    pub const TABLE_ORDER: [Algorithm; 2] = [Algorithm::Bn, Algorithm::Prim];

    /// Name shown in plot legends.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Prim => "IG-MDA",
            Algorithm::Bn => "BN",
        }
    }

    /// Value of the `ALGO` column written by the solver binary.
    pub fn tag(self) -> &'static str {
        match self {
            Algorithm::Prim => "IG-MDA",
            Algorithm::Bn => "MultiBN",
        }
    }

    /// Column suffix used in the merged table (e.g. `WALL_TIME_PRIM`).
    pub fn suffix(self) -> &'static str {
        match self {
            Algorithm::Prim => "PRIM",
            Algorithm::Bn => "BN",
        }
    }

    /// Resolves the `ALGO` column of a result row.
    /// Returns [`None`] for solvers this tool does not evaluate.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "IG-MDA" | "IGMDA" | "MultiPrim" => Some(Algorithm::Prim),
            "MultiBN" | "BN" => Some(Algorithm::Bn),
            _ => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
