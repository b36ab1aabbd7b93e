use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// File format of the rendered scatter plots.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotFormat {
    /// Scalable vector graphics, suitable for inclusion in papers.
    #[default]
    Svg,

    /// 1200x800 PNG bitmap.
    Png,
}

impl PlotFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            PlotFormat::Svg => "svg",
            PlotFormat::Png => "png",
        }
    }
}

impl fmt::Display for PlotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for PlotFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(PlotFormat::Svg),
            "png" => Ok(PlotFormat::Png),
            other => Err(format!(
                "unknown plot format '{}' (expected 'svg' or 'png')",
                other
            )),
        }
    }
}
