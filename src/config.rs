//! Batch configuration
//!
//! A configuration file is a JSON document listing the batches to evaluate:
//!
//! ```json
//! {
//!     "batches": [
//!         {
//!             "name": "Grid",
//!             "layout": "grid",
//!             "instances": "instances/grid.inst",
//!             "combined_results": "results/grid/logs.txt.zst",
//!             "plot_name": "Grid",
//!             "output_dir": "out"
//!         }
//!     ]
//! }
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use crate::analysis::{MetricsSettings, DEFAULT_TIME_LIMIT};
use crate::api::enums::{BatchLayout, PlotFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Batch '{0}' needs either both 'prim_results' and 'bn_results' or 'combined_results'")]
    MissingResults(String),

    #[error("Batch '{0}' sets 'combined_results' together with per-solver result files")]
    AmbiguousResults(String),

    #[error("Batch '{name}' has an invalid time limit: {time_limit}")]
    InvalidTimeLimit { name: String, time_limit: f64 },

    #[error("A batch has an empty name")]
    EmptyName,

    #[error("Config file {} contains no batches", .0.display())]
    NoBatches(PathBuf),
}

type Result<T> = core::result::Result<T, ConfigError>;

/// Where the solver rows of a batch come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSources {
    /// One file per solver.
    Separate { prim: PathBuf, bn: PathBuf },

    /// A single log containing the rows of both solvers.
    Combined(PathBuf),
}

/// Settings of one evaluated batch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchConfig {
    /// Display name, used in logs.
    pub name: String,

    pub layout: BatchLayout,

    /// Instance list of the batch.
    pub instances: PathBuf,

    #[serde(default)]
    pub prim_results: Option<PathBuf>,

    #[serde(default)]
    pub bn_results: Option<PathBuf>,

    #[serde(default)]
    pub combined_results: Option<PathBuf>,

    /// Prefix of every output file and the plot titles. Defaults to `name`.
    #[serde(default)]
    pub plot_name: Option<String>,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Runs slower than this many seconds count as unsolved.
    #[serde(default = "default_time_limit")]
    pub time_limit: f64,

    /// Overrides the layout's default for the data corrections.
    #[serde(default)]
    pub corrections: Option<bool>,

    #[serde(default)]
    pub plot_format: PlotFormat,

    /// Set to `false` to skip rendering the plots.
    #[serde(default = "default_plots")]
    pub plots: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_time_limit() -> f64 {
    DEFAULT_TIME_LIMIT
}

fn default_plots() -> bool {
    true
}

impl BatchConfig {
    /// Creates a batch with default settings and no result files.
    pub fn new(name: impl Into<String>, layout: BatchLayout, instances: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            layout,
            instances: instances.into(),
            prim_results: None,
            bn_results: None,
            combined_results: None,
            plot_name: None,
            output_dir: default_output_dir(),
            time_limit: default_time_limit(),
            corrections: None,
            plot_format: PlotFormat::default(),
            plots: default_plots(),
        }
    }

    /// Name used for output files and plot titles.
    pub fn plot_name(&self) -> &str {
        self.plot_name.as_deref().unwrap_or(&self.name)
    }

    /// Whether the data corrections apply to this batch.
    pub fn corrections(&self) -> bool {
        self.corrections
            .unwrap_or_else(|| self.layout.corrects_by_default())
    }

    /// Classification settings of this batch.
    pub fn metrics_settings(&self) -> MetricsSettings {
        MetricsSettings {
            time_limit: self.time_limit,
            corrections: self.corrections(),
        }
    }

    /// Result files of this batch.
    pub fn sources(&self) -> Result<ResultSources> {
        match (&self.prim_results, &self.bn_results, &self.combined_results) {
            (Some(prim), Some(bn), None) => Ok(ResultSources::Separate {
                prim: prim.clone(),
                bn: bn.clone(),
            }),
            (None, None, Some(combined)) => Ok(ResultSources::Combined(combined.clone())),
            (None, None, None) | (Some(_), None, None) | (None, Some(_), None) => {
                Err(ConfigError::MissingResults(self.name.clone()))
            }
            (_, _, Some(_)) => Err(ConfigError::AmbiguousResults(self.name.clone())),
        }
    }

    /// Checks the batch for settings that cannot be evaluated.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if !self.time_limit.is_finite() || self.time_limit <= 0.0 {
            return Err(ConfigError::InvalidTimeLimit {
                name: self.name.clone(),
                time_limit: self.time_limit,
            });
        }
        self.sources()?;
        Ok(())
    }

    /// Resolves every relative path against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };

        resolve(&mut self.instances);
        resolve(&mut self.output_dir);
        for path in [
            &mut self.prim_results,
            &mut self.bn_results,
            &mut self.combined_results,
        ]
        .into_iter()
        .flatten()
        {
            resolve(path);
        }
    }
}

/// A configuration file: the list of batches to evaluate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EvaluationConfig {
    pub batches: Vec<BatchConfig>,
}

impl EvaluationConfig {
    /// Loads and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&contents, base).map_err(|error| match error {
            ConfigError::NoBatches(_) => ConfigError::NoBatches(path.to_path_buf()),
            ConfigError::JsonParse { source, .. } => ConfigError::JsonParse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parses a configuration document, resolving relative paths against `base`.
    pub fn parse(contents: &str, base: &Path) -> Result<Self> {
        let mut config: EvaluationConfig =
            serde_json::from_str(contents).map_err(|source| ConfigError::JsonParse {
                path: PathBuf::new(),
                source,
            })?;

        if config.batches.is_empty() {
            return Err(ConfigError::NoBatches(PathBuf::new()));
        }

        for batch in &mut config.batches {
            batch.validate()?;
            batch.resolve_paths(base);
        }

        Ok(config)
    }
}
