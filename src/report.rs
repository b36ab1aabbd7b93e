//! Evaluation of a single batch, from input files to written outputs.

use crate::analysis::{
    derive_rows, group_by_nodes, merge, summarize_by_nodes, DerivedRow, MergeStats,
    NodeGroupSummary,
};
use crate::api::enums::BatchLayout;
use crate::config::{BatchConfig, ConfigError, ResultSources};
use crate::output::{
    create_group_plot, format_merged_table, format_summary_table, render_table, save_merged_csv,
    table_rows, ExportError, PlotError,
};
use crate::parsing::{
    load_instances, load_results, split_combined_results, ParsingError, ResultsByAlgorithm,
};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while evaluating a batch
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parsing(#[from] ParsingError),

    #[error(transparent)]
    Plot(#[from] PlotError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

type Result<T> = core::result::Result<T, ReportError>;

/// Everything computed for one batch.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub name: String,
    pub layout: BatchLayout,
    pub merge_stats: MergeStats,
    /// One row per listed instance, in instance list order.
    pub rows: Vec<DerivedRow>,
    /// One summary per node count, ascending.
    pub summaries: Vec<NodeGroupSummary>,
    /// LaTeX row of every summary.
    pub latex_rows: Vec<String>,
    /// Files written to the output directory.
    pub written: Vec<PathBuf>,
}

/// Loads the solver rows of a batch, splitting a combined log if needed.
pub fn load_batch_results(config: &BatchConfig) -> Result<ResultsByAlgorithm> {
    let results = match config.sources()? {
        ResultSources::Separate { prim, bn } => ResultsByAlgorithm {
            prim: load_results(&prim)?,
            bn: load_results(&bn)?,
        },
        ResultSources::Combined(path) => split_combined_results(load_results(&path)?),
    };
    Ok(results)
}

/// Evaluates one batch and writes its outputs.
///
/// The output directory receives:
/// - `<plot name>.tex`: the LaTeX table
/// - `<plot name>-merged.csv`: the derived table
/// - `<plot name>-merged.txt`: the derived and summary tables as text
/// - `<plot name>-<nodes>.<svg|png>`: one scatter plot per node group, if enabled
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport> {
    config.validate()?;
    let layout = config.layout;
    let plot_name = config.plot_name();

    info!(batch = %config.name, %layout, "loading instances and results");
    let instances = load_instances(&config.instances, layout)?;
    let results = load_batch_results(config)?;
    info!(
        instances = instances.len(),
        prim = results.prim.len(),
        bn = results.bn.len(),
        "loaded batch"
    );

    let merged = merge(layout, instances, results);
    let rows = derive_rows(layout, merged.rows, &config.metrics_settings());
    let summaries = summarize_by_nodes(&rows);
    info!(groups = summaries.len(), "aggregated by node count");

    fs::create_dir_all(&config.output_dir).map_err(|source| ReportError::Write {
        path: config.output_dir.clone(),
        source,
    })?;
    let mut written = Vec::new();

    let tex_path = config.output_dir.join(format!("{}.tex", plot_name));
    write_file(&tex_path, &render_table(layout, &summaries))?;
    written.push(tex_path);

    let csv_path = config.output_dir.join(format!("{}-merged.csv", plot_name));
    save_merged_csv(&rows, &csv_path)?;
    written.push(csv_path);

    let text_path = config.output_dir.join(format!("{}-merged.txt", plot_name));
    let text = format!(
        "{}\n\n{}\n",
        format_merged_table(&rows, Some(&format!("{} instances", plot_name))),
        format_summary_table(&summaries, Some(&format!("{} by node count", plot_name)))
    );
    write_file(&text_path, &text)?;
    written.push(text_path);

    if config.plots {
        written.extend(write_plots(&rows, config)?);
    }

    info!(batch = %config.name, files = written.len(), "batch written");
    Ok(BatchReport {
        name: config.name.clone(),
        layout,
        merge_stats: merged.stats,
        latex_rows: table_rows(layout, &summaries),
        rows,
        summaries,
        written,
    })
}

fn write_plots(rows: &[DerivedRow], config: &BatchConfig) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (nodes, group) in group_by_nodes(rows) {
        let plot = create_group_plot(
            &group,
            nodes,
            config.plot_name(),
            &config.output_dir,
            config.plot_format,
        )?;
        match plot {
            Some(path) => written.push(path),
            None => warn!(nodes, "no plottable instance in group, skipping plot"),
        }
    }
    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
