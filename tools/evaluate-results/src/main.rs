use argh::FromArgs;
use mo_mst_results::prelude::*;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

/// Evaluates MO-MST benchmark batches: LaTeX table rows, merged tables and scatter plots
#[derive(FromArgs, Debug)]
pub struct Args {
    /// JSON file listing the batches to evaluate
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// layout of a single batch: 'santos' or 'grid'
    #[argh(option, short = 'l')]
    layout: Option<BatchLayout>,

    /// instance list of a single batch
    #[argh(option, short = 'i')]
    instances: Option<PathBuf>,

    /// IG-MDA result file
    #[argh(option)]
    prim: Option<PathBuf>,

    /// BN result file
    #[argh(option)]
    bn: Option<PathBuf>,

    /// combined solver log holding both solvers' rows
    #[argh(option)]
    combined: Option<PathBuf>,

    /// name used for output files and plot titles (default: the layout name)
    #[argh(option, short = 'n')]
    name: Option<String>,

    /// directory the outputs are written to (default: .)
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,

    /// runs slower than this many seconds count as unsolved (default: 7200)
    #[argh(option, short = 't', default = "DEFAULT_TIME_LIMIT")]
    time_limit: f64,

    /// apply zero value corrections: 'true' or 'false' (default: depends on layout)
    #[argh(option)]
    corrections: Option<bool>,

    /// plot file format: 'svg' or 'png' (default: svg)
    #[argh(option, short = 'f', default = "PlotFormat::default()")]
    format: PlotFormat,

    /// skip rendering the scatter plots
    #[argh(switch)]
    no_plots: bool,

    /// log level: error, warn, info, debug or trace (default: info)
    #[argh(option, default = "String::from(\"info\")")]
    log_level: String,
}

impl Args {
    /// Batches to evaluate, from the config file or the single batch flags.
    fn batches(&self) -> Result<Vec<BatchConfig>, Box<dyn std::error::Error>> {
        if let Some(path) = &self.config {
            info!("Loading configuration from {}", path.display());
            return Ok(EvaluationConfig::load(path)?.batches);
        }

        let (Some(layout), Some(instances)) = (self.layout, &self.instances) else {
            return Err("Either --config or both --layout and --instances are required".into());
        };

        let name = self.name.clone().unwrap_or_else(|| match layout {
            BatchLayout::Santos => "Santos".to_string(),
            BatchLayout::Grid => "Grid".to_string(),
        });
        let mut batch = BatchConfig::new(name, layout, instances.clone());
        batch.prim_results = self.prim.clone();
        batch.bn_results = self.bn.clone();
        batch.combined_results = self.combined.clone();
        batch.output_dir = self.output_dir.clone();
        batch.time_limit = self.time_limit;
        batch.corrections = self.corrections;
        batch.plot_format = self.format;
        batch.plots = !self.no_plots;
        batch.validate()?;

        Ok(vec![batch])
    }
}

fn print_report(report: &BatchReport) {
    println!("{} ({})", report.name, report.layout);
    println!("{}", "=".repeat(report.name.len() + report.layout.to_string().len() + 3));

    for row in &report.latex_rows {
        println!("{}", row);
    }

    println!();
    println!("BN mean wall times:");
    println!("{}", mean_wall_time_row(&report.summaries, Algorithm::Bn));
    for algorithm in Algorithm::TABLE_ORDER {
        println!("{} its/s:", algorithm.label());
        println!("{}", its_per_second_row(&report.summaries, algorithm));
    }

    if report.merge_stats.duplicates > 0 || report.merge_stats.unmatched > 0 {
        println!(
            "Ignored {} duplicate and {} unmatched result rows",
            report.merge_stats.duplicates, report.merge_stats.unmatched
        );
    }

    println!("Written:");
    for path in &report.written {
        println!("  {}", path.display());
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();

    let log_level_filter = args
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(log_level_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let batches = args.batches()?;
    let mut failed = 0usize;

    for batch in &batches {
        match run_batch(batch) {
            Ok(report) => print_report(&report),
            Err(e) => {
                error!(batch = %batch.name, "Failed to evaluate batch: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} batches failed", failed, batches.len()).into());
    }

    Ok(())
}
