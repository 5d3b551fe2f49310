use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::info;

use kira_segeval::input::DatasetDir;
use kira_segeval::logging::init_logging;
use kira_segeval::model::metrics::{ScoreMetric, ZeroDivisionPolicy};
use kira_segeval::model::profile::{
    DEFAULT_ALPHA, DEFAULT_GT_METHOD, DEFAULT_IMAGE_COUNT, EvalProfile, builtin_methods,
};
use kira_segeval::pipeline::stage5_sweep::{SweepInputs, inspect_image, run_sweep};
use kira_segeval::report::json::{render_inspection_json, render_sweep_json};
use kira_segeval::report::text::{render_inspection_text, render_sweep_text};
use kira_segeval::report::{ReportFormat, SweepReport};

#[derive(Debug, Parser)]
#[command(name = "kira-segeval", version, about)]
struct Cli {
    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Only warnings and errors on stderr.
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score all methods and test every ordered pair.
    Run(RunArgs),
    /// Confusion counts and metrics of one image.
    Inspect(InspectArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Dataset root holding one directory per method.
    #[arg(long)]
    data: PathBuf,
    #[arg(long, default_value = DEFAULT_GT_METHOD)]
    gt: String,
    /// Methods to compare; defaults to the built-in DRIVE catalog.
    #[arg(long, value_delimiter = ',')]
    methods: Vec<String>,
    #[arg(long, default_value_t = DEFAULT_IMAGE_COUNT)]
    count: usize,
    #[arg(long, value_enum, default_value_t = ScoreMetric::F1)]
    metric: ScoreMetric,
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    alpha: f64,
    #[arg(long, value_enum, default_value_t = ZeroDivisionPolicy::Fail)]
    zero_policy: ZeroDivisionPolicy,
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[derive(Debug, Clone, Args)]
struct InspectArgs {
    #[arg(long)]
    data: PathBuf,
    #[arg(long, default_value = DEFAULT_GT_METHOD)]
    gt: String,
    #[arg(long)]
    method: String,
    #[arg(long, default_value_t = 1)]
    index: usize,
    #[arg(long, value_enum, default_value_t = ZeroDivisionPolicy::Fail)]
    zero_policy: ZeroDivisionPolicy,
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Run(args) => run_compare(&args),
        Command::Inspect(args) => run_inspect(&args),
    }
}

fn run_compare(args: &RunArgs) -> Result<(), String> {
    let profile = build_profile(args);
    profile.validate()?;
    let methods = if args.methods.is_empty() {
        builtin_methods()
    } else {
        args.methods.clone()
    };

    info!(
        data = %args.data.display(),
        ground_truth = %args.gt,
        n_methods = methods.len(),
        metric = profile.metric.label(),
        "starting comparison"
    );

    let source = DatasetDir::text(&args.data);
    let output = run_sweep(
        &source,
        &SweepInputs {
            gt_method: &args.gt,
            methods: &methods,
            profile: &profile,
        },
    )
    .map_err(|e| e.to_string())?;

    let report = SweepReport::new(&output, &profile);
    let rendered = match args.format {
        ReportFormat::Text => render_sweep_text(&report),
        ReportFormat::Json => render_sweep_json(&report).map_err(|e| e.to_string())?,
    };
    println!("{rendered}");
    Ok(())
}

fn run_inspect(args: &InspectArgs) -> Result<(), String> {
    let source = DatasetDir::text(&args.data);
    let inspection = inspect_image(&source, &args.gt, &args.method, args.index, args.zero_policy)
        .map_err(|e| e.to_string())?;
    let rendered = match args.format {
        ReportFormat::Text => render_inspection_text(&inspection),
        ReportFormat::Json => render_inspection_json(&inspection).map_err(|e| e.to_string())?,
    };
    println!("{rendered}");
    Ok(())
}

fn build_profile(args: &RunArgs) -> EvalProfile {
    EvalProfile {
        alpha: args.alpha,
        image_count: args.count,
        metric: args.metric,
        zero_policy: args.zero_policy,
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
