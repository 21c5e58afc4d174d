use clap::Parser;
use criticality::config::{AppConfig, AppEnvironment};
use criticality::error::AppError;
use criticality::pipeline::{
    open_input, open_output, result_column_name, OutputOptions, ScoringPipeline,
};
use criticality::scoring::{AlgorithmConfig, AlgorithmRegistry};
use criticality::telemetry;
use std::path::PathBuf;
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(
    name = "scorer",
    about = "Scores collected signals for every record in IN_CSV and writes them ranked to OUT_CSV",
    version
)]
struct Cli {
    /// Algorithm config (YAML, or JSON with a .json extension)
    #[arg(long)]
    config: PathBuf,
    /// Name of the output score column (defaults to <config stem>_score)
    #[arg(long)]
    column: Option<String>,
    /// Overwrite OUT_CSV if it already exists
    #[arg(long)]
    force: bool,
    /// Append to OUT_CSV if it already exists
    #[arg(long)]
    append: bool,
    /// Log level or filter directive, overriding SCORER_LOG_LEVEL and RUST_LOG
    #[arg(long = "log")]
    log_level: Option<String>,
    /// Logging environment (development, test, production)
    #[arg(long, value_parser = parse_environment)]
    log_env: Option<AppEnvironment>,
    /// Input CSV file, or - for stdin
    in_csv: PathBuf,
    /// Output CSV file, or - for stdout
    out_csv: PathBuf,
}

fn parse_environment(raw: &str) -> Result<AppEnvironment, String> {
    AppEnvironment::parse(raw).map_err(|err| err.to_string())
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    let force_level = cli.log_level.is_some();
    config.override_with(cli.log_level.clone(), cli.log_env);
    telemetry::init(&config.telemetry, force_level)?;

    score(cli).inspect_err(|err| error!(error = %err, "scoring run failed"))
}

fn score(cli: Cli) -> Result<(), AppError> {
    // Config problems must surface before any input is touched.
    let algorithm_config = AlgorithmConfig::from_path(&cli.config)?;
    let algorithm = AlgorithmRegistry::with_defaults().build(&algorithm_config)?;
    info!(
        algorithm = %algorithm_config.name,
        fields = algorithm_config.fields.len(),
        filename = %cli.config.display(),
        "loaded algorithm config"
    );
    for (field, spec) in &algorithm_config.fields {
        debug!(
            field = %field,
            weight = spec.weight,
            lower = spec.lower,
            upper = spec.upper,
            distribution = spec.distribution.label(),
            smaller_is_better = spec.smaller_is_better,
            "configured field"
        );
    }

    let column = result_column_name(cli.column.as_deref(), &cli.config);
    let pipeline = ScoringPipeline::new(algorithm, column);

    let input = open_input(&cli.in_csv)?;
    let output = open_output(
        &cli.out_csv,
        OutputOptions {
            force: cli.force,
            append: cli.append,
        },
    )?;

    pipeline.run(input, output)?;
    Ok(())
}
