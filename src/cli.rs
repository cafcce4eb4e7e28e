use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "codehealth",
    version,
    about = "Code health scoring: per-file health, review priority and project quality"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a JSON metrics bundle
    Score(ScoreCommand),
    /// Validate the layered configuration of a repository
    CheckConfig(CheckConfigCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Mode {
    Legacy,
    Strict,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Metrics bundle produced by the metrics collaborator
    pub input: PathBuf,
    /// Directory holding codehealth.toml (defaults to the current directory)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
    /// Override the configured duplication mode for this run
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Number of ranked files shown in the markdown report
    #[arg(long, default_value_t = 10)]
    pub top: usize,
    /// Exit with code 1 when the overall score is below this value (0-100)
    #[arg(long, value_parser = parse_score_threshold)]
    pub fail_under: Option<f64>,
}

#[derive(Args)]
pub struct CheckConfigCommand {
    pub path: PathBuf,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

fn parse_score_threshold(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(format!("`{raw}` must be a score between 0 and 100"));
    }
    Ok(value)
}
