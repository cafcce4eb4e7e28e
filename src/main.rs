mod cli;

use clap::Parser;
use codehealth::error::ScoreError;
use codehealth::scoring::metric::DuplicationMode;
use codehealth::{config, input, report, score_project};
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_THRESHOLD: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_or_default(root: &Path) -> Result<config::LoadedConfig, ScoreError> {
    match config::load_config(root)? {
        Some(loaded) => Ok(loaded),
        None => {
            warn!(
                "no {} found in {} (nor a local or global layer), using defaults",
                config::DEFAULT_CONFIG_FILE,
                root.display()
            );
            Ok(config::LoadedConfig {
                config: Default::default(),
                layers: Vec::new(),
            })
        }
    }
}

fn run(cli: cli::Cli) -> Result<i32, ScoreError> {
    match cli.command {
        cli::Commands::Score(cmd) => {
            let root = cmd.config_dir.unwrap_or_else(|| PathBuf::from("."));
            if !root.exists() {
                return Err(ScoreError::PathNotFound(root.display().to_string()));
            }

            let mut profile = load_or_default(&root)?.config.resolve()?;
            if let Some(mode) = cmd.mode {
                profile = profile.with_mode(match mode {
                    cli::Mode::Legacy => DuplicationMode::Legacy,
                    cli::Mode::Strict => DuplicationMode::Strict,
                });
            }

            let bundle = input::read_bundle(&cmd.input)?;
            let score_report = score_project(&bundle.files, &profile)?;

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&score_report, output_format, cmd.top)?;
            println!("{rendered}");

            match cmd.fail_under {
                Some(threshold) if score_report.project.overall_score < threshold => {
                    eprintln!(
                        "overall score {:.2} is below --fail-under {:.2}",
                        score_report.project.overall_score, threshold
                    );
                    Ok(exit_code::BELOW_THRESHOLD)
                }
                _ => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::CheckConfig(cmd) => {
            if !cmd.path.exists() {
                return Err(ScoreError::PathNotFound(cmd.path.display().to_string()));
            }

            let loaded = load_or_default(&cmd.path)?;
            let profile = loaded.config.resolve()?;
            for layer in &loaded.layers {
                println!("layer {}: {}", layer.kind, layer.path.display());
            }
            println!(
                "config ok: duplication mode {}, weighting {} ({:.2}/{:.2}/{:.2})",
                profile.duplication_mode,
                profile.aggregation.scheme,
                profile.aggregation.complexity,
                profile.aggregation.maintainability,
                profile.aggregation.duplication
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_validation() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
