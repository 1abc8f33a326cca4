mod assess;
mod cli;
mod config;
mod error;
mod narrative;
mod report;
mod scan;
mod score;
mod timeline;
mod types;

use crate::error::GradeError;
use crate::narrative::backend::{ChatBackend, NarrativeBackend};
use crate::types::config::{FormatSetting, NarrativeConfig};
use crate::types::snapshot::Snapshot;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_THRESHOLD: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn load_source(source: &cli::SourceArgs) -> Result<Snapshot, GradeError> {
    if source.snapshot {
        scan::load_snapshot(&source.path)
    } else {
        scan::collect(&source.path)
    }
}

/// Directory whose `gitgrade.toml` applies to this source.
fn config_root(source: &cli::SourceArgs) -> PathBuf {
    if source.snapshot {
        source
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    } else {
        source.path.clone()
    }
}

fn narrative_backend(config: &NarrativeConfig, offline: bool) -> Option<Box<dyn NarrativeBackend>> {
    if offline || !config.enabled {
        debug!(offline, enabled = config.enabled, "narrative backend disabled");
        return None;
    }
    match ChatBackend::from_config(config) {
        Ok(backend) => Some(Box::new(backend)),
        Err(e) => {
            debug!(error = %e, "narrative backend unavailable");
            None
        }
    }
}

fn run() -> Result<i32, GradeError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let loaded = config::load_config(&config_root(&cmd.source))?;
            let snapshot = load_source(&cmd.source)?;

            let assessor = assess::Assessor::new(narrative_backend(&loaded.narrative, cmd.offline));
            info!(
                repository = %snapshot.repo.full_name,
                backend = assessor.has_backend(),
                "assessing repository"
            );
            let assessment = assessor.assess(&snapshot);

            let output_format = match cmd.format {
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                None => match loaded.report.format {
                    FormatSetting::Json => report::OutputFormat::Json,
                    FormatSetting::Md => report::OutputFormat::Md,
                },
            };
            let rendered = report::render(&assessment, output_format)?;
            println!("{rendered}");

            let percentage = assessment.scoring.percentage;
            match cmd.fail_under.or(loaded.report.fail_under) {
                Some(threshold) if percentage < threshold => {
                    eprintln!("score {percentage} is below the required {threshold}");
                    Ok(exit_code::BELOW_THRESHOLD)
                }
                _ => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Snapshot(cmd) => {
            let snapshot = scan::collect(&cmd.path)?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Roadmap(cmd) => {
            let snapshot = load_source(&cmd.source)?;
            let scoring = score::score_snapshot(&snapshot, chrono::Utc::now());
            let narrative = narrative::fallback::fallback_report(&snapshot, &scoring);
            let projection =
                narrative::simulation::simulate(scoring.percentage, &narrative.roadmap);

            println!(
                "Current score: {}/100 ({})\n",
                scoring.percentage, scoring.grade
            );
            println!(
                "{}",
                report::md::roadmap_markdown(&narrative.roadmap, &projection)
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
