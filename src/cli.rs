use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gitgrade",
    version,
    about = "Repository quality assessment: scores, grade, roadmap and recruiter view"
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
    /// Score a repository and print the full report
    Analyze(AnalyzeCommand),
    /// Scan a checkout and print its snapshot as JSON
    Snapshot(SnapshotCommand),
    /// Print the improvement roadmap and its projected effect
    Roadmap(RoadmapCommand),
}

#[derive(Args)]
pub struct SourceArgs {
    /// Git checkout, or a snapshot JSON file with --snapshot
    pub path: PathBuf,

    /// Treat PATH as a previously saved snapshot JSON file
    #[arg(long)]
    pub snapshot: bool,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Exit with status 2 when the percentage is below this value
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub fail_under: Option<u32>,

    /// Never call the narrative backend
    #[arg(long)]
    pub offline: bool,
}

#[derive(Args)]
pub struct SnapshotCommand {
    pub path: PathBuf,
}

#[derive(Args)]
pub struct RoadmapCommand {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
