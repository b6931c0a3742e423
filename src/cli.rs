use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "resume-check")]
#[command(author, version, about = "Resume checker - heuristic feedback and scoring for resumes")]
#[command(long_about = "Analyze a resume file (PDF, DOCX, TXT, or Markdown) against content,\n\
    formatting, and keyword heuristics and produce a scored feedback report.\n\n\
    Exit codes:\n  \
    0 - Analysis completed without critical issues\n  \
    1 - Critical issues found (or score below --min-score)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a resume file and print a feedback report
    Analyze(AnalyzeArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Path to the resume file (PDF, DOCX, DOC, TXT, or MD)
    pub file: PathBuf,

    /// Declared field of study: sciences, engineering, arts, or business
    /// (case-insensitive). Unrecognized values are ignored.
    #[arg(short = 'F', long)]
    pub faculty: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write report to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail (exit code 1) when the score falls below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".resume-check.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
