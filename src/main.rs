use std::fs;
use std::path::Path;
use std::str::FromStr;

use clap::Parser;

use resume_check::analyzer::{Analyzer, Faculty};
use resume_check::cli::{AnalyzeArgs, Cli, ColorChoice, Commands, InitArgs};
use resume_check::config::{default_config_template, Config};
use resume_check::extractor::TextExtractor;
use resume_check::output::{
    ColorMode, JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use resume_check::report::Report;
use resume_check::{score, ResumeCheckError};
use resume_check::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS};

/// Extracted text below this length is rejected before the engine runs.
/// Distinct from the engine's own short-text guard, which still applies to
/// anything that passes this gate.
const MIN_EXTRACTED_CHARS: usize = 50;

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Analyze(args) => run_analyze(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_analyze(args: &AnalyzeArgs, cli: &Cli) -> i32 {
    match run_analyze_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_analyze_impl(args: &AnalyzeArgs, cli: &Cli) -> resume_check::Result<i32> {
    // 1. Load configuration
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Resolve the declared faculty (unrecognized values mean "none")
    let faculty = resolve_faculty(args.faculty.as_deref(), cli.quiet);

    // 3. Extract text from the resume file
    if !cli.quiet {
        eprintln!("Parsing resume: {}", args.file.display());
    }
    let extractor = TextExtractor::new();
    let text = extractor.extract(&args.file)?;

    if text.trim().chars().count() < MIN_EXTRACTED_CHARS {
        return Err(ResumeCheckError::Extraction {
            path: args.file.clone(),
            reason: "could not extract meaningful content from resume file".to_string(),
        });
    }

    // 4. Run the analysis engine and scoring
    let analyzer = Analyzer::new(&config);
    let findings = analyzer.analyze(&text, faculty);
    let adjustment = score::faculty_adjustment(&text, faculty);
    let report = Report::build(&text, findings, adjustment);

    // 5. Format and write the report
    let color_mode = color_choice_to_mode(cli.color);
    let rendered = format_output(args.format, &report, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &rendered, cli.quiet)?;

    // 6. Determine exit code
    let below_min_score = args
        .min_score
        .is_some_and(|min| report.statistics.score < min);

    if report.has_critical() || below_min_score {
        Ok(EXIT_ISSUES_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> resume_check::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    Config::load(config_path)
}

fn resolve_faculty(raw: Option<&str>, quiet: bool) -> Option<Faculty> {
    let raw = raw?;
    match Faculty::from_str(raw) {
        Ok(faculty) => Some(faculty),
        Err(_) => {
            if !quiet {
                eprintln!(
                    "Warning: unrecognized faculty \"{raw}\" ignored \
                     (expected sciences, engineering, arts, or business)"
                );
            }
            None
        }
    }
}

fn format_output(
    format: OutputFormat,
    report: &Report,
    color_mode: ColorMode,
    verbose: u8,
) -> resume_check::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
        OutputFormat::Markdown => MarkdownFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> resume_check::Result<()> {
    match output_path {
        Some(path) => {
            fs::write(path, content)?;
            if !quiet {
                eprintln!("Report saved to: {}", path.display());
            }
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> resume_check::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ResumeCheckError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, default_config_template())?;
    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
