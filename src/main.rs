use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use keyedlit::{AnalysisResult, Config};

/// Check struct literals for timeout and keep-alive fields left to a
/// `..base` default.
#[derive(Parser, Debug)]
#[command(name = "keyedlit", version, about)]
struct Cli {
    /// Require every exported field to be specified
    #[arg(long)]
    strict: bool,
    /// Output diagnostics as JSON
    #[arg(long)]
    json: bool,
    /// Exit with status 1 when anything is reported
    #[arg(long)]
    deny: bool,
    /// Configuration file (defaults to <crate-path>/keyedlit.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Crate directory containing Cargo.toml
    crate_path: PathBuf,
    /// Only report on these files; all files are still indexed
    changed_files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(result) => report(&result, &cli),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> keyedlit::Result<AnalysisResult> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(&cli.crate_path)?,
    };
    if cli.strict {
        config.strict = true;
    }

    let rules = config.rules();
    let changed_files = (!cli.changed_files.is_empty()).then_some(cli.changed_files.as_slice());
    keyedlit::analyze(&cli.crate_path, changed_files, &rules)
}

fn report(result: &AnalysisResult, cli: &Cli) -> ExitCode {
    if cli.json {
        match serde_json::to_string_pretty(result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: could not serialize diagnostics: {e}");
                return ExitCode::from(2);
            }
        }
    } else {
        for skipped in &result.skipped {
            eprintln!("keyedlit: {skipped}");
        }
        if result.diagnostics.is_empty() {
            println!("keyedlit: no issues found");
        } else {
            for diag in result.sorted() {
                println!("{diag}");
                println!();
            }
            println!("keyedlit: {} unspecified field(s)", result.diagnostics.len());
        }
    }

    if cli.deny && result.has_findings() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
