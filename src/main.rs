use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use jsoncheck::config::{DEFAULT_PATH, FORMAT_ENV, Format, PATH_ENV, Settings};

mod commands;

/// Exit status used when the report itself cannot be produced.
const EXIT_OPERATIONAL: u8 = 2;

#[derive(Parser)]
#[command(
    name = "jsoncheck",
    about = "Check that a file contains a well-formed JSON document",
    version,
    author,
    long_about = None
)]
struct Cli {
    /// Path to the JSON document to check
    #[arg(env = PATH_ENV, default_value = DEFAULT_PATH)]
    path: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, env = FORMAT_ENV, default_value_t = Format::Text)]
    format: Format,

    /// Also render parse failures as an annotated source snippet on stderr
    #[arg(long)]
    fancy: bool,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    let settings = Settings {
        path: cli.path,
        format: cli.format,
        fancy: cli.fancy,
    };

    match commands::validate_command(&settings) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_OPERATIONAL)
        }
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("jsoncheck=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("jsoncheck=info"), // -v: info messages
        _ => EnvFilter::new("jsoncheck=debug"), // -vv or more: full debug
    };

    // stdout carries the report, so diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
