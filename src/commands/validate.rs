use anyhow::Result;
use jsoncheck::config::Settings;
use jsoncheck::report;
use jsoncheck::validation::{InvalidJsonDiagnostic, Outcome, validate};
use std::io::Write;
use tracing::{debug, info};

/// Validate the configured document, print the report, and return the exit code.
pub fn validate_command(settings: &Settings) -> Result<u8> {
    info!("Validating JSON document: {}", settings.path.display());

    let outcome = validate(&settings.path);
    debug!("Outcome: exit code {}", outcome.exit_code());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::render(&outcome, &settings.path, settings.format, &mut out)?;
    out.flush()?;

    if settings.fancy
        && let Outcome::Invalid(failure) = &outcome
    {
        let diagnostic = InvalidJsonDiagnostic::new(failure, &settings.path);
        eprintln!("{:?}", miette::Report::new(diagnostic));
    }

    Ok(outcome.exit_code())
}
