//! Command-line generator for format-valid test data.
//!
//! Settings come from flags, `RANDOM_DATA_*` environment variables and
//! configuration files; see `random_data::cli::GeneratorSettings`. Records
//! go to stdout; JSON diagnostics go to stderr, filtered by `RUST_LOG`.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use random_data::cli::{CliError, GeneratorSettings, run};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match load_and_run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn load_and_run() -> Result<(), CliError> {
    let settings = GeneratorSettings::load().map_err(|e| CliError::Config {
        message: e.to_string(),
    })?;
    run(&settings, io::stdout().lock())
}
