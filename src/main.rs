// src/main.rs
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use validation_engine::cli::{execute, failure, open_input, EXIT_VALID};
use validation_engine::common::config::apply_cli_override;
use validation_engine::common::CliConfig;

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = apply_cli_override(CliConfig::from_env());
    info!(pretty = config.pretty, input = ?config.input, "Validating input");

    let (code, output) = match open_input(&config) {
        Ok(reader) => execute(reader, config.pretty)?,
        Err(err) => failure(err, config.pretty)?,
    };

    println!("{}", output);

    if code != EXIT_VALID {
        warn!(exit_code = code, "Input rejected");
        std::process::exit(code);
    }

    Ok(())
}
