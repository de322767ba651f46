//! ndsbanner binary entry point.
//!
//! This is a thin wrapper around the ndsbanner-tool library that:
//! 1. Parses command-line arguments
//! 2. Initializes logging
//! 3. Validates configuration
//! 4. Runs the selected command

use anyhow::Result;
use ndsbanner_tool::ToolConfig;

fn main() -> Result<()> {
    let config = ToolConfig::from_args();

    // Logs go to stderr so they never mix with the per-file summary
    let default_filter = if config.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Configuration loaded: {:?}", config);

    config.validate()?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    ndsbanner_tool::run(&config, stdin.lock(), &mut stdout)?;

    Ok(())
}
