//! Logging configuration using tracing

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "FOLIO_LOG";

const DEFAULT_FILTER: &str = "folio=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to stderr. The level is controlled by `FOLIO_LOG`.
///
/// # Examples
/// ```bash
/// FOLIO_LOG=debug folio-gui
/// FOLIO_LOG=folio=trace folio-gui content.json
/// ```
pub fn init() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!("folio starting");
    Ok(())
}
