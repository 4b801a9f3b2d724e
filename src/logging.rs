use crate::error::CatalogError;

/// Install the structured JSON subscriber for the host process.
/// Returns an error if a global subscriber has already been set.
pub fn try_init_logging() -> Result<(), CatalogError> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .json()
        );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CatalogError::new(
            format!("Failed to set global tracing subscriber: {}", e),
            "logging"
        ).with_source("tracing"))?;

    tracing::info!("Structured logging initialized");
    Ok(())
}

/// Initialize logging once at startup; a second call only logs a warning.
pub fn init_logging() {
    if let Err(e) = try_init_logging() {
        tracing::warn!(error = %e, "Logging already initialized");
    }
}
