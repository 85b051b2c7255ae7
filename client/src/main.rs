mod cli;

use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "repair_client=info,repair_common=info";

/// Filtro de logs:
/// - REPAIR_CLIENT_LOG si está definida (ej: "repair_client=debug")
/// - si no, DEFAULT_LOG_FILTER
fn log_filter() -> String {
    env::var("REPAIR_CLIENT_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

fn main() -> Result<()> {
    // logs a stderr, stdout queda para el JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_filter()))
        .with_writer(std::io::stderr)
        .init();

    cli::run()
}
