//! Logging setup for personactl.

use tracing_subscriber::EnvFilter;

/// Initialize tracing. Verbosity comes from `PERSONA_LOG` (standard
/// env-filter syntax); default is warnings only so interactive sessions
/// stay clean. Diagnostics go to stderr to keep stdout parseable.
pub fn init() {
    let filter = EnvFilter::try_from_env("PERSONA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
