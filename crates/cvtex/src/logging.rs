//! Diagnostic logging
//!
//! Stage-level events go through `tracing` to stderr. The filter comes from
//! `CVTEX_LOG` (e.g. `CVTEX_LOG=debug`) and defaults to `warn`.

use cvtex_core::config::consts::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
