// src/logging.rs
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the stderr subscriber.
///
/// `RUST_LOG` always applies when set; otherwise `--verbose` selects DEBUG
/// and the default is WARN.
pub fn init(verbose: bool) {
    let fallback = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(fallback.into())
        .from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
