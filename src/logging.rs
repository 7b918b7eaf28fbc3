use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize console logging.
///
/// `RUST_LOG` takes precedence; otherwise the verbosity flag selects
/// between `info` and `debug` for this crate.
pub fn init(verbose: bool) -> Result<()> {
    let default_level = if verbose { "demoscrape=debug" } else { "demoscrape=info" };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}
