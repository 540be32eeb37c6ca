use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter for a given level when `RUST_LOG` is unset
fn default_filter(level: &str) -> String {
    format!("rbe_server={level},rbe_core=warn,tower_http=info")
}

/// Initialize logging to stdout.
///
/// The `RUST_LOG` environment variable overrides `level`.
pub fn init_logging(level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .try_init()?;

    tracing::info!("RBE sandbox server logging initialized (level={level})");
    Ok(())
}
