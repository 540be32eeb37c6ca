use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr so stdout stays clean for reports.
///
/// `RUST_LOG` overrides `level` when set.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let default_filter = format!("rbe={level},rbe_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::debug!("RBE logging initialized (level={level})");
    Ok(())
}
