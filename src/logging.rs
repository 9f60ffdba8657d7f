use tracing_subscriber::EnvFilter;

const CRATE_TARGET: &str = "zmanim_core";

/// Initialize tracing based on a verbosity level.
///
/// Mapping:
/// - 0 -> warn
/// - 1 -> info
/// - 2 -> debug
/// - 3+ -> trace
///
/// `RUST_LOG` overrides the level if set. Calling this twice is harmless;
/// the second subscriber is ignored.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{CRATE_TARGET}={level}")));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
