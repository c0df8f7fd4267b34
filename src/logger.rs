use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

/// Install the console subscriber. `RUST_LOG` overrides the default filter.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("stepicons=info"));
        // a subscriber may already be installed (tests); that's fine
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}

pub fn log_line(line: &str) {
    tracing::info!("{}", line);
}

pub fn log_warn(line: &str) {
    tracing::warn!("{}", line);
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    tracing::error!("{}: {}", prefix, e);
}
