use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    setup_logging();
    search_directory_history::cli::run()
}

/// Log to stderr, `warn` and above unless `RUST_LOG` says otherwise
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
