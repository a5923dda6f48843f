use anyhow::Result;
use clap::Parser;
use tracing::debug;

use smartbus::cli::{run, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs to stderr, stdout is for command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("smartbus v{}", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(args, &mut out)
}
