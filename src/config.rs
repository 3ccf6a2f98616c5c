// ⚙️ Configuration + logging setup for the console binary
//
// Settings come from command-line flags, with an environment fallback for the
// log level. `RUST_LOG`, when set, overrides the configured level.

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// In-memory client registry console
#[derive(Debug, Clone, Parser)]
#[command(name = "client-registry", version)]
pub struct Config {
    /// Run the scripted demo session instead of the interactive shell
    #[arg(long)]
    pub demo: bool,

    /// Log level for registry events (error, warn, info, debug, trace, off)
    #[arg(long, env = "CLIENT_REGISTRY_LOG", default_value = "warn")]
    pub log_level: LevelFilter,

    /// Do not print the banner or the prompt
    #[arg(long, short)]
    pub quiet: bool,
}

/// Install the global fmt subscriber (stderr, so stdout stays clean for output)
pub fn init_logging(level: LevelFilter) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install logger: {err}"))
}
