//! `QSim` server binary: parses the CLI, initializes tracing, and runs the
//! network module until ctrl-c.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use qsim_server::{NetworkConfig, NetworkModule};

#[derive(Debug, Parser)]
#[command(name = "qsim-server", version, about = "Mock quantum platform API server")]
struct Cli {
    /// Bind address.
    #[arg(long, env = "QSIM_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on (0 picks an OS-assigned port).
    #[arg(long, env = "QSIM_PORT", default_value_t = 8080)]
    port: u16,

    /// Comma-separated list of allowed CORS origins ("*" allows any).
    #[arg(long, env = "QSIM_CORS_ORIGINS", default_value = "*", value_delimiter = ',')]
    cors_origins: Vec<String>,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "qsim_server=debug").
    #[arg(long, env = "QSIM_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins when present; the flag supplies the fallback filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let config = NetworkConfig {
        host: cli.host,
        port: cli.port,
        cors_origins: cli.cors_origins,
        ..NetworkConfig::default()
    };

    let mut module = NetworkModule::new(config);
    let port = module.start().await?;
    info!("qsim-server listening on port {port}");

    module
        .serve(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("ctrl-c received, shutting down");
        })
        .await
}
