use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use data_transform::ServiceConfig;

#[derive(Parser)]
#[command(
    name = "data-transform",
    version,
    about = "VividSuite Data Transform demo service"
)]
struct Cli {
    /// Address to listen on. Overrides BIND_ADDR.
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Log the resolved configuration and exit without binding.
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env()
        .context("invalid service configuration")?
        .with_bind_override(cli.bind);

    tracing::info!(
        origins = ?config.allowed_origins,
        netlify_wildcard = config.allow_netlify_wildcard,
        pattern = ?config.origin_pattern.as_ref().map(|p| p.as_str()),
        bind = %config.bind_addr,
        "configuration loaded"
    );
    if cli.print_config {
        return Ok(());
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %listener.local_addr()?, "data-transform listening");

    data_transform::serve(listener, &config, data_transform::shutdown_signal())
        .await
        .context("server terminated with an error")?;

    tracing::info!("data-transform stopped");
    Ok(())
}
