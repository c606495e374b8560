//! Roster server - HTTP API for the Mergington activity rosters.

mod error;
mod routes;
mod sse;
mod state;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use roster::core::registry::ActivityRegistry;
use roster::io::config::{RosterConfig, ServerConfig, load_config};
use tracing::info;

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Serve and update extracurricular activity rosters")]
struct Args {
    /// Path to the TOML config (server settings and activity catalog)
    #[arg(long, default_value = "roster.toml")]
    config: PathBuf,

    /// Address to bind the server to (overrides config)
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Directory served under /static (overrides config)
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

impl Args {
    fn apply_overrides(&self, mut cfg: RosterConfig) -> anyhow::Result<RosterConfig> {
        if let Some(bind) = &self.bind {
            cfg.server.bind = bind.clone();
        }
        if let Some(port) = self.port {
            cfg.server.port = port;
        }
        if let Some(static_dir) = &self.static_dir {
            cfg.server.static_dir = static_dir.clone();
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Socket address for `bind` and `port`. Accepts IPv4 and IPv6 literals.
fn listen_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    let ip: IpAddr = server
        .bind
        .parse()
        .with_context(|| format!("server.bind '{}' is not an IP address", server.bind))?;
    Ok(SocketAddr::new(ip, server.port))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    roster::logging::init("roster=info,roster_server=info");

    let args = Args::parse();
    let cfg = args.apply_overrides(load_config(&args.config)?)?;

    let registry = ActivityRegistry::from_catalog(cfg.catalog())?;
    info!(
        config = %args.config.display(),
        activities = registry.len(),
        "loaded activity catalog"
    );

    let app = routes::app_router(AppState::new(registry), &cfg.server.static_dir);

    let addr = listen_addr(&cfg.server)?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
