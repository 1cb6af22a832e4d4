//! Vigil agent — health packets for a remote home-automation hub.
//!
//! Modes:
//!   vg-agent [config.toml] run [--dry-run]   one batch diagnostic (default)
//!   vg-agent [config.toml] serve             REST bridge for on-demand checks

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use vg_agent::channels::{HubApiChannel, SshTailChannel};
use vg_agent::config::AgentConfig;
use vg_agent::{routes, sink};
use vg_diag::{FetchOrchestrator, Pipeline, StateStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "vg-agent starting");

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let dry_run = args.iter().any(|a| a == "--dry-run");
    args.retain(|a| a != "--dry-run");

    let config_path = args
        .first()
        .cloned()
        .unwrap_or_else(|| "/etc/vigil/agent.toml".to_string());
    let mode = args.get(1).cloned().unwrap_or_else(|| "run".to_string());

    // Missing or malformed configuration is the one fatal failure; the
    // pipeline itself never aborts.
    let config = AgentConfig::from_file(&config_path)?;
    tracing::info!(hub = %config.hub.base_url, "config loaded");

    let hub = HubApiChannel::new(&config.hub);
    let mut fetcher = FetchOrchestrator::new(Box::new(hub.clone()));
    match config.ssh.clone() {
        Some(ssh) => {
            tracing::info!(host = %ssh.host, "ssh fallback enabled");
            fetcher = fetcher.with_fallback(Box::new(SshTailChannel::new(ssh)));
        }
        None => tracing::debug!("ssh fallback not configured"),
    }

    let pipeline = Pipeline::new(fetcher, StateStore::new(config.state_file()));

    match mode.as_str() {
        "run" => {
            let snapshot = hub.system_snapshot().await;
            let report = pipeline.run(&snapshot).await;

            if dry_run {
                println!("{}", report.markdown);
            } else {
                let today = chrono::Local::now().date_naive();
                let path = sink::write_report(&config.data_dir, today, &report.markdown).await?;
                tracing::info!(path = %path.display(), "report written");
            }
        }
        "serve" => {
            let state = routes::AppState {
                pipeline: Arc::new(pipeline),
                hub,
            };
            let app = routes::build_router(state);

            let addr = format!("{}:{}", config.bridge.host, config.bridge.port);
            let listener = TcpListener::bind(&addr).await?;
            tracing::info!(addr = %addr, "bridge listening");

            axum::serve(listener, app).await?;
        }
        other => anyhow::bail!("unknown mode: {other} (expected \"run\" or \"serve\")"),
    }

    tracing::info!("vg-agent done");
    Ok(())
}
