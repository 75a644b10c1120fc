//! Labmatch HTTP server entrypoint.

use std::net::SocketAddr;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use labmatch::cache::CacheBuilder;
use labmatch::catalog::load_catalog;
use labmatch::config::Config;
use labmatch::fallback::HttpSemanticFallback;
use labmatch::gateway::{HandlerState, create_router_with_state};
use labmatch::pipeline::ResolutionPipeline;
use labmatch::resolver::Resolver;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        catalog = %config.catalog_path.display(),
        "Labmatch starting"
    );

    let entries = load_catalog(&config.catalog_path)?;

    // Build completes before the listener exists; the cache is read-only from here on.
    let cache = tokio::task::spawn_blocking(move || CacheBuilder::from_catalog(&entries)).await?;
    let resolver = Resolver::new(cache);

    let mut pipeline: ResolutionPipeline<HttpSemanticFallback> =
        ResolutionPipeline::new(resolver).with_timeout(config.fallback_timeout());
    match &config.fallback_url {
        Some(url) => {
            tracing::info!(
                url = %url,
                timeout_ms = config.fallback_timeout_ms,
                "semantic fallback enabled"
            );
            pipeline = pipeline.with_fallback(HttpSemanticFallback::new(url));
        }
        None => {
            tracing::warn!("No LABMATCH_FALLBACK_URL configured, misses are returned as-is");
        }
    }

    let app = create_router_with_state(HandlerState::new(pipeline));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Labmatch shutdown complete");
    Ok(())
}

async fn run_health_check() -> i32 {
    let port = std::env::var(Config::ENV_PORT)
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(client) = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    else {
        return 1;
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
