use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::http::{AppState, router};

/// Handle `vocab-mate serve`.
pub async fn handle(
    ctx: &AppContext,
    bind: Option<&str>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let address = bind.unwrap_or(ctx.config.server.bind.as_str());
    let app = router(AppState::new(ctx.daily.clone()));

    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    let local = listener.local_addr()?;
    tracing::info!(%local, "server listening");
    if !flags.quiet {
        eprintln!("vocab-mate listening on http://{local}");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = ctrl_c().await {
            tracing::error!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        tracing::info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                tracing::info!("received terminate signal, shutting down");
            }
            Err(error) => {
                tracing::error!(%error, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
