//! Process lifecycle: bind, serve, graceful shutdown.
//!
//! - `serve` stops accepting once `shutdown` resolves, then gives in-flight
//!   requests `grace` to finish before abandoning them.
//! - `shutdown_signal` resolves on SIGINT/SIGTERM/SIGQUIT (Ctrl-C elsewhere).

use std::future::{Future, IntoFuture};

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::time::Duration;

use metrica_core::error::{MetricaError, Result};

pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| MetricaError::Internal(format!("bind {addr} failed: {e}")))
}

pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    grace: Duration,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (stopping_tx, stopping_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown.await;
        tracing::info!("shutdown requested, draining connections");
        let _ = stopping_tx.send(());
    });
    let server = server.into_future();
    tokio::pin!(server);

    tokio::select! {
        res = &mut server => {
            res.map_err(|e| MetricaError::Internal(format!("server failed: {e}")))
        }
        _ = async {
            // Only fires once shutdown has begun.
            if stopping_rx.await.is_ok() {
                tokio::time::sleep(grace).await;
            } else {
                std::future::pending::<()>().await;
            }
        } => {
            tracing::warn!(?grace, "graceful shutdown timed out");
            Ok(())
        }
    }
}

#[cfg(unix)]
async fn wait_for(kind: tokio::signal::unix::SignalKind) {
    match tokio::signal::unix::signal(kind) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to install signal handler");
            std::future::pending::<()>().await;
        }
    }
}

pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::SignalKind;

        tokio::select! {
            _ = wait_for(SignalKind::interrupt()) => {}
            _ = wait_for(SignalKind::terminate()) => {}
            _ = wait_for(SignalKind::quit()) => {}
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    }
}
