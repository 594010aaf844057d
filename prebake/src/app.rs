//! Process-lifecycle glue: runs a host HTTP server until a termination
//! signal, then shuts it down gracefully within a bounded window.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::{error, info};

/// Default time allowed for graceful shutdown.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("address cannot be empty")]
    EmptyAddr,

    #[error("shutdown timeout must be positive")]
    InvalidTimeout,
}

/// Server capability the lifecycle wrapper drives. `listen` runs until the
/// server stops; `shutdown` requests a graceful stop and returns once it has
/// been initiated.
pub trait HttpServer: Send + Sync + 'static {
    fn listen(&self, addr: &str) -> impl Future<Output = anyhow::Result<()>> + Send;

    fn shutdown(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Immutable lifecycle configuration. Modifiers return copies; a config in
/// someone else's hands never changes underneath them.
#[derive(Debug, Clone)]
pub struct AppConfig {
    addr: String,
    shutdown_timeout: Duration,
}

impl AppConfig {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
        }
    }

    pub fn with_shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = timeout;
        self
    }
}

/// Runs an [`HttpServer`] until SIGINT/SIGTERM, then stops it gracefully.
pub struct App<S> {
    server: Arc<S>,
    cfg: AppConfig,
}

impl<S: HttpServer> App<S> {
    pub fn new(server: S, cfg: AppConfig) -> Result<Self, AppError> {
        let mut cfg = cfg;
        cfg.addr = cfg.addr.trim().to_string();
        if cfg.addr.is_empty() {
            return Err(AppError::EmptyAddr);
        }
        if cfg.shutdown_timeout.is_zero() {
            return Err(AppError::InvalidTimeout);
        }

        Ok(Self {
            server: Arc::new(server),
            cfg,
        })
    }

    /// Blocks until a termination signal arrives, then shuts the server down
    /// within the configured timeout.
    pub async fn run(&self) -> anyhow::Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Same as [`App::run`] with an injected shutdown trigger.
    pub async fn run_until<F>(&self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()>,
    {
        let server = self.server.clone();
        let addr = self.cfg.addr.clone();
        let mut listen_task = tokio::spawn(async move {
            info!(addr = %addr, "server listening");
            server.listen(&addr).await
        });

        tokio::select! {
            result = &mut listen_task => {
                let result = result.context("listener task panicked")?;
                if let Err(err) = &result {
                    error!(error = %err, "server error");
                }
                result
            }
            _ = shutdown => {
                info!("shutdown signal received, stopping gracefully");
                let stopped = tokio::time::timeout(self.cfg.shutdown_timeout, async {
                    self.server.shutdown().await?;
                    listen_task.await.context("listener task panicked")?
                })
                .await;

                match stopped {
                    Ok(result) => result,
                    Err(_) => anyhow::bail!("timed out waiting for server to stop"),
                }
            }
        }
    }
}

/// Completes on SIGINT or, on unix, SIGTERM.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut term = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = term.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
