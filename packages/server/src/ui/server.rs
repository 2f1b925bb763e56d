//! Server composition root.

use std::{future::Future, sync::Arc};

use tokio::net::TcpListener;

use crate::{
    domain::{ConnectionRegistry, SongSource},
    usecase::{BroadcastSongUseCase, DisconnectAllUseCase, RegisterSubscriberUseCase},
};

use super::{
    acceptor::run_acceptor, broadcaster::run_broadcaster, config::ServerConfig,
    error::ServerError, signal::shutdown_signal,
};

/// Song broadcast server
///
/// Owns the lifecycles of the broadcaster task and the acceptor loop. The
/// two only share the registry.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(config, registry, song_source);
/// server.run().await?;
/// ```
pub struct Server {
    config: ServerConfig,
    /// Registry（接続中ハンドルの集合）
    registry: Arc<dyn ConnectionRegistry>,
    /// SongSource（曲検索の抽象化）
    song_source: Arc<dyn SongSource>,
}

impl Server {
    pub fn new(
        config: ServerConfig,
        registry: Arc<dyn ConnectionRegistry>,
        song_source: Arc<dyn SongSource>,
    ) -> Self {
        Self {
            config,
            registry,
            song_source,
        }
    }

    /// Bind the configured address and serve until Ctrl+C / SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the listener fails.
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        tracing::info!("Song broadcast server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves or the
    /// listener fails.
    ///
    /// On every exit path the broadcaster is stopped, every registered
    /// subscriber is closed and the listener is dropped before returning.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send,
    {
        let register = RegisterSubscriberUseCase::new(self.registry.clone());
        let broadcast = Arc::new(BroadcastSongUseCase::new(
            self.registry.clone(),
            self.song_source.clone(),
            self.config.genres.clone(),
        ));
        let disconnect_all = DisconnectAllUseCase::new(self.registry.clone());

        let broadcaster = tokio::spawn(run_broadcaster(broadcast, self.config.interval));

        let result = tokio::select! {
            result = run_acceptor(&listener, &register, self.config.send_timeout) => result,
            _ = shutdown => Ok(()),
        };

        if let Err(e) = &result {
            tracing::error!("Acceptor stopped: {}", e);
        }

        tracing::info!("Shutting down, closing subscriber connections");
        broadcaster.abort();
        // Wait for the task to unwind so no in-flight send outlives the teardown.
        if let Err(e) = broadcaster.await
            && !e.is_cancelled()
        {
            tracing::error!("Broadcaster task failed: {}", e);
        }

        let closed = disconnect_all.execute().await;
        drop(listener);
        tracing::info!("Server shutdown complete ({} subscriber(s) closed)", closed);

        result
    }
}
