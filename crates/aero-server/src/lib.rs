pub mod config;
pub mod error;
pub mod static_files;

pub use config::ServerConfig;
pub use error::ServerError;
pub use static_files::{router, ENTRY_DOCUMENT};

use tokio::net::TcpListener;

/// Serve the build directory until Ctrl-C.
///
/// The build directory is checked before the socket is bound, so a missing
/// build fails fast without ever listening.
pub async fn serve(config: &ServerConfig) -> Result<(), ServerError> {
    let app = router(&config.dist)?;

    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    log::info!("serving {} on http://{}", config.dist.display(), addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("shutting down");
}
