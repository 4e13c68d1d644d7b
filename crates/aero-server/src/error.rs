//! Server error types

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal server errors
#[derive(Error, Debug)]
pub enum ServerError {
    /// Build output missing; the client has not been built
    #[error("could not find the build directory: {0}, make sure to build the client first")]
    MissingBuildDir(PathBuf),

    /// Listener could not be bound
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// Server loop exited with an I/O error
    #[error("server stopped unexpectedly: {0}")]
    Serve(std::io::Error),
}
