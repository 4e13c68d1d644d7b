//! Static build directory with single-page-app fallback.
//!
//! Every request is first looked up as a file under the build directory.
//! Anything that does not resolve to a file gets the entry document with a
//! 200 status, so client-side routes survive a reload.

use std::path::{Path, PathBuf};
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::error::ServerError;

/// HTML document served for every unmatched path.
pub const ENTRY_DOCUMENT: &str = "index.html";

/// Resolve the build directory. Relative paths are taken from the working directory.
pub fn resolve_build_dir(dir: &Path) -> Result<PathBuf, ServerError> {
    if !dir.is_dir() {
        return Err(ServerError::MissingBuildDir(dir.to_path_buf()));
    }
    Ok(dir.to_path_buf())
}

/// Build the router serving `build_dir`.
pub fn router(build_dir: &Path) -> Result<Router, ServerError> {
    let dir = resolve_build_dir(build_dir)?;
    let entry = dir.join(ENTRY_DOCUMENT);
    if !entry.is_file() {
        log::warn!(
            "{} has no {}; unmatched paths will return 404",
            dir.display(),
            ENTRY_DOCUMENT
        );
    }

    let files = ServeDir::new(&dir).fallback(ServeFile::new(entry));

    Ok(Router::new()
        .fallback_service(files)
        .layer(middleware::from_fn(log_request)))
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(req).await;

    log::info!(
        "{} {} {} in {}ms",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}
