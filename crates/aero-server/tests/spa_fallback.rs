use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use aero_server::{router, serve, ServerConfig, ServerError};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

const INDEX: &str = "<!doctype html><div id=\"root\"></div>";
const SCRIPT: &str = "console.log('aerospace');";

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

struct BuildDir(PathBuf);

impl BuildDir {
    fn new() -> Self {
        let n = NEXT_DIR.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!("aero-server-{}-{}", std::process::id(), n));
        fs::create_dir_all(path.join("assets")).unwrap();
        fs::write(path.join("index.html"), INDEX).unwrap();
        fs::write(path.join("assets/app.js"), SCRIPT).unwrap();
        Self(path)
    }
}

impl Drop for BuildDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

async fn get(dir: &BuildDir, uri: &str) -> (StatusCode, String) {
    let app = router(&dir.0).unwrap();
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn serves_existing_asset() {
    let dir = BuildDir::new();
    let (status, body) = get(&dir, "/assets/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, SCRIPT);
}

#[tokio::test]
async fn unknown_path_gets_entry_document() {
    let dir = BuildDir::new();
    let (status, body) = get(&dir, "/nonexistent/page").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn root_gets_entry_document() {
    let dir = BuildDir::new();
    let (status, body) = get(&dir, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn missing_asset_under_existing_dir_gets_entry_document() {
    let dir = BuildDir::new();
    let (status, body) = get(&dir, "/assets/missing.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[test]
fn missing_build_dir_is_fatal() {
    let path = std::env::temp_dir().join("aero-server-does-not-exist");
    match router(&path) {
        Err(ServerError::MissingBuildDir(p)) => assert_eq!(p, path),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("router built without a build directory"),
    }
}

#[tokio::test]
async fn serve_fails_before_binding_without_build_dir() {
    let config = ServerConfig {
        dist: std::env::temp_dir().join("aero-server-no-build-output"),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
    };
    match serve(&config).await {
        Err(ServerError::MissingBuildDir(p)) => assert_eq!(p, config.dist),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(()) => panic!("serve returned without a build directory"),
    }
}
