use std::net::SocketAddr;
use std::sync::Arc;

use glyphtone_core::ConversionParams;
use glyphtone_server::{AppState, router};
use glyphtone_ucd::CharacterService;

/// Serve the router on an ephemeral port with no dataset on disk.
async fn spawn_server() -> (SocketAddr, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let characters = CharacterService::new(dir.path().join("unicode_data.json"));
    let app = router(AppState::new(ConversionParams::default(), Arc::new(characters)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, dir)
}

async fn get_json(
    addr: SocketAddr,
    path: &str,
) -> (reqwest::StatusCode, reqwest::header::HeaderMap, serde_json::Value) {
    let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = serde_json::from_str(&response.text().await.unwrap()).unwrap();
    (status, headers, body)
}

#[tokio::test]
async fn health_reports_ok_with_cors() {
    let (addr, _dir) = spawn_server().await;
    let (status, headers, body) = get_json(addr, "/health").await;
    assert_eq!(status, 200);
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(body["status"], "OK");
}

#[tokio::test]
async fn conversion_uses_fallback_metadata_without_dataset() {
    let (addr, _dir) = spawn_server().await;
    let (status, _, body) = get_json(addr, "/api/ascii-to-cmyk/65").await;
    assert_eq!(status, 200);
    assert_eq!(body["cmyk"]["m"], 0.0);
    assert_eq!(body["characterInfo"]["type"], "uppercase");
    assert_eq!(body["characterInfo"]["unicode"], "U+41");
    assert_eq!(body["characterInfo"]["block"], "Basic Latin");
    assert_eq!(body["characterInfo"]["name"], "Character 65");
}

#[tokio::test]
async fn invalid_code_is_a_json_400() {
    let (addr, _dir) = spawn_server().await;
    let (status, headers, body) = get_json(addr, "/api/ascii-to-cmyk/not-a-number").await;
    assert_eq!(status, 400);
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(body["error"], "Invalid code. Please provide a valid number.");
}

#[tokio::test]
async fn block_listing_is_empty_without_dataset() {
    let (addr, _dir) = spawn_server().await;
    let (status, _, body) = get_json(addr, "/api/block/Basic%20Latin").await;
    assert_eq!(status, 200);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let (addr, _dir) = spawn_server().await;
    let (status, _, body) = get_json(addr, "/api/nope").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Not found.");
}
