// Integration tests: HTTP endpoints

use axum_test::TestServer;
use std::sync::Arc;
use sysdash::models::SysinfoResponse;
use sysdash::routes;
use sysdash::sysinfo_repo::SysinfoRepo;

fn test_app() -> axum::Router {
    routes::app(Arc::new(SysinfoRepo::new()))
}

#[tokio::test]
async fn test_root_endpoint() {
    let server = TestServer::new(test_app());
    let response = server.get("/").await;
    response.assert_status_ok();
    response.assert_text("sysdash: system metrics at /api/sysinfo");
}

#[tokio::test]
async fn test_version_endpoint() {
    let server = TestServer::new(test_app());
    let response = server.get("/version").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json.get("name").and_then(|v| v.as_str()), Some("sysdash"));
    assert!(json.get("version").and_then(|v| v.as_str()).is_some());
}

#[tokio::test]
async fn test_api_sysinfo_returns_wire_shape() {
    let server = TestServer::new(test_app());
    let response = server.get("/api/sysinfo").await;
    response.assert_status_ok();

    let json: serde_json::Value = response.json();
    assert!(json["CPU"]["usage"]["usage"].is_number());
    assert!(json["Memory"]["percent"].is_number());
    assert!(json["Disk"]["entries"].is_array());
    assert!(json["NetworkStats"]["rx_bytes"].is_u64());
    assert!(json["NetworkStats"]["tx_bytes"].is_u64());
    for entry in json["Disk"]["entries"].as_array().unwrap() {
        assert!(
            entry["percent"].is_u64(),
            "disk percent serialized as {}",
            entry["percent"]
        );
    }

    let parsed: SysinfoResponse = response.json();
    assert!((0.0..=100.0).contains(&parsed.cpu.usage.usage));
    assert!((0.0..=100.0).contains(&parsed.memory.percent));
    for entry in &parsed.disk.entries {
        assert!((0.0..=100.0).contains(&entry.percent));
    }
    let non_loopback_rx: u64 = parsed
        .network_stats
        .interfaces
        .iter()
        .filter(|i| i.name != "lo")
        .map(|i| i.rx_bytes)
        .sum();
    assert_eq!(parsed.network_stats.rx_bytes, non_loopback_rx);
}

#[tokio::test]
async fn test_api_sysinfo_disables_caching() {
    let server = TestServer::new(test_app());
    let response = server.get("/api/sysinfo").await;
    response.assert_status_ok();
    response.assert_header("cache-control", "no-store, max-age=0, must-revalidate");
    response.assert_header("pragma", "no-cache");
    response.assert_header("expires", "0");
}

#[tokio::test]
async fn test_network_counters_do_not_decrease_between_requests() {
    let server = TestServer::new(test_app());
    let first: SysinfoResponse = server.get("/api/sysinfo").await.json();
    let second: SysinfoResponse = server.get("/api/sysinfo").await.json();
    assert!(second.network_stats.rx_bytes >= first.network_stats.rx_bytes);
    assert!(second.network_stats.tx_bytes >= first.network_stats.tx_bytes);
}
