// GET handlers: root, version, api/sysinfo

use axum::{
    Json,
    extract::State,
    http::{
        HeaderName, StatusCode,
        header::{CACHE_CONTROL, EXPIRES, PRAGMA},
    },
    response::{IntoResponse, Response},
};

use super::AppState;
use crate::version::{NAME, VERSION};

/// Snapshots are live readings; clients and proxies must not reuse them.
fn no_cache_headers() -> [(HeaderName, &'static str); 3] {
    [
        (CACHE_CONTROL, "no-store, max-age=0, must-revalidate"),
        (PRAGMA, "no-cache"),
        (EXPIRES, "0"),
    ]
}

pub(super) async fn root_handler() -> &'static str {
    "sysdash: system metrics at /api/sysinfo"
}

/// GET /version: returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/sysinfo: samples the host on every request.
pub(super) async fn api_sysinfo_handler(State(state): State<AppState>) -> Response {
    match state.sysinfo_repo.get_sysinfo().await {
        Ok(info) => (no_cache_headers(), Json(info)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, operation = "get_sysinfo", "sysinfo sampling failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                no_cache_headers(),
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
