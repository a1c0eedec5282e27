// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::sysinfo_repo::SysinfoRepo;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) sysinfo_repo: Arc<SysinfoRepo>,
}

pub fn app(sysinfo_repo: Arc<SysinfoRepo>) -> Router {
    let state = AppState { sysinfo_repo };
    Router::new()
        .route("/", get(http::root_handler)) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/sysinfo", get(http::api_sysinfo_handler)) // GET /api/sysinfo
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
