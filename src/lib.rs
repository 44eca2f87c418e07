pub mod auth;
pub mod config;
pub mod db;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use routes::AppState;

use axum::Router;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// The full application: routes plus the response layers the server runs
/// with. Tests drive it directly through `tower::ServiceExt::oneshot`.
pub fn create_app(config: config::Config, state: akkor_shared::State) -> Router {
    routes::router(AppState::new(config, state))
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        // Minify before compressing
        .layer(axum::middleware::map_response(
            middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
