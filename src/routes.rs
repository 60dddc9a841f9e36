//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every site route is rendered by Leptos SSR; the hydrate bundle (WASM, JS,
//! CSS) is served from the site root's `pkg` directory. Requests are traced
//! and responses gzip-compressed.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router: health check, SSR pages, and static bundle.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(site::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || site::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
