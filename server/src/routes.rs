//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the Leptos SSR pages, the compiled WASM bundle under `/pkg`, and
//! the static public directory under a single Axum router. Old static-site
//! URLs (`/login.html`, ...) redirect permanently to their routes.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Static-site file names and the routes that replaced them.
pub const LEGACY_PAGES: &[(&str, &str)] = &[
    ("index.html", "/"),
    ("pricing.html", "/pricing"),
    ("login.html", "/login"),
    ("register.html", "/register"),
    ("dashboard.html", "/dashboard"),
];

#[derive(Debug, thiserror::Error)]
pub enum RoutesError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

/// Route replacing a static-site file name, if any.
pub fn legacy_target(file: &str) -> Option<&'static str> {
    let file = file.trim_start_matches('/');
    LEGACY_PAGES
        .iter()
        .find(|(name, _)| *name == file)
        .map(|(_, route)| *route)
}

/// Health check and legacy redirects. Needs no Leptos configuration.
pub fn base_routes() -> Router {
    let mut router = Router::new().route("/healthz", get(healthz));
    for &(file, _) in LEGACY_PAGES {
        router = router.route(&format!("/{file}"), get(move || redirect_legacy(file)));
    }
    router
}

async fn redirect_legacy(file: &'static str) -> Result<Redirect, StatusCode> {
    legacy_target(file).map(Redirect::permanent).ok_or(StatusCode::NOT_FOUND)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, RoutesError> {
    let conf = get_configuration(None).map_err(|e| RoutesError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(flowpilot::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || flowpilot::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::info!(public_dir = %config.public_dir.display(), site_root = %site_root.display(), "serving static files");

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
