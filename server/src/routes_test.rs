use super::*;
use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

#[test]
fn legacy_target_maps_known_pages() {
    assert_eq!(legacy_target("index.html"), Some("/"));
    assert_eq!(legacy_target("/dashboard.html"), Some("/dashboard"));
    assert_eq!(legacy_target("Login.HTML"), None);
    assert_eq!(legacy_target("about.html"), None);
}

#[tokio::test]
async fn healthz_is_ok() {
    let response = base_routes()
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn legacy_pages_redirect_permanently() {
    let response = base_routes()
        .oneshot(Request::get("/register.html").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/register");
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let response = base_routes()
        .oneshot(Request::get("/about.html").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
