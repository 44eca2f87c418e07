mod helpers;

use akkor_shared::user::Role;
use axum::http::{StatusCode, header};
use helpers::{body_string, create_test_app};

#[tokio::test]
async fn test_health_and_ready() -> anyhow::Result<()> {
    let app = create_test_app().await?;

    let response = app.get("/health", None).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await?.contains("\"status\":\"ok\""));

    let response = app.get("/ready", None).await?;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_unknown_route_renders_not_found() -> anyhow::Result<()> {
    let app = create_test_app().await?;

    let response = app.get("/does/not/exist", None).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_home_lists_latest_hotels() -> anyhow::Result<()> {
    let app = create_test_app().await?;
    let admin = app.create_user("admin", Role::Admin).await?;
    for name in ["Alpha Lodge", "Beta Resort", "Gamma Inn", "Delta Suites"] {
        app.create_hotel(admin, name).await?;
    }

    let response = app.get("/", None).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await?;
    assert!(body.contains("Delta Suites"));
    assert!(body.contains("Beta Resort"));
    assert!(!body.contains("Alpha Lodge"));

    Ok(())
}

#[tokio::test]
async fn test_legal_pages_are_public() -> anyhow::Result<()> {
    let app = create_test_app().await?;

    for uri in ["/legal/privacy", "/legal/terms"] {
        let response = app.get(uri, None).await?;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }

    Ok(())
}

#[tokio::test]
async fn test_static_assets_are_cached() -> anyhow::Result<()> {
    let app = create_test_app().await?;

    let response = app.get("/static/css/app.css", None).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()),
        Some("public, max-age=31536000, immutable")
    );

    let response = app.get("/hotels", None).await?;
    let cache_control = response
        .headers()
        .get(header::CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(cache_control.starts_with("no-store"));

    Ok(())
}
