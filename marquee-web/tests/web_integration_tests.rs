//! Router-level tests for the Marquee search UI
//!
//! These tests drive the axum router directly, the way a browser running the
//! HTMX page would, against scripted catalogs.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use marquee_core::catalog::{CatalogError, MockCatalog, SearchQuery, TypeFilter};
use marquee_core::config::MarqueeConfig;
use marquee_web::{AppState, SessionId, build_router};
use tower::ServiceExt;

struct TestApp {
    router: Router,
    state: AppState,
    catalog: MockCatalog,
}

impl TestApp {
    fn new(catalog: MockCatalog) -> Self {
        let state = AppState::new(MarqueeConfig::for_testing(), Arc::new(catalog.clone()));
        Self {
            router: build_router(state.clone()),
            state,
            catalog,
        }
    }

    async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn post_form(&self, uri: &str, form: &str) -> (StatusCode, String) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    /// Loads the page and returns the session it mounted, once settled.
    async fn mount(&self) -> SessionId {
        let (status, page) = self.get("/").await;
        assert_eq!(status, StatusCode::OK);

        let session = session_id_from(&page);
        self.settle(session).await;
        session
    }

    async fn settle(&self, session: SessionId) {
        let handle = self.state.sessions.get(session).await.unwrap();
        tokio::time::timeout(Duration::from_secs(5), handle.settled())
            .await
            .unwrap()
            .unwrap();
    }
}

fn session_id_from(page: &str) -> SessionId {
    let start = page.find(r#"data-session=""#).unwrap() + r#"data-session=""#.len();
    let end = start + page[start..].find('"').unwrap();
    page[start..end].parse().unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new(MockCatalog::new(1));

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_page_load_mounts_session_and_searches_default_query() {
    let app = TestApp::new(MockCatalog::new(3));

    let (status, page) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<!DOCTYPE html>"));
    assert!(page.contains(r#"value="panda""#));
    assert!(page.contains(r#"data-state="loading""#));
    assert_eq!(app.state.sessions.len().await, 1);

    let session = session_id_from(&page);
    app.settle(session).await;

    assert_eq!(
        app.catalog.queries(),
        vec![SearchQuery::new("panda", TypeFilter::All)]
    );

    let (status, region) = app
        .get(&format!("/htmx/sessions/{session}/results"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(region.matches("result-card").count(), 3);
    assert!(region.contains("panda 0"));
}

#[tokio::test]
async fn test_typing_alone_does_not_search() {
    let app = TestApp::new(MockCatalog::new(1));
    let session = app.mount().await;

    let (status, body) = app
        .post_form(&format!("/htmx/sessions/{session}/text"), "text=batman")
        .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    assert_eq!(app.catalog.queries().len(), 1);

    let (_, snapshot) = app.get(&format!("/api/sessions/{session}")).await;
    let snapshot: serde_json::Value = serde_json::from_str(&snapshot).unwrap();
    assert_eq!(snapshot["control"]["text"], "batman");
}

#[tokio::test]
async fn test_enter_searches_typed_text_without_type() {
    let app = TestApp::new(MockCatalog::new(2));
    let session = app.mount().await;

    let (status, region) = app
        .post_form(
            &format!("/htmx/sessions/{session}/key"),
            "text=batman&key=Enter",
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(region.contains(r#"data-state="loading""#));

    app.settle(session).await;
    assert_eq!(
        app.catalog.queries().last(),
        Some(&SearchQuery::new("batman", TypeFilter::All))
    );

    let (_, region) = app
        .get(&format!("/htmx/sessions/{session}/results"))
        .await;
    assert!(region.contains("batman 1"));
}

#[tokio::test]
async fn test_other_keys_do_not_search() {
    let app = TestApp::new(MockCatalog::new(1));
    let session = app.mount().await;

    let (status, region) = app
        .post_form(&format!("/htmx/sessions/{session}/key"), "text=bat&key=a")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!region.contains(r#"data-state="loading""#));
    assert_eq!(app.catalog.queries().len(), 1);
}

#[tokio::test]
async fn test_search_button_uses_current_text() {
    let app = TestApp::new(MockCatalog::new(1));
    let session = app.mount().await;

    let (status, _) = app
        .post_form(&format!("/htmx/sessions/{session}/search"), "text=alien")
        .await;

    assert_eq!(status, StatusCode::OK);
    app.settle(session).await;
    assert_eq!(
        app.catalog.queries().last(),
        Some(&SearchQuery::new("alien", TypeFilter::All))
    );
}

#[tokio::test]
async fn test_filter_selection_searches_with_new_filter() {
    let app = TestApp::new(MockCatalog::new(1));
    let session = app.mount().await;

    let (status, _) = app
        .post_form(
            &format!("/htmx/sessions/{session}/filter"),
            "text=panda&type=movie",
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    app.settle(session).await;

    app.post_form(
        &format!("/htmx/sessions/{session}/filter"),
        "text=panda&type=all",
    )
    .await;
    app.settle(session).await;

    let queries = app.catalog.queries();
    assert_eq!(queries[1], SearchQuery::new("panda", TypeFilter::Movie));
    assert_eq!(queries[2], SearchQuery::new("panda", TypeFilter::All));
}

#[tokio::test]
async fn test_invalid_filter_is_bad_request() {
    let app = TestApp::new(MockCatalog::new(1));
    let session = app.mount().await;

    let (status, _) = app
        .post_form(
            &format!("/htmx/sessions/{session}/filter"),
            "text=panda&type=tv",
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.catalog.queries().len(), 1);
}

#[tokio::test]
async fn test_empty_results_render_notice() {
    let app = TestApp::new(MockCatalog::empty());
    let session = app.mount().await;

    let (_, region) = app
        .get(&format!("/htmx/sessions/{session}/results"))
        .await;

    assert!(region.contains(r#"data-state="empty""#));
    assert!(!region.contains("result-card"));
}

#[tokio::test]
async fn test_catalog_failure_renders_notice() {
    let app = TestApp::new(MockCatalog::failing(CatalogError::HttpStatus { status: 503 }));
    let session = app.mount().await;

    let (status, region) = app
        .get(&format!("/htmx/sessions/{session}/results"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(region.contains(r#"data-state="failure""#));
    assert!(region.contains("HTTP 503"));
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let app = TestApp::new(MockCatalog::new(1));

    let unknown = SessionId::generate();
    let (status, body) = app
        .get(&format!("/htmx/sessions/{unknown}/results"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("expired"));

    let (status, _) = app
        .post_form("/htmx/sessions/not-a-uuid/text", "text=x")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get(&format!("/api/sessions/{unknown}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_evicted_session_is_not_found() {
    let app = TestApp::new(MockCatalog::new(1));
    let session = app.mount().await;

    assert_eq!(app.state.sessions.evict_idle(Duration::ZERO).await, 1);

    let (status, body) = app
        .post_form(&format!("/htmx/sessions/{session}/search"), "text=panda")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("expired"));
}

#[tokio::test]
async fn test_api_search_returns_entries() {
    let app = TestApp::new(MockCatalog::new(2));

    let (status, body) = app.get("/api/search?s=alien&type=series").await;

    assert_eq!(status, StatusCode::OK);
    let entries: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 2);
    assert_eq!(entries[0]["title"], "alien 0");
    assert_eq!(
        app.catalog.queries(),
        vec![SearchQuery::new("alien", TypeFilter::Series)]
    );
}

#[tokio::test]
async fn test_api_search_rejects_bad_input() {
    let app = TestApp::new(MockCatalog::new(1));

    let (status, _) = app.get("/api/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/api/search?s=alien&type=tv").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(app.catalog.queries().is_empty());
}

#[tokio::test]
async fn test_api_search_reports_catalog_failure() {
    let app = TestApp::new(MockCatalog::failing(CatalogError::Network {
        reason: "connection refused".to_string(),
    }));

    let (status, body) = app.get("/api/search?s=alien").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("error"));
}
