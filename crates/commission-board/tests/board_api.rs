//! End-to-end scenarios driven through the public router and a seeded in-memory store.
//!
//! These walk the applicant and admin journeys the way a browser client would, without
//! reaching into private modules.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use commission_board::board::{
    board_router, default_commissions, seed_commissions, BoardService, SeedOutcome,
};
use commission_board::store::{connect_in_memory, create_schema, SeaOrmBoardRepository};

async fn seeded_router() -> Router {
    let db = connect_in_memory().await.expect("in-memory sqlite");
    create_schema(&db).await.expect("schema created");
    let repository = Arc::new(SeaOrmBoardRepository::new(db));

    let outcome = seed_commissions(repository.as_ref(), &default_commissions())
        .await
        .expect("seed succeeds");
    assert_eq!(outcome, SeedOutcome::Seeded(1));

    board_router(Arc::new(BoardService::new(repository)))
}

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request builds");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("route executes");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let payload = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, payload)
}

#[tokio::test]
async fn applicant_and_admin_journey() {
    let router = seeded_router().await;

    let (status, commissions) = send(&router, Method::GET, "/api/commissions", None).await;
    assert_eq!(status, StatusCode::OK);
    let commissions = commissions.as_array().expect("array").clone();
    assert_eq!(commissions.len(), 1);
    assert_eq!(commissions[0]["category"], json!("Web Developer"));
    let commission_id = commissions[0]["id"].as_i64().expect("numeric id");

    let (status, commission) = send(
        &router,
        Method::GET,
        &format!("/api/commissions/{commission_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(commission, commissions[0]);

    let (status, application) = send(
        &router,
        Method::POST,
        &format!("/api/commissions/{commission_id}/apply"),
        Some(json!({
            "full_name": "Linus Example",
            "email": "linus@example.com",
            "portfolio_url": "https://linus.example.com",
            "cover_letter": "Velo and Blocks are familiar territory.",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(application["status"], json!("Pending"));
    let application_id = application["id"].as_i64().expect("numeric id");

    let (status, fetched) = send(
        &router,
        Method::GET,
        &format!("/api/applications/{application_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, application);

    let (status, updated) = send(
        &router,
        Method::PUT,
        &format!("/api/applications/{application_id}/status"),
        Some(json!({ "status": "Interview scheduled" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], json!("Interview scheduled"));
    assert_eq!(updated["created_at"], application["created_at"]);

    let (status, listed) = send(&router, Method::GET, "/api/admin/applications", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([updated]));
}

#[tokio::test]
async fn rejected_submissions_leave_no_rows() {
    let router = seeded_router().await;

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/commissions/1/apply",
        Some(json!({
            "full_name": "Linus Example",
            "email": "not-an-email",
            "cover_letter": "Hello",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/commissions/31337/apply",
        Some(json!({
            "full_name": "Linus Example",
            "email": "linus@example.com",
            "cover_letter": "Hello",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Commission not found" }));

    let (_, listed) = send(&router, Method::GET, "/api/admin/applications", None).await;
    assert_eq!(listed, json!([]));

    let (status, body) = send(&router, Method::GET, "/api/applications/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Application not found" }));
}
