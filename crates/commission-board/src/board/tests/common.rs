use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use crate::board::domain::{ApplicationSubmission, Commission, NewCommission};
use crate::board::repository::BoardRepository;
use crate::board::{board_router, BoardService, Clock};
use crate::store::{connect_in_memory, create_schema, SeaOrmBoardRepository, UnavailableStore};

pub(super) fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 8, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Clock advancing one second per call so submissions get distinct timestamps.
pub(super) fn stepping_clock() -> Clock {
    let ticks = Arc::new(AtomicI64::new(0));
    Arc::new(move || base_time() + Duration::seconds(ticks.fetch_add(1, Ordering::Relaxed)))
}

pub(super) fn posting() -> NewCommission {
    NewCommission {
        title: "Brand Illustrator".to_string(),
        description: "Illustrate a set of onboarding screens.".to_string(),
        category: "Illustration".to_string(),
    }
}

pub(super) fn submission() -> ApplicationSubmission {
    ApplicationSubmission {
        full_name: "Ada Lovelace".to_string(),
        email: "ada@Example.COM".to_string(),
        portfolio_url: Some("https://ada.example.com".to_string()),
        cover_letter: "I have shipped several illustration systems.".to_string(),
    }
}

pub(super) fn invalid_email_submission() -> ApplicationSubmission {
    let mut submission = submission();
    submission.email = "not-an-email".to_string();
    submission
}

pub(super) async fn memory_repository() -> Arc<SeaOrmBoardRepository> {
    let db = connect_in_memory().await.expect("in-memory sqlite");
    create_schema(&db).await.expect("schema created");
    Arc::new(SeaOrmBoardRepository::new(db))
}

/// Service over a fresh in-memory store holding one commission.
pub(super) async fn build_service() -> (BoardService<SeaOrmBoardRepository>, Commission) {
    let repository = memory_repository().await;
    let commission = repository
        .insert_commission(posting())
        .await
        .expect("commission seeded");
    let service = BoardService::with_clock(repository, stepping_clock());
    (service, commission)
}

pub(super) fn unavailable_service() -> BoardService<dyn BoardRepository> {
    let repository: Arc<dyn BoardRepository> = Arc::new(UnavailableStore::new("database offline"));
    BoardService::new(repository)
}

pub(super) fn router_with_service<R>(service: BoardService<R>) -> axum::Router
where
    R: BoardRepository + ?Sized + 'static,
{
    board_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
