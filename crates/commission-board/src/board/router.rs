use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;
use tracing::{error, warn};

use super::domain::{
    Application, ApplicationId, ApplicationSubmission, Commission, CommissionId, StatusUpdate,
};
use super::echo::echo_handler;
use super::repository::{BoardRepository, RepositoryError};
use super::service::{BoardError, BoardService};
use super::validation::ValidationError;

/// Router builder exposing the public, applicant, and admin endpoints.
///
/// Admin routes carry no authentication.
pub fn board_router<R>(service: Arc<BoardService<R>>) -> Router
where
    R: BoardRepository + ?Sized + 'static,
{
    Router::new()
        .route("/api/commissions", get(list_commissions_handler::<R>))
        .route(
            "/api/commissions/:commission_id",
            get(commission_handler::<R>),
        )
        .route(
            "/api/commissions/:commission_id/apply",
            post(submit_handler::<R>),
        )
        .route(
            "/api/applications/:application_id",
            get(application_handler::<R>),
        )
        .route(
            "/api/applications/:application_id/status",
            put(update_status_handler::<R>),
        )
        .route("/api/admin/applications", get(admin_list_handler::<R>))
        .route("/ws/application/:application_id", get(echo_handler))
        .with_state(service)
}

pub(crate) async fn list_commissions_handler<R>(
    State(service): State<Arc<BoardService<R>>>,
) -> Result<Json<Vec<Commission>>, BoardError>
where
    R: BoardRepository + ?Sized + 'static,
{
    Ok(Json(service.list_commissions().await?))
}

pub(crate) async fn commission_handler<R>(
    State(service): State<Arc<BoardService<R>>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Commission>, BoardError>
where
    R: BoardRepository + ?Sized + 'static,
{
    let commission_id = commission_path(path)?;
    Ok(Json(service.get_commission(commission_id).await?))
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<BoardService<R>>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ApplicationSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<Application>), BoardError>
where
    R: BoardRepository + ?Sized + 'static,
{
    let commission_id = commission_path(path)?;
    let Json(submission) = payload.map_err(json_error)?;
    let application = service
        .submit_application(commission_id, submission)
        .await?;
    Ok((StatusCode::CREATED, Json(application)))
}

pub(crate) async fn application_handler<R>(
    State(service): State<Arc<BoardService<R>>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Application>, BoardError>
where
    R: BoardRepository + ?Sized + 'static,
{
    let application_id = application_path(path)?;
    Ok(Json(service.get_application(application_id).await?))
}

pub(crate) async fn admin_list_handler<R>(
    State(service): State<Arc<BoardService<R>>>,
) -> Result<Json<Vec<Application>>, BoardError>
where
    R: BoardRepository + ?Sized + 'static,
{
    Ok(Json(service.list_applications().await?))
}

pub(crate) async fn update_status_handler<R>(
    State(service): State<Arc<BoardService<R>>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<Json<Application>, BoardError>
where
    R: BoardRepository + ?Sized + 'static,
{
    let application_id = application_path(path)?;
    let Json(update) = payload.map_err(json_error)?;
    Ok(Json(
        service
            .update_application_status(application_id, update)
            .await?,
    ))
}

/// Ids arrive as `i64`; a well-formed id outside the key range is simply unknown.
fn commission_path(
    path: Result<Path<i64>, PathRejection>,
) -> Result<CommissionId, BoardError> {
    let Path(raw) = path.map_err(path_error)?;
    i32::try_from(raw)
        .map(CommissionId)
        .map_err(|_| BoardError::CommissionNotFound(raw))
}

fn application_path(
    path: Result<Path<i64>, PathRejection>,
) -> Result<ApplicationId, BoardError> {
    let Path(raw) = path.map_err(path_error)?;
    i32::try_from(raw)
        .map(ApplicationId)
        .map_err(|_| BoardError::ApplicationNotFound(raw))
}

fn path_error(rejection: PathRejection) -> BoardError {
    BoardError::Validation(ValidationError::Malformed(rejection.body_text()))
}

fn json_error(rejection: JsonRejection) -> BoardError {
    BoardError::Validation(ValidationError::Malformed(rejection.body_text()))
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        let status = match &self {
            BoardError::CommissionNotFound(_) | BoardError::ApplicationNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            BoardError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BoardError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            BoardError::Repository(RepositoryError::Unavailable(reason)) => {
                warn!(%reason, "request rejected: store unavailable");
                StatusCode::SERVICE_UNAVAILABLE
            }
            BoardError::Repository(RepositoryError::Query(reason)) => {
                error!(%reason, "store query failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let payload = json!({ "detail": self.to_string() });
        (status, Json(payload)).into_response()
    }
}
