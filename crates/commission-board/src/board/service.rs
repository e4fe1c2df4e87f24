use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use super::domain::{
    Application, ApplicationId, ApplicationSubmission, Commission, CommissionId, NewApplication,
    StatusUpdate,
};
use super::repository::{BoardRepository, RepositoryError};
use super::validation::{validate_submission, ValidationError};

/// Source of application timestamps.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Service composing validation and the repository into the board operations.
pub struct BoardService<R: ?Sized> {
    repository: Arc<R>,
    clock: Clock,
}

impl<R> BoardService<R>
where
    R: BoardRepository + ?Sized + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_clock(repository, Arc::new(Utc::now))
    }

    pub fn with_clock(repository: Arc<R>, clock: Clock) -> Self {
        Self { repository, clock }
    }

    pub async fn list_commissions(&self) -> Result<Vec<Commission>, BoardError> {
        Ok(self.repository.list_commissions().await?)
    }

    pub async fn get_commission(&self, id: CommissionId) -> Result<Commission, BoardError> {
        self.repository
            .fetch_commission(id)
            .await?
            .ok_or(BoardError::CommissionNotFound(id.into()))
    }

    /// Validate and store a new application in the `Pending` status.
    pub async fn submit_application(
        &self,
        commission_id: CommissionId,
        submission: ApplicationSubmission,
    ) -> Result<Application, BoardError> {
        let validated = validate_submission(submission)?;

        let application = NewApplication {
            full_name: validated.full_name,
            email: validated.email,
            portfolio_url: validated.portfolio_url,
            cover_letter: validated.cover_letter,
            created_at: (self.clock)(),
        };

        let stored = self
            .repository
            .insert_application(commission_id, application)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => BoardError::CommissionNotFound(commission_id.into()),
                other => BoardError::Repository(other),
            })?;

        info!(
            application_id = %stored.id,
            commission_id = %commission_id,
            "application submitted"
        );
        Ok(stored)
    }

    pub async fn get_application(&self, id: ApplicationId) -> Result<Application, BoardError> {
        self.repository
            .fetch_application(id)
            .await?
            .ok_or(BoardError::ApplicationNotFound(id.into()))
    }

    /// Every application, newest first. Unauthenticated.
    pub async fn list_applications(&self) -> Result<Vec<Application>, BoardError> {
        Ok(self.repository.list_applications().await?)
    }

    /// Overwrite the status with whatever the caller supplied. Unauthenticated.
    pub async fn update_application_status(
        &self,
        id: ApplicationId,
        update: StatusUpdate,
    ) -> Result<Application, BoardError> {
        let updated = self
            .repository
            .update_application_status(id, update.status)
            .await?
            .ok_or(BoardError::ApplicationNotFound(id.into()))?;

        info!(application_id = %id, status = %updated.status, "application status updated");
        Ok(updated)
    }
}

/// Error raised by the board service.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// Carries the id as requested, which may lie outside the key range.
    #[error("Commission not found")]
    CommissionNotFound(i64),
    #[error("Application not found")]
    ApplicationNotFound(i64),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
