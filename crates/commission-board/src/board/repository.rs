use async_trait::async_trait;

use super::domain::{
    Application, ApplicationId, Commission, CommissionId, NewApplication, NewCommission,
};

/// Storage abstraction so the service can run against any relational backend.
///
/// Each call acquires its own store session and releases it before returning.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    async fn list_commissions(&self) -> Result<Vec<Commission>, RepositoryError>;
    async fn fetch_commission(&self, id: CommissionId)
        -> Result<Option<Commission>, RepositoryError>;
    async fn count_commissions(&self) -> Result<u64, RepositoryError>;
    async fn insert_commission(
        &self,
        commission: NewCommission,
    ) -> Result<Commission, RepositoryError>;

    /// Returns `RepositoryError::NotFound` when `commission_id` does not exist.
    async fn insert_application(
        &self,
        commission_id: CommissionId,
        application: NewApplication,
    ) -> Result<Application, RepositoryError>;
    async fn fetch_application(
        &self,
        id: ApplicationId,
    ) -> Result<Option<Application>, RepositoryError>;
    /// Newest first.
    async fn list_applications(&self) -> Result<Vec<Application>, RepositoryError>;
    async fn update_application_status(
        &self,
        id: ApplicationId,
        status: String,
    ) -> Result<Option<Application>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store query failed: {0}")]
    Query(String),
}
