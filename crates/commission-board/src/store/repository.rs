use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set,
    TransactionTrait,
};

use super::entities::{application, commission};
use crate::board::domain::{
    Application, ApplicationId, Commission, CommissionId, NewApplication, NewCommission,
    PENDING_STATUS,
};
use crate::board::repository::{BoardRepository, RepositoryError};

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        match &err {
            DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => Self::Unavailable(err.to_string()),
            _ => Self::Query(err.to_string()),
        }
    }
}

impl From<commission::Model> for Commission {
    fn from(model: commission::Model) -> Self {
        Self {
            id: CommissionId(model.id),
            title: model.title,
            description: model.description,
            category: model.category,
        }
    }
}

impl From<application::Model> for Application {
    fn from(model: application::Model) -> Self {
        Self {
            id: ApplicationId(model.id),
            commission_id: CommissionId(model.commission_id),
            full_name: model.full_name,
            email: model.email,
            portfolio_url: model.portfolio_url,
            cover_letter: model.cover_letter,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// Repository backed by a SeaORM connection pool.
#[derive(Debug, Clone)]
pub struct SeaOrmBoardRepository {
    db: DatabaseConnection,
}

impl SeaOrmBoardRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BoardRepository for SeaOrmBoardRepository {
    async fn list_commissions(&self) -> Result<Vec<Commission>, RepositoryError> {
        let rows = commission::Entity::find()
            .order_by_asc(commission::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Commission::from).collect())
    }

    async fn fetch_commission(
        &self,
        id: CommissionId,
    ) -> Result<Option<Commission>, RepositoryError> {
        let row = commission::Entity::find_by_id(id.0).one(&self.db).await?;
        Ok(row.map(Commission::from))
    }

    async fn count_commissions(&self) -> Result<u64, RepositoryError> {
        Ok(commission::Entity::find().count(&self.db).await?)
    }

    async fn insert_commission(
        &self,
        commission: NewCommission,
    ) -> Result<Commission, RepositoryError> {
        let model = commission::ActiveModel {
            title: Set(commission.title),
            description: Set(commission.description),
            category: Set(commission.category),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(model.into())
    }

    async fn insert_application(
        &self,
        commission_id: CommissionId,
        application: NewApplication,
    ) -> Result<Application, RepositoryError> {
        let txn = self.db.begin().await?;

        let commission = commission::Entity::find_by_id(commission_id.0)
            .one(&txn)
            .await?;
        if commission.is_none() {
            txn.rollback().await?;
            return Err(RepositoryError::NotFound);
        }

        let model = application::ActiveModel {
            commission_id: Set(commission_id.0),
            full_name: Set(application.full_name),
            email: Set(application.email),
            portfolio_url: Set(application.portfolio_url),
            cover_letter: Set(application.cover_letter),
            status: Set(PENDING_STATUS.to_string()),
            created_at: Set(application.created_at),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(model.into())
    }

    async fn fetch_application(
        &self,
        id: ApplicationId,
    ) -> Result<Option<Application>, RepositoryError> {
        let row = application::Entity::find_by_id(id.0).one(&self.db).await?;
        Ok(row.map(Application::from))
    }

    async fn list_applications(&self) -> Result<Vec<Application>, RepositoryError> {
        let rows = application::Entity::find()
            .order_by_desc(application::Column::CreatedAt)
            .order_by_desc(application::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Application::from).collect())
    }

    async fn update_application_status(
        &self,
        id: ApplicationId,
        status: String,
    ) -> Result<Option<Application>, RepositoryError> {
        let Some(model) = application::Entity::find_by_id(id.0).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: application::ActiveModel = model.into();
        active.status = Set(status);
        let updated = active.update(&self.db).await?;
        Ok(Some(updated.into()))
    }
}

/// Stand-in used when the store could not be initialized at startup, so each
/// data request fails fast with `Unavailable` instead of crashing.
#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> RepositoryError {
        RepositoryError::Unavailable(self.reason.clone())
    }
}

#[async_trait]
impl BoardRepository for UnavailableStore {
    async fn list_commissions(&self) -> Result<Vec<Commission>, RepositoryError> {
        Err(self.error())
    }

    async fn fetch_commission(
        &self,
        _id: CommissionId,
    ) -> Result<Option<Commission>, RepositoryError> {
        Err(self.error())
    }

    async fn count_commissions(&self) -> Result<u64, RepositoryError> {
        Err(self.error())
    }

    async fn insert_commission(
        &self,
        _commission: NewCommission,
    ) -> Result<Commission, RepositoryError> {
        Err(self.error())
    }

    async fn insert_application(
        &self,
        _commission_id: CommissionId,
        _application: NewApplication,
    ) -> Result<Application, RepositoryError> {
        Err(self.error())
    }

    async fn fetch_application(
        &self,
        _id: ApplicationId,
    ) -> Result<Option<Application>, RepositoryError> {
        Err(self.error())
    }

    async fn list_applications(&self) -> Result<Vec<Application>, RepositoryError> {
        Err(self.error())
    }

    async fn update_application_status(
        &self,
        _id: ApplicationId,
        _status: String,
    ) -> Result<Option<Application>, RepositoryError> {
        Err(self.error())
    }
}
