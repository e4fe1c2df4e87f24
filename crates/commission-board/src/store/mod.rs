//! Relational persistence for commissions and applications.
//!
//! The connection pool is built once from [`StoreConfig`] and handed to the
//! repository; every repository call checks a connection out of the pool for
//! its own duration.

pub mod entities;
mod repository;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use tracing::info;

use crate::config::StoreConfig;
use entities::{application, commission};

pub use repository::{SeaOrmBoardRepository, UnavailableStore};

pub async fn connect(config: &StoreConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options.max_connections(config.max_connections);

    let db = Database::connect(options).await?;
    info!(url = %config.redacted_url(), "store connection pool ready");
    Ok(db)
}

/// Single-connection in-memory SQLite database, for tests and local demos.
pub async fn connect_in_memory() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    Database::connect(options).await
}

/// Create both tables when missing. Existing tables are left untouched.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut commissions = schema.create_table_from_entity(commission::Entity);
    commissions.if_not_exists();
    db.execute(backend.build(&commissions)).await?;

    let mut applications = schema.create_table_from_entity(application::Entity);
    applications.if_not_exists();
    db.execute(backend.build(&applications)).await?;

    Ok(())
}

/// Connect and make sure the schema exists.
pub async fn open(config: &StoreConfig) -> Result<DatabaseConnection, DbErr> {
    let db = connect(config).await?;
    create_schema(&db).await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    use crate::board::domain::{
        ApplicationId, CommissionId, NewApplication, NewCommission, PENDING_STATUS,
    };
    use crate::board::repository::{BoardRepository, RepositoryError};

    async fn repository() -> SeaOrmBoardRepository {
        let db = connect_in_memory().await.expect("in-memory sqlite");
        create_schema(&db).await.expect("schema created");
        SeaOrmBoardRepository::new(db)
    }

    fn posting(title: &str) -> NewCommission {
        NewCommission {
            title: title.to_string(),
            description: format!("{title} description"),
            category: "Design".to_string(),
        }
    }

    fn new_application(name: &str, offset_minutes: i64) -> NewApplication {
        let base = Utc
            .with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp");
        NewApplication {
            full_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            portfolio_url: None,
            cover_letter: "I would like to help.".to_string(),
            created_at: base + Duration::minutes(offset_minutes),
        }
    }

    #[tokio::test]
    async fn create_schema_is_idempotent() {
        let db = connect_in_memory().await.expect("in-memory sqlite");
        create_schema(&db).await.expect("first run");
        create_schema(&db).await.expect("second run");
    }

    #[tokio::test]
    async fn lists_exactly_the_seeded_commissions() {
        let repository = repository().await;
        let first = repository
            .insert_commission(posting("Illustrator"))
            .await
            .expect("insert");
        let second = repository
            .insert_commission(posting("Copywriter"))
            .await
            .expect("insert");

        let listed = repository.list_commissions().await.expect("list");
        assert_eq!(listed, vec![first.clone(), second.clone()]);
        assert_eq!(repository.count_commissions().await.expect("count"), 2);

        for commission in listed {
            let fetched = repository
                .fetch_commission(commission.id)
                .await
                .expect("fetch")
                .expect("present");
            assert_eq!(fetched, commission);
        }
    }

    #[tokio::test]
    async fn insert_application_assigns_fresh_ids_and_pending_status() {
        let repository = repository().await;
        let commission = repository
            .insert_commission(posting("Illustrator"))
            .await
            .expect("insert");

        let first = repository
            .insert_application(commission.id, new_application("Ada", 0))
            .await
            .expect("insert");
        let second = repository
            .insert_application(commission.id, new_application("Grace", 1))
            .await
            .expect("insert");

        assert_ne!(first.id, second.id);
        assert_eq!(first.status, PENDING_STATUS);
        assert_eq!(first.commission_id, commission.id);
        assert_eq!(
            repository
                .fetch_application(first.id)
                .await
                .expect("fetch")
                .as_ref(),
            Some(&first)
        );
    }

    #[tokio::test]
    async fn insert_application_for_unknown_commission_writes_nothing() {
        let repository = repository().await;

        let err = repository
            .insert_application(CommissionId(404), new_application("Ada", 0))
            .await
            .expect_err("unknown commission rejected");

        assert!(matches!(err, RepositoryError::NotFound));
        assert!(repository
            .list_applications()
            .await
            .expect("list")
            .is_empty());
    }

    #[tokio::test]
    async fn list_applications_orders_newest_first_regardless_of_insert_order() {
        let repository = repository().await;
        let commission = repository
            .insert_commission(posting("Illustrator"))
            .await
            .expect("insert");

        for (name, offset) in [("Middle", 10), ("Oldest", 0), ("Newest", 20), ("Tie", 10)] {
            repository
                .insert_application(commission.id, new_application(name, offset))
                .await
                .expect("insert");
        }

        let listed = repository.list_applications().await.expect("list");
        assert_eq!(listed.len(), 4);
        assert!(listed
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
        assert_eq!(listed[0].full_name, "Newest");
        assert_eq!(listed[3].full_name, "Oldest");
    }

    #[tokio::test]
    async fn update_status_overwrites_and_reports_missing_rows() {
        let repository = repository().await;
        let commission = repository
            .insert_commission(posting("Illustrator"))
            .await
            .expect("insert");
        let application = repository
            .insert_application(commission.id, new_application("Ada", 0))
            .await
            .expect("insert");

        let accepted = repository
            .update_application_status(application.id, "Accepted".to_string())
            .await
            .expect("update")
            .expect("present");
        assert_eq!(accepted.status, "Accepted");
        assert_eq!(accepted.created_at, application.created_at);

        let rejected = repository
            .update_application_status(application.id, "Rejected".to_string())
            .await
            .expect("update")
            .expect("present");
        assert_eq!(rejected.status, "Rejected");

        let missing = repository
            .update_application_status(ApplicationId(999), "Accepted".to_string())
            .await
            .expect("update runs");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = UnavailableStore::new("connection refused");
        let err = store.list_commissions().await.expect_err("fails");
        assert!(matches!(err, RepositoryError::Unavailable(reason) if reason == "connection refused"));
        assert!(store.fetch_application(ApplicationId(1)).await.is_err());
    }
}
