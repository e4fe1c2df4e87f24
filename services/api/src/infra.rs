use commission_board::board::BoardRepository;
use commission_board::config::StoreConfig;
use commission_board::store::{self, SeaOrmBoardRepository, UnavailableStore};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::error;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    /// `None` when the store failed to initialize at startup.
    pub(crate) store: Option<DatabaseConnection>,
}

/// Connects the store once at startup.
///
/// A failed connection does not abort the process: the returned repository
/// answers every call with `Unavailable` so requests fail fast with 503.
pub(crate) async fn build_repository(
    config: &StoreConfig,
) -> (Arc<dyn BoardRepository>, Option<DatabaseConnection>) {
    match store::open(config).await {
        Ok(db) => {
            let repository: Arc<dyn BoardRepository> =
                Arc::new(SeaOrmBoardRepository::new(db.clone()));
            (repository, Some(db))
        }
        Err(err) => {
            error!(
                error = %err,
                url = %config.redacted_url(),
                "store initialization failed; data routes will answer 503"
            );
            let repository: Arc<dyn BoardRepository> =
                Arc::new(UnavailableStore::new(err.to_string()));
            (repository, None)
        }
    }
}
