use commission_board::board::{default_commissions, seed_commissions, SeedOutcome};
use commission_board::config::AppConfig;
use commission_board::error::AppError;
use commission_board::store::{self, SeaOrmBoardRepository};
use commission_board::telemetry;
use tracing::info;

pub(crate) async fn run_migrate() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    store::open(&config.store).await?;
    info!(url = %config.store.redacted_url(), "schema ready");
    println!("Schema ready at {}", config.store.redacted_url());
    Ok(())
}

pub(crate) async fn run_seed() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let db = store::open(&config.store).await?;
    let repository = SeaOrmBoardRepository::new(db);

    match seed_commissions(&repository, &default_commissions()).await? {
        SeedOutcome::Seeded(count) => println!("Seeded database with {count} commission(s)."),
        SeedOutcome::AlreadySeeded => println!("Database already seeded."),
    }

    Ok(())
}
