use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;

use crate::{config::Config, error::Error, model::app::AppState, router, service::seed};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected & migrations applied");

    Ok(db)
}

/// Insert the demo users when enabled by `LOAD_SEED_DATA`
pub async fn load_seed_data(config: &Config, db: &DatabaseConnection) -> Result<(), Error> {
    if !config.load_seed_data {
        return Ok(());
    }

    seed::seed_users(db).await?;

    Ok(())
}

/// Bind the listener & serve the API until the process is stopped
pub async fn serve(config: &Config, db: DatabaseConnection) -> Result<(), Error> {
    let addr = config.socket_addr()?;
    let app = router::routes().with_state(AppState::from(db));

    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
