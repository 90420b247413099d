use sea_orm::DatabaseConnection;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::server::{config::Config, error::Error, service::directory::DirectoryService};

/// Log filter used when `RUST_LOG` is unset. Reset notifications stay at info so
/// temporary passwords are not logged unless asked for.
pub const DEFAULT_LOG_FILTER: &str = "info,petpal=debug,petpal::server::util::notify=info";

/// Initialise the global tracing subscriber
///
/// Honours `RUST_LOG`, defaulting to [`DEFAULT_LOG_FILTER`].
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Connect to the database, run migrations and seed default categories
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    DirectoryService::new(&db).seed_default_categories().await?;

    Ok(db)
}

/// Configure cookie sessions backed by an in-process store
pub fn session_layer(config: &Config) -> SessionManagerLayer<MemoryStore> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};

    // Plain HTTP is only expected in debug builds
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(!cfg!(debug_assertions))
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            config.session_expiry_days,
        )))
}
