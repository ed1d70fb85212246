use sqlx::{
    SqlitePool,
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{str::FromStr, sync::Arc};

pub mod entry;
pub mod form;
pub mod user;

pub mod models {
    pub mod entry;
    pub mod form;
    pub mod user;
}

pub mod dtos {
    pub mod entry;
    pub mod form;
    pub mod user;
}

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens (creating if missing) the SQLite database at `database_url` and
/// applies the idempotent schema migrations.
pub async fn setup(database_url: &str) -> Result<Arc<SqlitePool>, Box<dyn std::error::Error>> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    MIGRATOR.run(&pool).await?;

    Ok(Arc::new(pool))
}

/// An in-memory database with the same schema, for tests. Capped at one
/// connection: every pooled connection to `sqlite::memory:` would otherwise
/// open its own empty database.
pub async fn setup_memory() -> Result<Arc<SqlitePool>, Box<dyn std::error::Error>> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    MIGRATOR.run(&pool).await?;

    Ok(Arc::new(pool))
}
