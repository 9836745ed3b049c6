//! Persistence for the `events` and `contacts` collections.
//!
//! Handlers and the client-side repository only see the traits; the backend
//! is picked from the `DATABASE_URL` scheme in [`connect`].

pub mod postgres;
pub mod sqlite;

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::info;

use crate::config::Config;
use crate::models::{ContactSubmission, Event, EventFields, NewContact};
use crate::utils::error::AppError;

pub use postgres::{PgContactStore, PgEventStore};
pub use sqlite::{SqliteContactStore, SqliteEventStore};

#[async_trait]
pub trait EventStore: Send + Sync {
    /// All events, newest `date` first.
    async fn list(&self) -> Result<Vec<Event>, AppError>;
    async fn insert(&self, fields: &EventFields) -> Result<Event, AppError>;
    /// Replaces every writable field. Last write wins.
    async fn update(&self, id: &str, fields: &EventFields) -> Result<Event, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert(&self, contact: &NewContact) -> Result<ContactSubmission, AppError>;
}

#[derive(Clone)]
pub struct Stores {
    pub events: Arc<dyn EventStore>,
    pub contacts: Arc<dyn ContactStore>,
}

pub async fn connect(config: &Config) -> Result<Stores, AppError> {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let opts = PgConnectOptions::from_str(database_url)?;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await?;

        sqlx::migrate!("./migrations/postgres")
            .run(&pool)
            .await
            .map_err(|e| AppError::Internal(format!("migrations failed: {e}")))?;
        info!("Migrations run successfully");

        Ok(Stores {
            events: Arc::new(PgEventStore::new(pool.clone())),
            contacts: Arc::new(PgContactStore::new(pool)),
        })
    } else {
        info!("Initializing SQLite connection with WAL mode...");

        let opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await?;

        sqlite::migrate(&pool).await?;
        info!("Migrations run successfully");

        Ok(Stores {
            events: Arc::new(SqliteEventStore::new(pool.clone())),
            contacts: Arc::new(SqliteContactStore::new(pool)),
        })
    }
}
