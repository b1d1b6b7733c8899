//! Storage backend selection.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::Config;
use crate::domain::repositories::{BookRepository, LinkRepository};
use crate::infrastructure::persistence::{
    JsonBookRepository, JsonLinkRepository, JsonStore, PgBookRepository, PgLinkRepository,
};

/// The store links and books live in, chosen once at startup.
///
/// A configured database that cannot be reached is a startup error; there is
/// no silent fallback to JSON files.
#[derive(Clone)]
pub enum StorageBackend {
    Postgres(Arc<PgPool>),
    JsonFiles(Arc<JsonStore>),
}

impl StorageBackend {
    /// Connects the backend described by `config`.
    ///
    /// For PostgreSQL the embedded migrations are applied before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable, migrations fail, or
    /// the data directory cannot be created.
    pub async fn connect(config: &Config) -> Result<Self> {
        match config.database_url {
            Some(ref url) => {
                let pool = PgPoolOptions::new()
                    .max_connections(config.db_max_connections)
                    .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                    .connect(url)
                    .await
                    .context("Failed to connect to database")?;
                info!("Connected to database");

                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to migrate")?;

                Ok(Self::Postgres(Arc::new(pool)))
            }
            None => Ok(Self::json_files(JsonStore::open(&config.data_dir).await?)),
        }
    }

    pub fn json_files(store: JsonStore) -> Self {
        Self::JsonFiles(Arc::new(store))
    }

    pub fn book_repository(&self) -> Arc<dyn BookRepository> {
        match self {
            Self::Postgres(pool) => Arc::new(PgBookRepository::new(pool.clone())),
            Self::JsonFiles(store) => Arc::new(JsonBookRepository::new(store.clone())),
        }
    }

    pub fn link_repository(&self) -> Arc<dyn LinkRepository> {
        match self {
            Self::Postgres(pool) => Arc::new(PgLinkRepository::new(pool.clone())),
            Self::JsonFiles(store) => Arc::new(JsonLinkRepository::new(store.clone())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::JsonFiles(_) => "json",
        }
    }

    /// Reports whether the store is currently usable.
    pub async fn health_check(&self) -> bool {
        match self {
            Self::Postgres(pool) => sqlx::query("SELECT 1")
                .execute(pool.as_ref())
                .await
                .is_ok(),
            Self::JsonFiles(store) => store.health_check().await,
        }
    }
}
