// src/db/mod.rs

//! Pool setup, migrations and the query helpers for each table.

pub mod categories;
pub mod questions;

use std::time::Duration;

use sqlx::{
    AnyPool,
    any::{AnyPoolOptions, install_default_drivers},
    migrate::MigrateError,
};

use crate::config::Backend;

/// Opens a connection pool for a `postgres://` or `sqlite:` URL.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<AnyPool, sqlx::Error> {
    install_default_drivers();

    AnyPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await
}

/// Applies the embedded migrations matching the backend.
pub async fn run_migrations(pool: &AnyPool, backend: Backend) -> Result<(), MigrateError> {
    match backend {
        Backend::Postgres => sqlx::migrate!("./migrations/postgres").run(pool).await,
        Backend::Sqlite => sqlx::migrate!("./migrations/sqlite").run(pool).await,
    }
}
