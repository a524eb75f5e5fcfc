use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::AppConfig;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id            UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name          TEXT NOT NULL,
        email         TEXT NOT NULL,
        password_hash TEXT NOT NULL,
        created_at    TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

const CREATE_USERS_EMAIL_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS users_email_key ON users (email)";

pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let db = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .context("connect to database")?;
    info!("connected to database");
    Ok(db)
}

/// Idempotent bootstrap of the users table and its unique email index.
pub async fn ensure_schema(db: &PgPool) -> anyhow::Result<()> {
    sqlx::query(CREATE_USERS)
        .execute(db)
        .await
        .context("create users table")?;
    sqlx::query(CREATE_USERS_EMAIL_INDEX)
        .execute(db)
        .await
        .context("create users email index")?;
    Ok(())
}
