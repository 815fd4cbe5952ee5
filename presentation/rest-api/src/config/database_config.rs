use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::seed::seed_catalog;
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "./infrastructure/persistence/migrations";

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - DATABASE_MIGRATIONS_PATH: Directory with the SQL migrations
///   (default: "./infrastructure/persistence/migrations")
/// - SEED_DATABASE: When "true", loads the sample catalog into an empty database
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails or a
/// migration cannot be applied
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let mut config = DatabaseConfig::new(db_url);
    if let Ok(raw) = env::var("DATABASE_MAX_CONNECTIONS") {
        let max_connections = raw
            .parse::<u32>()
            .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {}", raw))?;
        config = config.with_max_connections(max_connections);
    }

    let pool = create_postgres_pool(&config).await?;

    let migrations_path =
        env::var("DATABASE_MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());
    run_migrations(&pool, &migrations_path).await?;

    if seed_enabled(env::var("SEED_DATABASE").ok().as_deref()) {
        let seeded = seed_catalog(&pool)
            .await
            .context("failed to seed the catalog")?;
        if seeded {
            tracing::info!("Sample catalog loaded");
        } else {
            tracing::info!("Catalog already has data, skipping seed");
        }
    }

    Ok(pool)
}

fn seed_enabled(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1" | "yes")
    )
}
