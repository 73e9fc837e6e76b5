use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

use crate::domain::a001_page_type::repository;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database {}", normalized);
    let conn = Database::connect(&db_url).await?;
    ensure_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Minimal schema bootstrap: creates missing tables and indexes
pub async fn ensure_schema<C: ConnectionTrait>(conn: &C) -> anyhow::Result<()> {
    let check_page_type_table = r#"
        SELECT name FROM sqlite_master WHERE type='table' AND name='a001_page_type';
    "#;
    let page_type_table_exists = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            check_page_type_table.to_string(),
        ))
        .await?;

    if page_type_table_exists.is_empty() {
        tracing::info!("Creating a001_page_type table");
        let create_page_type_table_sql = r#"
            CREATE TABLE a001_page_type (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                slug TEXT NOT NULL,
                search_text TEXT NOT NULL DEFAULT '',
                is_deleted INTEGER NOT NULL DEFAULT 0,
                created_at TEXT,
                updated_at TEXT,
                version INTEGER NOT NULL DEFAULT 0
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_page_type_table_sql.to_string(),
        ))
        .await?;
    } else {
        // Ensure search_text column exists; add and fill if missing
        let pragma = format!("PRAGMA table_info('{}');", "a001_page_type");
        let cols = conn
            .query_all(Statement::from_string(DatabaseBackend::Sqlite, pragma))
            .await?;
        let has_search_text = cols.iter().any(|row| {
            row.try_get::<String>("", "name")
                .map(|name| name == "search_text")
                .unwrap_or(false)
        });
        if !has_search_text {
            tracing::info!("Adding search_text column to a001_page_type");
            conn.execute(Statement::from_string(
                DatabaseBackend::Sqlite,
                "ALTER TABLE a001_page_type ADD COLUMN search_text TEXT NOT NULL DEFAULT '';"
                    .to_string(),
            ))
            .await?;
            let filled = repository::backfill_search_text(conn).await?;
            tracing::info!("Filled search_text for {} page types", filled);
        }
    }

    for index_sql in [
        "CREATE INDEX IF NOT EXISTS idx_a001_page_type_name ON a001_page_type (name, id);",
        "CREATE INDEX IF NOT EXISTS idx_a001_page_type_slug ON a001_page_type (slug, id);",
    ] {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            index_sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}

/// Connection to a private in-memory database with the schema applied
#[cfg(test)]
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let mut opt = sea_orm::ConnectOptions::new("sqlite::memory:".to_string());
    // one connection, otherwise every pooled connection gets its own empty database
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(opt).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn test_ensure_schema_adds_and_fills_search_text() {
        let mut opt = sea_orm::ConnectOptions::new("sqlite::memory:".to_string());
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        let conn = Database::connect(opt).await.unwrap();
        for sql in [
            "CREATE TABLE a001_page_type (id TEXT PRIMARY KEY NOT NULL, name TEXT NOT NULL, slug TEXT NOT NULL, is_deleted INTEGER NOT NULL DEFAULT 0, created_at TEXT, updated_at TEXT, version INTEGER NOT NULL DEFAULT 0);",
            "INSERT INTO a001_page_type (id, name, slug) VALUES ('00000000-0000-0000-0000-000000000001', 'Блог', 'blog');",
        ] {
            conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
                .await
                .unwrap();
        }

        ensure_schema(&conn).await.unwrap();

        let row = repository::Entity::find_by_id("00000000-0000-0000-0000-000000000001".to_string())
            .one(&conn)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.search_text, "блог blog");
    }
}
