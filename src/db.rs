use log::info;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Statement};
use std::fs::{self, OpenOptions};
use std::path::Path;

use crate::config::AppConfig;

pub async fn connect_db(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let url = config.database_url();
    if url.starts_with("postgres:") || url.starts_with("postgresql:") {
        return Err(DbErr::Custom(
            "postgres is not supported, use a sqlite or mysql DATABASE_URL".to_string(),
        ));
    }
    ensure_sqlite_path(&url);
    let db = Database::connect(&url).await?;
    init_schema(&db).await?;
    info!("database ready ({:?})", db.get_database_backend());
    Ok(db)
}

fn ensure_sqlite_path(url: &str) {
    let Some(rest) = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
    else {
        return;
    };
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.contains(":memory:") {
        return;
    }
    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let _ = OpenOptions::new().create(true).append(true).open(path);
}

/// Applies the embedded schema for the connected backend. Every statement is
/// `CREATE TABLE IF NOT EXISTS`, so running it against an existing database is a no-op.
pub async fn init_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let sql = match backend {
        DbBackend::Sqlite => include_str!("../schema-sqlite.sql"),
        DbBackend::MySql => include_str!("../schema-mysql.sql"),
        DbBackend::Postgres => {
            return Err(DbErr::Custom("postgres schema is not bundled".to_string()))
        }
    };
    for stmt in split_sql(sql) {
        db.execute(Statement::from_string(backend, stmt)).await?;
    }
    Ok(())
}

fn split_sql(input: &str) -> Vec<String> {
    let mut buf = String::new();
    for line in input.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("--") || trimmed.is_empty() {
            continue;
        }
        buf.push_str(line);
        buf.push('\n');
    }
    buf.split(';')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
