use std::str::FromStr;

use sepep_server_app::domain::RepoError;
use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

pub mod fixtures;
pub mod results;
pub mod teams;

pub use fixtures::SqliteFixtureRepository;
pub use results::SqliteResultRepository;
pub use teams::SqliteTeamRepository;

const SCHEMA: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS teams (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        coach TEXT NOT NULL,
        neighbourhood TEXT,
        division TEXT
    )",
    "CREATE TABLE IF NOT EXISTS fixtures (
        id TEXT PRIMARY KEY NOT NULL,
        division TEXT,
        round TEXT,
        date TEXT,
        time TEXT,
        court TEXT,
        home_id TEXT NOT NULL,
        away_id TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS results (
        id TEXT PRIMARY KEY NOT NULL,
        home_score INTEGER,
        away_score INTEGER,
        status TEXT
    )",
];

/// Opens the database at `url`, creating the file if needed.
///
/// An in-memory database lives as long as its connection, so those pools are
/// pinned to one connection that is never recycled.
pub async fn create_db_pool(url: &str) -> Result<Pool<Sqlite>, sqlx::Error> {
    let conn_options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    let pool_options = if url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };
    pool_options.connect_with(conn_options).await
}

pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    log::debug!("Database schema is up to date");
    Ok(())
}

fn storage_error(e: sqlx::Error) -> RepoError {
    RepoError::StorageError(e.to_string())
}

async fn id_exists(pool: &Pool<Sqlite>, table: &str, id: &str) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as(&format!("SELECT 1 FROM {} WHERE id = ?", table))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

#[cfg(test)]
pub(crate) async fn test_pool() -> Pool<Sqlite> {
    let pool = create_db_pool("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    run_migrations(&pool).await.expect("Failed to migrate");
    pool
}
