use sepep_core::{FixtureId, MatchResult, ResultStatus};
use sepep_server_app::domain::{RepoError, result::ResultRepository};
use sqlx::{Pool, Row, Sqlite, sqlite::SqliteRow};

use crate::{id_exists, storage_error};

pub struct SqliteResultRepository {
    pool: Pool<Sqlite>,
}

impl SqliteResultRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    fn result_from_row(row: &SqliteRow) -> sqlx::Result<MatchResult> {
        let status: Option<String> = row.try_get("status")?;
        Ok(MatchResult {
            id: FixtureId::new(row.try_get::<String, _>("id")?),
            home_score: score_from_column(row.try_get("home_score")?)?,
            away_score: score_from_column(row.try_get("away_score")?)?,
            status: status.and_then(|s| s.parse::<ResultStatus>().ok()),
        })
    }
}

fn score_from_column(value: Option<i64>) -> sqlx::Result<Option<u32>> {
    value
        .map(u32::try_from)
        .transpose()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

#[async_trait::async_trait]
impl ResultRepository for SqliteResultRepository {
    async fn list_results(&self) -> Result<Vec<MatchResult>, RepoError> {
        let rows = sqlx::query("SELECT * FROM results ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;
        rows.iter()
            .map(Self::result_from_row)
            .collect::<sqlx::Result<Vec<_>>>()
            .map_err(storage_error)
    }

    async fn upsert_result(&self, result: MatchResult) -> Result<bool, RepoError> {
        let is_new = !id_exists(&self.pool, "results", result.id.as_str())
            .await
            .map_err(storage_error)?;
        sqlx::query(
            "INSERT INTO results (id, home_score, away_score, status) VALUES (?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                home_score = excluded.home_score,
                away_score = excluded.away_score,
                status = excluded.status",
        )
        .bind(result.id.as_str())
        .bind(result.home_score.map(i64::from))
        .bind(result.away_score.map(i64::from))
        .bind(result.status.map(|s| s.as_str()))
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(is_new)
    }

    async fn delete_result(&self, id: &FixtureId) -> Result<bool, RepoError> {
        let done = sqlx::query("DELETE FROM results WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(done.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_pool;

    #[tokio::test]
    async fn test_result_storage() {
        let repo = SqliteResultRepository::new(test_pool().await);
        let live = MatchResult {
            status: Some(ResultStatus::Live),
            ..MatchResult::new("R1M1", 3, 2)
        };
        let pending = MatchResult {
            id: FixtureId::new("R1M2"),
            home_score: None,
            away_score: Some(1),
            status: None,
        };
        assert!(repo.upsert_result(live).await.unwrap());
        assert!(repo.upsert_result(pending.clone()).await.unwrap());

        let final_score = MatchResult {
            status: Some(ResultStatus::Final),
            ..MatchResult::new("R1M1", 5, 2)
        };
        assert!(!repo.upsert_result(final_score.clone()).await.unwrap());

        assert_eq!(
            repo.list_results().await.unwrap(),
            vec![final_score, pending]
        );
    }

    #[tokio::test]
    async fn test_delete_result() {
        let repo = SqliteResultRepository::new(test_pool().await);
        repo.upsert_result(MatchResult::new("R1M1", 1, 0))
            .await
            .unwrap();
        assert!(repo.delete_result(&FixtureId::new("R1M1")).await.unwrap());
        assert!(!repo.delete_result(&FixtureId::new("R1M1")).await.unwrap());
        assert!(repo.list_results().await.unwrap().is_empty());
    }
}
