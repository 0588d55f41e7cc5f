use chrono::{NaiveDate, NaiveTime};
use sepep_core::{Fixture, FixtureId, TeamId};
use sepep_server_app::domain::{RepoError, RepoRetrieveError, fixture::FixtureRepository};
use sqlx::{Pool, Row, Sqlite, sqlite::SqliteRow};

use crate::{id_exists, storage_error};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

pub struct SqliteFixtureRepository {
    pool: Pool<Sqlite>,
}

impl SqliteFixtureRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    fn fixture_from_row(row: &SqliteRow) -> sqlx::Result<Fixture> {
        let date: Option<String> = row.try_get("date")?;
        let time: Option<String> = row.try_get("time")?;
        Ok(Fixture {
            id: FixtureId::new(row.try_get::<String, _>("id")?),
            division: row.try_get("division")?,
            round: row.try_get("round")?,
            date: date
                .map(|d| NaiveDate::parse_from_str(&d, DATE_FORMAT))
                .transpose()
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
            time: time
                .map(|t| NaiveTime::parse_from_str(&t, TIME_FORMAT))
                .transpose()
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
            court: row.try_get("court")?,
            home_id: TeamId::new(row.try_get::<String, _>("home_id")?),
            away_id: TeamId::new(row.try_get::<String, _>("away_id")?),
        })
    }
}

#[async_trait::async_trait]
impl FixtureRepository for SqliteFixtureRepository {
    async fn list_fixtures(&self) -> Result<Vec<Fixture>, RepoError> {
        let rows = sqlx::query("SELECT * FROM fixtures ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;
        rows.iter()
            .map(Self::fixture_from_row)
            .collect::<sqlx::Result<Vec<_>>>()
            .map_err(storage_error)
    }

    async fn get_fixture(&self, id: &FixtureId) -> Result<Fixture, RepoRetrieveError> {
        let row = sqlx::query("SELECT * FROM fixtures WHERE id = ?")
            .bind(id.as_str())
            .fetch_one(&self.pool)
            .await;
        match row.and_then(|row| Self::fixture_from_row(&row)) {
            Ok(fixture) => Ok(fixture),
            Err(sqlx::Error::RowNotFound) => Err(RepoRetrieveError::NotFound),
            Err(e) => Err(RepoRetrieveError::StorageError(e.to_string())),
        }
    }

    async fn upsert_fixture(&self, fixture: Fixture) -> Result<bool, RepoError> {
        let is_new = !id_exists(&self.pool, "fixtures", fixture.id.as_str())
            .await
            .map_err(storage_error)?;
        sqlx::query(
            "INSERT INTO fixtures (id, division, round, date, time, court, home_id, away_id)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                division = excluded.division,
                round = excluded.round,
                date = excluded.date,
                time = excluded.time,
                court = excluded.court,
                home_id = excluded.home_id,
                away_id = excluded.away_id",
        )
        .bind(fixture.id.as_str())
        .bind(&fixture.division)
        .bind(&fixture.round)
        .bind(fixture.date.map(|d| d.format(DATE_FORMAT).to_string()))
        .bind(fixture.time.map(|t| t.format(TIME_FORMAT).to_string()))
        .bind(&fixture.court)
        .bind(fixture.home_id.as_str())
        .bind(fixture.away_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(is_new)
    }

    async fn delete_fixture(&self, id: &FixtureId) -> Result<bool, RepoError> {
        let done = sqlx::query("DELETE FROM fixtures WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(done.rows_affected() > 0)
    }
}
