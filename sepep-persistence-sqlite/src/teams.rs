use sepep_core::{Team, TeamId};
use sepep_server_app::domain::{RepoError, RepoRetrieveError, team::TeamRepository};
use sqlx::{Pool, Row, Sqlite, sqlite::SqliteRow};

use crate::{id_exists, storage_error};

pub struct SqliteTeamRepository {
    pool: Pool<Sqlite>,
}

impl SqliteTeamRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    fn team_from_row(row: &SqliteRow) -> sqlx::Result<Team> {
        Ok(Team {
            id: TeamId::new(row.try_get::<String, _>("id")?),
            name: row.try_get("name")?,
            coach: row.try_get("coach")?,
            neighbourhood: row.try_get("neighbourhood")?,
            division: row.try_get("division")?,
        })
    }
}

#[async_trait::async_trait]
impl TeamRepository for SqliteTeamRepository {
    async fn list_teams(&self) -> Result<Vec<Team>, RepoError> {
        let rows = sqlx::query("SELECT * FROM teams ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;
        rows.iter()
            .map(Self::team_from_row)
            .collect::<sqlx::Result<Vec<_>>>()
            .map_err(storage_error)
    }

    async fn get_team(&self, id: &TeamId) -> Result<Team, RepoRetrieveError> {
        let row = sqlx::query("SELECT * FROM teams WHERE id = ?")
            .bind(id.as_str())
            .fetch_one(&self.pool)
            .await;
        match row.and_then(|row| Self::team_from_row(&row)) {
            Ok(team) => Ok(team),
            Err(sqlx::Error::RowNotFound) => Err(RepoRetrieveError::NotFound),
            Err(e) => Err(RepoRetrieveError::StorageError(e.to_string())),
        }
    }

    async fn upsert_team(&self, team: Team) -> Result<bool, RepoError> {
        let is_new = !id_exists(&self.pool, "teams", team.id.as_str())
            .await
            .map_err(storage_error)?;
        sqlx::query(
            "INSERT INTO teams (id, name, coach, neighbourhood, division) VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                coach = excluded.coach,
                neighbourhood = excluded.neighbourhood,
                division = excluded.division",
        )
        .bind(team.id.as_str())
        .bind(&team.name)
        .bind(&team.coach)
        .bind(&team.neighbourhood)
        .bind(&team.division)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(is_new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_pool;

    #[tokio::test]
    async fn test_upsert_keeps_position() {
        let repo = SqliteTeamRepository::new(test_pool().await);
        assert!(
            repo.upsert_team(Team::new("A02", "Falcons").with_division("Year 7"))
                .await
                .unwrap()
        );
        assert!(repo.upsert_team(Team::new("A01", "Kestrels")).await.unwrap());
        assert!(
            !repo
                .upsert_team(Team::new("A02", "Falcons II").with_neighbourhood("South"))
                .await
                .unwrap()
        );

        let teams = repo.list_teams().await.unwrap();
        assert_eq!(
            teams,
            vec![
                Team::new("A02", "Falcons II").with_neighbourhood("South"),
                Team::new("A01", "Kestrels"),
            ]
        );
    }

    #[tokio::test]
    async fn test_get_team() {
        let repo = SqliteTeamRepository::new(test_pool().await);
        let team = Team::new("A01", "Kestrels")
            .with_neighbourhood("North")
            .with_division("Year 7");
        repo.upsert_team(team.clone()).await.unwrap();

        assert_eq!(repo.get_team(&TeamId::new("A01")).await.unwrap(), team);
        assert!(matches!(
            repo.get_team(&TeamId::new("A09")).await,
            Err(RepoRetrieveError::NotFound)
        ));
    }
}
