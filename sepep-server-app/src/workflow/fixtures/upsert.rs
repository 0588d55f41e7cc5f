use std::sync::Arc;

use sepep_core::{Fixture, TeamId};

use crate::domain::{
    FieldErrors, RepoError, RepoRetrieveError,
    fixture::{FixtureDraft, FixtureRepository, validate_fixture},
    team::TeamRepository,
};

#[async_trait::async_trait]
pub trait UpsertFixtureUseCase {
    async fn upsert_fixture(&self, draft: FixtureDraft) -> Result<Fixture, UpsertFixtureError>;
}

#[derive(Debug, PartialEq, Eq)]
pub enum UpsertFixtureError {
    Invalid(FieldErrors),
    RepositoryError,
}

pub struct UpsertFixtureUseCaseImpl<F: FixtureRepository, T: TeamRepository> {
    fixture_repository: Arc<F>,
    team_repository: Arc<T>,
}

impl<F: FixtureRepository, T: TeamRepository> UpsertFixtureUseCaseImpl<F, T> {
    pub fn new(fixture_repository: Arc<F>, team_repository: Arc<T>) -> Self {
        Self {
            fixture_repository,
            team_repository,
        }
    }
}

impl<F: FixtureRepository + Send + Sync, T: TeamRepository + Send + Sync>
    UpsertFixtureUseCaseImpl<F, T>
{
    // Unknown teams are allowed; the ladder simply ignores the fixture.
    async fn warn_if_unknown(&self, fixture_id: &str, team_id: &TeamId) {
        match self.team_repository.get_team(team_id).await {
            Ok(_) => {}
            Err(RepoRetrieveError::NotFound) => {
                log::warn!("Fixture {} references unknown team {}", fixture_id, team_id);
            }
            Err(RepoRetrieveError::StorageError(e)) => {
                log::error!("Failed to look up team {}: {}", team_id, e);
            }
        }
    }
}

#[async_trait::async_trait]
impl<F: FixtureRepository + Send + Sync + 'static, T: TeamRepository + Send + Sync + 'static>
    UpsertFixtureUseCase for UpsertFixtureUseCaseImpl<F, T>
{
    async fn upsert_fixture(&self, draft: FixtureDraft) -> Result<Fixture, UpsertFixtureError> {
        let draft = draft.sanitized();
        let existing = match self.fixture_repository.list_fixtures().await {
            Ok(fixtures) => fixtures,
            Err(RepoError::StorageError(e)) => {
                log::error!("Error listing fixtures: {}", e);
                return Err(UpsertFixtureError::RepositoryError);
            }
        };
        validate_fixture(&draft, &existing).map_err(UpsertFixtureError::Invalid)?;
        let fixture = draft.into_fixture();

        self.warn_if_unknown(fixture.id.as_str(), &fixture.home_id).await;
        self.warn_if_unknown(fixture.id.as_str(), &fixture.away_id).await;

        match self.fixture_repository.upsert_fixture(fixture.clone()).await {
            Ok(created) => {
                log::info!(
                    "{} fixture {}: {} v {}",
                    if created { "Created" } else { "Updated" },
                    fixture.id,
                    fixture.home_id,
                    fixture.away_id
                );
                Ok(fixture)
            }
            Err(RepoError::StorageError(e)) => {
                log::error!("Failed to save fixture {}: {}", fixture.id, e);
                Err(UpsertFixtureError::RepositoryError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use sepep_core::{FixtureId, Team};

    use super::*;
    use crate::testing::{MockFixtureRepository, MockTeamRepository};

    fn draft(id: Option<&str>, court: &str) -> FixtureDraft {
        FixtureDraft {
            id: id.map(str::to_string),
            division: Some("Year 7".to_string()),
            round: Some("Round 1".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 3, 4),
            time: NaiveTime::from_hms_opt(13, 30, 0),
            court: Some(court.to_string()),
            home_id: Some("A01".to_string()),
            away_id: Some("A02".to_string()),
        }
    }

    fn teams() -> Arc<MockTeamRepository> {
        Arc::new(MockTeamRepository::with(vec![
            Team::new("A01", "Kestrels"),
            Team::new("A02", "Falcons"),
        ]))
    }

    #[tokio::test]
    async fn test_create_and_edit_fixture() {
        let repo = Arc::new(MockFixtureRepository::default());
        let use_case = UpsertFixtureUseCaseImpl::new(repo.clone(), teams());

        let created = use_case.upsert_fixture(draft(None, "Court 1")).await.unwrap();
        assert_eq!(created.id.as_str().len(), 8);

        // Rescheduling in the same slot does not clash with itself.
        let edited = use_case
            .upsert_fixture(FixtureDraft {
                round: Some("Round 2".to_string()),
                ..draft(Some(created.id.as_str()), "Court 1")
            })
            .await
            .unwrap();
        assert_eq!(edited.id, created.id);

        let stored = repo.snapshot();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].round.as_deref(), Some("Round 2"));
    }

    #[tokio::test]
    async fn test_court_clash_is_rejected() {
        let repo = Arc::new(MockFixtureRepository::default());
        let use_case = UpsertFixtureUseCaseImpl::new(repo.clone(), teams());

        use_case
            .upsert_fixture(draft(Some("R1M1"), "Court 1"))
            .await
            .unwrap();
        let err = use_case
            .upsert_fixture(draft(Some("R1M2"), "Court 1"))
            .await
            .unwrap_err();
        match err {
            UpsertFixtureError::Invalid(errors) => {
                assert_eq!(errors.get("time"), Some("Time conflict with existing fixture"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(repo.snapshot().len(), 1);
        assert_eq!(repo.snapshot()[0].id, FixtureId::new("R1M1"));
    }

    #[tokio::test]
    async fn test_unknown_teams_are_still_stored() {
        let repo = Arc::new(MockFixtureRepository::default());
        let use_case =
            UpsertFixtureUseCaseImpl::new(repo.clone(), Arc::new(MockTeamRepository::default()));

        use_case
            .upsert_fixture(draft(Some("R1M1"), "Court 2"))
            .await
            .unwrap();
        assert_eq!(repo.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_storage_failure() {
        let use_case =
            UpsertFixtureUseCaseImpl::new(Arc::new(MockFixtureRepository::failing()), teams());
        assert_eq!(
            use_case
                .upsert_fixture(draft(None, "Court 1"))
                .await
                .unwrap_err(),
            UpsertFixtureError::RepositoryError
        );
    }
}
