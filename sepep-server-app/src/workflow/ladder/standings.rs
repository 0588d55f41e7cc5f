use std::sync::Arc;

use sepep_core::{LadderRules, StandingsRow, compute_ladder};

use crate::{
    domain::{
        RepoError, fixture::FixtureRepository, result::ResultRepository, team::TeamRepository,
    },
    workflow::snapshot::load_snapshot,
};

#[async_trait::async_trait]
pub trait GetStandingsUseCase {
    async fn standings(&self, division: Option<&str>) -> Result<Vec<StandingsRow>, GetLadderError>;
}

#[derive(Debug, PartialEq, Eq)]
pub enum GetLadderError {
    RepositoryError,
}

pub struct GetStandingsUseCaseImpl<T: TeamRepository, F: FixtureRepository, R: ResultRepository> {
    team_repository: Arc<T>,
    fixture_repository: Arc<F>,
    result_repository: Arc<R>,
    rules: LadderRules,
}

impl<T: TeamRepository, F: FixtureRepository, R: ResultRepository> GetStandingsUseCaseImpl<T, F, R> {
    pub fn new(
        team_repository: Arc<T>,
        fixture_repository: Arc<F>,
        result_repository: Arc<R>,
        rules: LadderRules,
    ) -> Self {
        Self {
            team_repository,
            fixture_repository,
            result_repository,
            rules,
        }
    }
}

#[async_trait::async_trait]
impl<
    T: TeamRepository + Send + Sync + 'static,
    F: FixtureRepository + Send + Sync + 'static,
    R: ResultRepository + Send + Sync + 'static,
> GetStandingsUseCase for GetStandingsUseCaseImpl<T, F, R>
{
    async fn standings(&self, division: Option<&str>) -> Result<Vec<StandingsRow>, GetLadderError> {
        let snapshot = match load_snapshot(
            self.team_repository.as_ref(),
            self.fixture_repository.as_ref(),
            self.result_repository.as_ref(),
            division,
        )
        .await
        {
            Ok(snapshot) => snapshot,
            Err(RepoError::StorageError(e)) => {
                log::error!("Error loading data for the ladder: {}", e);
                return Err(GetLadderError::RepositoryError);
            }
        };
        Ok(compute_ladder(
            &snapshot.teams,
            &snapshot.fixtures,
            &snapshot.results,
            &self.rules,
        ))
    }
}
