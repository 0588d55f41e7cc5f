use std::sync::Arc;

use sepep_core::{NeighbourhoodTotals, compute_neighbourhood_totals};

use crate::{
    domain::{
        RepoError, fixture::FixtureRepository, result::ResultRepository, team::TeamRepository,
    },
    workflow::{ladder::standings::GetLadderError, snapshot::load_snapshot},
};

#[async_trait::async_trait]
pub trait GetNeighbourhoodTotalsUseCase {
    async fn neighbourhoods(
        &self,
        division: Option<&str>,
    ) -> Result<Vec<NeighbourhoodTotals>, GetLadderError>;
}

pub struct GetNeighbourhoodTotalsUseCaseImpl<
    T: TeamRepository,
    F: FixtureRepository,
    R: ResultRepository,
> {
    team_repository: Arc<T>,
    fixture_repository: Arc<F>,
    result_repository: Arc<R>,
}

impl<T: TeamRepository, F: FixtureRepository, R: ResultRepository>
    GetNeighbourhoodTotalsUseCaseImpl<T, F, R>
{
    pub fn new(
        team_repository: Arc<T>,
        fixture_repository: Arc<F>,
        result_repository: Arc<R>,
    ) -> Self {
        Self {
            team_repository,
            fixture_repository,
            result_repository,
        }
    }
}

#[async_trait::async_trait]
impl<
    T: TeamRepository + Send + Sync + 'static,
    F: FixtureRepository + Send + Sync + 'static,
    R: ResultRepository + Send + Sync + 'static,
> GetNeighbourhoodTotalsUseCase for GetNeighbourhoodTotalsUseCaseImpl<T, F, R>
{
    async fn neighbourhoods(
        &self,
        division: Option<&str>,
    ) -> Result<Vec<NeighbourhoodTotals>, GetLadderError> {
        match load_snapshot(
            self.team_repository.as_ref(),
            self.fixture_repository.as_ref(),
            self.result_repository.as_ref(),
            division,
        )
        .await
        {
            Ok(snapshot) => Ok(compute_neighbourhood_totals(
                &snapshot.teams,
                &snapshot.results,
                &snapshot.fixtures,
            )),
            Err(RepoError::StorageError(e)) => {
                log::error!("Error loading data for neighbourhood totals: {}", e);
                Err(GetLadderError::RepositoryError)
            }
        }
    }
}
