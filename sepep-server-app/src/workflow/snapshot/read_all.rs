use std::sync::Arc;

use crate::{
    domain::{
        RepoError, fixture::FixtureRepository, result::ResultRepository, team::TeamRepository,
    },
    workflow::snapshot::{Snapshot, load_snapshot},
};

#[async_trait::async_trait]
pub trait ReadAllUseCase {
    async fn read_all(&self, division: Option<&str>) -> Result<Snapshot, ReadAllError>;
}

#[derive(Debug, PartialEq, Eq)]
pub enum ReadAllError {
    RepositoryError,
}

pub struct ReadAllUseCaseImpl<T: TeamRepository, F: FixtureRepository, R: ResultRepository> {
    team_repository: Arc<T>,
    fixture_repository: Arc<F>,
    result_repository: Arc<R>,
}

impl<T: TeamRepository, F: FixtureRepository, R: ResultRepository> ReadAllUseCaseImpl<T, F, R> {
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
> ReadAllUseCase for ReadAllUseCaseImpl<T, F, R>
{
    async fn read_all(&self, division: Option<&str>) -> Result<Snapshot, ReadAllError> {
        match load_snapshot(
            self.team_repository.as_ref(),
            self.fixture_repository.as_ref(),
            self.result_repository.as_ref(),
            division,
        )
        .await
        {
            Ok(snapshot) => Ok(snapshot),
            Err(RepoError::StorageError(e)) => {
                log::error!("Error reading hub data: {}", e);
                Err(ReadAllError::RepositoryError)
            }
        }
    }
}
