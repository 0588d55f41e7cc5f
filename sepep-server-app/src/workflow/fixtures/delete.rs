use std::sync::Arc;

use sepep_core::FixtureId;

use crate::domain::{RepoError, fixture::FixtureRepository, result::ResultRepository};

#[async_trait::async_trait]
pub trait DeleteFixtureUseCase {
    /// Removes the fixture together with its result. Deleting an unknown id succeeds.
    async fn delete_fixture(&self, id: &FixtureId) -> Result<(), DeleteFixtureError>;
}

#[derive(Debug, PartialEq, Eq)]
pub enum DeleteFixtureError {
    RepositoryError,
}

pub struct DeleteFixtureUseCaseImpl<F: FixtureRepository, R: ResultRepository> {
    fixture_repository: Arc<F>,
    result_repository: Arc<R>,
}

impl<F: FixtureRepository, R: ResultRepository> DeleteFixtureUseCaseImpl<F, R> {
    pub fn new(fixture_repository: Arc<F>, result_repository: Arc<R>) -> Self {
        Self {
            fixture_repository,
            result_repository,
        }
    }
}

#[async_trait::async_trait]
impl<F: FixtureRepository + Send + Sync + 'static, R: ResultRepository + Send + Sync + 'static>
    DeleteFixtureUseCase for DeleteFixtureUseCaseImpl<F, R>
{
    async fn delete_fixture(&self, id: &FixtureId) -> Result<(), DeleteFixtureError> {
        // Result first, so a failure never leaves a result without its fixture.
        let result_removed = match self.result_repository.delete_result(id).await {
            Ok(removed) => removed,
            Err(RepoError::StorageError(e)) => {
                log::error!("Failed to delete result of fixture {}: {}", id, e);
                return Err(DeleteFixtureError::RepositoryError);
            }
        };
        let fixture_removed = match self.fixture_repository.delete_fixture(id).await {
            Ok(removed) => removed,
            Err(RepoError::StorageError(e)) => {
                log::error!("Failed to delete fixture {}: {}", id, e);
                return Err(DeleteFixtureError::RepositoryError);
            }
        };

        if fixture_removed || result_removed {
            log::info!("Deleted fixture {} (result removed: {})", id, result_removed);
        } else {
            log::debug!("Fixture {} did not exist", id);
        }
        Ok(())
    }
}
