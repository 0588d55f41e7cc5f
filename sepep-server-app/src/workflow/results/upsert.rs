use std::sync::Arc;

use sepep_core::{MatchResult, format_score};

use crate::domain::{
    FieldErrors, RepoError, RepoRetrieveError,
    fixture::FixtureRepository,
    result::{ResultRepository, validate_result},
};

#[async_trait::async_trait]
pub trait UpsertResultUseCase {
    async fn upsert_result(&self, result: MatchResult) -> Result<MatchResult, UpsertResultError>;
}

#[derive(Debug, PartialEq, Eq)]
pub enum UpsertResultError {
    Invalid(FieldErrors),
    RepositoryError,
}

pub struct UpsertResultUseCaseImpl<R: ResultRepository, F: FixtureRepository> {
    result_repository: Arc<R>,
    fixture_repository: Arc<F>,
}

impl<R: ResultRepository, F: FixtureRepository> UpsertResultUseCaseImpl<R, F> {
    pub fn new(result_repository: Arc<R>, fixture_repository: Arc<F>) -> Self {
        Self {
            result_repository,
            fixture_repository,
        }
    }
}

#[async_trait::async_trait]
impl<R: ResultRepository + Send + Sync + 'static, F: FixtureRepository + Send + Sync + 'static>
    UpsertResultUseCase for UpsertResultUseCaseImpl<R, F>
{
    async fn upsert_result(&self, result: MatchResult) -> Result<MatchResult, UpsertResultError> {
        validate_result(&result).map_err(UpsertResultError::Invalid)?;

        match self.fixture_repository.get_fixture(&result.id).await {
            Ok(_) => {}
            Err(RepoRetrieveError::NotFound) => {
                log::warn!(
                    "Result recorded for unknown fixture {}, it will not count on the ladder",
                    result.id
                );
            }
            Err(RepoRetrieveError::StorageError(e)) => {
                log::error!("Failed to look up fixture {}: {}", result.id, e);
                return Err(UpsertResultError::RepositoryError);
            }
        }

        match self.result_repository.upsert_result(result.clone()).await {
            Ok(_) => {
                log::info!(
                    "Recorded result {} for fixture {} ({})",
                    format_score(result.home_score, result.away_score),
                    result.id,
                    result.status.map_or("no status", |s| s.as_str())
                );
                Ok(result)
            }
            Err(RepoError::StorageError(e)) => {
                log::error!("Failed to save result for fixture {}: {}", result.id, e);
                Err(UpsertResultError::RepositoryError)
            }
        }
    }
}
