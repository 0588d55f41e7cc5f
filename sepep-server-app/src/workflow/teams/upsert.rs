use std::sync::Arc;

use sepep_core::Team;

use crate::domain::{
    FieldErrors, RepoError,
    team::{TeamDraft, TeamRepository, validate_team},
};

#[async_trait::async_trait]
pub trait UpsertTeamUseCase {
    async fn upsert_team(&self, draft: TeamDraft) -> Result<Team, UpsertTeamError>;
}

#[derive(Debug, PartialEq, Eq)]
pub enum UpsertTeamError {
    Invalid(FieldErrors),
    RepositoryError,
}

pub struct UpsertTeamUseCaseImpl<T: TeamRepository> {
    team_repository: Arc<T>,
}

impl<T: TeamRepository> UpsertTeamUseCaseImpl<T> {
    pub fn new(team_repository: Arc<T>) -> Self {
        Self { team_repository }
    }
}

#[async_trait::async_trait]
impl<T: TeamRepository + Send + Sync + 'static> UpsertTeamUseCase for UpsertTeamUseCaseImpl<T> {
    async fn upsert_team(&self, draft: TeamDraft) -> Result<Team, UpsertTeamError> {
        let draft = draft.sanitized();
        validate_team(&draft).map_err(UpsertTeamError::Invalid)?;
        let team = draft.into_team();

        match self.team_repository.upsert_team(team.clone()).await {
            Ok(true) => {
                log::info!("Created team {} ({})", team.id, team.name);
                Ok(team)
            }
            Ok(false) => {
                log::info!("Updated team {} ({})", team.id, team.name);
                Ok(team)
            }
            Err(RepoError::StorageError(e)) => {
                log::error!("Failed to save team {}: {}", team.id, e);
                Err(UpsertTeamError::RepositoryError)
            }
        }
    }
}
