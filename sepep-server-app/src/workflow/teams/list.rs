use std::sync::Arc;

use sepep_core::Team;

use crate::domain::{RepoError, in_division, team::TeamRepository};

#[async_trait::async_trait]
pub trait ListTeamsUseCase {
    async fn list_teams(&self, division: Option<&str>) -> Result<Vec<Team>, ListTeamsError>;
}

#[derive(Debug, PartialEq, Eq)]
pub enum ListTeamsError {
    RepositoryError,
}

pub struct ListTeamsUseCaseImpl<T: TeamRepository> {
    team_repository: Arc<T>,
}

impl<T: TeamRepository> ListTeamsUseCaseImpl<T> {
    pub fn new(team_repository: Arc<T>) -> Self {
        Self { team_repository }
    }
}

#[async_trait::async_trait]
impl<T: TeamRepository + Send + Sync + 'static> ListTeamsUseCase for ListTeamsUseCaseImpl<T> {
    async fn list_teams(&self, division: Option<&str>) -> Result<Vec<Team>, ListTeamsError> {
        match self.team_repository.list_teams().await {
            Ok(teams) => Ok(teams
                .into_iter()
                .filter(|team| in_division(team.division.as_deref(), division))
                .collect()),
            Err(RepoError::StorageError(e)) => {
                log::error!("Error listing teams: {}", e);
                Err(ListTeamsError::RepositoryError)
            }
        }
    }
}
