use sepep_core::{Team, TeamId};
use sepep_server_app::domain::{RepoError, RepoRetrieveError, team::TeamRepository};

use crate::SequencedStore;

pub struct MemoryTeamRepository {
    teams: SequencedStore<Team>,
}

impl MemoryTeamRepository {
    pub fn new() -> Self {
        Self {
            teams: SequencedStore::new(),
        }
    }
}

impl Default for MemoryTeamRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TeamRepository for MemoryTeamRepository {
    async fn list_teams(&self) -> Result<Vec<Team>, RepoError> {
        Ok(self.teams.list())
    }

    async fn get_team(&self, id: &TeamId) -> Result<Team, RepoRetrieveError> {
        self.teams
            .get(id.as_str())
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn upsert_team(&self, team: Team) -> Result<bool, RepoError> {
        Ok(self.teams.upsert(team.id.to_string(), team))
    }
}
