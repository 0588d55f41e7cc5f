use sepep_core::{Fixture, FixtureId};
use sepep_server_app::domain::{RepoError, RepoRetrieveError, fixture::FixtureRepository};

use crate::SequencedStore;

pub struct MemoryFixtureRepository {
    fixtures: SequencedStore<Fixture>,
}

impl MemoryFixtureRepository {
    pub fn new() -> Self {
        Self {
            fixtures: SequencedStore::new(),
        }
    }
}

impl Default for MemoryFixtureRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl FixtureRepository for MemoryFixtureRepository {
    async fn list_fixtures(&self) -> Result<Vec<Fixture>, RepoError> {
        Ok(self.fixtures.list())
    }

    async fn get_fixture(&self, id: &FixtureId) -> Result<Fixture, RepoRetrieveError> {
        self.fixtures
            .get(id.as_str())
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn upsert_fixture(&self, fixture: Fixture) -> Result<bool, RepoError> {
        Ok(self.fixtures.upsert(fixture.id.to_string(), fixture))
    }

    async fn delete_fixture(&self, id: &FixtureId) -> Result<bool, RepoError> {
        Ok(self.fixtures.remove(id.as_str()))
    }
}
