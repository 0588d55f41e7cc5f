use sepep_core::{FixtureId, MatchResult};
use sepep_server_app::domain::{RepoError, result::ResultRepository};

use crate::SequencedStore;

pub struct MemoryResultRepository {
    results: SequencedStore<MatchResult>,
}

impl MemoryResultRepository {
    pub fn new() -> Self {
        Self {
            results: SequencedStore::new(),
        }
    }
}

impl Default for MemoryResultRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ResultRepository for MemoryResultRepository {
    async fn list_results(&self) -> Result<Vec<MatchResult>, RepoError> {
        Ok(self.results.list())
    }

    async fn upsert_result(&self, result: MatchResult) -> Result<bool, RepoError> {
        Ok(self.results.upsert(result.id.to_string(), result))
    }

    async fn delete_result(&self, id: &FixtureId) -> Result<bool, RepoError> {
        Ok(self.results.remove(id.as_str()))
    }
}
