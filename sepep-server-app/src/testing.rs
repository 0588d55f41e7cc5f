use std::sync::Mutex;

use sepep_core::{Fixture, FixtureId, MatchResult, Team, TeamId};

use crate::domain::{
    RepoError, RepoRetrieveError, fixture::FixtureRepository, result::ResultRepository,
    team::TeamRepository,
};

fn upsert_by<T>(items: &mut Vec<T>, item: T, same: impl Fn(&T) -> bool) -> bool {
    match items.iter().position(same) {
        Some(i) => {
            items[i] = item;
            false
        }
        None => {
            items.push(item);
            true
        }
    }
}

fn storage_failure<T>(failing: bool) -> Result<(), T>
where
    T: From<RepoError>,
{
    if failing {
        Err(RepoError::StorageError("storage offline".to_string()).into())
    } else {
        Ok(())
    }
}

#[derive(Default)]
pub struct MockTeamRepository {
    pub teams: Mutex<Vec<Team>>,
    pub failing: bool,
}

impl MockTeamRepository {
    pub fn with(teams: Vec<Team>) -> Self {
        Self {
            teams: Mutex::new(teams),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn snapshot(&self) -> Vec<Team> {
        self.teams.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TeamRepository for MockTeamRepository {
    async fn list_teams(&self) -> Result<Vec<Team>, RepoError> {
        storage_failure::<RepoError>(self.failing)?;
        Ok(self.snapshot())
    }

    async fn get_team(&self, id: &TeamId) -> Result<Team, RepoRetrieveError> {
        storage_failure::<RepoRetrieveError>(self.failing)?;
        self.snapshot()
            .into_iter()
            .find(|team| team.id == *id)
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn upsert_team(&self, team: Team) -> Result<bool, RepoError> {
        storage_failure::<RepoError>(self.failing)?;
        let id = team.id.clone();
        Ok(upsert_by(&mut *self.teams.lock().unwrap(), team, |t| {
            t.id == id
        }))
    }
}

#[derive(Default)]
pub struct MockFixtureRepository {
    pub fixtures: Mutex<Vec<Fixture>>,
    pub failing: bool,
}

impl MockFixtureRepository {
    pub fn with(fixtures: Vec<Fixture>) -> Self {
        Self {
            fixtures: Mutex::new(fixtures),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn snapshot(&self) -> Vec<Fixture> {
        self.fixtures.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl FixtureRepository for MockFixtureRepository {
    async fn list_fixtures(&self) -> Result<Vec<Fixture>, RepoError> {
        storage_failure::<RepoError>(self.failing)?;
        Ok(self.snapshot())
    }

    async fn get_fixture(&self, id: &FixtureId) -> Result<Fixture, RepoRetrieveError> {
        storage_failure::<RepoRetrieveError>(self.failing)?;
        self.snapshot()
            .into_iter()
            .find(|fixture| fixture.id == *id)
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn upsert_fixture(&self, fixture: Fixture) -> Result<bool, RepoError> {
        storage_failure::<RepoError>(self.failing)?;
        let id = fixture.id.clone();
        Ok(upsert_by(&mut *self.fixtures.lock().unwrap(), fixture, |f| {
            f.id == id
        }))
    }

    async fn delete_fixture(&self, id: &FixtureId) -> Result<bool, RepoError> {
        storage_failure::<RepoError>(self.failing)?;
        let mut fixtures = self.fixtures.lock().unwrap();
        let before = fixtures.len();
        fixtures.retain(|fixture| fixture.id != *id);
        Ok(fixtures.len() != before)
    }
}

#[derive(Default)]
pub struct MockResultRepository {
    pub results: Mutex<Vec<MatchResult>>,
    pub failing: bool,
}

impl MockResultRepository {
    pub fn with(results: Vec<MatchResult>) -> Self {
        Self {
            results: Mutex::new(results),
            failing: false,
        }
    }

    pub fn snapshot(&self) -> Vec<MatchResult> {
        self.results.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ResultRepository for MockResultRepository {
    async fn list_results(&self) -> Result<Vec<MatchResult>, RepoError> {
        storage_failure::<RepoError>(self.failing)?;
        Ok(self.snapshot())
    }

    async fn upsert_result(&self, result: MatchResult) -> Result<bool, RepoError> {
        storage_failure::<RepoError>(self.failing)?;
        let id = result.id.clone();
        Ok(upsert_by(&mut *self.results.lock().unwrap(), result, |r| {
            r.id == id
        }))
    }

    async fn delete_result(&self, id: &FixtureId) -> Result<bool, RepoError> {
        storage_failure::<RepoError>(self.failing)?;
        let mut results = self.results.lock().unwrap();
        let before = results.len();
        results.retain(|result| result.id != *id);
        Ok(results.len() != before)
    }
}
