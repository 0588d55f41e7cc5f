use std::collections::HashSet;

use sepep_core::{Fixture, FixtureId, MatchResult, Team};

use crate::domain::{
    RepoError, fixture::FixtureRepository, in_division, result::ResultRepository,
    team::TeamRepository,
};

pub mod read_all;

/// Everything the hub stores, optionally narrowed to one division.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub teams: Vec<Team>,
    pub fixtures: Vec<Fixture>,
    pub results: Vec<MatchResult>,
}

impl Snapshot {
    /// Keeps teams and fixtures tagged with `division`, and the results of the kept fixtures.
    pub fn in_division(self, division: Option<&str>) -> Snapshot {
        if division.is_none_or(|d| d.trim().is_empty()) {
            return self;
        }
        let teams: Vec<Team> = self
            .teams
            .into_iter()
            .filter(|t| in_division(t.division.as_deref(), division))
            .collect();
        let fixtures: Vec<Fixture> = self
            .fixtures
            .into_iter()
            .filter(|f| in_division(f.division.as_deref(), division))
            .collect();
        let kept: HashSet<&FixtureId> = fixtures.iter().map(|f| &f.id).collect();
        let results = self
            .results
            .into_iter()
            .filter(|r| kept.contains(&r.id))
            .collect();
        Snapshot {
            teams,
            fixtures,
            results,
        }
    }
}

pub(crate) async fn load_snapshot<T, F, R>(
    team_repository: &T,
    fixture_repository: &F,
    result_repository: &R,
    division: Option<&str>,
) -> Result<Snapshot, RepoError>
where
    T: TeamRepository + Send + Sync,
    F: FixtureRepository + Send + Sync,
    R: ResultRepository + Send + Sync,
{
    let snapshot = Snapshot {
        teams: team_repository.list_teams().await?,
        fixtures: fixture_repository.list_fixtures().await?,
        results: result_repository.list_results().await?,
    };
    Ok(snapshot.in_division(division))
}
