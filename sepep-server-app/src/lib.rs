use std::sync::Arc;

use sepep_core::LadderRules;

use crate::{
    domain::{fixture::FixtureRepository, result::ResultRepository, team::TeamRepository},
    workflow::{
        fixtures::{
            delete::{DeleteFixtureUseCase, DeleteFixtureUseCaseImpl},
            upsert::{UpsertFixtureUseCase, UpsertFixtureUseCaseImpl},
        },
        ladder::{
            neighbourhoods::{GetNeighbourhoodTotalsUseCase, GetNeighbourhoodTotalsUseCaseImpl},
            standings::{GetStandingsUseCase, GetStandingsUseCaseImpl},
        },
        results::upsert::{UpsertResultUseCase, UpsertResultUseCaseImpl},
        snapshot::read_all::{ReadAllUseCase, ReadAllUseCaseImpl},
        teams::{
            list::{ListTeamsUseCase, ListTeamsUseCaseImpl},
            upsert::{UpsertTeamUseCase, UpsertTeamUseCaseImpl},
        },
    },
};

pub mod domain;
pub mod workflow;

#[cfg(test)]
mod testing;

pub struct Application {
    pub read_all_use_case: Box<dyn ReadAllUseCase + Send + Sync + 'static>,

    pub team_list_use_case: Box<dyn ListTeamsUseCase + Send + Sync + 'static>,
    pub team_upsert_use_case: Box<dyn UpsertTeamUseCase + Send + Sync + 'static>,

    pub fixture_upsert_use_case: Box<dyn UpsertFixtureUseCase + Send + Sync + 'static>,
    pub fixture_delete_use_case: Box<dyn DeleteFixtureUseCase + Send + Sync + 'static>,

    pub result_upsert_use_case: Box<dyn UpsertResultUseCase + Send + Sync + 'static>,

    pub ladder_standings_use_case: Box<dyn GetStandingsUseCase + Send + Sync + 'static>,
    pub ladder_neighbourhoods_use_case:
        Box<dyn GetNeighbourhoodTotalsUseCase + Send + Sync + 'static>,
}

pub fn build_application<
    T: TeamRepository + Send + Sync + 'static,
    F: FixtureRepository + Send + Sync + 'static,
    R: ResultRepository + Send + Sync + 'static,
>(
    team_repository: Arc<T>,
    fixture_repository: Arc<F>,
    result_repository: Arc<R>,
    rules: LadderRules,
) -> Application {
    Application {
        read_all_use_case: Box::new(ReadAllUseCaseImpl::new(
            team_repository.clone(),
            fixture_repository.clone(),
            result_repository.clone(),
        )),

        team_list_use_case: Box::new(ListTeamsUseCaseImpl::new(team_repository.clone())),
        team_upsert_use_case: Box::new(UpsertTeamUseCaseImpl::new(team_repository.clone())),

        fixture_upsert_use_case: Box::new(UpsertFixtureUseCaseImpl::new(
            fixture_repository.clone(),
            team_repository.clone(),
        )),
        fixture_delete_use_case: Box::new(DeleteFixtureUseCaseImpl::new(
            fixture_repository.clone(),
            result_repository.clone(),
        )),

        result_upsert_use_case: Box::new(UpsertResultUseCaseImpl::new(
            result_repository.clone(),
            fixture_repository.clone(),
        )),

        ladder_standings_use_case: Box::new(GetStandingsUseCaseImpl::new(
            team_repository.clone(),
            fixture_repository.clone(),
            result_repository.clone(),
            rules,
        )),
        ladder_neighbourhoods_use_case: Box::new(GetNeighbourhoodTotalsUseCaseImpl::new(
            team_repository,
            fixture_repository,
            result_repository,
        )),
    }
}

#[cfg(test)]
mod tests {
    use sepep_core::{FixtureId, MatchResult};

    use super::*;
    use crate::{
        domain::{fixture::FixtureDraft, team::TeamDraft},
        testing::{MockFixtureRepository, MockResultRepository, MockTeamRepository},
    };

    fn team(id: &str, name: &str, neighbourhood: &str) -> TeamDraft {
        TeamDraft {
            id: Some(id.to_string()),
            name: name.to_string(),
            coach: "Coach".to_string(),
            neighbourhood: Some(neighbourhood.to_string()),
            division: Some("Year 7".to_string()),
        }
    }

    fn fixture(id: &str, home: &str, away: &str, court: &str) -> FixtureDraft {
        FixtureDraft {
            id: Some(id.to_string()),
            division: Some("Year 7".to_string()),
            round: Some("Round 1".to_string()),
            date: chrono::NaiveDate::from_ymd_opt(2025, 3, 4),
            time: chrono::NaiveTime::from_hms_opt(13, 30, 0),
            court: Some(court.to_string()),
            home_id: Some(home.to_string()),
            away_id: Some(away.to_string()),
        }
    }

    #[tokio::test]
    async fn test_season_walkthrough() {
        let app = build_application(
            Arc::new(MockTeamRepository::default()),
            Arc::new(MockFixtureRepository::default()),
            Arc::new(MockResultRepository::default()),
            LadderRules::default(),
        );

        for draft in [
            team("A01", "Kestrels", "North"),
            team("A02", "Falcons", "South"),
            team("A03", "Owls", "North"),
            team("A04", "Wrens", "South"),
        ] {
            app.team_upsert_use_case.upsert_team(draft).await.unwrap();
        }
        app.fixture_upsert_use_case
            .upsert_fixture(fixture("R1M1", "A01", "A02", "Court 1"))
            .await
            .unwrap();
        app.fixture_upsert_use_case
            .upsert_fixture(fixture("R1M2", "A03", "A04", "Court 2"))
            .await
            .unwrap();
        app.result_upsert_use_case
            .upsert_result(MatchResult::new("R1M1", 8, 4))
            .await
            .unwrap();
        app.result_upsert_use_case
            .upsert_result(MatchResult::new("R1M2", 3, 3))
            .await
            .unwrap();

        let ladder = app.ladder_standings_use_case.standings(None).await.unwrap();
        let order: Vec<&str> = ladder.iter().map(|r| r.team.id.as_str()).collect();
        assert_eq!(order, vec!["A01", "A03", "A04", "A02"]);
        assert_eq!(ladder[0].points, 4);
        assert_eq!(ladder[0].percentage, 200.0);

        let totals = app
            .ladder_neighbourhoods_use_case
            .neighbourhoods(None)
            .await
            .unwrap();
        assert_eq!(totals[0].neighbourhood, "North");
        assert_eq!((totals[0].wins, totals[0].draws), (1, 1));

        app.fixture_delete_use_case
            .delete_fixture(&FixtureId::new("R1M1"))
            .await
            .unwrap();
        let snapshot = app.read_all_use_case.read_all(Some("Year 7")).await.unwrap();
        assert_eq!(snapshot.teams.len(), 4);
        assert_eq!(snapshot.fixtures.len(), 1);
        assert_eq!(snapshot.results, vec![MatchResult::new("R1M2", 3, 3)]);

        let ladder = app.ladder_standings_use_case.standings(None).await.unwrap();
        assert!(ladder.iter().all(|r| r.wins == 0));
        assert!(
            app.team_list_use_case
                .list_teams(Some("Year 8"))
                .await
                .unwrap()
                .is_empty()
        );
    }
}
