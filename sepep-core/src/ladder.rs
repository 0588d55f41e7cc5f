use std::{cmp::Ordering, collections::HashMap};

use crate::{Fixture, FixtureId, MatchResult, Team, TeamId};

/// Label used for teams that do not belong to a neighbourhood.
pub const NO_NEIGHBOURHOOD: &str = "—";

/// League points awarded per match outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LadderRules {
    pub points_for_win: u32,
    pub points_for_draw: u32,
}

impl LadderRules {
    pub const fn new(points_for_win: u32, points_for_draw: u32) -> Self {
        LadderRules {
            points_for_win,
            points_for_draw,
        }
    }
}

impl Default for LadderRules {
    fn default() -> Self {
        LadderRules::new(4, 2)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StandingsRow {
    pub team: Team,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points_for: u64,
    pub points_against: u64,
    pub points: u32,
    pub percentage: f64,
}

impl StandingsRow {
    fn new(team: Team) -> Self {
        StandingsRow {
            team,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            points_for: 0,
            points_against: 0,
            points: 0,
            percentage: 0.0,
        }
    }

    pub fn point_differential(&self) -> i64 {
        self.points_for as i64 - self.points_against as i64
    }

    fn record(&mut self, scored: u32, conceded: u32, rules: &LadderRules) {
        self.played += 1;
        self.points_for += u64::from(scored);
        self.points_against += u64::from(conceded);
        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.wins += 1;
                self.points += rules.points_for_win;
            }
            Ordering::Less => self.losses += 1,
            Ordering::Equal => {
                self.draws += 1;
                self.points += rules.points_for_draw;
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighbourhoodTotals {
    pub neighbourhood: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub points_for: u64,
    pub points_against: u64,
}

impl NeighbourhoodTotals {
    fn new(neighbourhood: String) -> Self {
        NeighbourhoodTotals {
            neighbourhood,
            wins: 0,
            losses: 0,
            draws: 0,
            points_for: 0,
            points_against: 0,
        }
    }

    fn record(&mut self, scored: u32, conceded: u32) {
        self.points_for += u64::from(scored);
        self.points_against += u64::from(conceded);
        match scored.cmp(&conceded) {
            Ordering::Greater => self.wins += 1,
            Ordering::Less => self.losses += 1,
            Ordering::Equal => self.draws += 1,
        }
    }
}

/// Pairs every fixture with its result, skipping fixtures that have not been played.
/// When several results share an id the last one wins.
fn settled_fixtures<'a>(
    fixtures: &'a [Fixture],
    results: &'a [MatchResult],
) -> impl Iterator<Item = (&'a Fixture, (u32, u32))> + 'a {
    let results_by_id: HashMap<&FixtureId, &MatchResult> =
        results.iter().map(|result| (&result.id, result)).collect();
    fixtures.iter().filter_map(move |fixture| {
        results_by_id
            .get(&fixture.id)
            .map(|result| (fixture, result.scores()))
    })
}

/// Builds the standings table for `teams` from the settled `fixtures`.
///
/// Fixtures without a result and fixtures naming an unknown team are ignored.
/// Rows are ordered by league points, then point differential, then percentage;
/// teams that are level on all three keep their input order.
pub fn compute_ladder(
    teams: &[Team],
    fixtures: &[Fixture],
    results: &[MatchResult],
    rules: &LadderRules,
) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = Vec::with_capacity(teams.len());
    let mut index: HashMap<TeamId, usize> = HashMap::with_capacity(teams.len());
    for team in teams {
        match index.get(&team.id) {
            Some(&i) => rows[i].team = team.clone(),
            None => {
                index.insert(team.id.clone(), rows.len());
                rows.push(StandingsRow::new(team.clone()));
            }
        }
    }

    for (fixture, (home_score, away_score)) in settled_fixtures(fixtures, results) {
        let (Some(&home), Some(&away)) = (index.get(&fixture.home_id), index.get(&fixture.away_id))
        else {
            continue;
        };
        rows[home].record(home_score, away_score, rules);
        rows[away].record(away_score, home_score, rules);
    }

    for row in rows.iter_mut() {
        let conceded = row.points_against.max(1) as f64;
        row.percentage = (row.points_for as f64 / conceded * 1000.0).round() / 10.0;
    }

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.point_differential().cmp(&a.point_differential()))
            .then_with(|| b.percentage.total_cmp(&a.percentage))
    });
    rows
}

/// Aggregates settled fixtures per neighbourhood, ordered by wins then points-for.
pub fn compute_neighbourhood_totals(
    teams: &[Team],
    results: &[MatchResult],
    fixtures: &[Fixture],
) -> Vec<NeighbourhoodTotals> {
    let teams_by_id: HashMap<&TeamId, &Team> = teams.iter().map(|team| (&team.id, team)).collect();

    let mut totals: Vec<NeighbourhoodTotals> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for (fixture, (home_score, away_score)) in settled_fixtures(fixtures, results) {
        let (Some(home), Some(away)) = (
            teams_by_id.get(&fixture.home_id),
            teams_by_id.get(&fixture.away_id),
        ) else {
            continue;
        };
        let home_slot = totals_slot(&mut totals, &mut index, neighbourhood_label(home));
        let away_slot = totals_slot(&mut totals, &mut index, neighbourhood_label(away));
        totals[home_slot].record(home_score, away_score);
        totals[away_slot].record(away_score, home_score);
    }

    totals.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.points_for.cmp(&a.points_for))
    });
    totals
}

fn totals_slot(
    totals: &mut Vec<NeighbourhoodTotals>,
    index: &mut HashMap<String, usize>,
    label: String,
) -> usize {
    if let Some(&slot) = index.get(&label) {
        return slot;
    }
    index.insert(label.clone(), totals.len());
    totals.push(NeighbourhoodTotals::new(label));
    totals.len() - 1
}

fn neighbourhood_label(team: &Team) -> String {
    match team.neighbourhood.as_deref().map(str::trim) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => NO_NEIGHBOURHOOD.to_string(),
    }
}
