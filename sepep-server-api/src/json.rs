//! Wire shapes of the hub's records.

use chrono::{NaiveDate, NaiveTime};
use sepep_core::{
    Fixture, FixtureId, MatchResult, NeighbourhoodTotals, ResultStatus, StandingsRow, Team,
};
use sepep_server_app::{
    domain::{FieldErrors, fixture::FixtureDraft, team::TeamDraft},
    workflow::snapshot::Snapshot,
};
use serde::{Deserialize, Deserializer, Serialize, de::Error};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonTeam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub coach: String,
    #[serde(default)]
    pub neighbourhood: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
}

impl From<Team> for JsonTeam {
    fn from(team: Team) -> Self {
        JsonTeam {
            id: Some(team.id.0),
            name: team.name,
            coach: team.coach,
            neighbourhood: team.neighbourhood,
            division: team.division,
        }
    }
}

impl From<JsonTeam> for TeamDraft {
    fn from(team: JsonTeam) -> Self {
        TeamDraft {
            id: team.id,
            name: team.name,
            coach: team.coach,
            neighbourhood: team.neighbourhood,
            division: team.division,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonFixture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub round: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub court: Option<String>,
    #[serde(default)]
    pub home_id: Option<String>,
    #[serde(default)]
    pub away_id: Option<String>,
}

impl From<Fixture> for JsonFixture {
    fn from(fixture: Fixture) -> Self {
        JsonFixture {
            id: Some(fixture.id.0),
            division: fixture.division,
            round: fixture.round,
            date: fixture.date.map(|d| d.format(DATE_FORMAT).to_string()),
            time: fixture.time.map(|t| t.format(TIME_FORMAT).to_string()),
            court: fixture.court,
            home_id: Some(fixture.home_id.0),
            away_id: Some(fixture.away_id.0),
        }
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl JsonFixture {
    /// Parses the date and time strings. A blank value counts as absent.
    pub fn into_draft(self) -> Result<FixtureDraft, FieldErrors> {
        let mut errors = FieldErrors::new();
        let date = match blank_to_none(self.date) {
            None => None,
            Some(d) => NaiveDate::parse_from_str(d.trim(), DATE_FORMAT)
                .map_err(|_| errors.insert("date", "Date must be YYYY-MM-DD"))
                .ok(),
        };
        let time = match blank_to_none(self.time) {
            None => None,
            Some(t) => NaiveTime::parse_from_str(t.trim(), TIME_FORMAT)
                .or_else(|_| NaiveTime::parse_from_str(t.trim(), "%H:%M:%S"))
                .map_err(|_| errors.insert("time", "Time must be HH:MM"))
                .ok(),
        };
        errors.into_result()?;
        Ok(FixtureDraft {
            id: self.id,
            division: self.division,
            round: self.round,
            date,
            time,
            court: self.court,
            home_id: self.home_id,
            away_id: self.away_id,
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonResult {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_score")]
    pub home_score: Option<u32>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub away_score: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
}

impl From<MatchResult> for JsonResult {
    fn from(result: MatchResult) -> Self {
        JsonResult {
            id: result.id.0,
            home_score: result.home_score,
            away_score: result.away_score,
            status: result.status.map(|s| s.as_str().to_string()),
        }
    }
}

impl From<JsonResult> for MatchResult {
    fn from(result: JsonResult) -> Self {
        let status = match result.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => match s.parse::<ResultStatus>() {
                Ok(status) => Some(status),
                Err(()) => {
                    log::warn!("Ignoring unknown result status {:?}", s);
                    None
                }
            },
        };
        MatchResult {
            id: FixtureId::new(result.id.trim()),
            home_score: result.home_score,
            away_score: result.away_score,
            status,
        }
    }
}

/// Scores arrive from forms as numbers, numeric strings, or empty strings.
fn lenient_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom("score must be a non-negative whole number")),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(serde_json::Value::String(s)) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| D::Error::custom("score must be a non-negative whole number")),
        Some(other) => Err(D::Error::custom(format!("invalid score {}", other))),
    }
}

#[derive(Serialize)]
pub struct JsonSnapshot {
    pub teams: Vec<JsonTeam>,
    pub fixtures: Vec<JsonFixture>,
    pub results: Vec<JsonResult>,
}

impl From<Snapshot> for JsonSnapshot {
    fn from(snapshot: Snapshot) -> Self {
        JsonSnapshot {
            teams: snapshot.teams.into_iter().map(JsonTeam::from).collect(),
            fixtures: snapshot.fixtures.into_iter().map(JsonFixture::from).collect(),
            results: snapshot.results.into_iter().map(JsonResult::from).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct JsonStandingsRow {
    #[serde(rename = "teamId")]
    pub team_id: String,
    pub name: String,
    #[serde(rename = "P")]
    pub played: u32,
    #[serde(rename = "W")]
    pub wins: u32,
    #[serde(rename = "D")]
    pub draws: u32,
    #[serde(rename = "L")]
    pub losses: u32,
    #[serde(rename = "PF")]
    pub points_for: u64,
    #[serde(rename = "PA")]
    pub points_against: u64,
    #[serde(rename = "PD")]
    pub point_differential: i64,
    #[serde(rename = "PTS")]
    pub points: u32,
    pub pct: f64,
}

impl From<StandingsRow> for JsonStandingsRow {
    fn from(row: StandingsRow) -> Self {
        JsonStandingsRow {
            point_differential: row.point_differential(),
            team_id: row.team.id.0,
            name: row.team.name,
            played: row.played,
            wins: row.wins,
            draws: row.draws,
            losses: row.losses,
            points_for: row.points_for,
            points_against: row.points_against,
            points: row.points,
            pct: row.percentage,
        }
    }
}

#[derive(Serialize)]
pub struct JsonNeighbourhoodTotals {
    pub neighbourhood: String,
    #[serde(rename = "W")]
    pub wins: u32,
    #[serde(rename = "L")]
    pub losses: u32,
    #[serde(rename = "D")]
    pub draws: u32,
    #[serde(rename = "PF")]
    pub points_for: u64,
    #[serde(rename = "PA")]
    pub points_against: u64,
}

impl From<NeighbourhoodTotals> for JsonNeighbourhoodTotals {
    fn from(totals: NeighbourhoodTotals) -> Self {
        JsonNeighbourhoodTotals {
            neighbourhood: totals.neighbourhood,
            wins: totals.wins,
            losses: totals.losses,
            draws: totals.draws,
            points_for: totals.points_for,
            points_against: totals.points_against,
        }
    }
}
