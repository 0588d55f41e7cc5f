mod format;
pub mod ladder;

use chrono::{NaiveDate, NaiveTime};

pub use format::format_score;
pub use ladder::{
    LadderRules, NeighbourhoodTotals, StandingsRow, compute_ladder, compute_neighbourhood_totals,
};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamId(pub String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        TeamId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixtureId(pub String);

impl FixtureId {
    pub fn new(id: impl Into<String>) -> Self {
        FixtureId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FixtureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub coach: String,
    pub neighbourhood: Option<String>,
    pub division: Option<String>,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Team {
            id: TeamId::new(id),
            name: name.into(),
            coach: String::new(),
            neighbourhood: None,
            division: None,
        }
    }

    pub fn with_neighbourhood(mut self, neighbourhood: impl Into<String>) -> Self {
        self.neighbourhood = Some(neighbourhood.into());
        self
    }

    pub fn with_division(mut self, division: impl Into<String>) -> Self {
        self.division = Some(division.into());
        self
    }
}

/// A scheduled match. Only `home_id` and `away_id` take part in the ladder,
/// the remaining fields describe when and where it is played.
#[derive(Clone, Debug, PartialEq)]
pub struct Fixture {
    pub id: FixtureId,
    pub division: Option<String>,
    pub round: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub court: Option<String>,
    pub home_id: TeamId,
    pub away_id: TeamId,
}

impl Fixture {
    pub fn new(id: impl Into<String>, home_id: impl Into<String>, away_id: impl Into<String>) -> Self {
        Fixture {
            id: FixtureId::new(id),
            division: None,
            round: None,
            date: None,
            time: None,
            court: None,
            home_id: TeamId::new(home_id),
            away_id: TeamId::new(away_id),
        }
    }

    pub fn with_division(mut self, division: impl Into<String>) -> Self {
        self.division = Some(division.into());
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultStatus {
    Live,
    Final,
}

impl ResultStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultStatus::Live => "Live",
            ResultStatus::Final => "Final",
        }
    }
}

impl std::str::FromStr for ResultStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(ResultStatus::Live),
            "final" => Ok(ResultStatus::Final),
            _ => Err(()),
        }
    }
}

/// The recorded score of a fixture. `id` is the id of the fixture it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchResult {
    pub id: FixtureId,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub status: Option<ResultStatus>,
}

impl MatchResult {
    pub fn new(id: impl Into<String>, home_score: u32, away_score: u32) -> Self {
        MatchResult {
            id: FixtureId::new(id),
            home_score: Some(home_score),
            away_score: Some(away_score),
            status: None,
        }
    }

    /// Scores with absent values counted as zero.
    pub fn scores(&self) -> (u32, u32) {
        (
            self.home_score.unwrap_or(0),
            self.away_score.unwrap_or(0),
        )
    }
}
