use chrono::{NaiveDate, NaiveTime, Timelike};
use sepep_core::{Fixture, FixtureId, TeamId};

use crate::domain::{
    FieldErrors, RepoError, RepoRetrieveError, generate_id, non_blank, sanitize::sanitize_input,
};

#[async_trait::async_trait]
pub trait FixtureRepository {
    async fn list_fixtures(&self) -> Result<Vec<Fixture>, RepoError>;
    async fn get_fixture(&self, id: &FixtureId) -> Result<Fixture, RepoRetrieveError>;
    /// Inserts or replaces the fixture. Returns `true` when the id was new.
    async fn upsert_fixture(&self, fixture: Fixture) -> Result<bool, RepoError>;
    /// Returns `true` when a fixture was removed.
    async fn delete_fixture(&self, id: &FixtureId) -> Result<bool, RepoError>;
}

#[derive(Clone, Debug, Default)]
pub struct FixtureDraft {
    pub id: Option<String>,
    pub division: Option<String>,
    pub round: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub court: Option<String>,
    pub home_id: Option<String>,
    pub away_id: Option<String>,
}

impl FixtureDraft {
    pub fn sanitized(self) -> Self {
        let clean = |value: Option<String>| non_blank(value.as_deref().map(sanitize_input));
        FixtureDraft {
            id: non_blank(self.id),
            division: clean(self.division),
            round: clean(self.round),
            date: self.date,
            time: self.time.map(to_minute),
            court: clean(self.court),
            home_id: non_blank(self.home_id),
            away_id: non_blank(self.away_id),
        }
    }

    /// Converts a validated draft, generating an id when none was given.
    pub fn into_fixture(self) -> Fixture {
        Fixture {
            id: FixtureId::new(self.id.unwrap_or_else(generate_id)),
            division: self.division,
            round: self.round,
            date: self.date,
            time: self.time,
            court: self.court,
            home_id: TeamId::new(self.home_id.unwrap_or_default()),
            away_id: TeamId::new(self.away_id.unwrap_or_default()),
        }
    }
}

/// Fixtures are scheduled to the minute.
fn to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

/// Checks required fields, self-play, and double booking of a court against `existing`.
pub fn validate_fixture(fixture: &FixtureDraft, existing: &[Fixture]) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if is_blank(&fixture.round) {
        errors.insert("round", "Round is required");
    }
    if fixture.date.is_none() {
        errors.insert("date", "Date is required");
    }
    if fixture.time.is_none() {
        errors.insert("time", "Time is required");
    }
    if is_blank(&fixture.court) {
        errors.insert("court", "Court is required");
    }
    if is_blank(&fixture.home_id) {
        errors.insert("homeId", "Home team is required");
    }
    if is_blank(&fixture.away_id) {
        errors.insert("awayId", "Away team is required");
    } else if fixture.home_id == fixture.away_id {
        errors.insert("awayId", "Teams cannot play themselves");
    }

    if let (Some(date), Some(time), Some(court)) = (fixture.date, fixture.time, &fixture.court) {
        let time = to_minute(time);
        let clash = existing.iter().any(|other| {
            Some(other.id.as_str()) != fixture.id.as_deref()
                && other.date == Some(date)
                && other.time.map(to_minute) == Some(time)
                && other.court.as_ref() == Some(court)
        });
        if clash {
            errors.insert("time", "Time conflict with existing fixture");
        }
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> FixtureDraft {
        FixtureDraft {
            id: Some("R1M1".to_string()),
            division: Some("Year 7".to_string()),
            round: Some("Round 1".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 3, 4),
            time: NaiveTime::from_hms_opt(13, 30, 0),
            court: Some("Court 1".to_string()),
            home_id: Some("A01".to_string()),
            away_id: Some("A02".to_string()),
        }
    }

    #[test]
    fn test_valid_fixture() {
        assert_eq!(validate_fixture(&draft(), &[]), Ok(()));
    }

    #[test]
    fn test_required_fields() {
        let errors = validate_fixture(&FixtureDraft::default(), &[]).unwrap_err();
        assert_eq!(errors.get("round"), Some("Round is required"));
        assert_eq!(errors.get("date"), Some("Date is required"));
        assert_eq!(errors.get("time"), Some("Time is required"));
        assert_eq!(errors.get("court"), Some("Court is required"));
        assert_eq!(errors.get("homeId"), Some("Home team is required"));
        assert_eq!(errors.get("awayId"), Some("Away team is required"));
    }

    #[test]
    fn test_team_cannot_play_itself() {
        let fixture = FixtureDraft {
            away_id: Some("A01".to_string()),
            ..draft()
        };
        let errors = validate_fixture(&fixture, &[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("awayId"), Some("Teams cannot play themselves"));
    }

    #[test]
    fn test_court_double_booking() {
        let booked = FixtureDraft {
            id: Some("R1M2".to_string()),
            home_id: Some("A03".to_string()),
            away_id: Some("A04".to_string()),
            ..draft()
        }
        .into_fixture();

        let errors = validate_fixture(&draft(), &[booked.clone()]).unwrap_err();
        assert_eq!(errors.get("time"), Some("Time conflict with existing fixture"));

        let other_court = FixtureDraft {
            court: Some("Court 2".to_string()),
            ..draft()
        };
        assert_eq!(validate_fixture(&other_court, &[booked.clone()]), Ok(()));

        let later = FixtureDraft {
            time: NaiveTime::from_hms_opt(14, 30, 0),
            ..draft()
        };
        assert_eq!(validate_fixture(&later, &[booked]), Ok(()));
    }

    #[test]
    fn test_seconds_are_dropped_and_still_clash() {
        let booked = FixtureDraft {
            id: Some("R1M2".to_string()),
            home_id: Some("A03".to_string()),
            away_id: Some("A04".to_string()),
            ..draft()
        }
        .into_fixture();

        let with_seconds = FixtureDraft {
            time: NaiveTime::from_hms_opt(13, 30, 45),
            ..draft()
        };
        let errors = validate_fixture(&with_seconds, &[booked]).unwrap_err();
        assert_eq!(errors.get("time"), Some("Time conflict with existing fixture"));

        let fixture = with_seconds.sanitized().into_fixture();
        assert_eq!(fixture.time, NaiveTime::from_hms_opt(13, 30, 0));
    }

    #[test]
    fn test_editing_does_not_clash_with_itself() {
        let existing = draft().into_fixture();
        assert_eq!(validate_fixture(&draft(), &[existing]), Ok(()));
    }

    #[test]
    fn test_sanitized_draft() {
        let fixture = FixtureDraft {
            id: None,
            division: Some(" ".to_string()),
            round: Some(" Round <i>2</i> ".to_string()),
            court: Some("Court 3".to_string()),
            home_id: Some(" A01 ".to_string()),
            away_id: Some("A02".to_string()),
            ..Default::default()
        }
        .sanitized();

        assert_eq!(fixture.division, None);
        assert_eq!(fixture.round.as_deref(), Some("Round i2/i"));
        assert_eq!(fixture.home_id.as_deref(), Some("A01"));

        let fixture = fixture.into_fixture();
        assert_eq!(fixture.id.as_str().len(), 8);
        assert_eq!(fixture.home_id, TeamId::new("A01"));
    }
}
