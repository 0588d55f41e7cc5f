use sepep_core::{FixtureId, MatchResult};

use crate::domain::{FieldErrors, RepoError};

/// Results are keyed by the id of the fixture they settle.
#[async_trait::async_trait]
pub trait ResultRepository {
    async fn list_results(&self) -> Result<Vec<MatchResult>, RepoError>;
    /// Inserts or replaces the result. Returns `true` when the id was new.
    async fn upsert_result(&self, result: MatchResult) -> Result<bool, RepoError>;
    /// Returns `true` when a result was removed.
    async fn delete_result(&self, id: &FixtureId) -> Result<bool, RepoError>;
}

/// Highest score a single side can record.
pub const MAX_SCORE: u32 = 9999;

pub fn validate_result(result: &MatchResult) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if result.id.as_str().trim().is_empty() {
        errors.insert("id", "Fixture id is required");
    }
    if result.home_score.is_some_and(|score| score > MAX_SCORE) {
        errors.insert("homeScore", "Score is too large");
    }
    if result.away_score.is_some_and(|score| score > MAX_SCORE) {
        errors.insert("awayScore", "Score is too large");
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_needs_fixture_id() {
        assert_eq!(validate_result(&MatchResult::new("R1M1", 3, 2)), Ok(()));

        let errors = validate_result(&MatchResult::new(" ", 3, 2)).unwrap_err();
        assert_eq!(errors.get("id"), Some("Fixture id is required"));
    }

    #[test]
    fn test_scores_are_bounded() {
        assert_eq!(validate_result(&MatchResult::new("R1M1", MAX_SCORE, 0)), Ok(()));

        let errors = validate_result(&MatchResult::new("R1M1", 3_000_000_000, 7)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("homeScore"), Some("Score is too large"));

        let errors = validate_result(&MatchResult::new("R1M1", 2, MAX_SCORE + 1)).unwrap_err();
        assert_eq!(errors.get("awayScore"), Some("Score is too large"));
    }
}
