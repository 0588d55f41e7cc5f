use sepep_core::{Team, TeamId};
use validator::Validate;

use crate::domain::{
    FieldErrors, RepoError, RepoRetrieveError, generate_id, non_blank, sanitize::sanitize_input,
};

#[async_trait::async_trait]
pub trait TeamRepository {
    async fn list_teams(&self) -> Result<Vec<Team>, RepoError>;
    async fn get_team(&self, id: &TeamId) -> Result<Team, RepoRetrieveError>;
    /// Inserts or replaces the team. Returns `true` when the id was new.
    async fn upsert_team(&self, team: Team) -> Result<bool, RepoError>;
}

/// A team as submitted by the admin form.
#[derive(Clone, Debug, Default, Validate)]
pub struct TeamDraft {
    pub id: Option<String>,
    #[validate(length(max = 50, message = "Team name too long (max 50 chars)"))]
    pub name: String,
    #[validate(length(max = 50, message = "Coach name too long (max 50 chars)"))]
    pub coach: String,
    pub neighbourhood: Option<String>,
    pub division: Option<String>,
}

impl TeamDraft {
    pub fn sanitized(self) -> Self {
        TeamDraft {
            id: non_blank(self.id),
            name: sanitize_input(&self.name),
            coach: sanitize_input(&self.coach),
            neighbourhood: non_blank(self.neighbourhood.as_deref().map(sanitize_input)),
            division: non_blank(self.division.as_deref().map(sanitize_input)),
        }
    }

    pub fn into_team(self) -> Team {
        Team {
            id: TeamId::new(self.id.unwrap_or_else(generate_id)),
            name: self.name,
            coach: self.coach,
            neighbourhood: self.neighbourhood,
            division: self.division,
        }
    }
}

pub fn validate_team(team: &TeamDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if team.name.trim().is_empty() {
        errors.insert("name", "Team name is required");
    }
    if team.coach.trim().is_empty() {
        errors.insert("coach", "Coach name is required");
    }
    if let Err(length_errors) = team.validate() {
        for (field, field_errors) in length_errors.field_errors() {
            if let Some(message) = field_errors.iter().find_map(|e| e.message.as_ref()) {
                errors.insert(field.to_string(), message.to_string());
            }
        }
    }
    errors.into_result()
}
