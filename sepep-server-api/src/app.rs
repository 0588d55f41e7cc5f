use axum::response::IntoResponse;
use sepep_server_app::{
    domain::FieldErrors,
    workflow::{
        fixtures::{delete::DeleteFixtureError, upsert::UpsertFixtureError},
        ladder::standings::GetLadderError,
        results::upsert::UpsertResultError,
        snapshot::read_all::ReadAllError,
        teams::upsert::UpsertTeamError,
    },
};

#[derive(Debug)]
pub enum ServiceError {
    NotFound(String),
    BadRequest(String),
    Invalid(FieldErrors),
    Internal(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ServiceError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ServiceError::Invalid(errors) => write!(f, "Invalid input: {}", errors),
            ServiceError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::http::Response<axum::body::Body> {
        let (status, body) = match self {
            ServiceError::NotFound(msg) => (
                axum::http::StatusCode::NOT_FOUND,
                serde_json::json!({ "error": msg }),
            ),
            ServiceError::BadRequest(msg) => (
                axum::http::StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": msg }),
            ),
            ServiceError::Invalid(errors) => {
                let fields: serde_json::Map<String, serde_json::Value> = errors
                    .iter()
                    .map(|(field, message)| (field.to_string(), message.into()))
                    .collect();
                (
                    axum::http::StatusCode::BAD_REQUEST,
                    serde_json::json!({ "error": errors.to_string(), "fields": fields }),
                )
            }
            ServiceError::Internal(msg) => (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": msg }),
            ),
        };
        (status, axum::Json(body)).into_response()
    }
}

fn storage_unavailable() -> ServiceError {
    ServiceError::Internal("Storage is unavailable".to_string())
}

impl From<ReadAllError> for ServiceError {
    fn from(value: ReadAllError) -> Self {
        match value {
            ReadAllError::RepositoryError => storage_unavailable(),
        }
    }
}

impl From<UpsertTeamError> for ServiceError {
    fn from(value: UpsertTeamError) -> Self {
        match value {
            UpsertTeamError::Invalid(errors) => ServiceError::Invalid(errors),
            UpsertTeamError::RepositoryError => storage_unavailable(),
        }
    }
}

impl From<UpsertFixtureError> for ServiceError {
    fn from(value: UpsertFixtureError) -> Self {
        match value {
            UpsertFixtureError::Invalid(errors) => ServiceError::Invalid(errors),
            UpsertFixtureError::RepositoryError => storage_unavailable(),
        }
    }
}

impl From<DeleteFixtureError> for ServiceError {
    fn from(value: DeleteFixtureError) -> Self {
        match value {
            DeleteFixtureError::RepositoryError => storage_unavailable(),
        }
    }
}

impl From<UpsertResultError> for ServiceError {
    fn from(value: UpsertResultError) -> Self {
        match value {
            UpsertResultError::Invalid(errors) => ServiceError::Invalid(errors),
            UpsertResultError::RepositoryError => storage_unavailable(),
        }
    }
}

impl From<GetLadderError> for ServiceError {
    fn from(value: GetLadderError) -> Self {
        match value {
            GetLadderError::RepositoryError => storage_unavailable(),
        }
    }
}
