use axum::{
    Json,
    extract::{Query, State},
};
use sepep_core::FixtureId;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};

use crate::{
    ServiceError,
    http::AppState,
    json::{JsonFixture, JsonResult, JsonSnapshot, JsonTeam},
};

const UNKNOWN_ACTION: &str = "Unknown action";

#[derive(Deserialize)]
pub struct ReadQuery {
    action: Option<String>,
    division: Option<String>,
}

pub async fn read(
    State(state): State<AppState>,
    Query(query): Query<ReadQuery>,
) -> Result<Json<JsonSnapshot>, ServiceError> {
    match query.action.as_deref() {
        Some("readAll") => {
            let snapshot = state
                .app
                .read_all_use_case
                .read_all(query.division.as_deref())
                .await?;
            Ok(Json(snapshot.into()))
        }
        _ => Err(ServiceError::BadRequest(UNKNOWN_ACTION.to_string())),
    }
}

#[derive(Deserialize)]
struct TeamPayload {
    team: JsonTeam,
}

#[derive(Deserialize)]
struct FixturePayload {
    fixture: JsonFixture,
}

#[derive(Deserialize)]
struct ResultPayload {
    result: JsonResult,
}

#[derive(Deserialize)]
struct DeletePayload {
    id: String,
}

fn payload<T: DeserializeOwned>(body: Value) -> Result<T, ServiceError> {
    serde_json::from_value(body).map_err(|e| ServiceError::BadRequest(e.to_string()))
}

pub async fn write(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ServiceError> {
    let action = body
        .get("action")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    match action.as_str() {
        "upsertTeam" => {
            let TeamPayload { team } = payload::<TeamPayload>(body)?;
            let team = state
                .app
                .team_upsert_use_case
                .upsert_team(team.into())
                .await?;
            Ok(Json(json!({ "team": JsonTeam::from(team) })))
        }
        "upsertFixture" => {
            let FixturePayload { fixture } = payload::<FixturePayload>(body)?;
            let draft = fixture.into_draft().map_err(ServiceError::Invalid)?;
            let fixture = state
                .app
                .fixture_upsert_use_case
                .upsert_fixture(draft)
                .await?;
            Ok(Json(json!({ "fixture": JsonFixture::from(fixture) })))
        }
        "upsertResult" => {
            let ResultPayload { result } = payload::<ResultPayload>(body)?;
            let result = state
                .app
                .result_upsert_use_case
                .upsert_result(result.into())
                .await?;
            Ok(Json(json!({ "result": JsonResult::from(result) })))
        }
        "deleteFixtureRemote" => {
            let DeletePayload { id } = payload::<DeletePayload>(body)?;
            state
                .app
                .fixture_delete_use_case
                .delete_fixture(&FixtureId::new(id.trim()))
                .await?;
            Ok(Json(json!({ "success": true })))
        }
        _ => Err(ServiceError::BadRequest(UNKNOWN_ACTION.to_string())),
    }
}
