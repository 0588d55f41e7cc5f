use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    ServiceError,
    http::{AppState, DivisionQuery},
    json::{JsonNeighbourhoodTotals, JsonStandingsRow},
};

pub async fn standings(
    State(state): State<AppState>,
    Query(query): Query<DivisionQuery>,
) -> Result<Json<Vec<JsonStandingsRow>>, ServiceError> {
    let rows = state
        .app
        .ladder_standings_use_case
        .standings(query.division.as_deref())
        .await?;
    Ok(Json(rows.into_iter().map(JsonStandingsRow::from).collect()))
}

pub async fn neighbourhoods(
    State(state): State<AppState>,
    Query(query): Query<DivisionQuery>,
) -> Result<Json<Vec<JsonNeighbourhoodTotals>>, ServiceError> {
    let totals = state
        .app
        .ladder_neighbourhoods_use_case
        .neighbourhoods(query.division.as_deref())
        .await?;
    Ok(Json(
        totals
            .into_iter()
            .map(JsonNeighbourhoodTotals::from)
            .collect(),
    ))
}
