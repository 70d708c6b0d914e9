use axum::{extract::State, Json};

use crate::error::{Error, Result};
use crate::models::{PeopleSearchRequest, PeopleSearchResponse, DEFAULT_PEOPLE_SEARCH_LIMIT};
use crate::state::AppState;

pub async fn handle_search_people(
    State(state): State<AppState>,
    Json(req): Json<PeopleSearchRequest>,
) -> Result<Json<PeopleSearchResponse>> {
    let query = req.query.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(Error::Validation("Search query cannot be empty.".to_string()));
    }

    let limit = req.limit.unwrap_or(DEFAULT_PEOPLE_SEARCH_LIMIT);
    let people = state.torre.search_people_stream(query, limit).await?;
    Ok(Json(people.into()))
}
