use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{Error, Result};
use crate::models::PersonDetails;
use crate::state::AppState;

pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<PersonDetails>> {
    let username = username.trim();
    if username.is_empty() {
        tracing::warn!("Rejected profile request with blank username");
        return Err(Error::Validation("Username cannot be empty.".to_string()));
    }

    let details = state.torre.get_person_details(username).await?;
    Ok(Json(details))
}

pub async fn handle_profile_health() -> &'static str {
    "Profile service is operational"
}
