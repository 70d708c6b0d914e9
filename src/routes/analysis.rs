use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::Result;
use crate::models::{SkillCompensationResponse, SkillDistributionResponse};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SkillQueryParams {
    pub skill: String,
}

/// Always answers 200; failed upstream searches shrink the sample instead.
pub async fn handle_skill_distribution(
    State(state): State<AppState>,
    Query(params): Query<SkillQueryParams>,
) -> Json<SkillDistributionResponse> {
    let result = state.estimator.estimate_distribution(&params.skill).await;
    Json(result.into())
}

pub async fn handle_skill_compensation(
    State(state): State<AppState>,
    Query(params): Query<SkillQueryParams>,
) -> Result<Json<SkillCompensationResponse>> {
    let response = state.torre.analyze_compensation(&params.skill).await?;
    Ok(Json(response))
}
