//! Axum route handler for the Recommendations API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::matching::engine::ScoredCareer;
use crate::matching::{
    generate_recommendations, generate_recommendations_with, RecommendationOptions,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<ScoredCareer>,
}

/// GET /api/v1/recommendations
///
/// Scores the caller's saved profile against the catalog. 404 until a profile exists.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<RecommendationsQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    if query.limit == Some(0) {
        return Err(AppError::Validation("limit must be at least 1".to_string()));
    }

    let stored = state.profiles.get(user.user_id).await?.ok_or_else(|| {
        AppError::NotFound("Profile not found. Please complete your profile first.".to_string())
    })?;

    let careers = state.catalog.careers();
    let recommendations = match query.limit {
        None => generate_recommendations(&stored.profile, careers),
        Some(limit) => generate_recommendations_with(
            &stored.profile,
            careers,
            RecommendationOptions { limit: Some(limit) },
        ),
    };
    info!(
        "Returning {} recommendations for user {}",
        recommendations.len(),
        user.user_id
    );

    Ok(Json(RecommendationsResponse { recommendations }))
}
