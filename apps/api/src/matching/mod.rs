//! Profile-to-career matching.
//!
//! Pipeline: normalize the profile once → score every catalog entry → rank and
//! filter. Pure and synchronous; callers own I/O and authorization.

pub mod engine;
pub mod handlers;
pub mod normalizer;
pub mod ranking;

use tracing::debug;

use crate::catalog::CareerDefinition;
use crate::matching::engine::{score, ScoredCareer};
use crate::matching::normalizer::NormalizedProfile;
use crate::matching::ranking::rank;
use crate::profile::models::UserProfile;

#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationOptions {
    /// Keep only the first `limit` ranked careers.
    pub limit: Option<usize>,
}

/// Ranked careers scoring above the relevance threshold. An empty catalog
/// yields an empty list.
pub fn generate_recommendations(
    profile: &UserProfile,
    careers: &[CareerDefinition],
) -> Vec<ScoredCareer> {
    generate_recommendations_with(profile, careers, RecommendationOptions::default())
}

pub fn generate_recommendations_with(
    profile: &UserProfile,
    careers: &[CareerDefinition],
    options: RecommendationOptions,
) -> Vec<ScoredCareer> {
    let normalized = NormalizedProfile::from_profile(profile);
    let scored: Vec<ScoredCareer> = careers
        .iter()
        .map(|career| score(career, &normalized))
        .collect();

    let mut ranked = rank(scored);
    if let Some(limit) = options.limit {
        ranked.truncate(limit);
    }

    debug!(
        careers = careers.len(),
        retained = ranked.len(),
        "Generated career recommendations"
    );
    ranked
}
