//! Career scoring — one `ScoredCareer` per catalog entry.
//!
//! Four independent sub-scores on a 100-point scale:
//! 1. Skills (40): each required skill that matches a user skill adds 40 / |requiredSkills|
//! 2. Interests (30): each career interest that matches a user interest adds 30 / |interests|
//! 3. Education (20): exact membership of the user's level in the accepted levels
//! 4. Experience (10): 10 for ≥3 years, 5 for 1–2 years, 0 otherwise
//!
//! A keyword matches when either string contains the other, so "javascript" also
//! matches "java" and a one-letter keyword like "r" matches any skill containing it.

use serde::{Deserialize, Serialize};

use crate::catalog::CareerDefinition;
use crate::matching::normalizer::NormalizedProfile;

pub const SKILL_WEIGHT: f64 = 40.0;
pub const INTEREST_WEIGHT: f64 = 30.0;
pub const EDUCATION_WEIGHT: f64 = 20.0;
pub const EXPERIENCE_WEIGHT: f64 = 10.0;
pub const PARTIAL_EXPERIENCE_WEIGHT: f64 = 5.0;

pub const SENIOR_YEARS: u32 = 3;
pub const JUNIOR_YEARS: u32 = 1;

const MAX_SCORE: f64 = 100.0;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// A catalog entry with the caller's match against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCareer {
    #[serde(flatten)]
    pub career: CareerDefinition,
    pub match_score: u32, // 0 – 100
    /// Catalog keywords (not the user's text), in catalog order.
    pub matched_skills: Vec<String>,
    pub matched_interests: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

pub fn score(career: &CareerDefinition, profile: &NormalizedProfile) -> ScoredCareer {
    let mut total = 0.0_f64;

    let matched_skills = accumulate_matches(
        &career.required_skills,
        &profile.skills,
        SKILL_WEIGHT,
        &mut total,
    );
    let matched_interests =
        accumulate_matches(&career.interests, &profile.interests, INTEREST_WEIGHT, &mut total);

    if career
        .education_level
        .iter()
        .any(|level| *level == profile.education)
    {
        total += EDUCATION_WEIGHT;
    }

    total += experience_points(profile.experience_years);

    ScoredCareer {
        career: career.clone(),
        match_score: total.round().clamp(0.0, MAX_SCORE) as u32,
        matched_skills,
        matched_interests,
    }
}

/// Adds `weight / |keywords|` to `total` for each matched keyword, in catalog
/// order, and returns the matched keywords. Summing share by share (rather than
/// count × share) fixes how totals such as 3 × 40/6 round.
fn accumulate_matches(
    keywords: &[String],
    user_terms: &[String],
    weight: f64,
    total: &mut f64,
) -> Vec<String> {
    let mut matched = Vec::new();
    if keywords.is_empty() {
        return matched;
    }
    let share = weight / keywords.len() as f64;

    for keyword in keywords {
        if keyword_matches(keyword, user_terms) {
            *total += share;
            matched.push(keyword.clone());
        }
    }
    matched
}

/// Bidirectional substring containment against any user term.
pub fn keyword_matches(keyword: &str, user_terms: &[String]) -> bool {
    user_terms
        .iter()
        .any(|term| term.contains(keyword) || keyword.contains(term.as_str()))
}

fn experience_points(years: u32) -> f64 {
    if years >= SENIOR_YEARS {
        EXPERIENCE_WEIGHT
    } else if years >= JUNIOR_YEARS {
        PARTIAL_EXPERIENCE_WEIGHT
    } else {
        0.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
