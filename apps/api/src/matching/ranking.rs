use crate::matching::engine::ScoredCareer;

/// Careers must score strictly above this to be recommended.
pub const RELEVANCE_THRESHOLD: u32 = 20;

/// Orders by `match_score` descending and drops anything at or below the
/// threshold. The sort is stable, so equal scores keep catalog order.
pub fn rank(mut scored: Vec<ScoredCareer>) -> Vec<ScoredCareer> {
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.retain(|career| career.match_score > RELEVANCE_THRESHOLD);
    scored
}
