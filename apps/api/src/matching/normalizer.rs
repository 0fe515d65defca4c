use crate::profile::models::UserProfile;

/// Case-folded, comparison-ready view of a `UserProfile`.
/// Built per request; the stored profile is never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedProfile {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub education: String,
    pub experience_years: u32,
}

impl NormalizedProfile {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            skills: profile.skills.iter().map(|s| s.to_lowercase()).collect(),
            interests: profile.interests.iter().map(|i| i.to_lowercase()).collect(),
            education: profile.education_level.to_lowercase(),
            experience_years: parse_years(&profile.years_experience),
        }
    }
}

/// Reads the leading integer of `raw`, the way form values like `"3"` or
/// `"5 years"` arrive. No leading digits, or a negative value, yields 0.
pub fn parse_years(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let years = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, d| {
            acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
        });

    if negative {
        0
    } else {
        years
    }
}
