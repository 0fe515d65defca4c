use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// Self-reported profile as submitted by the user. Casing is preserved;
/// the matcher normalizes its own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub education_level: String,
    /// Free text; only its leading integer is meaningful to the matcher.
    #[serde(default, deserialize_with = "years_as_text")]
    pub years_experience: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_role: Option<String>,
}

/// A profile as persisted for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProfile {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub user_id: Uuid,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("profile must be a JSON object")]
    NotAnObject,

    #[error("'{0}' is required")]
    MissingField(&'static str),

    #[error("'{0}' must be a list of strings")]
    NotAList(&'static str),

    #[error("malformed profile: {0}")]
    Malformed(String),
}

impl UserProfile {
    /// Maps loosely-typed JSON onto a typed profile.
    ///
    /// `skills` and `interests` must be arrays and `educationLevel` a non-blank
    /// string. Blank list entries are dropped.
    pub fn from_value(value: Value) -> Result<Self, ProfileError> {
        let object = value.as_object().ok_or(ProfileError::NotAnObject)?;

        for field in ["skills", "interests"] {
            match object.get(field) {
                Some(Value::Array(_)) => {}
                Some(Value::Null) | None => return Err(ProfileError::MissingField(field)),
                Some(_) => return Err(ProfileError::NotAList(field)),
            }
        }
        match object.get("educationLevel") {
            Some(Value::String(level)) if !level.trim().is_empty() => {}
            _ => return Err(ProfileError::MissingField("educationLevel")),
        }

        let mut profile: UserProfile =
            serde_json::from_value(value).map_err(|e| ProfileError::Malformed(e.to_string()))?;
        profile.skills.retain(|s| !s.trim().is_empty());
        profile.interests.retain(|s| !s.trim().is_empty());
        Ok(profile)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearsRepr {
    Text(String),
    Number(serde_json::Number),
}

/// Accepts `"5"`, `5`, or `null`/absent (empty string).
fn years_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<YearsRepr>::deserialize(deserializer)? {
        Some(YearsRepr::Text(text)) => text,
        Some(YearsRepr::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_accepts_wire_shape() {
        let profile = UserProfile::from_value(json!({
            "skills": ["Python", "SQL"],
            "interests": ["Data"],
            "educationLevel": "Bachelors",
            "yearsExperience": "3",
            "currentRole": "Analyst"
        }))
        .unwrap();

        assert_eq!(profile.skills, vec!["Python", "SQL"]);
        assert_eq!(profile.education_level, "Bachelors");
        assert_eq!(profile.years_experience, "3");
        assert_eq!(profile.current_role.as_deref(), Some("Analyst"));
    }

    #[test]
    fn test_numeric_years_are_stringified() {
        let profile = UserProfile::from_value(json!({
            "skills": [], "interests": [], "educationLevel": "phd", "yearsExperience": 6
        }))
        .unwrap();
        assert_eq!(profile.years_experience, "6");
    }

    #[test]
    fn test_missing_years_is_empty() {
        let profile = UserProfile::from_value(json!({
            "skills": [], "interests": [], "educationLevel": "phd"
        }))
        .unwrap();
        assert_eq!(profile.years_experience, "");
        assert!(profile.current_role.is_none());
    }

    #[test]
    fn test_missing_skills_rejected() {
        let err = UserProfile::from_value(json!({
            "interests": [], "educationLevel": "phd"
        }))
        .unwrap_err();
        assert_eq!(err, ProfileError::MissingField("skills"));
    }

    #[test]
    fn test_string_interests_rejected() {
        let err = UserProfile::from_value(json!({
            "skills": [], "interests": "design", "educationLevel": "phd"
        }))
        .unwrap_err();
        assert_eq!(err, ProfileError::NotAList("interests"));
    }

    #[test]
    fn test_blank_education_rejected() {
        let err = UserProfile::from_value(json!({
            "skills": [], "interests": [], "educationLevel": "  "
        }))
        .unwrap_err();
        assert_eq!(err, ProfileError::MissingField("educationLevel"));
    }

    #[test]
    fn test_non_string_skill_is_malformed() {
        let err = UserProfile::from_value(json!({
            "skills": [1, 2], "interests": [], "educationLevel": "phd"
        }))
        .unwrap_err();
        assert!(matches!(err, ProfileError::Malformed(_)));
    }

    #[test]
    fn test_non_object_rejected() {
        assert_eq!(
            UserProfile::from_value(json!(["skills"])).unwrap_err(),
            ProfileError::NotAnObject
        );
    }

    #[test]
    fn test_blank_entries_dropped() {
        let profile = UserProfile::from_value(json!({
            "skills": ["rust", " ", ""], "interests": [""], "educationLevel": "masters"
        }))
        .unwrap();
        assert_eq!(profile.skills, vec!["rust"]);
        assert!(profile.interests.is_empty());
    }

    #[test]
    fn test_stored_profile_is_flat_camel_case() {
        let stored = StoredProfile {
            profile: UserProfile {
                skills: vec!["rust".into()],
                interests: vec![],
                education_level: "masters".into(),
                years_experience: "1".into(),
                current_role: None,
            },
            user_id: Uuid::nil(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["skills"], json!(["rust"]));
        assert_eq!(value["educationLevel"], json!("masters"));
        assert!(value.get("userId").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("profile").is_none());

        let back: StoredProfile = serde_json::from_value(value).unwrap();
        assert_eq!(back, stored);
    }
}
