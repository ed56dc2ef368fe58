use serde::{Deserialize, Serialize};

/// Sentinel stored in `email` when the input format is not supported.
/// Downstream consumers depend on this exact shape, so the wart stays.
pub const UNSUPPORTED_FORMAT_SENTINEL: &str = "Unsupported format";

/// One parsed resume. Every field is independently optional or empty;
/// serialization always carries all seven keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub name: Vec<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience_years: Option<u32>,
    pub job_titles: Vec<String>,
}

impl ResumeProfile {
    /// The record returned for formats the pipeline does not handle: every
    /// field empty except the email sentinel.
    #[must_use]
    pub fn unsupported() -> Self {
        Self {
            email: Some(UNSUPPORTED_FORMAT_SENTINEL.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        self.email.as_deref() == Some(UNSUPPORTED_FORMAT_SENTINEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_always_has_all_seven_keys() {
        let json = serde_json::to_value(ResumeProfile::default()).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "name",
            "email",
            "phone",
            "skills",
            "education",
            "experience_years",
            "job_titles",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object.len(), 7);
    }

    #[test]
    fn unsupported_record_only_carries_the_sentinel() {
        let profile = ResumeProfile::unsupported();
        assert!(profile.is_unsupported());
        assert!(profile.name.is_empty());
        assert!(profile.phone.is_none());
        assert!(profile.skills.is_empty());
        assert!(profile.education.is_empty());
        assert!(profile.experience_years.is_none());
        assert!(profile.job_titles.is_empty());
    }

    #[test]
    fn round_trips_through_json() {
        let profile = ResumeProfile {
            name: vec!["JOHN SMITH".to_string()],
            email: Some("jsmith@example.com".to_string()),
            experience_years: Some(5),
            ..ResumeProfile::default()
        };
        let json = serde_json::to_string(&profile).unwrap();
        let back: ResumeProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
