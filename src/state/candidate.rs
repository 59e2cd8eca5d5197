//! Candidate and identity models supplied by the scheduling backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job candidate as returned by the backend. Read-only on this side; the
/// interview list is only ever inspected to derive the next round number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub interviews: Vec<Interview>,
}

impl Candidate {
    /// Round number the next scheduled interview would get
    pub fn next_round(&self) -> u32 {
        self.interviews.len() as u32 + 1
    }
}

/// A previously recorded interview, shown in the candidate list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: String,
    pub round: u32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Signed-in user identity from the profile endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub email: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_round_for_fresh_candidate() {
        let candidate = Candidate {
            id: "c1".to_string(),
            name: "Ada".to_string(),
            role: None,
            photo_url: None,
            interviews: vec![],
        };
        assert_eq!(candidate.next_round(), 1);
    }

    #[test]
    fn test_profile_deserializes_wire_names() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"email":"me@example.com","userId":"u42"}"#).unwrap();
        assert_eq!(profile.email, "me@example.com");
        assert_eq!(profile.user_id, "u42");
    }

    #[test]
    fn test_profile_email_defaults_to_empty() {
        let profile: UserProfile = serde_json::from_str(r#"{"userId":"u42"}"#).unwrap();
        assert_eq!(profile.email, "");
    }
}
