use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One membership record in an expedition. The `id` here is the membership
/// id, not the underlying user id - it is what the remove and metrics
/// endpoints key on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: i64,
    #[serde(default)]
    pub user_first_name: Option<String>,
    #[serde(default)]
    pub user_last_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_individual_number: Option<String>,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
}

impl Participant {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.user_first_name.as_deref().unwrap_or(""),
            self.user_last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}

/// Result row from the user search used when adding participants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub individual_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_participant() {
        let json = r#"{
            "id": 42,
            "userFirstName": "Roald",
            "userLastName": "Amundsen",
            "userEmail": "roald@arctic.example",
            "userIndividualNumber": "IND-0042",
            "joinedAt": "2026-03-14T12:00:00Z"
        }"#;
        let participant: Participant = serde_json::from_str(json).expect("participant");
        assert_eq!(participant.full_name(), "Roald Amundsen");
        assert_eq!(participant.user_individual_number.as_deref(), Some("IND-0042"));
    }

    #[test]
    fn test_full_name_with_missing_parts() {
        let participant: Participant = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(participant.full_name(), "");
    }
}
