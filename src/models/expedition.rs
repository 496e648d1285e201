use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The caller's role within one expedition. Distinct from the account-level
/// `auth::Role`: an account-level USER can still be the LEADER of an
/// expedition they created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExpeditionRole {
    Leader,
    Participant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expedition {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Present on listings and detail responses; how the backend sees the
    /// requesting user in this expedition.
    #[serde(default)]
    pub role: Option<ExpeditionRole>,
}

impl Expedition {
    pub fn is_led_by_caller(&self) -> bool {
        self.role == Some(ExpeditionRole::Leader)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpedition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpeditionUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expedition_listing_entry() {
        let json = r#"{
            "id": 7,
            "name": "Severny Polyus-41",
            "description": "Drifting ice station",
            "startDate": "2026-09-01",
            "endDate": "2026-11-15",
            "role": "LEADER"
        }"#;
        let expedition: Expedition = serde_json::from_str(json).expect("expedition");
        assert_eq!(expedition.name, "Severny Polyus-41");
        assert!(expedition.is_led_by_caller());
        assert_eq!(
            expedition.start_date,
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_expedition_without_role() {
        let json = r#"{"id": 1, "name": "Test", "startDate": "2026-01-01", "endDate": "2026-01-10"}"#;
        let expedition: Expedition = serde_json::from_str(json).expect("expedition");
        assert!(expedition.role.is_none());
        assert!(!expedition.is_led_by_caller());
    }
}
