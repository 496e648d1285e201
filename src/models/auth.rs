use serde::{Deserialize, Serialize};

use crate::auth::Role;

/// Body of a successful POST /auth/login. The refresh credential is not
/// here - the server sets it as an HTTP-only cookie on the same response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub user_roles: Vec<Role>,
}

/// Body of a successful POST /auth/refresh.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_response() {
        let json = r#"{
            "accessToken": "eyJhbGciOi.example.token",
            "userRoles": ["ROLE_USER", "ROLE_LEADER"]
        }"#;
        let parsed: LoginResponse = serde_json::from_str(json).expect("login response");
        assert_eq!(parsed.access_token, "eyJhbGciOi.example.token");
        assert_eq!(parsed.user_roles.len(), 2);
    }

    #[test]
    fn test_login_response_without_roles() {
        // Older backend builds omit userRoles entirely
        let json = r#"{"accessToken": "tok"}"#;
        let parsed: LoginResponse = serde_json::from_str(json).expect("login response");
        assert!(parsed.user_roles.is_empty());
    }

    #[test]
    fn test_register_request_wire_names() {
        let request = RegisterRequest {
            email: "nansen@arctic.example".into(),
            password: "fram1893".into(),
            first_name: "Fridtjof".into(),
            last_name: "Nansen".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["firstName"], "Fridtjof");
        assert_eq!(value["lastName"], "Nansen");
    }
}
