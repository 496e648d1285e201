use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::auth::Role;

/// One row of the admin user listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub individual_number: Option<String>,
    #[serde(default)]
    pub roles: HashSet<Role>,
}

impl AdminUser {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_admin_user() {
        let json = r#"{
            "id": 3,
            "email": "leader@arctic.example",
            "firstName": "Otto",
            "lastName": "Schmidt",
            "individualNumber": "IND-0003",
            "roles": ["ROLE_USER", "ROLE_LEADER"]
        }"#;
        let user: AdminUser = serde_json::from_str(json).expect("admin user");
        assert!(user.has_role(Role::Leader));
        assert!(!user.has_role(Role::Admin));
    }
}
