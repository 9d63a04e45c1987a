//! Role and Permission Types
//!
//! JSON shapes returned by the role authority. Identifiers travel as plain
//! strings so clients do not need to track the server's closed enums.

use serde::{Deserialize, Serialize};

/// Public description of a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleInfo {
    /// Role identifier (e.g. `"moderator"`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Privilege rank, 1 (lowest) to 5 (highest).
    pub level: u8,
    /// Human-readable summary.
    pub description: String,
    /// Permission identifiers granted to holders of the role.
    pub permissions: Vec<String>,
    /// Badge color as a hex string.
    pub color: String,
    /// Badge icon.
    pub icon: String,
}

/// Public description of a permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionInfo {
    /// Permission identifier (e.g. `"create_content"`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Human-readable summary.
    pub description: String,
    /// Grouping used by admin dashboards.
    pub category: String,
}

/// Answer to a single permission check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionCheck {
    pub has_permission: bool,
    pub permission: String,
    pub user_role: String,
}

/// Answer to a minimum-level check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleLevelCheck {
    pub has_role_level: bool,
    /// The requested level, or `None` when it was not a number.
    pub required_level: Option<i64>,
    pub user_role: String,
    /// Level of `user_role`, or `None` when the role is unknown.
    pub user_level: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_check_uses_camel_case() {
        let check = PermissionCheck {
            has_permission: true,
            permission: "create_content".into(),
            user_role: "creator".into(),
        };
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["hasPermission"], true);
        assert_eq!(json["userRole"], "creator");
    }

    #[test]
    fn test_role_level_check_serializes_unknown_level_as_null() {
        let check = RoleLevelCheck {
            has_role_level: false,
            required_level: Some(2),
            user_role: "bogus-role".into(),
            user_level: None,
        };
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["requiredLevel"], 2);
        assert!(json["userLevel"].is_null());
    }

    #[test]
    fn test_role_info_field_names() {
        let json = r##"{
            "id": "reader",
            "name": "Reader",
            "level": 1,
            "description": "Basic user",
            "permissions": ["view_content"],
            "color": "#a55eea",
            "icon": "x"
        }"##;
        let info: RoleInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.level, 1);
        assert_eq!(info.permissions, vec!["view_content".to_string()]);
    }
}
