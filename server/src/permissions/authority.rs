//! Role-permission authority.
//!
//! Answers "which role is this", "does it grant X" and "is it at least level N"
//! against the role table. String-keyed queries fail closed: anything unknown
//! or malformed answers `false` (or `None`), never an elevated result.

use std::sync::Arc;

use tracing::debug;

use super::error::PermissionError;
use super::permission::Permission;
use super::role::{Role, RoleLevel};
use super::set::PermissionSet;
use super::table::RoleTable;

/// A role together with its grants from the active table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleDescriptor {
    pub role: Role,
    pub permissions: PermissionSet,
}

impl RoleDescriptor {
    #[must_use]
    pub const fn level(&self) -> RoleLevel {
        self.role.level()
    }

    /// Public descriptor for API responses.
    #[must_use]
    pub fn info(&self) -> bh_common::RoleInfo {
        bh_common::RoleInfo {
            id: self.role.id().to_string(),
            name: self.role.name().to_string(),
            level: self.role.level().get(),
            description: self.role.description().to_string(),
            permissions: self
                .permissions
                .permissions()
                .map(|p| p.id().to_string())
                .collect(),
            color: self.role.color().to_string(),
            icon: self.role.icon().to_string(),
        }
    }
}

/// Shared, read-only handle to the role table.
///
/// Cloning is cheap; every clone sees the same table.
#[derive(Debug, Clone)]
pub struct RoleAuthority {
    table: Arc<RoleTable>,
}

impl RoleAuthority {
    #[must_use]
    pub fn new(table: RoleTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    #[must_use]
    pub fn table(&self) -> &RoleTable {
        &self.table
    }

    /// Look up a role by identifier. `None` when the identifier is unknown.
    #[must_use]
    pub fn get_role(&self, role_id: &str) -> Option<RoleDescriptor> {
        let role = role_id.parse::<Role>().ok()?;
        Some(self.describe(role))
    }

    #[must_use]
    pub fn describe(&self, role: Role) -> RoleDescriptor {
        RoleDescriptor {
            role,
            permissions: self.table.permissions(role),
        }
    }

    /// Every role, highest level first.
    pub fn roles(&self) -> impl Iterator<Item = RoleDescriptor> + '_ {
        Role::all().iter().map(|role| self.describe(*role))
    }

    /// String-keyed permission check.
    ///
    /// superadmin passes for any input, including strings outside the
    /// vocabulary. Otherwise both identifiers must match exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use bh_server::permissions::{RoleAuthority, RoleTable};
    ///
    /// let authority = RoleAuthority::new(RoleTable::builtin());
    /// assert!(authority.has_permission("creator", "create_content"));
    /// assert!(!authority.has_permission("creator", "manage_users"));
    /// assert!(authority.has_permission("superadmin", "anything at all"));
    /// assert!(!authority.has_permission("bogus-role", "view_content"));
    /// ```
    #[must_use]
    pub fn has_permission(&self, role_id: &str, permission: &str) -> bool {
        let Ok(role) = role_id.parse::<Role>() else {
            debug!(role = role_id, permission, "Permission denied: unknown role");
            return false;
        };
        if role == Role::Superadmin {
            return true;
        }
        let Ok(permission) = permission.parse::<Permission>() else {
            debug!(%role, permission, "Permission denied: unknown permission");
            return false;
        };
        self.role_has_permission(role, permission)
    }

    /// String-keyed level check. Unknown roles rank below every valid level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bh_server::permissions::{RoleAuthority, RoleTable};
    ///
    /// let authority = RoleAuthority::new(RoleTable::builtin());
    /// assert!(authority.has_role_level("admin", 3));
    /// assert!(!authority.has_role_level("reader", 2));
    /// assert!(!authority.has_role_level("admin", 0));
    /// ```
    #[must_use]
    pub fn has_role_level(&self, role_id: &str, required_level: i64) -> bool {
        let Ok(required) = RoleLevel::new(required_level) else {
            debug!(role = role_id, required_level, "Level check rejected: invalid level");
            return false;
        };
        let Ok(role) = role_id.parse::<Role>() else {
            debug!(role = role_id, %required, "Level check denied: unknown role");
            return false;
        };
        self.role_meets_level(role, required)
    }

    /// Typed permission check.
    #[must_use]
    pub fn role_has_permission(&self, role: Role, permission: Permission) -> bool {
        if role == Role::Superadmin {
            return true;
        }
        let granted = self.table.permissions(role).has(permission);
        if !granted {
            debug!(%role, %permission, "Permission denied");
        }
        granted
    }

    /// Typed level check.
    #[must_use]
    pub fn role_meets_level(&self, role: Role, required: RoleLevel) -> bool {
        role.level() >= required
    }

    #[must_use]
    pub fn permissions_of(&self, role: Role) -> PermissionSet {
        self.table.permissions(role)
    }

    /// Gate an action on a permission.
    pub fn require_permission(
        &self,
        role: Role,
        permission: Permission,
    ) -> Result<(), PermissionError> {
        if self.role_has_permission(role, permission) {
            Ok(())
        } else {
            Err(PermissionError::MissingPermission { role, permission })
        }
    }

    /// Gate an action on a minimum level.
    pub fn require_level(&self, role: Role, required: RoleLevel) -> Result<(), PermissionError> {
        if self.role_meets_level(role, required) {
            Ok(())
        } else {
            debug!(%role, %required, "Level check denied");
            Err(PermissionError::InsufficientLevel { role, required })
        }
    }
}

impl Default for RoleAuthority {
    fn default() -> Self {
        Self::new(RoleTable::builtin())
    }
}
