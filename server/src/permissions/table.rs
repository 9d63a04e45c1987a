//! Role table: which permissions each role grants.
//!
//! The table is built once at startup, either from the builtin defaults or
//! from a versioned JSON record, and is read-only afterwards.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::permission::Permission;
use super::role::Role;
use super::set::PermissionSet;

/// Record format version understood by this build.
pub const ROLE_TABLE_VERSION: u32 = 1;

/// Persisted shape of the role table, keyed by role id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleTableRecord {
    pub version: u32,
    #[serde(deserialize_with = "deserialize_unique_roles")]
    pub roles: BTreeMap<String, RoleGrantRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleGrantRecord {
    pub permissions: Vec<String>,
}

/// Reads the `roles` map, rejecting a role id that appears twice.
fn deserialize_unique_roles<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, RoleGrantRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueRolesVisitor;

    impl<'de> Visitor<'de> for UniqueRolesVisitor {
        type Value = BTreeMap<String, RoleGrantRecord>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map of role id to grants")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut roles = BTreeMap::new();
            while let Some((role_id, grant)) = map.next_entry::<String, RoleGrantRecord>()? {
                if roles.contains_key(&role_id) {
                    return Err(de::Error::custom(format_args!(
                        "duplicate role '{role_id}'"
                    )));
                }
                roles.insert(role_id, grant);
            }
            Ok(roles)
        }
    }

    deserializer.deserialize_map(UniqueRolesVisitor)
}

/// Errors loading or validating a role table.
#[derive(Debug, Error)]
pub enum RoleTableError {
    #[error("Failed to read role table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed role table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported role table version {0}")]
    UnsupportedVersion(u32),

    #[error("Unknown role '{0}' in role table")]
    UnknownRole(String),

    #[error("Unknown permission '{permission}' granted to {role}")]
    UnknownPermission { role: Role, permission: String },

    #[error("Role table has no entry for {0}")]
    MissingRole(Role),

    #[error("superadmin must hold the 'all' permission")]
    SuperadminWithoutAll,

    #[error("Only superadmin may hold the 'all' permission, found on {0}")]
    AllGrantedTo(Role),
}

/// Immutable grants per role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleTable {
    version: u32,
    grants: HashMap<Role, PermissionSet>,
}

impl RoleTable {
    /// The platform's default grants.
    #[must_use]
    pub fn builtin() -> Self {
        let grants = Role::all()
            .iter()
            .map(|role| {
                let set = match role {
                    Role::Superadmin => PermissionSet::SUPERADMIN_DEFAULT,
                    Role::Admin => PermissionSet::ADMIN_DEFAULT,
                    Role::Moderator => PermissionSet::MODERATOR_DEFAULT,
                    Role::Creator => PermissionSet::CREATOR_DEFAULT,
                    Role::Reader => PermissionSet::READER_DEFAULT,
                };
                (*role, set)
            })
            .collect();

        Self {
            version: ROLE_TABLE_VERSION,
            grants,
        }
    }

    /// Parse and validate a JSON record.
    pub fn from_json(json: &str) -> Result<Self, RoleTableError> {
        let record: RoleTableRecord = serde_json::from_str(json)?;
        Self::from_record(record)
    }

    /// Read a JSON record from disk.
    pub fn load(path: &Path) -> Result<Self, RoleTableError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_record(record: RoleTableRecord) -> Result<Self, RoleTableError> {
        if record.version != ROLE_TABLE_VERSION {
            return Err(RoleTableError::UnsupportedVersion(record.version));
        }

        let mut grants = HashMap::with_capacity(record.roles.len());
        for (role_id, grant) in record.roles {
            let role: Role = role_id
                .parse()
                .map_err(|_| RoleTableError::UnknownRole(role_id.clone()))?;

            let set = grant
                .permissions
                .into_iter()
                .map(|p| {
                    p.parse::<Permission>()
                        .map_err(|_| RoleTableError::UnknownPermission { role, permission: p })
                })
                .collect::<Result<PermissionSet, _>>()?;

            grants.insert(role, set);
        }

        let table = Self {
            version: record.version,
            grants,
        };
        table.validate()?;
        Ok(table)
    }

    /// Check the table's invariants.
    pub fn validate(&self) -> Result<(), RoleTableError> {
        for role in Role::all() {
            let set = self
                .grants
                .get(role)
                .ok_or(RoleTableError::MissingRole(*role))?;

            match role {
                Role::Superadmin if !set.has(Permission::All) => {
                    return Err(RoleTableError::SuperadminWithoutAll);
                }
                Role::Superadmin => {}
                other if set.has(Permission::All) => {
                    return Err(RoleTableError::AllGrantedTo(*other));
                }
                _ => {}
            }
        }
        Ok(())
    }

    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Grants for a role. Empty if the role is somehow absent.
    #[must_use]
    pub fn permissions(&self, role: Role) -> PermissionSet {
        self.grants.get(&role).copied().unwrap_or_default()
    }

    /// Persistable form of this table.
    #[must_use]
    pub fn to_record(&self) -> RoleTableRecord {
        let roles = Role::all()
            .iter()
            .map(|role| {
                let permissions = self
                    .permissions(*role)
                    .permissions()
                    .map(|p| p.id().to_string())
                    .collect();
                (role.id().to_string(), RoleGrantRecord { permissions })
            })
            .collect();

        RoleTableRecord {
            version: self.version,
            roles,
        }
    }
}

impl Default for RoleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
