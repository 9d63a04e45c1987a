//! Platform roles and privilege levels.

use std::fmt;
use std::str::FromStr;

use super::error::PermissionError;

/// Ranked category of user privilege.
///
/// The set is closed. An unrecognized identifier never maps to a role; callers
/// that need a fallback use [`Role::parse_or_default`], which yields
/// [`Role::Reader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Superadmin,
    Admin,
    Moderator,
    Creator,
    #[default]
    Reader,
}

impl Role {
    /// Returns all roles, highest level first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Superadmin,
            Self::Admin,
            Self::Moderator,
            Self::Creator,
            Self::Reader,
        ]
    }

    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Superadmin => "superadmin",
            Self::Admin => "admin",
            Self::Moderator => "moderator",
            Self::Creator => "creator",
            Self::Reader => "reader",
        }
    }

    /// Privilege rank. Unique per role, strictly decreasing down [`Role::all`].
    #[must_use]
    pub const fn level(&self) -> RoleLevel {
        match self {
            Self::Superadmin => RoleLevel(5),
            Self::Admin => RoleLevel(4),
            Self::Moderator => RoleLevel(3),
            Self::Creator => RoleLevel(2),
            Self::Reader => RoleLevel(1),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Superadmin => "Super Admin",
            Self::Admin => "Administrator",
            Self::Moderator => "Moderator",
            Self::Creator => "Content Creator",
            Self::Reader => "Reader",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Superadmin => "Full system access with all permissions",
            Self::Admin => "System administration with user and content management",
            Self::Moderator => "Content moderation and community management",
            Self::Creator => "Content creation and self-publishing",
            Self::Reader => "Basic user with content consumption access",
        }
    }

    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Superadmin => "#ff6b6b",
            Self::Admin => "#667eea",
            Self::Moderator => "#feca57",
            Self::Creator => "#48dbfb",
            Self::Reader => "#a55eea",
        }
    }

    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Superadmin => "\u{1f451}",
            Self::Admin => "\u{1f6e1}\u{fe0f}",
            Self::Moderator => "\u{2696}\u{fe0f}",
            Self::Creator => "\u{1f3a8}",
            Self::Reader => "\u{1f464}",
        }
    }

    /// Resolve an optional identifier, falling back to the least privileged role.
    ///
    /// # Examples
    ///
    /// ```
    /// use bh_server::permissions::Role;
    ///
    /// assert_eq!(Role::parse_or_default(Some("creator")), Role::Creator);
    /// assert_eq!(Role::parse_or_default(Some("root")), Role::Reader);
    /// assert_eq!(Role::parse_or_default(None), Role::Reader);
    /// ```
    #[must_use]
    pub fn parse_or_default(id: Option<&str>) -> Self {
        id.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Role {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|r| r.id() == s)
            .ok_or_else(|| PermissionError::UnknownRole(s.to_string()))
    }
}

/// Required privilege rank for coarse "at least this privileged" checks.
///
/// Only 1 through 5 are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct RoleLevel(u8);

impl RoleLevel {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(5);

    /// Validate a raw level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bh_server::permissions::RoleLevel;
    ///
    /// assert_eq!(RoleLevel::new(3).unwrap().get(), 3);
    /// assert!(RoleLevel::new(0).is_err());
    /// assert!(RoleLevel::new(6).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, PermissionError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN.0..=Self::MAX.0).contains(v))
            .map(Self)
            .ok_or(PermissionError::InvalidLevel(value))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for RoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
