//! Permission sets using bitflags.
//!
//! One bit per [`Permission`], in catalog order. `ALL` is a bit of its own:
//! it marks the superadmin grant and is never the union of the other bits.

use bitflags::bitflags;

use super::permission::Permission;

bitflags! {
    /// Set of permissions granted to a role.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PermissionSet: u64 {
        // === System (bit 0) ===
        /// Sentinel grant, held only by superadmin
        const ALL                = 1 << 0;

        // === Administration (bits 1-6) ===
        const MANAGE_USERS       = 1 << 1;
        const MANAGE_CONTENT     = 1 << 2;
        const MANAGE_PAYMENTS    = 1 << 3;
        const VIEW_ANALYTICS     = 1 << 4;
        const MODERATE_CONTENT   = 1 << 5;
        const MANAGE_REPORTS     = 1 << 6;

        // === Creation (bits 7-11) ===
        const CREATE_CONTENT     = 1 << 7;
        const MANAGE_OWN_CONTENT = 1 << 8;
        const VIEW_OWN_ANALYTICS = 1 << 9;
        const UPLOAD_FILES       = 1 << 10;
        const PUBLISH_CONTENT    = 1 << 11;

        // === Consumption (bits 12-15) ===
        const VIEW_CONTENT       = 1 << 12;
        const CREATE_REPORTS     = 1 << 13;
        const BOOKMARK_CONTENT   = 1 << 14;
        const RATE_CONTENT       = 1 << 15;

        // === Moderation (bit 16) ===
        const MANAGE_COMMENTS    = 1 << 16;
    }
}

impl PermissionSet {
    // === Default Grants ===

    pub const SUPERADMIN_DEFAULT: Self = Self::ALL;

    pub const ADMIN_DEFAULT: Self = Self::MANAGE_USERS
        .union(Self::MANAGE_CONTENT)
        .union(Self::MANAGE_PAYMENTS)
        .union(Self::VIEW_ANALYTICS)
        .union(Self::MODERATE_CONTENT)
        .union(Self::MANAGE_REPORTS);

    pub const MODERATOR_DEFAULT: Self = Self::MODERATE_CONTENT
        .union(Self::MANAGE_REPORTS)
        .union(Self::VIEW_ANALYTICS)
        .union(Self::MANAGE_COMMENTS);

    pub const CREATOR_DEFAULT: Self = Self::CREATE_CONTENT
        .union(Self::MANAGE_OWN_CONTENT)
        .union(Self::VIEW_OWN_ANALYTICS)
        .union(Self::UPLOAD_FILES)
        .union(Self::PUBLISH_CONTENT);

    pub const READER_DEFAULT: Self = Self::VIEW_CONTENT
        .union(Self::CREATE_REPORTS)
        .union(Self::BOOKMARK_CONTENT)
        .union(Self::RATE_CONTENT);

    /// Single-bit set for one permission.
    #[must_use]
    pub const fn from_permission(permission: Permission) -> Self {
        match permission {
            Permission::All => Self::ALL,
            Permission::ManageUsers => Self::MANAGE_USERS,
            Permission::ManageContent => Self::MANAGE_CONTENT,
            Permission::ManagePayments => Self::MANAGE_PAYMENTS,
            Permission::ViewAnalytics => Self::VIEW_ANALYTICS,
            Permission::ModerateContent => Self::MODERATE_CONTENT,
            Permission::ManageReports => Self::MANAGE_REPORTS,
            Permission::CreateContent => Self::CREATE_CONTENT,
            Permission::ManageOwnContent => Self::MANAGE_OWN_CONTENT,
            Permission::ViewOwnAnalytics => Self::VIEW_OWN_ANALYTICS,
            Permission::UploadFiles => Self::UPLOAD_FILES,
            Permission::PublishContent => Self::PUBLISH_CONTENT,
            Permission::ViewContent => Self::VIEW_CONTENT,
            Permission::CreateReports => Self::CREATE_REPORTS,
            Permission::BookmarkContent => Self::BOOKMARK_CONTENT,
            Permission::RateContent => Self::RATE_CONTENT,
            Permission::ManageComments => Self::MANAGE_COMMENTS,
        }
    }

    /// Literal membership test. Holding `ALL` does not imply other bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use bh_server::permissions::{Permission, PermissionSet};
    ///
    /// let perms = PermissionSet::CREATOR_DEFAULT;
    /// assert!(perms.has(Permission::UploadFiles));
    /// assert!(!perms.has(Permission::ManageUsers));
    /// ```
    #[must_use]
    pub const fn has(self, permission: Permission) -> bool {
        self.contains(Self::from_permission(permission))
    }

    /// Permissions in this set, in catalog order.
    pub fn permissions(self) -> impl Iterator<Item = Permission> {
        Permission::all()
            .iter()
            .copied()
            .filter(move |p| self.has(*p))
    }
}

impl Default for PermissionSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, p| acc | Self::from_permission(p))
    }
}
