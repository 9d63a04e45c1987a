//! Permission vocabulary.
//!
//! The closed set of capabilities a role can grant. Identifiers are exact,
//! case-sensitive snake_case strings; anything outside the set is rejected.

use std::fmt;
use std::str::FromStr;

use super::error::PermissionError;

/// A single capability granted by a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Sentinel held by superadmin; matches every check.
    All,
    ManageUsers,
    ManageContent,
    ManagePayments,
    ViewAnalytics,
    ModerateContent,
    ManageReports,
    CreateContent,
    ManageOwnContent,
    ViewOwnAnalytics,
    UploadFiles,
    PublishContent,
    ViewContent,
    CreateReports,
    BookmarkContent,
    RateContent,
    ManageComments,
}

/// Grouping used by admin dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionCategory {
    System,
    Users,
    Content,
    Payments,
    Analytics,
    Moderation,
}

impl PermissionCategory {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Users => "users",
            Self::Content => "content",
            Self::Payments => "payments",
            Self::Analytics => "analytics",
            Self::Moderation => "moderation",
        }
    }
}

impl Permission {
    /// Returns the wire identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use bh_server::permissions::Permission;
    ///
    /// assert_eq!(Permission::CreateContent.id(), "create_content");
    /// ```
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::ManageUsers => "manage_users",
            Self::ManageContent => "manage_content",
            Self::ManagePayments => "manage_payments",
            Self::ViewAnalytics => "view_analytics",
            Self::ModerateContent => "moderate_content",
            Self::ManageReports => "manage_reports",
            Self::CreateContent => "create_content",
            Self::ManageOwnContent => "manage_own_content",
            Self::ViewOwnAnalytics => "view_own_analytics",
            Self::UploadFiles => "upload_files",
            Self::PublishContent => "publish_content",
            Self::ViewContent => "view_content",
            Self::CreateReports => "create_reports",
            Self::BookmarkContent => "bookmark_content",
            Self::RateContent => "rate_content",
            Self::ManageComments => "manage_comments",
        }
    }

    /// Returns every permission in catalog order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::All,
            Self::ManageUsers,
            Self::ManageContent,
            Self::ManagePayments,
            Self::ViewAnalytics,
            Self::ModerateContent,
            Self::ManageReports,
            Self::CreateContent,
            Self::ManageOwnContent,
            Self::ViewOwnAnalytics,
            Self::UploadFiles,
            Self::PublishContent,
            Self::ViewContent,
            Self::CreateReports,
            Self::BookmarkContent,
            Self::RateContent,
            Self::ManageComments,
        ]
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::All => "All Permissions",
            Self::ManageUsers => "Manage Users",
            Self::ManageContent => "Manage Content",
            Self::ManagePayments => "Manage Payments",
            Self::ViewAnalytics => "View Analytics",
            Self::ModerateContent => "Moderate Content",
            Self::ManageReports => "Manage Reports",
            Self::CreateContent => "Create Content",
            Self::ManageOwnContent => "Manage Own Content",
            Self::ViewOwnAnalytics => "View Own Analytics",
            Self::UploadFiles => "Upload Files",
            Self::PublishContent => "Publish Content",
            Self::ViewContent => "View Content",
            Self::CreateReports => "Create Reports",
            Self::BookmarkContent => "Bookmark Content",
            Self::RateContent => "Rate Content",
            Self::ManageComments => "Manage Comments",
        }
    }

    /// Returns a human-readable description of the permission.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::All => "Access to all system features and data",
            Self::ManageUsers => "Create, update, and delete user accounts",
            Self::ManageContent => "Create, update, and delete all content",
            Self::ManagePayments => "Handle subscriptions and payment processing",
            Self::ViewAnalytics => "Access to system analytics and reports",
            Self::ModerateContent => "Review and moderate user-generated content",
            Self::ManageReports => "Handle user reports and complaints",
            Self::CreateContent => "Create new content (webtoons, books, videos)",
            Self::ManageOwnContent => "Edit and delete own content",
            Self::ViewOwnAnalytics => "View analytics for own content",
            Self::UploadFiles => "Upload media files for content",
            Self::PublishContent => "Publish content to the platform",
            Self::ViewContent => "Access to view platform content",
            Self::CreateReports => "Report inappropriate content or users",
            Self::BookmarkContent => "Save content for later viewing",
            Self::RateContent => "Rate and review content",
            Self::ManageComments => "Moderate comments and discussions",
        }
    }

    #[must_use]
    pub const fn category(&self) -> PermissionCategory {
        match self {
            Self::All => PermissionCategory::System,
            Self::ManageUsers => PermissionCategory::Users,
            Self::ManagePayments => PermissionCategory::Payments,
            Self::ViewAnalytics | Self::ViewOwnAnalytics => PermissionCategory::Analytics,
            Self::ModerateContent
            | Self::ManageReports
            | Self::CreateReports
            | Self::ManageComments => PermissionCategory::Moderation,
            Self::ManageContent
            | Self::CreateContent
            | Self::ManageOwnContent
            | Self::UploadFiles
            | Self::PublishContent
            | Self::ViewContent
            | Self::BookmarkContent
            | Self::RateContent => PermissionCategory::Content,
        }
    }

    /// Public descriptor for API responses.
    #[must_use]
    pub fn info(&self) -> bh_common::PermissionInfo {
        bh_common::PermissionInfo {
            id: self.id().to_string(),
            name: self.name().to_string(),
            description: self.description().to_string(),
            category: self.category().as_str().to_string(),
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Permission {
    type Err = PermissionError;

    /// Exact match only: no trimming, no case folding, no prefixes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.id() == s)
            .ok_or_else(|| PermissionError::UnknownPermission(s.to_string()))
    }
}
