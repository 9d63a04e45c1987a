//! Role and permission model.
//!
//! - [`Role`]: closed, ranked set of platform roles
//! - [`Permission`]: closed vocabulary of capabilities
//! - [`RoleTable`]: grants per role, loaded once at startup
//! - [`RoleAuthority`]: fail-closed queries over the table

pub mod authority;
pub mod error;
pub mod permission;
pub mod role;
pub mod set;
pub mod table;

pub use authority::{RoleAuthority, RoleDescriptor};
pub use error::PermissionError;
pub use permission::{Permission, PermissionCategory};
pub use role::{Role, RoleLevel};
pub use set::PermissionSet;
pub use table::{RoleTable, RoleTableError, RoleTableRecord, ROLE_TABLE_VERSION};
