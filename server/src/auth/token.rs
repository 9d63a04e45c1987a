//! Role tokens.
//!
//! Tokens have the form `mock-token-<role id>`. They are not signed: whoever
//! presents one is trusted to hold the named role. A well-formed token naming
//! an unrecognized role resolves to the least privileged role.

use super::error::AuthError;
use crate::permissions::Role;

pub const TOKEN_PREFIX: &str = "mock-token-";

/// Token that [`role_from_token`] resolves back to `role`.
#[must_use]
pub fn issue_token(role: Role) -> String {
    format!("{TOKEN_PREFIX}{}", role.id())
}

/// Resolve the role a token names.
pub fn role_from_token(token: &str) -> Result<Role, AuthError> {
    let role_id = token
        .strip_prefix(TOKEN_PREFIX)
        .filter(|id| !id.is_empty())
        .ok_or(AuthError::InvalidToken)?;

    Ok(Role::parse_or_default(Some(role_id)))
}
