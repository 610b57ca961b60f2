//! Role- and ownership-based authorization.
//!
//! - No IO
//! - No panics
//! - Absent identity is always denied, and reported separately from a denial
//!   of an authenticated identity.

use core::fmt::Display;

use thiserror::Error;

use crate::{Identity, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("authentication required")]
    AuthenticationRequired,

    #[error("insufficient permissions")]
    InsufficientPermissions,

    #[error("not the owner of this resource")]
    NotOwner,
}

/// True iff an identity is present and its role is one of `required`.
pub fn has_role(identity: Option<&Identity>, required: &[Role]) -> bool {
    identity.is_some_and(|i| required.contains(&i.role))
}

/// Gate form of [`has_role`].
pub fn require_role<'a>(
    identity: Option<&'a Identity>,
    required: &[Role],
) -> Result<&'a Identity, AuthzError> {
    let identity = identity.ok_or(AuthzError::AuthenticationRequired)?;
    if has_role(Some(identity), required) {
        Ok(identity)
    } else {
        Err(AuthzError::InsufficientPermissions)
    }
}

/// Compare the canonical string forms of the identity's id and `owner_id`.
///
/// `owner_id` may be any id representation (`&str`, `IdentityId`, a uuid,
/// ...); only its `Display` output is compared, exactly.
pub fn is_owner<O: Display>(identity: Option<&Identity>, owner_id: Option<O>) -> bool {
    match (identity, owner_id) {
        (Some(identity), Some(owner)) => identity.id.to_string() == owner.to_string(),
        _ => false,
    }
}

/// "Edit/delete own resource, or `elevated` override."
pub fn is_owner_or_role<O: Display>(
    identity: Option<&Identity>,
    owner_id: Option<O>,
    elevated: Role,
) -> bool {
    is_owner(identity, owner_id) || identity.is_some_and(|i| i.role == elevated)
}

/// Gate form of [`is_owner_or_role`].
pub fn require_owner_or_role<'a, O: Display>(
    identity: Option<&'a Identity>,
    owner_id: Option<O>,
    elevated: Role,
) -> Result<&'a Identity, AuthzError> {
    let identity = identity.ok_or(AuthzError::AuthenticationRequired)?;
    if is_owner_or_role(Some(identity), owner_id, elevated) {
        Ok(identity)
    } else {
        Err(AuthzError::NotOwner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatekeeper_core::IdentityId;

    fn identity(id: &str, role: Role) -> Identity {
        Identity {
            id: IdentityId::new(id),
            email: format!("{id}@example.com"),
            username: id.to_string(),
            role,
            active: true,
        }
    }

    #[test]
    fn has_role_checks_membership() {
        let user = identity("u1", Role::User);
        let admin = identity("a1", Role::Admin);

        assert!(has_role(Some(&admin), &[Role::Admin]));
        assert!(!has_role(Some(&user), &[Role::Admin]));
        assert!(has_role(Some(&user), &[Role::User, Role::Admin]));
        assert!(!has_role(Some(&user), &[]));
        assert!(!has_role(None, &[Role::User, Role::Admin]));
    }

    #[test]
    fn require_role_distinguishes_absent_from_forbidden() {
        let user = identity("u1", Role::User);
        assert_eq!(require_role(None, &[Role::User]), Err(AuthzError::AuthenticationRequired));
        assert_eq!(
            require_role(Some(&user), &[Role::Admin]),
            Err(AuthzError::InsufficientPermissions)
        );
        assert_eq!(require_role(Some(&user), &[Role::User]), Ok(&user));
    }

    #[test]
    fn ownership_compares_canonical_strings() {
        let u1 = identity("u1", Role::User);
        assert!(is_owner(Some(&u1), Some("u1")));
        assert!(is_owner(Some(&u1), Some(IdentityId::new("u1"))));
        assert!(is_owner(Some(&u1), Some(String::from("u1"))));
        assert!(!is_owner(Some(&u1), Some("U1")));
        assert!(!is_owner(Some(&u1), Some("u2")));
        assert!(!is_owner(None, Some("u1")));
        assert!(!is_owner::<&str>(Some(&u1), None));
    }

    #[test]
    fn admin_override_applies_when_not_owner() {
        let admin = identity("u1", Role::Admin);
        assert!(!is_owner(Some(&admin), Some("u2")));
        assert!(is_owner_or_role(Some(&admin), Some("u2"), Role::Admin));
    }

    #[test]
    fn user_cannot_touch_someone_elses_resource() {
        let user = identity("u1", Role::User);
        assert!(!is_owner_or_role(Some(&user), Some("u2"), Role::Admin));
        assert_eq!(
            require_owner_or_role(Some(&user), Some("u2"), Role::Admin),
            Err(AuthzError::NotOwner)
        );
        assert_eq!(require_owner_or_role(Some(&user), Some("u1"), Role::Admin), Ok(&user));
        assert_eq!(
            require_owner_or_role(None, Some("u1"), Role::Admin),
            Err(AuthzError::AuthenticationRequired)
        );
        assert!(!is_owner_or_role::<&str>(None, None, Role::Admin));
    }
}
