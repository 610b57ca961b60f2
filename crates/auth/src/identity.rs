//! Resolved identities and the records the identity store hands back.

use serde::{Deserialize, Serialize};

use gatekeeper_core::IdentityId;

use crate::Role;

/// An authenticated identity, immutable for the lifetime of a request.
///
/// Never carries the stored credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: IdentityId,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub active: bool,
}

/// Identity as held by the external store, possibly with an opaque credential
/// (typically a password hash produced by whatever hasher the store uses).
#[derive(Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    pub id: IdentityId,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub active: bool,
    pub credential: Option<String>,
}

impl IdentityRecord {
    pub fn into_identity(self) -> Identity {
        Identity {
            id: self.id,
            email: self.email,
            username: self.username,
            role: self.role,
            active: self.active,
        }
    }
}

impl From<Identity> for IdentityRecord {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email,
            username: identity.username,
            role: identity.role,
            active: identity.active,
            credential: None,
        }
    }
}

impl core::fmt::Debug for IdentityRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IdentityRecord")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("role", &self.role)
            .field("active", &self.active)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
