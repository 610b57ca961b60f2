use gatekeeper_auth::Identity;

/// Identity attached by the required-auth middleware.
///
/// Always present on routes behind `require_auth`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentIdentity(Identity);

impl CurrentIdentity {
    pub fn new(identity: Identity) -> Self {
        Self(identity)
    }

    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

/// Identity attached by the optional-auth middleware; `None` means anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MaybeIdentity(Option<Identity>);

impl MaybeIdentity {
    pub fn new(identity: Option<Identity>) -> Self {
        Self(identity)
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.0.as_ref()
    }
}
