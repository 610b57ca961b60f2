//! `gatekeeper-auth`: authentication and authorization core.
//!
//! Decoupled from HTTP and storage: the identity store is a trait, the clock
//! is injected, and transport concerns stay in `gatekeeper-api`.

pub mod authenticate;
pub mod authorize;
pub mod claims;
pub mod identity;
pub mod roles;
pub mod store;
pub mod token;

pub use authenticate::{AuthenticationError, Authenticator, extract_bearer};
pub use authorize::{
    AuthzError, has_role, is_owner, is_owner_or_role, require_owner_or_role, require_role,
};
pub use claims::{TokenClaims, TokenError, validate_claims};
pub use identity::{Identity, IdentityRecord};
pub use roles::Role;
pub use store::{IdentityStore, MemoryIdentityStore, StoreError};
pub use token::{TokenConfig, TokenService};
