//! `gatekeeper-core`: shared primitives for the auth and validation crates.
//!
//! Pure building blocks only: no I/O, no transport, no storage.

pub mod clock;
pub mod id;

pub use clock::{Clock, FixedClock, SystemClock};
pub use id::{IdError, IdentityId};
