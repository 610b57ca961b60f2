//! `gatekeeper-validation`: composable input validators.
//!
//! Every validator returns a [`ValidationResult`] listing **every** rule the
//! input violated. Rules are evaluated exhaustively; the only early exit is a
//! required field that is empty or absent, which reports a single violation.
//!
//! No I/O and no shared state: everything here is safe to call from any
//! number of concurrent requests.

pub mod config;
pub mod date_range;
pub mod fields;
pub mod pagination;
pub mod result;
pub mod sanitize;
pub mod upload;

pub use config::{ValidationConfig, Validator};
pub use date_range::validate_date_range;
pub use fields::{
    OBJECT_ID_LEN, PASSWORD_SPECIAL_CHARS, validate_email, validate_object_id, validate_password,
    validate_registration, validate_username,
};
pub use pagination::{Pagination, PaginationQuery};
pub use result::{Rule, ValidationError, ValidationResult, evaluate};
pub use sanitize::{bound_search_query, sanitize_string};
pub use upload::{FileConstraints, FileUpload};
