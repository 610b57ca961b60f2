//! Configured validators.
//!
//! Limits that callers may tune (page size, search length, upload policy) live
//! in an immutable [`ValidationConfig`] handed to [`Validator::new`] once at
//! startup. The free functions in the other modules cover rules with fixed
//! parameters.

use serde::{Deserialize, Serialize};

use crate::pagination::{self, Pagination, PaginationQuery};
use crate::result::ValidationResult;
use crate::sanitize::bound_search_query;
use crate::upload::{FileConstraints, FileUpload};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub default_page_limit: u64,
    pub max_page_limit: u64,
    pub max_search_length: usize,
    pub file: FileConstraints,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            default_page_limit: 10,
            max_page_limit: 100,
            max_search_length: 100,
            file: FileConstraints::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn pagination(&self, query: &PaginationQuery) -> Pagination {
        pagination::normalize(query, self.config.default_page_limit, self.config.max_page_limit)
    }

    pub fn search_query(&self, query: Option<&str>) -> String {
        bound_search_query(query, self.config.max_search_length)
    }

    pub fn file_upload(&self, file: Option<&FileUpload>) -> ValidationResult {
        self.config.file.check(file)
    }
}
