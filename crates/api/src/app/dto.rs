use serde::{Deserialize, Serialize};

use gatekeeper_validation::{Pagination, PaginationQuery};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl SearchParams {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page.clone(),
            limit: self.limit.clone(),
        }
    }
}

/// Missing fields are treated as empty so they report "required".
#[derive(Debug, Default, Deserialize)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub pagination: Pagination,
    pub viewer: Option<String>,
}
