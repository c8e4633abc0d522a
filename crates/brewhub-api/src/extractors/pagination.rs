//! Pagination and owner-filter query parameters for the recipe listing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use brewhub_core::types::PageRequest;

/// Query parameters for `GET /api/recipes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Restrict the listing to one owner.
    pub owner: Option<Uuid>,
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 25, max: 100).
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    25
}

impl PaginationParams {
    /// Converts to a clamped `PageRequest`.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_clamp() {
        let params: PaginationParams = serde_json::from_str("{}").unwrap();
        assert!(params.owner.is_none());
        assert_eq!(params.page_request(), PageRequest::new(1, 25));

        let params: PaginationParams =
            serde_json::from_str(r#"{ "page": 0, "page_size": 500 }"#).unwrap();
        let req = params.page_request();
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, 100);
    }
}
