use serde::Serialize;
use serde_json::Value;

/// Pagination and ordering for listing suppliers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSuppliersQuery {
    /// Suppliers per page. Defaults to 20.
    pub limit: u32,
    /// 1-based page number. Defaults to 1.
    pub page: u32,
    /// Sort expression understood by the API. Sent as `null` when unset.
    pub sort: Option<String>,
}

impl ListSuppliersQuery {
    pub const DEFAULT_LIMIT: u32 = 20;
    pub const DEFAULT_PAGE: u32 = 1;

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

impl Default for ListSuppliersQuery {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            page: Self::DEFAULT_PAGE,
            sort: None,
        }
    }
}

/// A supplier to be created.
///
/// Only `name` is required by the API. Addresses and contacts are passed
/// through as-is.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct NewSupplier {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Value>,
}

impl NewSupplier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
