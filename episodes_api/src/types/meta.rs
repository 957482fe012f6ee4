use serde::{Deserialize, Serialize};

/// Pagination metadata attached to every list response.
///
/// `next` is `None` exactly when the response carries the last page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PageInfo {
    pub count: u32,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

impl PageInfo {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PaginatedResponse<T> {
    pub info: PageInfo,
    pub results: Vec<T>,
}
