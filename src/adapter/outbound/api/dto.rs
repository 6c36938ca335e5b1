//! Item API data transfer objects.

use serde::Deserialize;

use crate::domain::item::ItemMap;
use crate::error::ApiError;

/// Reason used when the API rejects a request without saying why.
pub const DEFAULT_FAILURE: &str = "Failed to fetch items";

/// Response envelope: `{success, items, error?}`.
#[derive(Debug, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub items: Option<ItemMap>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ItemsResponse {
    /// The item map, or the API's rejection.
    ///
    /// `success: false` and a missing `items` are both rejections; the
    /// reason is the `error` field when present.
    pub fn into_items(self) -> Result<ItemMap, ApiError> {
        match (self.success, self.items) {
            (true, Some(items)) => Ok(items),
            _ => Err(ApiError::Rejected(
                self.error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| DEFAULT_FAILURE.to_string()),
            )),
        }
    }
}
