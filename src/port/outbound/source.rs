//! Item source port.

use async_trait::async_trait;

use crate::domain::item::ItemMap;
use crate::error::Result;

/// Supplies the full item list.
///
/// An `Err` covers every failure mode the orchestrator falls back on:
/// transport errors, non-success HTTP statuses, unparseable bodies and
/// API-level rejections.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetch all items.
    async fn fetch_items(&self) -> Result<ItemMap>;

    /// Source name for logging.
    fn source_name(&self) -> &str;
}
