use async_trait::async_trait;
use mongodb::bson::Document;

use crate::error::ContentResult;
use crate::models::CollectionKind;

/// Generic document access over the content collections.
///
/// An implementation without a live connection fails every call with
/// [`ContentError::StoreUnavailable`](crate::ContentError::StoreUnavailable).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `data` and return the new identifier as a string
    async fn create_document(&self, kind: CollectionKind, data: Document) -> ContentResult<String>;

    /// Documents matching the equality `filter`, in store order.
    ///
    /// `None` and `Some(0)` both mean no limit.
    async fn get_documents(
        &self,
        kind: CollectionKind,
        filter: Document,
        limit: Option<i64>,
    ) -> ContentResult<Vec<Document>>;

    async fn count(&self, kind: CollectionKind, filter: Document) -> ContentResult<u64>;

    /// Diagnostic listing of every collection in the database
    async fn list_collection_names(&self) -> ContentResult<Vec<String>>;

    fn is_available(&self) -> bool;
}
