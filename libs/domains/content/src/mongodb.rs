//! MongoDB implementation of DocumentStore

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{DateTime, Document},
    options::FindOptions,
};
use tracing::instrument;

use crate::error::{ContentError, ContentResult};
use crate::models::CollectionKind;
use crate::record::id_to_string;
use crate::store::DocumentStore;

/// Document store over an optional database handle.
///
/// Built with [`unavailable`](Self::unavailable) when configuration is
/// missing or the connection failed; every operation then fails fast.
#[derive(Clone, Debug)]
pub struct MongoDocumentStore {
    db: Option<Database>,
}

impl MongoDocumentStore {
    /// ```ignore
    /// let client = database::mongodb::connect_from_config(&config).await?;
    /// let store = MongoDocumentStore::new(client.database(&config.database));
    /// ```
    pub fn new(db: Database) -> Self {
        Self { db: Some(db) }
    }

    pub fn unavailable() -> Self {
        Self { db: None }
    }

    pub fn database(&self) -> Option<&Database> {
        self.db.as_ref()
    }

    fn collection(&self, kind: CollectionKind) -> ContentResult<Collection<Document>> {
        self.db
            .as_ref()
            .map(|db| db.collection::<Document>(kind.name()))
            .ok_or(ContentError::StoreUnavailable)
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    /// Stamps `created_at` and `updated_at` before inserting.
    #[instrument(skip(self, data), fields(collection = %kind))]
    async fn create_document(&self, kind: CollectionKind, mut data: Document) -> ContentResult<String> {
        let collection = self.collection(kind)?;

        let now = DateTime::now();
        data.insert("created_at", now);
        data.insert("updated_at", now);

        let result = collection.insert_one(data).await?;
        let id = id_to_string(&result.inserted_id);

        tracing::debug!(id = %id, "Document created");
        Ok(id)
    }

    #[instrument(skip(self, filter), fields(collection = %kind))]
    async fn get_documents(
        &self,
        kind: CollectionKind,
        filter: Document,
        limit: Option<i64>,
    ) -> ContentResult<Vec<Document>> {
        let collection = self.collection(kind)?;

        let options = match limit.filter(|n| *n > 0) {
            Some(n) => FindOptions::builder().limit(n).build(),
            None => FindOptions::default(),
        };

        let cursor = collection.find(filter).with_options(options).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;

        tracing::debug!(count = docs.len(), "Documents fetched");
        Ok(docs)
    }

    #[instrument(skip(self, filter), fields(collection = %kind))]
    async fn count(&self, kind: CollectionKind, filter: Document) -> ContentResult<u64> {
        let collection = self.collection(kind)?;
        Ok(collection.count_documents(filter).await?)
    }

    #[instrument(skip(self))]
    async fn list_collection_names(&self) -> ContentResult<Vec<String>> {
        let db = self.db.as_ref().ok_or(ContentError::StoreUnavailable)?;
        Ok(db.list_collection_names().await?)
    }

    fn is_available(&self) -> bool {
        self.db.is_some()
    }
}
