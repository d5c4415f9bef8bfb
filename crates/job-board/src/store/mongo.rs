use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::debug;

use super::{Collection, DocumentStore, StoreError};
use crate::config::StoreConfig;

/// MongoDB-backed store. Every call opens its own client; nothing is pooled across calls.
#[derive(Debug, Clone)]
pub struct MongoStore {
    config: StoreConfig,
}

impl MongoStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    async fn connect(&self) -> Result<Database, StoreError> {
        let mut options = ClientOptions::parse(&self.config.uri)
            .await
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        options.server_selection_timeout = Some(self.config.timeout);
        options.connect_timeout = Some(self.config.timeout);

        let client =
            Client::with_options(options).map_err(|err| StoreError::Unavailable(err.to_string()))?;
        debug!(database = %self.config.database, "connected to document store");
        Ok(client.database(&self.config.database))
    }
}

/// Server-selection failures mean the store is unreachable; anything else is
/// reported through `other`.
fn driver_error(
    err: mongodb::error::Error,
    other: impl FnOnce(String) -> StoreError,
) -> StoreError {
    match *err.kind {
        mongodb::error::ErrorKind::ServerSelection { .. } => {
            StoreError::Unavailable(err.to_string())
        }
        _ => other(err.to_string()),
    }
}

fn query_error(collection: Collection, err: mongodb::error::Error) -> StoreError {
    driver_error(err, |detail| StoreError::Query { collection, detail })
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let database = self.connect().await?;
        let cursor = database
            .collection::<Document>(collection.as_str())
            .find(None, None)
            .await
            .map_err(|err| query_error(collection, err))?;

        cursor
            .try_collect()
            .await
            .map_err(|err| query_error(collection, err))
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: &ObjectId,
    ) -> Result<Option<Document>, StoreError> {
        let database = self.connect().await?;
        database
            .collection::<Document>(collection.as_str())
            .find_one(doc! { "_id": *id }, None)
            .await
            .map_err(|err| query_error(collection, err))
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let database = self.connect().await?;
        let mut names = database
            .list_collection_names(None)
            .await
            .map_err(|err| driver_error(err, StoreError::Catalog))?;
        names.sort();
        Ok(names)
    }
}
