//! Read access to the document database backing the board.
//!
//! Pages never talk to a store directly; they go through
//! [`DocumentAccessor`], which turns store outcomes into a typed
//! [`Retrieval`] and logs failures once.

pub mod accessor;
pub mod memory;
pub mod mongo;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;

pub use accessor::{DocumentAccessor, Documents, Mode, Retrieval};
pub use memory::InMemoryStore;
pub use mongo::MongoStore;

/// Logical collections read by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Jobs,
    Users,
    Companies,
    Applications,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Jobs,
        Collection::Users,
        Collection::Companies,
        Collection::Applications,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Jobs => "jobs",
            Collection::Users => "users",
            Collection::Companies => "companies",
            Collection::Applications => "applications",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|collection| collection.as_str() == value.trim())
            .ok_or_else(|| UnknownCollection(value.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown collection '{0}'")]
pub struct UnknownCollection(pub String);

/// Storage abstraction so pages and the accessor can run against MongoDB or memory.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document of the collection, in the store's natural order.
    async fn find_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError>;

    async fn find_by_id(
        &self,
        collection: Collection,
        id: &ObjectId,
    ) -> Result<Option<Document>, StoreError>;

    /// Names of the collections present in the database.
    async fn collection_names(&self) -> Result<Vec<String>, StoreError>;
}

/// Failure talking to the document store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("document store unreachable: {0}")]
    Unavailable(String),
    #[error("query on '{collection}' failed: {detail}")]
    Query {
        collection: Collection,
        detail: String,
    },
    #[error("listing collections failed: {0}")]
    Catalog(String),
}
