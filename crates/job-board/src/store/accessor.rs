use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use tracing::{debug, error};

use super::{Collection, DocumentStore, StoreError};

/// Whether a retrieval reads a whole collection or a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Detail,
}

/// Outcome of a retrieval. `NotFound` is the absence marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Retrieval<T> {
    Found(T),
    NotFound,
    StoreError(StoreError),
}

impl<T> Retrieval<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Retrieval<U> {
        match self {
            Retrieval::Found(value) => Retrieval::Found(f(value)),
            Retrieval::NotFound => Retrieval::NotFound,
            Retrieval::StoreError(err) => Retrieval::StoreError(err),
        }
    }

    pub fn found(self) -> Option<T> {
        match self {
            Retrieval::Found(value) => Some(value),
            Retrieval::NotFound | Retrieval::StoreError(_) => None,
        }
    }

    pub fn is_store_error(&self) -> bool {
        matches!(self, Retrieval::StoreError(_))
    }
}

/// Payload of a successful retrieval, shaped by the requested [`Mode`].
#[derive(Debug, Clone, PartialEq)]
pub enum Documents {
    Many(Vec<Document>),
    One(Document),
}

/// Generic read path shared by every page.
pub struct DocumentAccessor<S> {
    store: Arc<S>,
}

impl<S> Clone for DocumentAccessor<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> DocumentAccessor<S>
where
    S: DocumentStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Read from `collection`. `identifier` is required in [`Mode::Detail`] and
    /// ignored in [`Mode::List`]. Store failures are logged here, once.
    pub async fn retrieve(
        &self,
        collection: Collection,
        mode: Mode,
        identifier: Option<&str>,
    ) -> Retrieval<Documents> {
        match mode {
            Mode::List => self.list(collection).await.map(Documents::Many),
            Mode::Detail => match identifier {
                Some(raw) => self.detail(collection, raw).await.map(Documents::One),
                None => Retrieval::NotFound,
            },
        }
    }

    /// All documents of `collection`.
    pub async fn list(&self, collection: Collection) -> Retrieval<Vec<Document>> {
        match self.store.find_all(collection).await {
            Ok(documents) => Retrieval::Found(documents),
            Err(err) => logged(collection, Mode::List, err),
        }
    }

    /// The document of `collection` whose `_id` is `identifier`.
    pub async fn detail(&self, collection: Collection, identifier: &str) -> Retrieval<Document> {
        let Some(id) = parse_identifier(collection, identifier) else {
            return Retrieval::NotFound;
        };
        match self.store.find_by_id(collection, &id).await {
            Ok(Some(document)) => Retrieval::Found(document),
            Ok(None) => Retrieval::NotFound,
            Err(err) => logged(collection, Mode::Detail, err),
        }
    }
}

fn logged<T>(collection: Collection, mode: Mode, err: StoreError) -> Retrieval<T> {
    error!(%collection, ?mode, error = %err, "document store access failed");
    Retrieval::StoreError(err)
}

fn parse_identifier(collection: Collection, raw: &str) -> Option<ObjectId> {
    match ObjectId::parse_str(raw.trim()) {
        Ok(id) => Some(id),
        Err(err) => {
            debug!(%collection, identifier = raw, error = %err, "malformed document identifier");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use mongodb::bson::doc;

    const KNOWN: &str = "507f1f77bcf86cd799439011";

    fn accessor() -> DocumentAccessor<InMemoryStore> {
        let store = InMemoryStore::default();
        store.seed(
            Collection::Jobs,
            vec![
                doc! { "_id": ObjectId::parse_str(KNOWN).expect("valid oid"), "title": "Rust engineer" },
                doc! { "_id": ObjectId::new(), "title": "Data engineer" },
            ],
        );
        DocumentAccessor::new(Arc::new(store))
    }

    #[tokio::test]
    async fn list_mode_ignores_identifier() {
        let accessor = accessor();
        let outcome = accessor
            .retrieve(Collection::Jobs, Mode::List, Some("ignored"))
            .await;
        match outcome {
            Retrieval::Found(Documents::Many(documents)) => assert_eq!(documents.len(), 2),
            other => panic!("unexpected retrieval: {other:?}"),
        }
    }

    #[tokio::test]
    async fn detail_mode_requires_identifier() {
        let accessor = accessor();
        let outcome = accessor.retrieve(Collection::Jobs, Mode::Detail, None).await;
        assert_eq!(outcome, Retrieval::NotFound);
    }

    #[tokio::test]
    async fn modes_shape_the_payload() {
        let accessor = accessor();
        let detail = accessor
            .retrieve(Collection::Jobs, Mode::Detail, Some(KNOWN))
            .await;
        match detail {
            Retrieval::Found(Documents::One(document)) => {
                assert_eq!(document.get_str("title").expect("title"), "Rust engineer")
            }
            other => panic!("unexpected retrieval: {other:?}"),
        }

        let list = accessor.retrieve(Collection::Jobs, Mode::List, None).await;
        assert!(matches!(list, Retrieval::Found(Documents::Many(ref documents)) if documents.len() == 2));
    }

    #[tokio::test]
    async fn detail_accepts_padded_identifier() {
        let accessor = accessor();
        let document = accessor
            .detail(Collection::Jobs, &format!(" {KNOWN} "))
            .await
            .found()
            .expect("job found");
        assert_eq!(document.get_str("title").expect("title"), "Rust engineer");
    }

    #[tokio::test]
    async fn empty_collection_lists_nothing() {
        let accessor = accessor();
        let outcome = accessor.list(Collection::Companies).await;
        assert_eq!(outcome, Retrieval::Found(Vec::new()));
    }

    #[test]
    fn map_preserves_absence_and_errors() {
        let absent: Retrieval<u8> = Retrieval::NotFound;
        assert_eq!(absent.map(|value| value + 1), Retrieval::NotFound);

        let failed: Retrieval<u8> = Retrieval::StoreError(StoreError::Unavailable("down".into()));
        assert!(failed.map(|value| value + 1).is_store_error());
    }
}
