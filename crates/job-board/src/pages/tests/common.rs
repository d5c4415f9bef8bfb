use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};

use crate::config::StoreErrorPolicy;
use crate::store::{Collection, DocumentAccessor, DocumentStore, InMemoryStore, StoreError};

use crate::pages::PageService;

pub(super) const USER_ID: &str = "507f1f77bcf86cd799439011";
pub(super) const JOB_ID: &str = "64b7f0c2a1b2c3d4e5f60718";

pub(super) fn oid(hex: &str) -> ObjectId {
    ObjectId::parse_str(hex).expect("valid object id")
}

pub(super) fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::default();
    store.seed(
        Collection::Jobs,
        vec![
            doc! {
                "_id": oid(JOB_ID),
                "title": "Backend Engineer",
                "position": "Senior",
                "location": "Valencia",
                "type": "remote",
                "salary": 52000.0,
                "job_info": { "textual_description": "Own the read path.", "requirements": ["Rust", "MongoDB"] },
                "company_id": "64b7f0c2a1b2c3d4e5f60799",
            },
            doc! { "title": "Data Analyst", "type": "on-site" },
        ],
    );
    store.seed(
        Collection::Users,
        vec![doc! {
            "_id": oid(USER_ID),
            "username": "grace",
            "password": "hunter2",
            "name": "Grace",
            "surname": "Hopper",
        }],
    );
    store
}

pub(super) fn service<S>(store: S, policy: StoreErrorPolicy) -> Arc<PageService<S>>
where
    S: DocumentStore + 'static,
{
    Arc::new(PageService::new(DocumentAccessor::new(Arc::new(store)), policy))
}

/// Store that fails every call the way an unreachable MongoDB does.
#[derive(Default)]
pub(super) struct UnreachableStore {
    pub(super) calls: AtomicUsize,
}

#[async_trait]
impl DocumentStore for UnreachableStore {
    async fn find_all(&self, _collection: Collection) -> Result<Vec<Document>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn find_by_id(
        &self,
        _collection: Collection,
        _id: &ObjectId,
    ) -> Result<Option<Document>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

pub(super) async fn read_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
