//! End-to-end page scenarios driven through the public router.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use job_board::config::StoreErrorPolicy;
use job_board::pages::{page_router, PageService};
use job_board::store::{Collection, DocumentAccessor, DocumentStore, InMemoryStore, StoreError};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use tower::ServiceExt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

fn router<S: DocumentStore + 'static>(store: S) -> axum::Router {
    let accessor = DocumentAccessor::new(Arc::new(store));
    page_router(Arc::new(PageService::new(
        accessor,
        StoreErrorPolicy::RenderEmpty,
    )))
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("route executes");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    (status, String::from_utf8(body.to_vec()).expect("utf-8"))
}

/// Counts error-level events seen while installed.
#[derive(Clone, Default)]
struct ErrorCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

struct UnreachableStore;

#[async_trait]
impl DocumentStore for UnreachableStore {
    async fn find_all(&self, _collection: Collection) -> Result<Vec<Document>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn find_by_id(
        &self,
        _collection: Collection,
        _id: &ObjectId,
    ) -> Result<Option<Document>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

#[tokio::test]
async fn index_renders_three_seeded_jobs_in_order() {
    let store = InMemoryStore::default();
    store.seed(
        Collection::Jobs,
        vec![
            doc! { "title": "Alpha role" },
            doc! { "title": "Beta role" },
            doc! { "title": "Gamma role" },
        ],
    );

    let (status, body) = get(router(store), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"job\"").count(), 3);

    let positions: Vec<usize> = ["Alpha role", "Beta role", "Gamma role"]
        .iter()
        .map(|title| body.find(title).expect("title rendered"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn user_detail_renders_present_and_absent_users() {
    let store = InMemoryStore::default();
    store.seed(
        Collection::Users,
        vec![doc! {
            "_id": ObjectId::parse_str("507f1f77bcf86cd799439011").expect("valid oid"),
            "name": "Ada",
            "surname": "Lovelace",
        }],
    );
    let router = router(store);

    let (status, body) = get(router.clone(), "/user-description/507f1f77bcf86cd799439011").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Ada Lovelace"));
    assert!(body.contains("data-id=\"507f1f77bcf86cd799439011\""));

    let (status, body) = get(router, "/user-description/000000000000000000000000").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("This candidate could not be found."));
}

#[tokio::test]
async fn unreachable_store_renders_empty_list_and_logs_once_per_request() {
    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let router = router(UnreachableStore);

    let (status, body) = get(router.clone(), "/companies-list").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No companies found."));
    assert_eq!(counter.0.load(Ordering::SeqCst), 1);

    let (status, _) = get(router, "/companies-list").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(counter.0.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn every_page_answers_ok_when_the_store_is_down() {
    let router = router(UnreachableStore);
    for uri in [
        "/",
        "/job-description/507f1f77bcf86cd799439011",
        "/users-list",
        "/user-description/507f1f77bcf86cd799439011",
        "/companies-list",
        "/company-profile/507f1f77bcf86cd799439011",
        "/application-list",
        "/application-desc/507f1f77bcf86cd799439011",
    ] {
        let (status, _) = get(router.clone(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
}
