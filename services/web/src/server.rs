use crate::cli::ServeArgs;
use crate::infra::{load_fixture_store, AppState};
use crate::routes::with_page_routes;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayer;
use job_board::config::{AppConfig, StoreErrorPolicy};
use job_board::error::AppError;
use job_board::pages::PageService;
use job_board::store::{DocumentAccessor, DocumentStore, MongoStore};
use job_board::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let pages = match args.fixtures.take() {
        Some(path) => {
            let store = load_fixture_store(&path)?;
            info!(fixture = %path.display(), "serving documents from fixture file");
            board_routes(store, config.error_policy)
        }
        None => {
            info!(database = %config.store.database, "serving documents from MongoDB");
            board_routes(MongoStore::new(config.store.clone()), config.error_policy)
        }
    };

    let app = pages
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, ?config.error_policy, %addr, "job board ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn board_routes<S>(store: S, policy: StoreErrorPolicy) -> Router
where
    S: DocumentStore + 'static,
{
    let accessor = DocumentAccessor::new(Arc::new(store));
    with_page_routes(Arc::new(PageService::new(accessor, policy)))
}
