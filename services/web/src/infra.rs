use job_board::error::AppError;
use job_board::store::{Collection, InMemoryStore};
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read a fixture file into an in-memory store.
pub(crate) fn load_fixture_store(path: &Path) -> Result<InMemoryStore, AppError> {
    let file = File::open(path)?;
    let store = InMemoryStore::from_json_reader(BufReader::new(file))?;

    for collection in Collection::ALL {
        info!(
            %collection,
            documents = store.len(collection),
            fixture = %path.display(),
            "loaded fixture collection"
        );
    }
    Ok(store)
}
