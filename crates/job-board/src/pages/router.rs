use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use mongodb::bson::Document;
use tracing::error;

use super::templates::{
    ApplicationPage, ApplicationsPage, CompaniesPage, CompanyPage, JobPage, JobsPage,
    UnavailablePage, UserPage, UsersPage,
};
use crate::config::StoreErrorPolicy;
use crate::listings::{ApplicationView, CompanyView, JobView, UserView};
use crate::store::{Collection, DocumentAccessor, DocumentStore, Retrieval, StoreError};

/// Accessor plus the rule for rendering store failures; shared by every page handler.
pub struct PageService<S> {
    accessor: DocumentAccessor<S>,
    policy: StoreErrorPolicy,
}

impl<S> PageService<S>
where
    S: DocumentStore + 'static,
{
    pub fn new(accessor: DocumentAccessor<S>, policy: StoreErrorPolicy) -> Self {
        Self { accessor, policy }
    }

    /// Every document of `collection` mapped through `view`.
    pub async fn list<T>(
        &self,
        collection: Collection,
        view: fn(&Document) -> T,
    ) -> Result<Vec<T>, StoreError> {
        match self.accessor.list(collection).await {
            Retrieval::Found(documents) => Ok(documents.iter().map(view).collect()),
            Retrieval::NotFound => Ok(Vec::new()),
            Retrieval::StoreError(err) => self.on_store_error(err).map(|()| Vec::new()),
        }
    }

    /// The document with `identifier` mapped through `view`; `None` when absent.
    pub async fn detail<T>(
        &self,
        collection: Collection,
        identifier: &str,
        view: fn(&Document) -> T,
    ) -> Result<Option<T>, StoreError> {
        match self.accessor.detail(collection, identifier).await {
            Retrieval::Found(document) => Ok(Some(view(&document))),
            Retrieval::NotFound => Ok(None),
            Retrieval::StoreError(err) => self.on_store_error(err).map(|()| None),
        }
    }

    fn on_store_error(&self, err: StoreError) -> Result<(), StoreError> {
        match self.policy {
            StoreErrorPolicy::RenderEmpty => Ok(()),
            StoreErrorPolicy::Propagate => Err(err),
        }
    }
}

/// Why a page could not be rendered normally.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Unavailable(#[from] StoreError),
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::Unavailable(_) => {
                let page = UnavailablePage {
                    message: "The job board cannot reach its database right now.".to_string(),
                };
                match page.render() {
                    Ok(body) => (StatusCode::SERVICE_UNAVAILABLE, Html(body)).into_response(),
                    Err(err) => PageError::Render(err).into_response(),
                }
            }
            PageError::Render(err) => {
                error!(error = %err, "page template failed to render");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

fn render(page: impl Template) -> Result<Html<String>, PageError> {
    Ok(Html(page.render()?))
}

/// Router builder exposing the read-only board pages.
pub fn page_router<S>(service: Arc<PageService<S>>) -> Router
where
    S: DocumentStore + 'static,
{
    Router::new()
        .route("/", get(jobs_handler::<S>))
        .route("/job-description/:job_id", get(job_handler::<S>))
        .route("/users-list", get(users_handler::<S>))
        .route("/user-description/:user_id", get(user_handler::<S>))
        .route("/companies-list", get(companies_handler::<S>))
        .route("/company-profile/:comp_id", get(company_handler::<S>))
        .route("/application-list", get(applications_handler::<S>))
        .route("/application-desc/:appl_id", get(application_handler::<S>))
        .with_state(service)
}

pub(crate) async fn jobs_handler<S>(
    State(service): State<Arc<PageService<S>>>,
) -> Result<Html<String>, PageError>
where
    S: DocumentStore + 'static,
{
    let jobs = service.list(Collection::Jobs, JobView::from_document).await?;
    render(JobsPage { jobs })
}

pub(crate) async fn job_handler<S>(
    State(service): State<Arc<PageService<S>>>,
    Path(job_id): Path<String>,
) -> Result<Html<String>, PageError>
where
    S: DocumentStore + 'static,
{
    let job = service
        .detail(Collection::Jobs, &job_id, JobView::from_document)
        .await?;
    render(JobPage { job })
}

pub(crate) async fn users_handler<S>(
    State(service): State<Arc<PageService<S>>>,
) -> Result<Html<String>, PageError>
where
    S: DocumentStore + 'static,
{
    let users = service.list(Collection::Users, UserView::from_document).await?;
    render(UsersPage { users })
}

pub(crate) async fn user_handler<S>(
    State(service): State<Arc<PageService<S>>>,
    Path(user_id): Path<String>,
) -> Result<Html<String>, PageError>
where
    S: DocumentStore + 'static,
{
    let user = service
        .detail(Collection::Users, &user_id, UserView::from_document)
        .await?;
    render(UserPage { user })
}

pub(crate) async fn companies_handler<S>(
    State(service): State<Arc<PageService<S>>>,
) -> Result<Html<String>, PageError>
where
    S: DocumentStore + 'static,
{
    let companies = service
        .list(Collection::Companies, CompanyView::from_document)
        .await?;
    render(CompaniesPage { companies })
}

pub(crate) async fn company_handler<S>(
    State(service): State<Arc<PageService<S>>>,
    Path(comp_id): Path<String>,
) -> Result<Html<String>, PageError>
where
    S: DocumentStore + 'static,
{
    let company = service
        .detail(Collection::Companies, &comp_id, CompanyView::from_document)
        .await?;
    render(CompanyPage { company })
}

pub(crate) async fn applications_handler<S>(
    State(service): State<Arc<PageService<S>>>,
) -> Result<Html<String>, PageError>
where
    S: DocumentStore + 'static,
{
    let applications = service
        .list(Collection::Applications, ApplicationView::from_document)
        .await?;
    render(ApplicationsPage { applications })
}

pub(crate) async fn application_handler<S>(
    State(service): State<Arc<PageService<S>>>,
    Path(appl_id): Path<String>,
) -> Result<Html<String>, PageError>
where
    S: DocumentStore + 'static,
{
    let application = service
        .detail(
            Collection::Applications,
            &appl_id,
            ApplicationView::from_document,
        )
        .await?;
    render(ApplicationPage { application })
}
