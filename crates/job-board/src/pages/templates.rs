use askama::Template;

use crate::listings::{ApplicationView, CompanyView, JobView, UserView};

#[derive(Template)]
#[template(path = "index.html")]
pub struct JobsPage {
    pub jobs: Vec<JobView>,
}

#[derive(Template)]
#[template(path = "job_description.html")]
pub struct JobPage {
    pub job: Option<JobView>,
}

#[derive(Template)]
#[template(path = "users_list.html")]
pub struct UsersPage {
    pub users: Vec<UserView>,
}

#[derive(Template)]
#[template(path = "user_description.html")]
pub struct UserPage {
    pub user: Option<UserView>,
}

#[derive(Template)]
#[template(path = "companies_list.html")]
pub struct CompaniesPage {
    pub companies: Vec<CompanyView>,
}

#[derive(Template)]
#[template(path = "company_profile.html")]
pub struct CompanyPage {
    pub company: Option<CompanyView>,
}

#[derive(Template)]
#[template(path = "application_list.html")]
pub struct ApplicationsPage {
    pub applications: Vec<ApplicationView>,
}

#[derive(Template)]
#[template(path = "application_desc.html")]
pub struct ApplicationPage {
    pub application: Option<ApplicationView>,
}

/// Shown under [`crate::config::StoreErrorPolicy::Propagate`] when the store is down.
#[derive(Template)]
#[template(path = "unavailable.html")]
pub struct UnavailablePage {
    pub message: String,
}
