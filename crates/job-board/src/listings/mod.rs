//! Template-facing view models for jobs, users, companies, and applications.
//!
//! Raw documents are mapped field by field so store-side schema drift degrades to
//! missing values instead of failed pages.

mod fields;
pub mod views;

pub use views::{
    ApplicationView, CompanyView, EducationEntry, ExperienceEntry, JobInfo, JobType, JobView,
    UserView,
};
