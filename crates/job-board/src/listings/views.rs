use chrono::NaiveDate;
use mongodb::bson::Document;
use serde::Serialize;

use super::fields::{date, decimal, identifier, strings, subdocument, subdocuments, text};

const DATE_LABEL: &str = "%d %b %Y";

fn date_label(value: Option<NaiveDate>) -> String {
    value
        .map(|date| date.format(DATE_LABEL).to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

/// Working arrangement advertised by a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    OnSite,
    Remote,
}

impl JobType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "on-site" | "onsite" | "on_site" | "on site" => Some(Self::OnSite),
            "remote" => Some(Self::Remote),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JobType::OnSite => "On-Site",
            JobType::Remote => "Remote",
        }
    }
}

/// Long-form description attached to a job posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobInfo {
    pub textual_description: Option<String>,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobView {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub salary: Option<f64>,
    pub job_info: Option<JobInfo>,
    pub published_on: Option<NaiveDate>,
    pub finishes_on: Option<NaiveDate>,
    pub company_id: Option<String>,
}

impl JobView {
    pub fn from_document(document: &Document) -> Self {
        Self {
            id: identifier(document, "_id").unwrap_or_default(),
            title: text(document, "title"),
            description: text(document, "description"),
            position: text(document, "position"),
            location: text(document, "location"),
            job_type: text(document, "type").as_deref().and_then(JobType::parse),
            salary: decimal(document, "salary"),
            job_info: subdocument(document, "job_info").map(|info| JobInfo {
                textual_description: text(info, "textual_description"),
                requirements: strings(info, "requirements"),
            }),
            published_on: date(document, "published_on"),
            finishes_on: date(document, "finishes_on"),
            company_id: identifier(document, "company_id"),
        }
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled position")
    }

    pub fn display_description(&self) -> &str {
        or_dash(&self.description)
    }

    pub fn display_position(&self) -> &str {
        or_dash(&self.position)
    }

    pub fn display_location(&self) -> &str {
        or_dash(&self.location)
    }

    pub fn type_label(&self) -> &str {
        self.job_type.map_or("-", JobType::label)
    }

    pub fn salary_label(&self) -> String {
        match self.salary {
            Some(amount) => format!("{amount:.2}"),
            None => "Not disclosed".to_string(),
        }
    }

    pub fn published_label(&self) -> String {
        date_label(self.published_on)
    }

    pub fn finishes_label(&self) -> String {
        date_label(self.finishes_on)
    }

    pub fn textual_description(&self) -> &str {
        self.job_info
            .as_ref()
            .and_then(|info| info.textual_description.as_deref())
            .unwrap_or("")
    }

    pub fn requirements(&self) -> &[String] {
        self.job_info
            .as_ref()
            .map(|info| info.requirements.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl EducationEntry {
    fn from_document(document: &Document) -> Self {
        Self {
            institution: text(document, "institution"),
            degree: text(document, "degree"),
            start_date: date(document, "start_date"),
            end_date: date(document, "end_date"),
        }
    }

    pub fn display_institution(&self) -> &str {
        or_dash(&self.institution)
    }

    pub fn display_degree(&self) -> &str {
        or_dash(&self.degree)
    }

    pub fn period_label(&self) -> String {
        format!("{} to {}", date_label(self.start_date), date_label(self.end_date))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub title: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl ExperienceEntry {
    fn from_document(document: &Document) -> Self {
        Self {
            company: text(document, "company"),
            title: text(document, "title"),
            start_date: date(document, "start_date"),
            end_date: date(document, "end_date"),
            description: text(document, "description"),
        }
    }

    pub fn display_company(&self) -> &str {
        or_dash(&self.company)
    }

    pub fn display_title(&self) -> &str {
        or_dash(&self.title)
    }

    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn period_label(&self) -> String {
        format!("{} to {}", date_label(self.start_date), date_label(self.end_date))
    }
}

/// Public profile of a candidate. The stored password never reaches this view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserView {
    pub id: String,
    pub username: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub educations: Vec<EducationEntry>,
    pub experiences: Vec<ExperienceEntry>,
}

impl UserView {
    pub fn from_document(document: &Document) -> Self {
        Self {
            id: identifier(document, "_id").unwrap_or_default(),
            username: text(document, "username"),
            name: text(document, "name"),
            surname: text(document, "surname"),
            date_of_birth: date(document, "date_of_birth"),
            location: text(document, "location"),
            address: text(document, "address"),
            email: text(document, "email"),
            website: text(document, "website"),
            educations: subdocuments(document, "educations")
                .into_iter()
                .map(EducationEntry::from_document)
                .collect(),
            experiences: subdocuments(document, "experiences")
                .into_iter()
                .map(ExperienceEntry::from_document)
                .collect(),
        }
    }

    pub fn full_name(&self) -> String {
        let parts: Vec<&str> = [self.name.as_deref(), self.surname.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            self.username.clone().unwrap_or_else(|| "Anonymous".to_string())
        } else {
            parts.join(" ")
        }
    }

    pub fn display_username(&self) -> &str {
        or_dash(&self.username)
    }

    pub fn birth_label(&self) -> String {
        date_label(self.date_of_birth)
    }

    pub fn display_location(&self) -> &str {
        or_dash(&self.location)
    }

    pub fn display_address(&self) -> &str {
        or_dash(&self.address)
    }

    pub fn display_email(&self) -> &str {
        or_dash(&self.email)
    }

    pub fn display_website(&self) -> &str {
        or_dash(&self.website)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyView {
    pub id: String,
    pub username: Option<String>,
    pub company_name: Option<String>,
    pub since: Option<NaiveDate>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub created_on: Option<NaiveDate>,
    pub last_session: Option<NaiveDate>,
}

impl CompanyView {
    pub fn from_document(document: &Document) -> Self {
        Self {
            id: identifier(document, "_id").unwrap_or_default(),
            username: text(document, "username"),
            company_name: text(document, "company_name"),
            since: date(document, "since"),
            location: text(document, "location"),
            address: text(document, "address"),
            email: text(document, "email"),
            website: text(document, "website"),
            created_on: date(document, "created_on"),
            last_session: date(document, "last_session"),
        }
    }

    pub fn display_name(&self) -> &str {
        self.company_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("Unnamed company")
    }

    pub fn since_label(&self) -> String {
        date_label(self.since)
    }

    pub fn display_location(&self) -> &str {
        or_dash(&self.location)
    }

    pub fn display_address(&self) -> &str {
        or_dash(&self.address)
    }

    pub fn display_email(&self) -> &str {
        or_dash(&self.email)
    }

    pub fn display_website(&self) -> &str {
        or_dash(&self.website)
    }

    pub fn created_label(&self) -> String {
        date_label(self.created_on)
    }

    pub fn last_session_label(&self) -> String {
        date_label(self.last_session)
    }
}

/// A candidate's application. References are conventions; nothing here resolves them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationView {
    pub id: String,
    pub job_id: Option<String>,
    pub user_id: Option<String>,
}

impl ApplicationView {
    pub fn from_document(document: &Document) -> Self {
        Self {
            id: identifier(document, "_id").unwrap_or_default(),
            job_id: identifier(document, "job_id"),
            user_id: identifier(document, "user_id"),
        }
    }

    pub fn display_job_id(&self) -> &str {
        or_dash(&self.job_id)
    }

    pub fn display_user_id(&self) -> &str {
        or_dash(&self.user_id)
    }
}
