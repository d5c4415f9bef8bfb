use super::{Constraint, FieldKind, FieldSpec, FormSchema, ListEntry};

const REQUIRED: &[Constraint] = &[Constraint::Required];
const REQUIRED_EMAIL: &[Constraint] = &[Constraint::Required, Constraint::Email];
const OPTIONAL: &[Constraint] = &[Constraint::Optional];
const NONE: &[Constraint] = &[];

const ISO_DATE: FieldKind = FieldKind::Date { format: "%Y-%m-%d" };

const fn field(
    name: &'static str,
    label: &'static str,
    kind: FieldKind,
    constraints: &'static [Constraint],
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind,
        constraints,
    }
}

pub static JOB_INFO: FormSchema = FormSchema {
    name: "job_info",
    fields: &[
        field(
            "textual_description",
            "Textual Description",
            FieldKind::TextArea,
            REQUIRED,
        ),
        field(
            "requirements",
            "Requirement",
            FieldKind::List {
                entry: ListEntry::Text,
                min_entries: 1,
            },
            OPTIONAL,
        ),
    ],
    submit_label: None,
};

pub static JOB_POSTING: FormSchema = FormSchema {
    name: "job_posting",
    fields: &[
        field("company_id", "Company ID", FieldKind::Text, REQUIRED),
        field("title", "Title", FieldKind::Text, REQUIRED),
        field("description", "Description", FieldKind::Text, REQUIRED),
        field("position", "Position", FieldKind::Text, REQUIRED),
        field("location", "Location", FieldKind::Text, REQUIRED),
        field(
            "type",
            "Type",
            FieldKind::Choice {
                choices: &[("on-site", "On-Site"), ("remote", "Remote")],
            },
            REQUIRED,
        ),
        field("salary", "Salary", FieldKind::Decimal, OPTIONAL),
        field("job_info", "Job Info", FieldKind::SubForm(&JOB_INFO), NONE),
        field("published_on", "Published On", ISO_DATE, REQUIRED),
        field("finishes_on", "Finishes On", ISO_DATE, REQUIRED),
    ],
    submit_label: Some("Post Job"),
};

pub static COMPANY_PROFILE: FormSchema = FormSchema {
    name: "company_profile",
    fields: &[
        field("username", "Username", FieldKind::Text, REQUIRED),
        field("password", "Password", FieldKind::Text, REQUIRED),
        field("company_name", "Company Name", FieldKind::Text, REQUIRED),
        field("since", "Established Since", ISO_DATE, REQUIRED),
        field("location", "Location", FieldKind::Text, NONE),
        field("address", "Address", FieldKind::Text, NONE),
        field("email", "Email", FieldKind::Text, REQUIRED_EMAIL),
        field("website", "Website", FieldKind::Text, NONE),
        field("created_on", "Created On", ISO_DATE, REQUIRED),
        field("last_session", "Last Session", ISO_DATE, REQUIRED),
    ],
    submit_label: Some("Save"),
};

pub static EDUCATION: FormSchema = FormSchema {
    name: "education",
    fields: &[
        field("institution", "Institution", FieldKind::Text, REQUIRED),
        field("degree", "Degree", FieldKind::Text, REQUIRED),
        field("start_date", "Start Date", ISO_DATE, REQUIRED),
        field("end_date", "End Date", ISO_DATE, REQUIRED),
    ],
    submit_label: None,
};

pub static EXPERIENCE: FormSchema = FormSchema {
    name: "experience",
    fields: &[
        field("company", "Company", FieldKind::Text, REQUIRED),
        field("title", "Title", FieldKind::Text, REQUIRED),
        field("start_date", "Start Date", ISO_DATE, REQUIRED),
        field("end_date", "End Date", ISO_DATE, REQUIRED),
        field("description", "Description", FieldKind::Text, NONE),
    ],
    submit_label: None,
};

pub static USER_PROFILE: FormSchema = FormSchema {
    name: "user_profile",
    fields: &[
        field("username", "Username", FieldKind::Text, REQUIRED),
        field("password", "Password", FieldKind::Text, REQUIRED),
        field("name", "Name", FieldKind::Text, REQUIRED),
        field("surname", "Surname", FieldKind::Text, REQUIRED),
        field("date_of_birth", "Date of Birth", ISO_DATE, REQUIRED),
        field("location", "Location", FieldKind::Text, NONE),
        field("address", "Address", FieldKind::Text, NONE),
        field("email", "Email", FieldKind::Text, REQUIRED_EMAIL),
        field("website", "Website", FieldKind::Text, NONE),
        field(
            "educations",
            "Education",
            FieldKind::List {
                entry: ListEntry::SubForm(&EDUCATION),
                min_entries: 1,
            },
            NONE,
        ),
        field(
            "experiences",
            "Experience",
            FieldKind::List {
                entry: ListEntry::SubForm(&EXPERIENCE),
                min_entries: 1,
            },
            NONE,
        ),
    ],
    submit_label: Some("Save"),
};

pub static JOB_APPLICATION: FormSchema = FormSchema {
    name: "job_application",
    fields: &[
        field("job_id", "Job ID", FieldKind::Hidden, REQUIRED),
        field("user_id", "User ID", FieldKind::Hidden, REQUIRED),
    ],
    submit_label: Some("Apply"),
};

pub static SEARCH: FormSchema = FormSchema {
    name: "search",
    fields: &[field("search_query", "Search", FieldKind::Text, REQUIRED)],
    submit_label: Some("Search"),
};

static REGISTRY: [&FormSchema; 8] = [
    &JOB_POSTING,
    &JOB_INFO,
    &COMPANY_PROFILE,
    &USER_PROFILE,
    &EDUCATION,
    &EXPERIENCE,
    &JOB_APPLICATION,
    &SEARCH,
];

/// Every declared form, top-level forms before the sections they embed.
pub fn registry() -> &'static [&'static FormSchema] {
    &REGISTRY
}
