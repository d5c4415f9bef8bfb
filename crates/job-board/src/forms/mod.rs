//! Input declarations for the board's future create/edit flows.
//!
//! Forms are static schemas: field names, type tags, and required/format
//! constraints. [`FormSchema::check`] evaluates exactly those declared
//! constraints against a JSON payload. No page route calls it.

mod declarations;

use std::fmt;

use chrono::NaiveDate;
use serde_json::{Map, Value};

pub use declarations::{
    registry, COMPANY_PROFILE, EDUCATION, EXPERIENCE, JOB_APPLICATION, JOB_INFO, JOB_POSTING,
    SEARCH, USER_PROFILE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Required,
    Email,
    /// Skip every other check when the value is absent.
    Optional,
}

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text,
    TextArea,
    Hidden,
    Date {
        format: &'static str,
    },
    Decimal,
    Choice {
        choices: &'static [(&'static str, &'static str)],
    },
    SubForm(&'static FormSchema),
    List {
        entry: ListEntry,
        min_entries: usize,
    },
}

/// Element type of a repeatable field.
#[derive(Debug, Clone, Copy)]
pub enum ListEntry {
    Text,
    SubForm(&'static FormSchema),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => f.write_str("text"),
            FieldKind::TextArea => f.write_str("textarea"),
            FieldKind::Hidden => f.write_str("hidden"),
            FieldKind::Date { format } => write!(f, "date({format})"),
            FieldKind::Decimal => f.write_str("decimal"),
            FieldKind::Choice { choices } => {
                let values: Vec<&str> = choices.iter().map(|(value, _)| *value).collect();
                write!(f, "choice({})", values.join("|"))
            }
            FieldKind::SubForm(schema) => write!(f, "form({})", schema.name),
            FieldKind::List { entry, min_entries } => match entry {
                ListEntry::Text => write!(f, "list(text, min {min_entries})"),
                ListEntry::SubForm(schema) => {
                    write!(f, "list(form({}), min {min_entries})", schema.name)
                }
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub constraints: &'static [Constraint],
}

impl FieldSpec {
    pub fn is_required(&self) -> bool {
        self.constraints.contains(&Constraint::Required)
    }
}

#[derive(Debug)]
pub struct FormSchema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
    /// Embedded sections have no submit button.
    pub submit_label: Option<&'static str>,
}

/// A declared constraint that a payload did not meet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{path}: {message}")]
pub struct FieldError {
    /// Dotted location, e.g. `educations.0.degree`.
    pub path: String,
    pub message: String,
}

impl FieldError {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Evaluate the declared constraints against `payload`.
    pub fn check(&self, payload: &Value) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        match payload {
            Value::Object(values) => self.check_object(values, "", &mut errors),
            _ => errors.push(FieldError::new(self.name, "expected an object")),
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn check_object(&self, values: &Map<String, Value>, prefix: &str, errors: &mut Vec<FieldError>) {
        for field in self.fields {
            let path = join(prefix, field.name);
            check_field(field, values.get(field.name), &path, errors);
        }
    }
}

impl fmt::Display for FormSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for field in self.fields {
            let constraints: Vec<&str> = field
                .constraints
                .iter()
                .map(|constraint| match constraint {
                    Constraint::Required => "required",
                    Constraint::Email => "email",
                    Constraint::Optional => "optional",
                })
                .collect();
            write!(f, "  {} ({}): {}", field.name, field.label, field.kind)?;
            if !constraints.is_empty() {
                write!(f, " [{}]", constraints.join(", "))?;
            }
            writeln!(f)?;
        }
        if let Some(label) = self.submit_label {
            writeln!(f, "  submit: {label}")?;
        }
        Ok(())
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.trim().is_empty(),
        _ => false,
    }
}

fn check_field(field: &FieldSpec, value: Option<&Value>, path: &str, errors: &mut Vec<FieldError>) {
    match field.kind {
        FieldKind::SubForm(schema) => {
            let empty = Map::new();
            match value {
                Some(Value::Object(values)) => schema.check_object(values, path, errors),
                None | Some(Value::Null) => schema.check_object(&empty, path, errors),
                Some(_) => errors.push(FieldError::new(path, "expected a section")),
            }
        }
        FieldKind::List { entry, min_entries } => {
            let entries: &[Value] = match value {
                Some(Value::Array(items)) => items,
                None | Some(Value::Null) => &[],
                Some(_) => {
                    errors.push(FieldError::new(path, "expected a list"));
                    return;
                }
            };
            // Missing entries up to the minimum are checked as blank ones.
            let padded = entries.len().max(min_entries);
            for index in 0..padded {
                let item = entries.get(index);
                let item_path = join(path, &index.to_string());
                match entry {
                    ListEntry::Text => check_scalar(field, FieldKind::Text, item, &item_path, errors),
                    ListEntry::SubForm(schema) => match item {
                        Some(Value::Object(values)) => {
                            schema.check_object(values, &item_path, errors)
                        }
                        None | Some(Value::Null) => {
                            schema.check_object(&Map::new(), &item_path, errors)
                        }
                        Some(_) => errors.push(FieldError::new(&item_path, "expected a section")),
                    },
                }
            }
        }
        kind => check_scalar(field, kind, value, path, errors),
    }
}

fn check_scalar(
    field: &FieldSpec,
    kind: FieldKind,
    value: Option<&Value>,
    path: &str,
    errors: &mut Vec<FieldError>,
) {
    if is_blank(value) {
        if field.is_required() {
            errors.push(FieldError::new(path, "This field is required."));
        }
        return;
    }
    let Some(value) = value else {
        return;
    };

    let text = match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        _ => {
            errors.push(FieldError::new(path, "Not a valid value."));
            return;
        }
    };

    match kind {
        FieldKind::Date { format } => {
            if NaiveDate::parse_from_str(&text, format).is_err() {
                errors.push(FieldError::new(path, "Not a valid date value."));
            }
        }
        FieldKind::Decimal => {
            if !text.parse::<f64>().is_ok_and(f64::is_finite) {
                errors.push(FieldError::new(path, "Not a valid decimal value."));
            }
        }
        FieldKind::Choice { choices } => {
            if !choices.iter().any(|(choice, _)| *choice == text) {
                errors.push(FieldError::new(path, "Not a valid choice."));
            }
        }
        FieldKind::Text
        | FieldKind::TextArea
        | FieldKind::Hidden
        | FieldKind::SubForm(_)
        | FieldKind::List { .. } => {}
    }

    if field.constraints.contains(&Constraint::Email) && !looks_like_email(&text) {
        errors.push(FieldError::new(path, "Invalid email address."));
    }
}

fn looks_like_email(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}
