//! Lenient readers for raw documents. Missing or mistyped values read as `None`.

use chrono::{DateTime, NaiveDate};
use mongodb::bson::{Bson, Document};

pub(crate) fn text(document: &Document, key: &str) -> Option<String> {
    match document.get(key)? {
        Bson::String(value) => {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Bson::Int32(value) => Some(value.to_string()),
        Bson::Int64(value) => Some(value.to_string()),
        _ => None,
    }
}

/// An identifier rendered as text, from an ObjectId or a plain string.
pub(crate) fn identifier(document: &Document, key: &str) -> Option<String> {
    match document.get(key)? {
        Bson::ObjectId(oid) => Some(oid.to_hex()),
        Bson::String(_) => text(document, key),
        _ => None,
    }
}

pub(crate) fn decimal(document: &Document, key: &str) -> Option<f64> {
    let value = match document.get(key)? {
        Bson::Double(value) => *value,
        Bson::Int32(value) => f64::from(*value),
        Bson::Int64(value) => *value as f64,
        Bson::Decimal128(value) => value.to_string().parse().ok()?,
        Bson::String(value) => value.trim().parse().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}

pub(crate) fn date(document: &Document, key: &str) -> Option<NaiveDate> {
    match document.get(key)? {
        Bson::DateTime(value) => {
            DateTime::from_timestamp_millis(value.timestamp_millis()).map(|dt| dt.date_naive())
        }
        Bson::String(value) => parse_date(value),
        _ => None,
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let prefix = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

pub(crate) fn strings(document: &Document, key: &str) -> Vec<String> {
    match document.get(key) {
        Some(Bson::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Bson::String(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
                _ => None,
            })
            .collect(),
        Some(Bson::String(value)) if !value.trim().is_empty() => vec![value.trim().to_string()],
        _ => Vec::new(),
    }
}

pub(crate) fn subdocument<'a>(document: &'a Document, key: &str) -> Option<&'a Document> {
    match document.get(key)? {
        Bson::Document(inner) => Some(inner),
        _ => None,
    }
}

pub(crate) fn subdocuments<'a>(document: &'a Document, key: &str) -> Vec<&'a Document> {
    match document.get(key) {
        Some(Bson::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Bson::Document(inner) => Some(inner),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime, Decimal128};

    #[test]
    fn text_trims_and_drops_blanks() {
        let document = doc! { "a": "  Madrid ", "b": "   ", "c": 42, "d": true };
        assert_eq!(text(&document, "a").as_deref(), Some("Madrid"));
        assert_eq!(text(&document, "b"), None);
        assert_eq!(text(&document, "c").as_deref(), Some("42"));
        assert_eq!(text(&document, "d"), None);
        assert_eq!(text(&document, "missing"), None);
    }

    #[test]
    fn identifiers_accept_object_ids_and_strings() {
        let oid = ObjectId::parse_str("507f1f77bcf86cd799439011").expect("valid oid");
        let document = doc! { "a": oid, "b": "company-7" };
        assert_eq!(
            identifier(&document, "a").as_deref(),
            Some("507f1f77bcf86cd799439011")
        );
        assert_eq!(identifier(&document, "b").as_deref(), Some("company-7"));
    }

    #[test]
    fn decimals_accept_numbers_and_numeric_strings() {
        let document = doc! { "a": 1500.5, "b": 2000, "c": 3000_i64, "d": "4100.25", "e": "n/a" };
        assert_eq!(decimal(&document, "a"), Some(1500.5));
        assert_eq!(decimal(&document, "b"), Some(2000.0));
        assert_eq!(decimal(&document, "c"), Some(3000.0));
        assert_eq!(decimal(&document, "d"), Some(4100.25));
        assert_eq!(decimal(&document, "e"), None);
    }

    #[test]
    fn decimals_accept_decimal128() {
        let salary: Decimal128 = "52000.50".parse().expect("valid decimal128");
        let document = doc! { "salary": salary };
        assert_eq!(decimal(&document, "salary"), Some(52000.5));
    }

    #[test]
    fn dates_accept_bson_datetimes_and_iso_strings() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
        let millis = expected
            .and_hms_opt(12, 0, 0)
            .expect("valid time")
            .and_utc()
            .timestamp_millis();
        let document = doc! {
            "a": BsonDateTime::from_millis(millis),
            "b": "2024-03-15",
            "c": "2024-03-15T08:30:00Z",
            "d": "15/03/2024",
        };
        assert_eq!(date(&document, "a"), Some(expected));
        assert_eq!(date(&document, "b"), Some(expected));
        assert_eq!(date(&document, "c"), Some(expected));
        assert_eq!(date(&document, "d"), None);
    }

    #[test]
    fn string_lists_skip_non_strings() {
        let document = doc! { "a": ["Rust", 3, "", "Tokio"], "b": "single" };
        assert_eq!(strings(&document, "a"), vec!["Rust", "Tokio"]);
        assert_eq!(strings(&document, "b"), vec!["single"]);
        assert!(strings(&document, "missing").is_empty());
    }
}
