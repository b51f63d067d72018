//! Localized Records
//!
//! A record is one row fetched from the content store (a tour, a page
//! block, a footer setting). It has no fixed schema, so it is kept as an
//! open map from column name to a small closed set of value shapes.

use crate::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Value stored under one record column.
///
/// Deserialization never fails for well-formed JSON: shapes other than
/// strings and string arrays land in [`FieldValue::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Explicit `null`
    Null,
    /// A string
    Text(String),
    /// An array of strings
    List(Vec<String>),
    /// Anything else (numbers, booleans, objects, mixed arrays)
    Other(serde_json::Value),
}

impl FieldValue {
    /// The string value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The list value, if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Text that is present and non-empty.
    pub fn non_empty_text(&self) -> Option<&str> {
        self.as_text().filter(|s| !s.is_empty())
    }

    /// List that is present and has at least one element.
    pub fn non_empty_list(&self) -> Option<&[String]> {
        self.as_list().filter(|items| !items.is_empty())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::List(items.into_iter().map(String::from).collect())
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or(FieldValue::Other(value))
    }
}

/// One content row with per-language columns such as `title_az`, `title_en`.
///
/// # Examples
///
/// ```
/// use tourbook_i18n::LocalizedRecord;
///
/// let tour = LocalizedRecord::from_json_str(
///     r#"{"id": 7, "title_az": "Qəbələ turu", "features_en": ["Guide", "Lunch"]}"#,
/// )
/// .unwrap();
///
/// assert_eq!(tour.text("title_az"), Some("Qəbələ turu"));
/// assert_eq!(tour.list("features_en").map(|f| f.len()), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedRecord {
    fields: HashMap<String, FieldValue>,
}

impl LocalizedRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a column.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Parse a record from a JSON object string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json(value)
    }

    /// Convert a JSON value (as returned by the content store) into a record.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(I18nError::InvalidRecord(json_kind(&other).to_string())),
        }
    }

    /// Raw column value.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Non-empty text stored under `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::non_empty_text)
    }

    /// Non-empty list stored under `key`.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(FieldValue::non_empty_list)
    }

    /// Whether a column exists (even if empty or null).
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over all columns.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for LocalizedRecord
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, FieldValue>> for LocalizedRecord {
    fn from(fields: HashMap<String, FieldValue>) -> Self {
        Self { fields }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
