//! Typed custom field values.
//!
//! On disk every value is a string next to its type tag
//! (`{"type": "number", "value": "42"}`). Inside the domain the value is a
//! tagged union, and the string form only exists at the serde boundary.

use chrono::NaiveDate;
use funnel_core::FunnelError;
use serde::{Deserialize, Serialize};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Boolean,
    File,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Boolean => "boolean",
            Self::File => "file",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for FieldKind {
    type Err = FunnelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "number" => Ok(Self::Number),
            "date" => Ok(Self::Date),
            "boolean" | "bool" => Ok(Self::Boolean),
            "file" => Ok(Self::File),
            other => Err(FunnelError::Validation(format!(
                "Unknown custom field type: {}",
                other
            ))),
        }
    }
}

/// A card annotation keyed by a user-chosen field name.
///
/// Empty number, date and file values are kept as `None` rather than
/// rejected, since forms save blank inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCustomField", into = "RawCustomField")]
pub enum CustomField {
    Text(String),
    Number(Option<f64>),
    Date(Option<NaiveDate>),
    Boolean(bool),
    /// File name placeholder; no file content is stored.
    File(Option<String>),
}

/// Stored shape of a [`CustomField`].
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RawCustomField {
    #[serde(rename = "type")]
    kind: FieldKind,
    #[serde(default)]
    value: String,
}

impl CustomField {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Number(_) => FieldKind::Number,
            Self::Date(_) => FieldKind::Date,
            Self::Boolean(_) => FieldKind::Boolean,
            Self::File(_) => FieldKind::File,
        }
    }

    /// Parse the string form of a value of the given kind.
    pub fn parse(kind: FieldKind, raw: &str) -> Result<Self, FunnelError> {
        let blank = raw.trim().is_empty();
        match kind {
            FieldKind::Text => Ok(Self::Text(raw.to_string())),
            FieldKind::Number if blank => Ok(Self::Number(None)),
            FieldKind::Number => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(|n| Self::Number(Some(n)))
                .ok_or_else(|| FunnelError::Validation(format!("'{}' is not a valid number", raw))),
            FieldKind::Date if blank => Ok(Self::Date(None)),
            FieldKind::Date => NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
                .map(|d| Self::Date(Some(d)))
                .map_err(|_| FunnelError::Validation(format!("'{}' is not a YYYY-MM-DD date", raw))),
            FieldKind::Boolean => Ok(Self::Boolean(raw == "true")),
            FieldKind::File if blank => Ok(Self::File(None)),
            FieldKind::File => Ok(Self::File(Some(raw.to_string()))),
        }
    }

    /// The string form written to storage.
    pub fn to_raw_string(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(n) => n.map(|n| n.to_string()).unwrap_or_default(),
            Self::Date(d) => d
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            Self::Boolean(b) => b.to_string(),
            Self::File(name) => name.clone().unwrap_or_default(),
        }
    }
}

impl TryFrom<RawCustomField> for CustomField {
    type Error = FunnelError;

    fn try_from(raw: RawCustomField) -> Result<Self, Self::Error> {
        Self::parse(raw.kind, &raw.value)
    }
}

impl From<CustomField> for RawCustomField {
    fn from(field: CustomField) -> Self {
        Self {
            kind: field.kind(),
            value: field.to_raw_string(),
        }
    }
}
