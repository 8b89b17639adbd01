//! Filter Models
//!
//! Option entries rendered in the dropdowns and the records returned by
//! the program filter endpoint.

use std::fmt;

use serde::Deserialize;

/// One selectable `<option>` of a dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
        }
    }

    /// The synthetic "no selection" entry heading every dependent option list
    pub fn empty(label: impl Into<String>) -> Self {
        Self::new("", label)
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Program identifier as sent by the endpoint.
///
/// UUID primary keys arrive as strings, integer keys as numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Text(s) => f.write_str(s),
            RecordId::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
                (Some(i), _, _) => write!(f, "{}", i),
                (_, Some(u), _) => write!(f, "{}", u),
                // Same text a browser gives the number: 10.0 is "10", 2.5 is "2.5"
                (_, _, Some(x)) => write!(f, "{}", x),
                _ => write!(f, "{}", n),
            },
        }
    }
}

/// Program record (matches the filter endpoint payload)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProgramRecord {
    pub id: RecordId,
    pub name: String,
}

impl ProgramRecord {
    /// Identifier as a field value; compared stringwise against the prior selection
    pub fn value(&self) -> String {
        self.id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ids_accept_numbers_and_strings() {
        let records: Vec<ProgramRecord> = serde_json::from_str(
            r#"[{"id": 10, "name": "BSc CS"},
                {"id": "3f1c2a9e-8b1d-4c55-9a55-6c3a1f0e2b7d", "name": "MBA"}]"#,
        )
        .unwrap();

        assert_eq!(records[0].value(), "10");
        assert_eq!(records[1].value(), "3f1c2a9e-8b1d-4c55-9a55-6c3a1f0e2b7d");
        assert_eq!(records[1].name, "MBA");
    }

    #[test]
    fn test_integral_float_id_renders_like_integer() {
        let records: Vec<ProgramRecord> = serde_json::from_str(
            r#"[{"id": 10.0, "name": "BSc CS"}, {"id": 2.5, "name": "Diploma"}]"#,
        )
        .unwrap();

        assert_eq!(records[0].value(), "10");
        assert_eq!(records[1].value(), "2.5");
    }

    #[test]
    fn test_record_missing_name_is_rejected() {
        let parsed: Result<Vec<ProgramRecord>, _> = serde_json::from_str(r#"[{"id": 1}]"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_empty_option() {
        let option = SelectOption::empty("---------");
        assert!(option.is_empty());
        assert!(!option.selected);
        assert_eq!(option.label, "---------");
    }
}
