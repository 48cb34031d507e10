//! Tag-record retitling
//!
//! A tag record is one file's metadata as a flat map of field name to value,
//! in the JSON array form tag editors print (`[{"title": "...", ...}]`).
//! Retitling produces the `set:field=value` assignments to write back.

use std::collections::{BTreeMap, HashSet};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::titlecase::TitleCaseEngine;

/// One file's tags
pub type TagRecord = BTreeMap<String, String>;

/// Parses a JSON array of tag records
pub fn parse_records(json: &str) -> Result<Vec<TagRecord>> {
    serde_json::from_str(json).context("Tag records must be a JSON array of string maps")
}

/// Which fields of a record get retitled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSelection {
    All,
    Only(HashSet<String>),
}

impl FieldSelection {
    /// `All` for an empty list, otherwise exactly the named fields
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let names: HashSet<String> = names
            .iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            Self::All
        } else {
            Self::Only(names)
        }
    }

    /// Parses a comma separated list ("title,album")
    pub fn parse(list: &str) -> Self {
        Self::from_names(&list.split(',').collect::<Vec<_>>())
    }

    pub fn contains(&self, field: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(names) => names.contains(field),
        }
    }
}

/// New value for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldUpdate {
    pub key: String,
    pub value: String,
}

impl FieldUpdate {
    /// Renders the update as a one-line `set:key=value` assignment.
    ///
    /// Backslashes and line breaks are escaped (`\\`, `\n`, `\r`) so every
    /// assignment stays on its own line.
    pub fn assignment(&self) -> String {
        format!("set:{}={}", escape_line(&self.key), escape_line(&self.value))
    }
}

fn escape_line(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Retitles the selected fields of `record`, in field name order
pub fn retitle_record(
    engine: &TitleCaseEngine,
    record: &TagRecord,
    selection: &FieldSelection,
) -> Vec<FieldUpdate> {
    record
        .iter()
        .filter(|(key, _)| selection.contains(key))
        .map(|(key, value)| FieldUpdate {
            key: key.clone(),
            value: engine.convert(value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> TagRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_records() {
        let records =
            parse_records(r#"[{"title": "back in black", "artist": "AC/DC"}, {}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["title"], "back in black");
        assert!(records[1].is_empty());
    }

    #[test]
    fn test_parse_records_rejects_bad_shape() {
        assert!(parse_records("{}").is_err());
        assert!(parse_records(r#"[{"track": 3}]"#).is_err());
        assert!(parse_records("not json").is_err());
    }

    #[test]
    fn test_field_selection() {
        assert_eq!(FieldSelection::parse(""), FieldSelection::All);
        assert_eq!(FieldSelection::parse(" , "), FieldSelection::All);

        let only = FieldSelection::parse("title, album");
        assert!(only.contains("title"));
        assert!(only.contains("album"));
        assert!(!only.contains("artist"));
        assert!(FieldSelection::All.contains("anything"));
    }

    #[test]
    fn test_retitle_all_fields() {
        let engine = TitleCaseEngine::new();
        let rec = record(&[("title", "the end of the world"), ("album", "GREATEST HITS")]);

        let updates = retitle_record(&engine, &rec, &FieldSelection::All);
        assert_eq!(
            updates,
            vec![
                FieldUpdate {
                    key: "album".to_string(),
                    value: "Greatest Hits".to_string(),
                },
                FieldUpdate {
                    key: "title".to_string(),
                    value: "The End of the World".to_string(),
                },
            ]
        );
        assert_eq!(updates[1].assignment(), "set:title=The End of the World");
    }

    #[test]
    fn test_multiline_value_stays_on_one_line() {
        let engine = TitleCaseEngine::new();
        let rec = record(&[("lyrics", "first line\nsecond line")]);

        let updates = retitle_record(&engine, &rec, &FieldSelection::All);
        assert_eq!(updates[0].value, "First Line\nSecond Line");

        let assignment = updates[0].assignment();
        assert_eq!(assignment, r"set:lyrics=First Line\nSecond Line");
        assert_eq!(assignment.lines().count(), 1);
    }

    #[test]
    fn test_assignment_escapes_backslashes() {
        let update = FieldUpdate {
            key: "path".to_string(),
            value: r"C:\music".to_string(),
        };
        assert_eq!(update.assignment(), r"set:path=C:\\music");
    }

    #[test]
    fn test_retitle_selected_fields() {
        let engine = TitleCaseEngine::new();
        let rec = record(&[("title", "a thing"), ("comment", "leave me alone")]);

        let updates = retitle_record(&engine, &rec, &FieldSelection::parse("title"));
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].assignment(), "set:title=A Thing");
    }
}
