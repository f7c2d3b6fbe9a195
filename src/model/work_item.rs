use serde_json::Value;

use crate::model::Result;

/// Closed set of work-item types the report cares about. Everything the
/// tracker reports outside "User Story" and "Bug" lands in `Unclassified`
/// and is dropped from the notes.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum WorkItemKind {
    UserStory,
    Bug,
    Unclassified,
}

impl WorkItemKind {
    pub fn from_field(raw: &str) -> Self {
        match raw {
            "User Story" => Self::UserStory,
            "Bug" => Self::Bug,
            _ => Self::Unclassified,
        }
    }
}

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct WorkItem {
    pub id: i64,
    pub kind: WorkItemKind,
    pub title: String,
}

// Create
impl WorkItem {
    pub fn new(id: i64, kind: WorkItemKind, title: impl ToString) -> Self {
        Self {
            id,
            kind,
            title: title.to_string(),
        }
    }
}

// Parser
impl WorkItem {
    /// Parses a single work-item record (`fields` carries type and title).
    pub fn parse(details: &Value) -> Result<Self> {
        let Some(id) = details["id"].as_i64() else {
            return Err("Not found 'id' field".into());
        };
        let Some(kind) = details["fields"]["System.WorkItemType"].as_str() else {
            return Err("Not found 'System.WorkItemType' field".into());
        };
        let Some(title) = details["fields"]["System.Title"].as_str() else {
            return Err("Not found 'System.Title' field".into());
        };
        Ok(Self::new(id, WorkItemKind::from_field(kind), title))
    }

    /// Parses the `value` array of a pull request's linked work items.
    /// The endpoint returns ids as JSON strings; integer ids are accepted too.
    pub fn parse_refs(details: &Value) -> Result<Vec<i64>> {
        let Some(elements) = details["value"].as_array() else {
            return Err("Not found 'value' field".into());
        };
        let mut result = Vec::new();
        for element in elements {
            let id = match &element["id"] {
                Value::Number(number) => number.as_i64(),
                Value::String(raw) => raw.parse::<i64>().ok(),
                _ => None,
            };
            let Some(id) = id else {
                return Err("Not found 'id' field".into());
            };
            result.push(id);
        }
        Ok(result)
    }
}
