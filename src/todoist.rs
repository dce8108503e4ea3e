//! Todoist Sync API wire types for the completed-task endpoint.
//!
//! Only the fields the report uses are modelled; everything else in the
//! response is ignored by serde.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::utils::datetime::DateRange;

/// JSON body of one `completed/get_all` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedQuery {
    pub since: String,
    pub until: String,
    pub offset: usize,
}

impl CompletedQuery {
    pub fn new(range: &DateRange, offset: usize) -> Self {
        Self {
            since: range.since_param(),
            until: range.until_param(),
            offset,
        }
    }
}

/// One page returned by `completed/get_all`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletedPage {
    pub items: Vec<CompletedItem>,
    #[serde(default)]
    pub projects: HashMap<String, NamedEntry>,
    #[serde(default)]
    pub sections: HashMap<String, NamedEntry>,
}

/// A completed task as the API reports it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletedItem {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub project_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub section_id: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Project or section entry in the inline lookup tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedEntry {
    #[serde(default)]
    pub name: Option<String>,
}

impl CompletedPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn project_name(&self, id: Option<&str>) -> Option<&str> {
        lookup_name(&self.projects, id)
    }

    pub fn section_name(&self, id: Option<&str>) -> Option<&str> {
        lookup_name(&self.sections, id)
    }
}

fn lookup_name<'a>(table: &'a HashMap<String, NamedEntry>, id: Option<&str>) -> Option<&'a str> {
    table.get(id?)?.name.as_deref()
}

/// Accept ids encoded as strings or numbers; anything else counts as absent.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Headers sent with every request of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    pub content_type: String,
    pub authorization: String,
}

impl RequestHeaders {
    pub fn new(api_token: &str) -> Self {
        Self {
            content_type: "application/json".to_string(),
            authorization: format!("Bearer {}", api_token),
        }
    }
}
