//! Category record and the id -> type mapping served to clients

use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::FromRow;

/// A question category. Read-only from the API's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Build the `{"<id>": "<type>"}` object clients expect.
///
/// JSON object keys are strings, so ids appear in decimal string form.
pub fn category_map(categories: &[Category]) -> Map<String, Value> {
    categories
        .iter()
        .map(|c| (c.id.to_string(), Value::String(c.kind.clone())))
        .collect()
}
