use crate::error::invalid_event::InvalidEventError;
use crate::error::TransformResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const TABLE_FIELD: &str = "__table_name";

// The table identity stays inside the mapping so pass-through events
// serialize back to what was read.
#[derive(Debug, PartialEq, Deserialize, Serialize, Clone, Default)]
#[serde(transparent)]
pub struct Event {
    fields: Map<String, Value>,
}

impl Event {
    pub fn new(fields: Map<String, Value>) -> Self {
        Event { fields }
    }

    pub fn from_value(value: Value) -> TransformResult<Self> {
        match value {
            Value::Object(fields) => Ok(Event::new(fields)),
            other => Err(InvalidEventError::new(value_kind(&other)).into()),
        }
    }

    pub fn from_json(json: &str) -> TransformResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Event::from_value(value)
    }

    pub fn from_slice(bytes: &[u8]) -> TransformResult<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Event::from_value(value)
    }

    // Absent, non-string and empty values all count as missing.
    pub fn table(&self, table_field: &str) -> Option<&str> {
        self.get_str(table_field).filter(|table| !table.is_empty())
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    pub fn get_or_null(&self, field: &str) -> Value {
        self.fields.get(field).cloned().unwrap_or(Value::Null)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn set<V>(&mut self, field: &str, value: V)
    where
        V: Into<Value>,
    {
        self.fields.insert(field.to_string(), value.into());
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl From<Map<String, Value>> for Event {
    fn from(fields: Map<String, Value>) -> Self {
        Event::new(fields)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
