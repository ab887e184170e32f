use crate::error::TransformResult;
use crate::event::event::TABLE_FIELD;
use serde::{Deserialize, Serialize};

pub const ORDER_EVENTS_TABLE: &str = "order_events";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TransformerConfig {
    pub table_field: String,
    pub order_events_table: String,
}

impl TransformerConfig {
    pub fn new(table_field: String, order_events_table: String) -> Self {
        TransformerConfig {
            table_field,
            order_events_table,
        }
    }

    pub fn from_yaml(yaml: &str) -> TransformResult<Self> {
        let config: TransformerConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

impl Default for TransformerConfig {
    fn default() -> Self {
        TransformerConfig::new(TABLE_FIELD.to_string(), ORDER_EVENTS_TABLE.to_string())
    }
}
