use crate::event::OrderEventType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Fixed width, so string order is time order.
pub const EVENT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone)]
pub struct OrderEvent {
    pub order_id: Value,
    pub customer_id: Value,
    pub event_type: OrderEventType,
    pub event_timestamp: String,
}

impl OrderEvent {
    pub fn new(
        order_id: Value,
        customer_id: Value,
        event_type: OrderEventType,
        processed_at: DateTime<Utc>,
    ) -> Self {
        OrderEvent {
            order_id,
            customer_id,
            event_type,
            event_timestamp: processed_at.format(EVENT_TIMESTAMP_FORMAT).to_string(),
        }
    }
}
