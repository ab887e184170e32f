use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Display)]
pub enum OrderStatus {
    #[strum(serialize = "delivered")]
    Delivered,
    #[strum(serialize = "placed")]
    Placed,
    #[strum(serialize = "shipped")]
    Shipped,
    #[strum(serialize = "cancelled")]
    Cancelled,
}

impl OrderStatus {
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_str().and_then(|status| status.parse().ok())
    }

    pub fn event_type(&self) -> OrderEventType {
        match self {
            OrderStatus::Delivered => OrderEventType::OrderDelivered,
            OrderStatus::Placed => OrderEventType::OrderPlaced,
            OrderStatus::Shipped => OrderEventType::OrderShipped,
            OrderStatus::Cancelled => OrderEventType::OrderCancelled,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, AsRefStr, Display,
)]
pub enum OrderEventType {
    #[serde(rename = "order_delivered")]
    #[strum(serialize = "order_delivered")]
    OrderDelivered,
    #[serde(rename = "order_placed")]
    #[strum(serialize = "order_placed")]
    OrderPlaced,
    #[serde(rename = "order_shipped")]
    #[strum(serialize = "order_shipped")]
    OrderShipped,
    #[serde(rename = "order_cancelled")]
    #[strum(serialize = "order_cancelled")]
    OrderCancelled,
}
