use crate::event::{Event, OrderStatus};
use crate::output::OrderEvent;
use chrono::{DateTime, Utc};

pub const ID_FIELD: &str = "id";
pub const CUSTOMER_ID_FIELD: &str = "customer_id";
pub const STATUS_FIELD: &str = "status";

// Missing ids are carried as `null`.
pub fn order_event(event: &Event, processed_at: DateTime<Utc>) -> Option<OrderEvent> {
    let status = OrderStatus::from_value(event.get(STATUS_FIELD)?)?;
    Some(OrderEvent::new(
        event.get_or_null(ID_FIELD),
        event.get_or_null(CUSTOMER_ID_FIELD),
        status.event_type(),
        processed_at,
    ))
}
