use crate::error::TransformResult;
use crate::event::Event;
use crate::output::order_event::OrderEvent;
use serde::Serialize;

#[derive(Debug, PartialEq, Serialize, Clone)]
#[serde(untagged)]
pub enum Record {
    OrderEvent(OrderEvent),
    Event(Event),
}

// A `None` destination means the record must not be routed.
#[derive(Debug, PartialEq, Clone)]
pub struct OutputRecord {
    pub record: Record,
    pub destination: Option<String>,
}

impl OutputRecord {
    pub fn routed<D>(record: Record, destination: D) -> Self
    where
        D: Into<String>,
    {
        OutputRecord {
            record,
            destination: Some(destination.into()),
        }
    }

    pub fn unrouted(record: Record) -> Self {
        OutputRecord {
            record,
            destination: None,
        }
    }

    pub fn is_routed(&self) -> bool {
        self.destination.is_some()
    }

    pub fn event(&self) -> Option<&Event> {
        match &self.record {
            Record::Event(event) => Some(event),
            Record::OrderEvent(_) => None,
        }
    }

    pub fn order_event(&self) -> Option<&OrderEvent> {
        match &self.record {
            Record::OrderEvent(order_event) => Some(order_event),
            Record::Event(_) => None,
        }
    }

    pub fn to_message(&self) -> Option<RoutedMessage> {
        self.destination.as_ref().map(|table| RoutedMessage {
            table: table.clone(),
            record: self.record.clone(),
        })
    }
}

#[derive(Debug, PartialEq, Serialize, Clone)]
pub struct RoutedMessage {
    pub table: String,
    pub record: Record,
}

impl RoutedMessage {
    pub fn to_json_line(&self) -> TransformResult<String> {
        let mut line = serde_json::to_string(&self)?;
        line.push('\n');
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::OrderEventType;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn customer_event() -> Event {
        Event::from_value(json!({"__table_name": "customers", "id": 1})).unwrap()
    }

    #[test]
    fn test_routed_record() {
        let output = OutputRecord::routed(Record::Event(customer_event()), "customers");
        assert!(output.is_routed());
        assert_eq!(output.destination, Some("customers".to_string()));
        assert_eq!(output.event(), Some(&customer_event()));
        assert_eq!(output.order_event(), None);
    }

    #[test]
    fn test_unrouted_record_has_no_message() {
        let output = OutputRecord::unrouted(Record::Event(customer_event()));
        assert!(!output.is_routed());
        assert_eq!(output.to_message(), None);
    }

    #[test]
    fn test_event_message_json_line() {
        let output = OutputRecord::routed(Record::Event(customer_event()), "customers");
        let line = output.to_message().unwrap().to_json_line().unwrap();
        assert_eq!(
            line,
            "{\"table\":\"customers\",\"record\":{\"__table_name\":\"customers\",\"id\":1}}\n"
        );
    }

    #[test]
    fn test_order_event_message_json_line() {
        let processed_at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        let order_event = OrderEvent::new(
            json!(42),
            json!(7),
            OrderEventType::OrderDelivered,
            processed_at,
        );
        let output = OutputRecord::routed(Record::OrderEvent(order_event), "order_events");
        let line = output.to_message().unwrap().to_json_line().unwrap();
        assert_eq!(
            line,
            "{\"table\":\"order_events\",\"record\":{\"order_id\":42,\"customer_id\":7,\"event_type\":\"order_delivered\",\"event_timestamp\":\"2024-03-09T07:05:01.000000Z\"}}\n"
        );
    }
}
