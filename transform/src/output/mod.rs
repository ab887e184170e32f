pub mod order_event;
pub mod record;

pub use order_event::OrderEvent;
pub use record::{OutputRecord, Record, RoutedMessage};
