pub mod event;
pub mod kind;
pub mod status;

pub use event::Event;
pub use kind::TableKind;
pub use status::{OrderEventType, OrderStatus};
