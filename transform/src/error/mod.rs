pub mod generic;
pub mod invalid_event;

pub use generic::{TransformError, TransformResult};
