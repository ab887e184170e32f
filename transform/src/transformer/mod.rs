pub mod clock;
pub mod config;
pub mod customers;
pub mod orders;
pub mod transformer;

pub use clock::{Clock, SystemClock};
pub use config::TransformerConfig;
pub use transformer::{RecordTransformer, Transformer};
