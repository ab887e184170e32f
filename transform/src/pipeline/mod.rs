pub mod runner;
pub mod stats;

pub use runner::run;
pub use stats::PipelineStats;
