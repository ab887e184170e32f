use serde::Serialize;
use std::fmt::{self, Display};

#[derive(Debug, Default, PartialEq, Eq, Serialize, Clone, Copy)]
pub struct PipelineStats {
    pub received: u64,
    pub skipped: u64,
    pub emitted: u64,
    pub unrouted: u64,
    pub fanned_out: u64,
}

impl Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "received={} skipped={} emitted={} unrouted={} fanned_out={}",
            self.received, self.skipped, self.emitted, self.unrouted, self.fanned_out
        )
    }
}
