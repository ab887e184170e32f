use std::error::Error;
use std::fmt::{self, Display};

#[derive(Debug)]
pub struct InvalidEventError {
    pub found: &'static str,
}

impl InvalidEventError {
    pub fn new(found: &'static str) -> Self {
        InvalidEventError { found }
    }
}

impl Error for InvalidEventError {}

impl Display for InvalidEventError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Expected a JSON object for an event, got {}", self.found)
    }
}
