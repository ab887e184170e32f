use crate::error::invalid_event::InvalidEventError;
use std::error::Error;
use std::fmt::{self, Display};

pub type TransformResult<T> = Result<T, TransformError>;

#[derive(Debug)]
pub enum TransformError {
    InvalidEventError(InvalidEventError),
    StdIoError(std::io::Error),
    SerdeJsonError(serde_json::Error),
    SerdeYamlError(serde_yaml::Error),
}

impl Error for TransformError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TransformError::InvalidEventError(error) => Some(error),
            TransformError::StdIoError(error) => Some(error),
            TransformError::SerdeJsonError(error) => Some(error),
            TransformError::SerdeYamlError(error) => Some(error),
        }
    }
}

impl Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransformError::InvalidEventError(error) => write!(f, "{}", error),
            TransformError::StdIoError(error) => write!(f, "I/O error: {}", error),
            TransformError::SerdeJsonError(error) => write!(f, "JSON error: {}", error),
            TransformError::SerdeYamlError(error) => write!(f, "YAML error: {}", error),
        }
    }
}

impl From<InvalidEventError> for TransformError {
    fn from(error: InvalidEventError) -> Self {
        TransformError::InvalidEventError(error)
    }
}

impl From<std::io::Error> for TransformError {
    fn from(error: std::io::Error) -> Self {
        TransformError::StdIoError(error)
    }
}

impl From<serde_json::Error> for TransformError {
    fn from(error: serde_json::Error) -> Self {
        TransformError::SerdeJsonError(error)
    }
}

impl From<serde_yaml::Error> for TransformError {
    fn from(error: serde_yaml::Error) -> Self {
        TransformError::SerdeYamlError(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_event_error_display() {
        let error: TransformError = InvalidEventError::new("array").into();
        assert_eq!(
            error.to_string(),
            "Expected a JSON object for an event, got array"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let result: TransformResult<serde_json::Value> =
            serde_json::from_str("{").map_err(TransformError::from);
        match result {
            Err(TransformError::SerdeJsonError(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
