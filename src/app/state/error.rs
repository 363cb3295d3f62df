use crate::domain::error::ExpansionError;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Warning,
    Error,
}

impl From<&ExpansionError> for ErrorSeverity {
    fn from(err: &ExpansionError) -> Self {
        match err {
            // The page is fine, only the copy failed.
            ExpansionError::Clipboard(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub error: ExpansionError,
    pub timestamp: DateTime<Local>,
    pub severity: ErrorSeverity,
    pub suggestions: Vec<String>,
}

impl ErrorState {
    pub fn new(error: ExpansionError, base_url: &str) -> Self {
        Self {
            severity: ErrorSeverity::from(&error),
            suggestions: crate::app::recovery::get_suggestions(&error, base_url),
            timestamp: Local::now(),
            error,
        }
    }
}
